//! Read-only diagnostics of a table's slot array.

mod cluster_report;
mod table_stats;

pub use cluster_report::{Cluster, ClusterReport};
pub use table_stats::TableStats;

#![warn(clippy::all)]
#![warn(rust_2018_idioms)]

//! An open addressing hash table for non-negative integer keys.
//!
//! [`Table`] stores each key directly in a fixed-size slot array. A key's first
//! candidate slot is `key mod capacity`; on a collision the table walks a
//! [`Probing`] sequence (linear by default, quadratic on request) until it
//! finds the key or a free slot. Deleting a key leaves a
//! [`Tombstone`][Slot::Tombstone] so the keys placed after it on the same walk
//! remain reachable.
//!
//! Before an insertion would push the load factor over the configured
//! threshold, the table doubles its capacity and rehashes every live key into a
//! fresh slot array, discarding tombstones along the way.
//!
//! The table also reports its own health: the load factor, a
//! [`TableStats`] snapshot, and a [`ClusterReport`] describing runs of
//! consecutive filled slots (the primary clustering of linear probing).
//!
//! # Example
//!
//! ```rust
//! use probetable::Table;
//!
//! let mut table = Table::new(10, 0.75).unwrap();
//!
//! for v in [3u64, 5, 4, 15, 14, 25, 35] {
//!     table.insert(v).unwrap();
//! }
//! // The seventh key lifts the load factor to 0.7, which is still allowed.
//! assert_eq!(table.capacity(), 10);
//!
//! // The eighth would make it 0.8, so the table grows first.
//! table.insert(45u64).unwrap();
//! assert_eq!(table.capacity(), 20);
//! assert_eq!(table.len(), 8);
//!
//! let report = table.cluster_report();
//! assert!(report.max_cluster_size() <= table.capacity());
//! ```
//!
//! # Logging
//!
//! With the `logging` feature (enabled by default) tables emit records through
//! the [`log`](https://docs.rs/log) facade: resizes at `debug` level, individual
//! placements and deletions at `trace` level, and an `error` record when an
//! insertion finds no free slot.
//!
//! # Thread safety
//!
//! `Table` has no internal synchronization. Mutating operations take
//! `&mut self`, so callers that share a table between threads must wrap it in a
//! lock.

pub(crate) mod common;
pub mod stats;
mod table;

pub use common::{
    error::{ConfigError, InsertError, ValueError},
    validate::SlotValue,
    DEFAULT_LOAD_FACTOR_THRESHOLD, MAX_INITIAL_CAPACITY,
};
pub use stats::{Cluster, ClusterReport, TableStats};
pub use table::{
    builder::TableBuilder,
    probe::{ProbeSequence, Probing},
    slot::Slot,
    InsertOutcome, Table,
};

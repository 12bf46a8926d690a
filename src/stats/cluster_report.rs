use smallvec::SmallVec;

use crate::Slot;

/// One maximal run of consecutive non-`Empty` slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cluster {
    positions: SmallVec<[usize; 8]>,
}

impl Cluster {
    /// Slot indices covered by this cluster, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn size(&self) -> usize {
        self.positions.len()
    }
}

/// Primary clustering of a table's slot array.
///
/// Slots are scanned in index order. Both `Occupied` and `Tombstone` slots count
/// as filled because both lengthen probe walks. A run does not wrap around from
/// the last slot to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClusterReport {
    clusters: Vec<Cluster>,
    max_cluster_size: usize,
}

impl ClusterReport {
    pub(crate) fn scan(slots: &[Slot]) -> Self {
        let mut clusters = Vec::new();
        let mut current = Cluster::default();

        for (index, slot) in slots.iter().enumerate() {
            if slot.is_filled() {
                current.positions.push(index);
            } else if current.size() > 0 {
                clusters.push(std::mem::take(&mut current));
            }
        }
        if current.size() > 0 {
            clusters.push(current);
        }

        let max_cluster_size = clusters.iter().map(Cluster::size).max().unwrap_or(0);

        Self {
            clusters,
            max_cluster_size,
        }
    }

    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn max_cluster_size(&self) -> usize {
        self.max_cluster_size
    }

    /// Mean cluster length, or `0.0` when there are no clusters.
    pub fn avg_cluster_size(&self) -> f64 {
        if self.clusters.is_empty() {
            0.0
        } else {
            let total: usize = self.clusters.iter().map(Cluster::size).sum();
            total as f64 / self.clusters.len() as f64
        }
    }

    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }
}

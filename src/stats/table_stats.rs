use std::fmt::{self, Debug};

use crate::table::slot::SlotStore;

/// A point-in-time snapshot of the occupancy of a table.
///
/// Returned by [`Table::stats`][stats-method]. The snapshot owns its data and
/// does not change when the table is modified afterwards.
///
/// - `count` is the number of live values.
/// - `empty_slots` counts slots that never held a value since the last resize or
///   clear.
/// - `tombstone_slots` counts slots whose value was deleted. They are dropped by
///   the next resize.
/// - `values` holds the live values in ascending order.
///
/// [stats-method]: crate::Table::stats
#[derive(Clone, Default, PartialEq)]
pub struct TableStats {
    capacity: usize,
    count: usize,
    load_factor: f64,
    empty_slots: usize,
    tombstone_slots: usize,
    values: Vec<u64>,
}

impl Debug for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableStats")
            .field("capacity", &self.capacity)
            .field("count", &self.count)
            .field("load_factor", &format_args!("{:.3}", self.load_factor))
            .field("empty_slots", &self.empty_slots)
            .field("tombstone_slots", &self.tombstone_slots)
            .field("values", &self.values)
            .finish()
    }
}

impl TableStats {
    pub(crate) fn from_store(store: &SlotStore) -> Self {
        let mut values: Vec<u64> = store.values().collect();
        values.sort_unstable();

        Self {
            capacity: store.capacity(),
            count: store.len(),
            load_factor: store.len() as f64 / store.capacity() as f64,
            empty_slots: store.empty_count(),
            tombstone_slots: store.tombstone_count(),
            values,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    pub fn empty_slots(&self) -> usize {
        self.empty_slots
    }

    pub fn tombstone_slots(&self) -> usize {
        self.tombstone_slots
    }

    /// Live values in ascending order.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<u64> {
        self.values
    }
}

//! An open addressing hash table for non-negative integer keys.

pub(crate) mod builder;
pub(crate) mod probe;
pub(crate) mod resize;
pub(crate) mod slot;

use std::fmt;

use self::{
    probe::Probing,
    resize::GrowOp,
    slot::{Slot, SlotStore},
};
use crate::{
    common::validate::{validate_value, SlotValue},
    stats::{ClusterReport, TableStats},
    ConfigError, InsertError, TableBuilder, ValueError,
};

/// The non-error result of [`Table::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InsertOutcome {
    /// The value was not present and now is.
    Inserted,
    /// The value was already present. The table was not modified.
    Duplicate,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// A hash set of non-negative integers stored in a single slot array.
///
/// The slot for a value is found with the primary hash `value mod capacity`;
/// collisions are resolved by walking a [`Probing`] sequence from there. Deleted
/// values leave a [`Slot::Tombstone`] behind so later values on the same walk
/// stay reachable. Before a placement would push the load factor over the
/// configured threshold the capacity is doubled and every live value is
/// rehashed into a fresh slot array; this is also the only point where
/// tombstones are reclaimed. The capacity never shrinks.
///
/// `Table` is not thread-safe. All operations take `&self` or `&mut self`, so
/// sharing a table across threads requires an outer lock.
///
/// # Examples
///
/// ```rust
/// use probetable::{InsertOutcome, Table};
///
/// let mut table = Table::new(10, 0.75).unwrap();
///
/// assert_eq!(table.insert(15u64).unwrap(), InsertOutcome::Inserted);
/// assert_eq!(table.insert(15u64).unwrap(), InsertOutcome::Duplicate);
/// assert!(table.contains(15u64).unwrap());
///
/// // Only non-negative integers are keys.
/// assert!(table.insert(-1i64).is_err());
/// assert!(table.insert(3.5f64).is_err());
/// assert!(table.insert(None::<u64>).is_err());
///
/// assert!(table.delete(15u64).unwrap());
/// assert!(!table.contains(15u64).unwrap());
/// assert_eq!(table.stats().tombstone_slots(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    store: SlotStore,
    load_factor_threshold: f64,
    probing: Probing,
    name: Option<String>,
}

impl Table {
    /// Constructs a new `Table` with `capacity` slots that grows once the load
    /// factor would exceed `load_factor_threshold`.
    ///
    /// To pick a probing strategy or a name, use [`Table::builder`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the capacity is zero or above 1,000,000, or if
    /// the threshold is not in `(0, 1]`.
    pub fn new(capacity: usize, load_factor_threshold: f64) -> Result<Self, ConfigError> {
        TableBuilder::new(capacity)
            .load_factor_threshold(load_factor_threshold)
            .build()
    }

    /// Returns a [`TableBuilder`], which can build a `Table` with various
    /// configurations.
    pub fn builder(capacity: usize) -> TableBuilder {
        TableBuilder::new(capacity)
    }

    pub(crate) fn with_everything(
        capacity: usize,
        load_factor_threshold: f64,
        probing: Probing,
        name: Option<String>,
    ) -> Self {
        Self {
            store: SlotStore::with_capacity(capacity),
            load_factor_threshold,
            probing,
            name,
        }
    }

    /// Inserts `value` unless it is already present.
    ///
    /// If placing the value would push the load factor over the threshold, the
    /// table first doubles its capacity and rehashes every live value.
    ///
    /// # Errors
    ///
    /// - [`InsertError::Value`] if `value` is not a non-negative integer. The
    ///   table is not modified.
    /// - [`InsertError::Full`] if no free slot lies on the probe path. With
    ///   linear probing this indicates a defect.
    /// - [`InsertError::CapacityOverflow`] if the capacity cannot be doubled.
    pub fn insert(&mut self, value: impl SlotValue) -> Result<InsertOutcome, InsertError> {
        let key = validate_value(&value)?;

        if self.store.find(key, self.probing).is_some() {
            #[cfg(feature = "logging")]
            log::trace!("{}Value {key} is already present", self.log_prefix());
            return Ok(InsertOutcome::Duplicate);
        }

        let op = GrowOp::new(
            self.store.len(),
            self.store.capacity(),
            self.load_factor_threshold,
        );
        if !op.is_skip() {
            self.grow(op)?;
        }

        match self.store.place(key, self.probing) {
            Some(_index) => {
                #[cfg(feature = "logging")]
                log::trace!("{}Inserted {key} at slot {_index}", self.log_prefix());
                Ok(InsertOutcome::Inserted)
            }
            None => {
                let capacity = self.store.capacity();
                #[cfg(feature = "logging")]
                log::error!(
                    "{}No free slot for {key} on its probe path (capacity: {capacity}, count: {})",
                    self.log_prefix(),
                    self.store.len()
                );
                Err(InsertError::Full { capacity })
            }
        }
    }

    /// Returns `true` if `value` is present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if `value` is not a non-negative integer.
    pub fn contains(&self, value: impl SlotValue) -> Result<bool, ValueError> {
        let key = validate_value(&value)?;
        Ok(self.store.find(key, self.probing).is_some())
    }

    /// Removes `value`, leaving a tombstone in its slot. Returns `false` if the
    /// value was not present.
    ///
    /// # Errors
    ///
    /// Returns a [`ValueError`] if `value` is not a non-negative integer.
    pub fn delete(&mut self, value: impl SlotValue) -> Result<bool, ValueError> {
        let key = validate_value(&value)?;

        match self.store.remove(key, self.probing) {
            Some(_index) => {
                #[cfg(feature = "logging")]
                log::trace!("{}Deleted {key} from slot {_index}", self.log_prefix());
                Ok(true)
            }
            None => {
                #[cfg(feature = "logging")]
                log::trace!("{}Value {key} is not present", self.log_prefix());
                Ok(false)
            }
        }
    }

    /// Empties every slot, tombstones included. The capacity is kept.
    pub fn clear(&mut self) {
        self.store.clear();

        #[cfg(feature = "logging")]
        log::trace!("{}Cleared the table", self.log_prefix());
    }

    fn grow(&mut self, op: GrowOp) -> Result<(), InsertError> {
        #[cfg(feature = "logging")]
        log::debug!(
            "{}Load factor would exceed {}; resizing from capacity {}",
            self.log_prefix(),
            self.load_factor_threshold,
            self.store.capacity()
        );

        let (next, _resized) = resize::rehash(&self.store, op, self.probing)?;
        self.store = next;

        #[cfg(feature = "logging")]
        self.log_resized(_resized);

        Ok(())
    }

    #[cfg(feature = "logging")]
    fn log_resized(&self, resized: resize::Resized) {
        let resize::Resized {
            old_capacity,
            new_capacity,
            moved,
            dropped_tombstones,
        } = resized;
        log::debug!(
            "{}Resized {old_capacity} -> {new_capacity} ({moved} values moved, \
            {dropped_tombstones} tombstones dropped)",
            self.log_prefix()
        );
    }

    #[cfg(feature = "logging")]
    fn log_prefix(&self) -> String {
        crate::common::log_prefix(self.name.as_deref())
    }
}

// Accessors and diagnostics.
impl Table {
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the number of values in the table.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn load_factor_threshold(&self) -> f64 {
        self.load_factor_threshold
    }

    pub fn probing(&self) -> Probing {
        self.probing
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `count / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.store.len() as f64 / self.store.capacity() as f64
    }

    /// Returns `true` if inserting one new value would resize the table first.
    pub fn needs_resize(&self) -> bool {
        !GrowOp::new(
            self.store.len(),
            self.store.capacity(),
            self.load_factor_threshold,
        )
        .is_skip()
    }

    /// Returns the state of the slot at `index`, or `None` if out of range.
    pub fn slot(&self, index: usize) -> Option<Slot> {
        self.store.slots().get(index).copied()
    }

    /// Returns the slot array in index order.
    pub fn slots(&self) -> &[Slot] {
        self.store.slots()
    }

    /// Returns the values in ascending order.
    pub fn values(&self) -> Vec<u64> {
        let mut values: Vec<u64> = self.store.values().collect();
        values.sort_unstable();
        values
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> std::vec::IntoIter<u64> {
        self.values().into_iter()
    }

    /// Returns a snapshot of the occupancy of the table.
    pub fn stats(&self) -> TableStats {
        TableStats::from_store(&self.store)
    }

    /// Returns the runs of consecutive non-empty slots.
    pub fn cluster_report(&self) -> ClusterReport {
        ClusterReport::scan(self.store.slots())
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Table(capacity={}, count={}, load_factor={:.3})",
            self.capacity(),
            self.len(),
            self.load_factor()
        )
    }
}

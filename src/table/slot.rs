use super::probe::Probing;

/// The state of one slot of a [`Table`][table-struct].
///
/// A slot is in exactly one state at a time. Deleting a value leaves a
/// `Tombstone` so that probe walks keep going past it; only a resize or a clear
/// turns slots back into `Empty`.
///
/// [table-struct]: crate::Table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Never held a value since the last resize or clear.
    #[default]
    Empty,
    /// Held a value that has since been deleted.
    Tombstone,
    /// Holds a live value.
    Occupied(u64),
}

impl Slot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    #[inline]
    pub fn is_tombstone(&self) -> bool {
        matches!(self, Self::Tombstone)
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    /// Returns `true` for `Occupied` and `Tombstone` slots: the slots that
    /// physically lengthen a probe run.
    #[inline]
    pub fn is_filled(&self) -> bool {
        !self.is_empty()
    }

    #[inline]
    pub fn value(&self) -> Option<u64> {
        match self {
            Self::Occupied(v) => Some(*v),
            _ => None,
        }
    }
}

/// The fixed-length slot array of a table plus its occupied count.
///
/// The store knows nothing about load factors; it places, finds and removes
/// keys along a probe sequence.
#[derive(Clone, Debug)]
pub(crate) struct SlotStore {
    slots: Box<[Slot]>,
    count: usize,
}

impl SlotStore {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0);

        Self {
            slots: vec![Slot::Empty; capacity].into_boxed_slice(),
            count: 0,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub(crate) fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Walks the probe sequence of `key` and returns the index of the slot
    /// holding it.
    ///
    /// Tombstones are stepped over. The first `Empty` slot ends the walk, since
    /// a placement never skips an `Empty` slot.
    pub(crate) fn find(&self, key: u64, probing: Probing) -> Option<usize> {
        for index in probing.sequence(key, self.capacity()) {
            match self.slots[index] {
                Slot::Empty => return None,
                Slot::Occupied(v) if v == key => return Some(index),
                // Different key or a tombstone. Try next slot.
                _ => continue,
            }
        }

        None
    }

    /// Puts `key` into the first `Empty` or `Tombstone` slot on its probe
    /// sequence and returns that slot's index.
    ///
    /// Does not check for duplicates or the load factor. Returns `None` when
    /// the walk finds no free slot.
    pub(crate) fn place(&mut self, key: u64, probing: Probing) -> Option<usize> {
        let index = probing
            .sequence(key, self.capacity())
            .find(|&i| !self.slots[i].is_occupied())?;

        self.slots[index] = Slot::Occupied(key);
        self.count += 1;
        Some(index)
    }

    /// Turns the slot holding `key` into a tombstone. Returns the slot index,
    /// or `None` if `key` is not present.
    pub(crate) fn remove(&mut self, key: u64, probing: Probing) -> Option<usize> {
        let index = self.find(key, probing)?;

        self.slots[index] = Slot::Tombstone;
        self.count -= 1;
        Some(index)
    }

    pub(crate) fn clear(&mut self) {
        self.slots.fill(Slot::Empty);
        self.count = 0;
    }

    /// Live values in slot order.
    pub(crate) fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.slots.iter().filter_map(Slot::value)
    }

    pub(crate) fn empty_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_empty()).count()
    }

    pub(crate) fn tombstone_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_tombstone()).count()
    }
}

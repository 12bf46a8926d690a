use super::{probe::Probing, slot::SlotStore};
use crate::InsertError;

/// What a table must do to its slot store before placing one more value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GrowOp {
    Expand,
    Skip,
}

impl GrowOp {
    /// Decides whether placing one more value into a store holding `count` of
    /// `capacity` slots would push the load factor over `threshold`.
    pub(crate) fn new(count: usize, capacity: usize, threshold: f64) -> Self {
        let next_load = (count + 1) as f64 / capacity as f64;

        if next_load > threshold {
            Self::Expand
        } else {
            Self::Skip
        }
    }

    pub(crate) fn is_skip(self) -> bool {
        matches!(self, Self::Skip)
    }

    fn new_capacity(self, current: usize) -> Result<usize, InsertError> {
        match self {
            Self::Expand => current
                .checked_mul(2)
                .ok_or(InsertError::CapacityOverflow { capacity: current }),
            Self::Skip => unreachable!(),
        }
    }
}

/// The outcome of one completed resize.
#[cfg_attr(not(feature = "logging"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Resized {
    pub(crate) old_capacity: usize,
    pub(crate) new_capacity: usize,
    pub(crate) moved: usize,
    pub(crate) dropped_tombstones: usize,
}

/// Builds a fresh store of the grown capacity and re-places every live value
/// of `old` into it, in slot order. Tombstones are not carried over.
///
/// `old` is left untouched; the caller swaps the returned store in. If a value
/// cannot be placed (only possible with quadratic probing) the whole rehash is
/// abandoned and `InsertError::Full` is returned.
pub(crate) fn rehash(
    old: &SlotStore,
    op: GrowOp,
    probing: Probing,
) -> Result<(SlotStore, Resized), InsertError> {
    let old_capacity = old.capacity();
    let new_capacity = op.new_capacity(old_capacity)?;
    let mut next = SlotStore::with_capacity(new_capacity);

    for value in old.values() {
        next.place(value, probing).ok_or(InsertError::Full {
            capacity: new_capacity,
        })?;
    }

    debug_assert_eq!(next.len(), old.len());

    let resized = Resized {
        old_capacity,
        new_capacity,
        moved: next.len(),
        dropped_tombstones: old.tombstone_count(),
    };

    Ok((next, resized))
}

use std::iter::FusedIterator;

/// The collision resolution strategy of a [`Table`][table-struct].
///
/// [table-struct]: crate::Table
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Probing {
    /// The `i`-th candidate is `(hash + i) mod capacity`.
    ///
    /// Visits every slot exactly once for any capacity. This is the default.
    #[default]
    Linear,

    /// The `i`-th candidate is `(hash + i * i) mod capacity`.
    ///
    /// The sequence does **not** cover the whole table for arbitrary capacities;
    /// coverage of at least half the slots is only guaranteed for prime
    /// capacities. A table probing this way can report
    /// [`InsertError::Full`][full] while free slots remain elsewhere.
    ///
    /// [full]: crate::InsertError::Full
    Quadratic,
}

impl Probing {
    /// Returns the candidate slot indices for `key` in a table of `capacity`
    /// slots, starting at the primary hash.
    ///
    /// The sequence always yields exactly `capacity` indices.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn sequence(self, key: u64, capacity: usize) -> ProbeSequence {
        assert!(capacity > 0);
        ProbeSequence {
            index: primary_hash(key, capacity),
            capacity,
            probing: self,
            attempt: 0,
        }
    }
}

/// The slot a key probes first: `key mod capacity`.
#[inline]
pub(crate) fn primary_hash(key: u64, capacity: usize) -> usize {
    // The remainder is below `capacity`, so it fits in a `usize`.
    (key % capacity as u64) as usize
}

/// An iterator over the candidate slot indices of one key.
///
/// Created by [`Probing::sequence`].
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    index: usize,
    capacity: usize,
    probing: Probing,
    attempt: usize,
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.attempt >= self.capacity {
            return None;
        }
        if self.attempt > 0 {
            // i^2 - (i-1)^2 = 2i - 1, so quadratic offsets are accumulated
            // without ever squaring a large attempt count.
            let step = match self.probing {
                Probing::Linear => 1,
                Probing::Quadratic => (2 * self.attempt - 1) % self.capacity,
            };
            self.index = (self.index + step) % self.capacity;
        }
        self.attempt += 1;
        Some(self.index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.attempt;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

impl FusedIterator for ProbeSequence {}

/// The error type returned when a [`Table`][table-struct] cannot be built from
/// the given configuration.
///
/// [table-struct]: crate::Table
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The capacity was zero. A table needs at least one slot.
    #[error("Hash table capacity must be a positive integer")]
    ZeroCapacity,

    /// The capacity was larger than the construction ceiling.
    #[error("Hash table capacity {capacity} is too large (max: {max})")]
    CapacityTooLarge { capacity: usize, max: usize },

    /// The load factor threshold was not a finite number in `(0, 1]`.
    #[error("Load factor threshold must be in (0, 1], got {0}")]
    InvalidLoadFactor(f64),
}

/// The error type for values that cannot be used as a key.
///
/// Only non-negative integers are accepted. A rejected value never changes the
/// state of the table.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// The value was absent (`None`).
    #[error("Cannot use a missing value as a key")]
    Missing,

    /// The value was a float that is fractional, not finite, or too large for a
    /// `u64`.
    #[error("Only integer values are supported, got {0}")]
    NotAnInteger(f64),

    /// The value was negative.
    #[error("Negative values are not supported, got {0}")]
    Negative(i64),
}

/// The error type for [`Table::insert`][insert-method].
///
/// [insert-method]: crate::Table::insert
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InsertError {
    /// The value was rejected by validation.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// The probe walk visited every candidate slot without finding a free one.
    ///
    /// With linear probing this cannot happen unless the growth policy is
    /// broken, so it signals a defect. With quadratic probing it can also
    /// happen when the probe sequence does not cover the whole table.
    #[error("Hash table is full (capacity: {capacity}); no free slot on the probe path")]
    Full { capacity: usize },

    /// Doubling the capacity would overflow `usize`.
    #[error("Cannot grow hash table beyond capacity {capacity}")]
    CapacityOverflow { capacity: usize },
}

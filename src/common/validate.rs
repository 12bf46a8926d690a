use super::{
    error::{ConfigError, ValueError},
    MAX_INITIAL_CAPACITY,
};

/// A value that can be offered to a [`Table`][table-struct] as a key.
///
/// Keys are stored as `u64`. Implementations decide whether a caller-supplied
/// value is a non-negative integer and convert it, or reject it with a
/// [`ValueError`].
///
/// - Unsigned integers are always accepted.
/// - Signed integers are rejected when negative.
/// - Floats are accepted only when they hold a non-negative integral value
///   that fits in a `u64` (`3.0` is the key `3`).
/// - `None` is rejected; `Some(v)` follows the rule for `v`.
///
/// [table-struct]: crate::Table
pub trait SlotValue {
    /// Converts `self` into a key, or explains why it is not one.
    fn to_key(&self) -> Result<u64, ValueError>;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl SlotValue for $t {
                #[inline]
                fn to_key(&self) -> Result<u64, ValueError> {
                    Ok(*self as u64)
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl SlotValue for $t {
                #[inline]
                fn to_key(&self) -> Result<u64, ValueError> {
                    if *self < 0 {
                        Err(ValueError::Negative(*self as i64))
                    } else {
                        Ok(*self as u64)
                    }
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);

impl SlotValue for f64 {
    fn to_key(&self) -> Result<u64, ValueError> {
        let v = *self;
        if !v.is_finite() || v.fract() != 0.0 {
            return Err(ValueError::NotAnInteger(v));
        }
        if v < 0.0 {
            return Err(ValueError::Negative(v as i64));
        }
        // 2^64 is the first float that does not fit.
        if v >= 18_446_744_073_709_551_616.0 {
            return Err(ValueError::NotAnInteger(v));
        }
        Ok(v as u64)
    }
}

impl SlotValue for f32 {
    #[inline]
    fn to_key(&self) -> Result<u64, ValueError> {
        f64::from(*self).to_key()
    }
}

impl<T: SlotValue> SlotValue for Option<T> {
    #[inline]
    fn to_key(&self) -> Result<u64, ValueError> {
        match self {
            Some(v) => v.to_key(),
            None => Err(ValueError::Missing),
        }
    }
}

impl<T: SlotValue + ?Sized> SlotValue for &T {
    #[inline]
    fn to_key(&self) -> Result<u64, ValueError> {
        (**self).to_key()
    }
}

pub(crate) fn validate_capacity(capacity: usize) -> Result<(), ConfigError> {
    if capacity == 0 {
        return Err(ConfigError::ZeroCapacity);
    }
    if capacity > MAX_INITIAL_CAPACITY {
        return Err(ConfigError::CapacityTooLarge {
            capacity,
            max: MAX_INITIAL_CAPACITY,
        });
    }
    Ok(())
}

pub(crate) fn validate_load_factor(threshold: f64) -> Result<(), ConfigError> {
    // NaN fails both comparisons.
    if threshold > 0.0 && threshold <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidLoadFactor(threshold))
    }
}

#[inline]
pub(crate) fn validate_value(value: &(impl SlotValue + ?Sized)) -> Result<u64, ValueError> {
    value.to_key()
}

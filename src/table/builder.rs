use super::{probe::Probing, Table};
use crate::{
    common::{
        validate::{validate_capacity, validate_load_factor},
        DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR_THRESHOLD,
    },
    ConfigError,
};

/// Builds a [`Table`][table-struct] with various configuration knobs.
///
/// [table-struct]: crate::Table
///
/// # Examples
///
/// ```rust
/// use probetable::{Probing, TableBuilder};
///
/// let mut table = TableBuilder::new(16)
///     // Grow once more than half of the slots are taken.
///     .load_factor_threshold(0.5)
///     // Opt in to quadratic probing.
///     .probing(Probing::Quadratic)
///     .name("ids")
///     .build()
///     .expect("valid configuration");
///
/// table.insert(42u64).unwrap();
/// assert!(table.contains(42u64).unwrap());
/// ```
///
#[derive(Clone, Debug)]
#[must_use]
pub struct TableBuilder {
    capacity: usize,
    load_factor_threshold: f64,
    probing: Probing,
    name: Option<String>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl TableBuilder {
    /// Construct a new `TableBuilder` that will be used to build a `Table` with
    /// `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            probing: Probing::default(),
            name: None,
        }
    }

    /// Sets the load factor above which the table doubles its capacity.
    ///
    /// Must be in `(0, 1]`. Defaults to `0.75`.
    pub fn load_factor_threshold(self, threshold: f64) -> Self {
        Self {
            load_factor_threshold: threshold,
            ..self
        }
    }

    /// Sets the probing strategy. Defaults to [`Probing::Linear`].
    pub fn probing(self, probing: Probing) -> Self {
        Self { probing, ..self }
    }

    /// Sets the name of the table. The name is shown in log lines.
    pub fn name(self, name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..self
        }
    }

    /// Builds a `Table`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the capacity is zero or above 1,000,000, or if
    /// the load factor threshold is not in `(0, 1]`.
    pub fn build(self) -> Result<Table, ConfigError> {
        validate_capacity(self.capacity)?;
        validate_load_factor(self.load_factor_threshold)?;

        Ok(Table::with_everything(
            self.capacity,
            self.load_factor_threshold,
            self.probing,
            self.name,
        ))
    }
}

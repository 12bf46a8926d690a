pub(crate) mod error;
pub(crate) mod validate;

/// The largest capacity accepted when a table is built.
///
/// Growth is not checked against this ceiling; it bounds construction only.
pub const MAX_INITIAL_CAPACITY: usize = 1_000_000;

/// The load factor threshold used when none is configured.
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// The capacity used by `TableBuilder::default()`.
pub(crate) const DEFAULT_CAPACITY: usize = 10;

#[cfg(feature = "logging")]
pub(crate) fn log_prefix(name: Option<&str>) -> String {
    name.map(|name| format!("[{name}] ")).unwrap_or_default()
}

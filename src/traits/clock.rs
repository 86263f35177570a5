//! Source of the current time for deadline checks.

/// Supplies "now" as Unix seconds.
///
/// Pools read the clock exactly once per mutating call, before any other
/// work.  Implementations should be monotonic.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in seconds.
    fn now(&self) -> u64;
}

//! Generic construction trait for building state from configuration.
//!
//! [`FromConfig`] provides a uniform interface for creating pool state from
//! its configuration struct.
//!
//! # Validation Contract
//!
//! Implementations **must** validate all configuration invariants during
//! construction.  A successfully constructed value is guaranteed to be in
//! a valid initial state.
//!
//! ```text
//! PoolConfig => PoolLedger::from_config(&cfg)
//! ```
//!
//! There is no `impl<T> FromConfig<T>` blanket: every pairing of state and
//! configuration is explicit.

use crate::error::AmmError;

/// Generic construction trait for building a value from a configuration.
///
/// # Type Parameters
///
/// - `C`: the configuration type that fully describes the immutable
///   parameters.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for PoolLedger`
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if any parameter is invalid.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}

//! Configuration for a constant-product pool.

use crate::domain::{Address, TokenPair};
use crate::error::AmmError;

/// Immutable parameters of a [`SimpleSwapPool`](crate::pools::SimpleSwapPool).
///
/// A pool is bound to one ordered [`TokenPair`] for its whole lifetime and
/// holds its reserves under `pool_account` at the token ledger.
///
/// # Validation
///
/// - The token pair is validated at [`TokenPair`] construction time.
/// - No address may be zero.
/// - `pool_account` must differ from both tokens.
///
/// # Examples
///
/// ```
/// use simple_swap::config::PoolConfig;
/// use simple_swap::domain::{Address, TokenPair};
///
/// let pair = TokenPair::new(Address::from_low_u64(1), Address::from_low_u64(2))
///     .expect("distinct");
/// let cfg = PoolConfig::new(pair, Address::from_low_u64(100));
/// assert!(cfg.is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    token_pair: TokenPair,
    pool_account: Address,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if validation fails.
    pub fn new(token_pair: TokenPair, pool_account: Address) -> Result<Self, AmmError> {
        let config = Self {
            token_pair,
            pool_account,
        };
        config.validate()?;
        Ok(config)
    }

    /// Convenience constructor from the two token addresses.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the tokens are equal or
    /// validation fails.
    pub fn for_tokens(
        token_a: Address,
        token_b: Address,
        pool_account: Address,
    ) -> Result<Self, AmmError> {
        Self::new(TokenPair::new(token_a, token_b)?, pool_account)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] naming the violated rule.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.token_pair.token_a().is_zero() || self.token_pair.token_b().is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "token address must be non-zero",
            ));
        }
        if self.pool_account.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool account must be non-zero",
            ));
        }
        if self.token_pair.contains(&self.pool_account) {
            return Err(AmmError::InvalidConfiguration(
                "pool account must differ from both tokens",
            ));
        }
        Ok(())
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the account holding the pool's reserves.
    #[must_use]
    pub const fn pool_account(&self) -> Address {
        self.pool_account
    }
}

//! Reserve and liquidity-position bookkeeping for one token pair.

use std::collections::HashMap;

use primitive_types::U256;

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, Liquidity, ReserveDelta, TokenPair};
use crate::error::AmmError;
use crate::traits::FromConfig;

/// Reserves and liquidity of a pool at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolSnapshot {
    /// Balance of `token_a` held by the pool.
    pub reserve_a: Amount,
    /// Balance of `token_b` held by the pool.
    pub reserve_b: Amount,
    /// Outstanding liquidity units.
    pub total_liquidity: Liquidity,
}

impl PoolSnapshot {
    /// `reserve_a × reserve_b`, or `None` if it exceeds 256 bits.
    #[must_use]
    pub fn product(&self) -> Option<U256> {
        self.reserve_a.get().checked_mul(self.reserve_b.get())
    }
}

/// Owns the two reserves, the liquidity supply and every position.
///
/// All pool state changes go through the four primitives
/// [`set_reserves`](Self::set_reserves),
/// [`adjust_reserves`](Self::adjust_reserves), [`mint`](Self::mint) and
/// [`burn`](Self::burn), each of which either applies completely or leaves
/// the ledger untouched.  The pool stages an operation on a clone and only
/// swaps it in once the whole call has succeeded.
///
/// # Invariants
///
/// - `total_liquidity` equals the sum of all positions.
/// - No stored position is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolLedger {
    token_pair: TokenPair,
    reserve_a: Amount,
    reserve_b: Amount,
    total_liquidity: Liquidity,
    positions: HashMap<Address, Liquidity>,
}

impl PoolLedger {
    /// An empty ledger for `token_pair`.
    #[must_use]
    pub fn new(token_pair: TokenPair) -> Self {
        Self {
            token_pair,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_liquidity: Liquidity::ZERO,
            positions: HashMap::new(),
        }
    }

    /// Returns the token pair.
    #[must_use]
    pub const fn token_pair(&self) -> &TokenPair {
        &self.token_pair
    }

    /// Returns the reserve of token A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the reserve of token B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the outstanding liquidity units.
    #[must_use]
    pub const fn total_liquidity(&self) -> Liquidity {
        self.total_liquidity
    }

    /// Returns `owner`'s liquidity units (zero if it has no position).
    #[must_use]
    pub fn liquidity_of(&self, owner: &Address) -> Liquidity {
        self.positions.get(owner).copied().unwrap_or_default()
    }

    /// Number of owners holding a non-zero position.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterates over `(owner, units)` in arbitrary order.
    pub fn positions(&self) -> impl Iterator<Item = (&Address, &Liquidity)> {
        self.positions.iter()
    }

    /// Returns `true` before the first deposit and after a full withdrawal.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_liquidity.is_zero()
    }

    /// Reserves ordered as `(reserve of token_in, reserve of token_out)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] unless the two tokens are this
    /// ledger's pair.
    pub fn reserves_for(
        &self,
        token_in: Address,
        token_out: Address,
    ) -> Result<(Amount, Amount), AmmError> {
        let orientation = self.token_pair.orient(token_in, token_out)?;
        Ok(orientation.arrange(self.reserve_a, self.reserve_b))
    }

    /// Copies the current reserves and supply.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            total_liquidity: self.total_liquidity,
        }
    }

    /// Overwrites both reserves.  Used only by the first deposit.
    pub(crate) fn set_reserves(&mut self, reserve_a: Amount, reserve_b: Amount) {
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
    }

    /// Applies a signed change to each reserve.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientReserves`] if either reserve would go
    ///   negative.
    /// - [`AmmError::Overflow`] if either reserve would exceed 256 bits.
    pub(crate) fn adjust_reserves(
        &mut self,
        delta_a: ReserveDelta,
        delta_b: ReserveDelta,
    ) -> Result<(), AmmError> {
        let reserve_a = Self::apply(delta_a, self.reserve_a)?;
        let reserve_b = Self::apply(delta_b, self.reserve_b)?;
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        Ok(())
    }

    fn apply(delta: ReserveDelta, reserve: Amount) -> Result<Amount, AmmError> {
        delta.apply(reserve).ok_or(match delta {
            ReserveDelta::Increase(_) => AmmError::Overflow("reserve overflow"),
            ReserveDelta::Decrease(_) => AmmError::InsufficientReserves,
        })
    }

    /// Credits `amount` units to `owner` and to the total supply.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the supply would exceed 256 bits.
    pub(crate) fn mint(&mut self, owner: Address, amount: Liquidity) -> Result<(), AmmError> {
        let total = self
            .total_liquidity
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("liquidity supply"))?;
        // A position never exceeds the total, so this cannot overflow once
        // the total did not.
        let position = self
            .liquidity_of(&owner)
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("liquidity position"))?;
        self.total_liquidity = total;
        if !position.is_zero() {
            self.positions.insert(owner, position);
        }
        Ok(())
    }

    /// Debits `amount` units from `owner` and from the total supply.
    ///
    /// A position that reaches zero is removed.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if `owner` holds fewer
    /// than `amount` units.
    pub(crate) fn burn(&mut self, owner: Address, amount: Liquidity) -> Result<(), AmmError> {
        let position = self
            .liquidity_of(&owner)
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientLiquidity)?;
        let total = self
            .total_liquidity
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientLiquidity)?;
        self.total_liquidity = total;
        if position.is_zero() {
            self.positions.remove(&owner);
        } else {
            self.positions.insert(owner, position);
        }
        Ok(())
    }
}

impl FromConfig<PoolConfig> for PoolLedger {
    /// Creates an empty ledger for the configured pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the configuration does
    /// not validate.
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self::new(*config.token_pair()))
    }
}

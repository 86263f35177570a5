//! Liquidity management trait extending [`SwapPool`].
//!
//! # Liquidity Accounting Invariant
//!
//! The total reported by [`LiquidityPool::total_liquidity`] **only** changes
//! through [`LiquidityPool::add_liquidity`] and
//! [`LiquidityPool::remove_liquidity`].  Swaps and queries never alter it.
//!
//! For a pool with `n` positions and total liquidity `L`:
//!
//! ```text
//! L = Σ position[i]   for all i
//! ```

use super::SwapPool;
use crate::domain::{
    AddLiquidity, AddLiquidityReceipt, Address, Liquidity, RemoveLiquidity,
    RemoveLiquidityReceipt,
};
use crate::error::AmmError;

/// Pools that accept deposits and withdrawals of both tokens.
pub trait LiquidityPool: SwapPool {
    /// Deposits both tokens from `caller` and mints liquidity to
    /// `request.to`.
    ///
    /// The first deposit takes the desired amounts as given and mints
    /// `integer_sqrt(amount_a × amount_b)`.  Later deposits are reduced to
    /// the current reserve ratio.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExpired`] if the deadline has passed.
    /// - [`AmmError::InvalidTokenPair`] unless the tokens are the pool pair.
    /// - [`AmmError::InsufficientAmountA`] / [`AmmError::InsufficientAmountB`]
    ///   if the ratio-optimal amount is below the caller's minimum.
    /// - [`AmmError::InsufficientLiquidityMinted`] if nothing would be minted.
    /// - [`AmmError::Transfer`] if the token ledger refuses a transfer.
    /// - [`AmmError::RollbackIncomplete`] if, after such a refusal, undoing
    ///   the call's earlier transfers also failed.
    fn add_liquidity(
        &self,
        caller: Address,
        request: &AddLiquidity,
    ) -> Result<AddLiquidityReceipt, AmmError>;

    /// Burns `request.liquidity` of `caller`'s units and pays the
    /// proportional share of both reserves to `request.to`. Shares are
    /// floored, so a small burn may pay zero of either token.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DeadlineExpired`] if the deadline has passed.
    /// - [`AmmError::InvalidTokenPair`] unless the tokens are the pool pair.
    /// - [`AmmError::InsufficientLiquidity`] if `caller` holds fewer units.
    /// - [`AmmError::InsufficientOutputAmount`] if an amount is below its
    ///   minimum.
    /// - [`AmmError::Transfer`] if the token ledger refuses a transfer.
    /// - [`AmmError::RollbackIncomplete`] if, after such a refusal, undoing
    ///   the call's earlier transfers also failed.
    fn remove_liquidity(
        &self,
        caller: Address,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityReceipt, AmmError>;

    /// Total outstanding liquidity units.
    #[must_use]
    fn total_liquidity(&self) -> Liquidity;

    /// Liquidity units held by `owner`.
    #[must_use]
    fn liquidity_balance(&self, owner: Address) -> Liquidity;
}

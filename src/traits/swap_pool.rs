//! Swap and price-query trait.
//!
//! [`SwapPool`] covers the exchange side of a pool:
//!
//! 1. **Execute**: [`SwapPool::swap_exact_tokens_for_tokens`] sells an exact
//!    input amount along a two-token path.
//! 2. **Price**: [`SwapPool::get_price`] returns the spot price between the
//!    two tokens.
//! 3. **Quote**: [`SwapPool::quote_amount_out`] previews a swap without
//!    executing it.
//! 4. **Inspect pair**: [`SwapPool::token_pair`] returns the configured pair.
//!
//! # Pricing
//!
//! Swaps are fee-less: `amount_out = reserve_out × amount_in / (reserve_in +
//! amount_in)`, rounded down.  Rounding alone keeps `reserve_a × reserve_b`
//! from decreasing.

use crate::domain::{Address, Amount, Price, SwapExactIn, SwapReceipt, TokenPair};
use crate::error::AmmError;

/// Exchange operations of a two-token pool.
///
/// Methods take `&self`: pools synchronise internally so they can be shared
/// between threads.
pub trait SwapPool {
    /// Sells exactly `request.amount_in` of `request.path[0]` for
    /// `request.path[1]`, paying the output to `request.to`.
    ///
    /// The call is atomic: on error no reserve, token balance or event has
    /// changed.
    ///
    /// # Errors
    ///
    /// In check order:
    ///
    /// - [`AmmError::PathLengthInvalid`] unless the path has two entries.
    /// - [`AmmError::InvalidInputToken`] if `path[0]` is not a pool token.
    /// - [`AmmError::InvalidOutputToken`] if `path[1]` is not its counterpart.
    /// - [`AmmError::DeadlineExpired`] if the deadline has passed.
    /// - [`AmmError::InsufficientLiquidity`] if either reserve is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if the output is below
    ///   `amount_out_min`. A zero output with a zero minimum succeeds.
    /// - [`AmmError::Transfer`] if the token ledger refuses a transfer.
    /// - [`AmmError::RollbackIncomplete`] if, after such a refusal, undoing
    ///   the call's earlier transfers also failed.
    fn swap_exact_tokens_for_tokens(
        &self,
        caller: Address,
        request: &SwapExactIn,
    ) -> Result<SwapReceipt, AmmError>;

    /// Units of `token_b` per unit of `token_a`, scaled by 10^18.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidTokenPair`] unless `{token_a, token_b}` is the
    /// pool's pair, or if the `token_a` reserve is zero.
    fn get_price(&self, token_a: Address, token_b: Address) -> Result<Price, AmmError>;

    /// Output a swap of `amount_in` from `token_in` to `token_out` would
    /// yield against current reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidTokenPair`] unless the tokens are the pool's pair.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    fn quote_amount_out(
        &self,
        amount_in: Amount,
        token_in: Address,
        token_out: Address,
    ) -> Result<Amount, AmmError>;

    /// Returns the configured token pair.
    #[must_use]
    fn token_pair(&self) -> &TokenPair;
}

//! Read-only price and quote queries.

use super::PoolLedger;
use crate::domain::{Address, Amount, Price};
use crate::error::AmmError;
use crate::math::get_amount_out;

/// Units of `token_b` per unit of `token_a`, scaled by 10^18.
///
/// An empty `token_a` reserve means there is no price; it is reported as
/// [`AmmError::InvalidTokenPair`] like any other unusable pair.
pub(crate) fn spot_price(
    ledger: &PoolLedger,
    token_a: Address,
    token_b: Address,
) -> Result<Price, AmmError> {
    let (base, quote) = ledger.reserves_for(token_a, token_b)?;
    if base.is_zero() {
        return Err(AmmError::InvalidTokenPair);
    }
    Price::from_reserves(quote, base)
}

/// Output of selling `amount_in` of `token_in` for `token_out` right now.
///
/// Applies the same empty-reserve guard as a swap.
pub(crate) fn quote_amount_out(
    ledger: &PoolLedger,
    amount_in: Amount,
    token_in: Address,
    token_out: Address,
) -> Result<Amount, AmmError> {
    let (reserve_in, reserve_out) = ledger.reserves_for(token_in, token_out)?;
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    get_amount_out(amount_in, reserve_in, reserve_out)
}

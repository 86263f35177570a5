//! Exact-input swap against a [`PoolLedger`].

use tracing::debug;

use super::PoolLedger;
use crate::domain::{Address, Amount, Orientation, ReserveDelta, SwapPath, TokenPair};
use crate::error::AmmError;
use crate::math::get_amount_out;

/// A swap path checked against the pool's pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Route {
    pub(crate) path: SwapPath,
    pub(crate) orientation: Orientation,
}

/// Validates a caller-supplied path: its length, then the input token, then
/// the output token.
pub(crate) fn resolve_route(pair: &TokenPair, path: &[Address]) -> Result<Route, AmmError> {
    let path = SwapPath::from_slice(path)?;
    let expected_out = pair
        .other(&path.token_in())
        .ok_or(AmmError::InvalidInputToken)?;
    if path.token_out() != expected_out {
        return Err(AmmError::InvalidOutputToken);
    }
    let orientation = pair.orient(path.token_in(), path.token_out())?;
    Ok(Route { path, orientation })
}

/// Stages the swap on `ledger` and returns the output amount.
pub(crate) fn execute(
    ledger: &mut PoolLedger,
    route: Route,
    amount_in: Amount,
    amount_out_min: Amount,
) -> Result<Amount, AmmError> {
    let (reserve_in, reserve_out) =
        route
            .orientation
            .arrange(ledger.reserve_a(), ledger.reserve_b());
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }

    let amount_out = get_amount_out(amount_in, reserve_in, reserve_out)?;
    if amount_out < amount_out_min {
        debug!(%amount_out, %amount_out_min, "swap output below minimum");
        return Err(AmmError::InsufficientOutputAmount);
    }

    let (delta_a, delta_b) = route.orientation.arrange(
        ReserveDelta::Increase(amount_in),
        ReserveDelta::Decrease(amount_out),
    );
    ledger.adjust_reserves(delta_a, delta_b)?;
    debug!(
        token_in = %route.path.token_in(),
        %amount_in,
        %amount_out,
        "staged swap"
    );
    Ok(amount_out)
}

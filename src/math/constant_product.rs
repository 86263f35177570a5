//! Constant-product (`x · y = k`) formulas.
//!
//! Every function here is pure: it reads reserves and amounts and returns
//! a result, leaving state changes to the pool.  Intermediate products are
//! taken at 512-bit width, so only a final result that does not fit 256
//! bits is reported as [`AmmError::Overflow`].
//!
//! | Operation | Formula |
//! |-----------|---------|
//! | swap output | `reserve_out × amount_in / (reserve_in + amount_in)` |
//! | deposit quote | `amount_a × reserve_b / reserve_a` |
//! | first mint | `integer_sqrt(amount_a × amount_b)` |
//! | proportional mint | `min(a × total / reserve_a, b × total / reserve_b)` |
//! | burn | `liquidity × reserve / total` |
//!
//! All divisions round down, in the pool's favour.

use primitive_types::{U256, U512};

use super::integer_sqrt;
use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::AmmError;

/// Computes `a × b / denominator` with a 512-bit intermediate product.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit 256 bits.
///
/// # Examples
///
/// ```
/// use primitive_types::U256;
/// use simple_swap::domain::Rounding;
/// use simple_swap::math::mul_div;
///
/// let r = mul_div(U256::MAX, U256::from(2u8), U256::from(4u8), Rounding::Down);
/// assert_eq!(r, Ok(U256::MAX / 2));
/// ```
pub fn mul_div(a: U256, b: U256, denominator: U256, rounding: Rounding) -> Result<U256, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let (quotient, remainder) = a.full_mul(b).div_mod(U512::from(denominator));
    let quotient =
        U256::try_from(quotient).map_err(|_| AmmError::Overflow("mul_div quotient overflow"))?;
    if rounding.is_up() && !remainder.is_zero() {
        return quotient
            .checked_add(U256::one())
            .ok_or(AmmError::Overflow("mul_div rounding overflow"));
    }
    Ok(quotient)
}

/// Output of an exact-input swap against the given reserves.
///
/// `amount_out = reserve_out × amount_in / (reserve_in + amount_in)`, with
/// no fee deducted.  With a non-zero `reserve_in` the result is strictly
/// below `reserve_out`, and it may be zero for dust inputs.  Reserve checks
/// belong to the caller.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `reserve_in + amount_in` is zero.
/// - [`AmmError::Overflow`] if `reserve_in + amount_in` exceeds 256 bits.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Amount;
/// use simple_swap::math::get_amount_out;
///
/// let out = get_amount_out(Amount::from(1u64), Amount::ZERO, Amount::from(5u64));
/// assert_eq!(out, Ok(Amount::from(5u64)));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    let denominator = reserve_in
        .checked_add(&amount_in)
        .ok_or(AmmError::Overflow("swap denominator overflow"))?;
    mul_div(
        reserve_out.get(),
        amount_in.get(),
        denominator.get(),
        Rounding::Down,
    )
    .map(Amount::new)
}

/// Amount of the other token that keeps the reserve ratio unchanged.
///
/// `quote = amount_a × reserve_b / reserve_a`.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if `reserve_a` is zero.
/// - [`AmmError::Overflow`] if the result exceeds 256 bits.
pub fn quote(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount, AmmError> {
    if reserve_a.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    mul_div(
        amount_a.get(),
        reserve_b.get(),
        reserve_a.get(),
        Rounding::Down,
    )
    .map(Amount::new)
}

/// Liquidity minted by the very first deposit: `integer_sqrt(a × b)`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if `amount_a × amount_b` exceeds 256 bits.
pub fn initial_liquidity(amount_a: Amount, amount_b: Amount) -> Result<Liquidity, AmmError> {
    let product = amount_a
        .checked_mul(&amount_b)
        .ok_or(AmmError::Overflow("initial product overflow"))?;
    Ok(Liquidity::new(integer_sqrt(product.get())))
}

/// Liquidity minted for a deposit into a pool that already has supply.
///
/// The smaller of the two per-token shares is taken, so an off-ratio
/// deposit never mints more than its scarcer side justifies.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if either reserve is zero.
/// - [`AmmError::Overflow`] if a share exceeds 256 bits.
pub fn proportional_liquidity(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total: Liquidity,
) -> Result<Liquidity, AmmError> {
    let share_a = mul_div(amount_a.get(), total.get(), reserve_a.get(), Rounding::Down)?;
    let share_b = mul_div(amount_b.get(), total.get(), reserve_b.get(), Rounding::Down)?;
    Ok(Liquidity::new(share_a.min(share_b)))
}

/// Reserve amounts released by burning `liquidity` out of `total`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `total` is zero.
/// - [`AmmError::Overflow`] if a share exceeds 256 bits.
pub fn burn_amounts(
    liquidity: Liquidity,
    reserve_a: Amount,
    reserve_b: Amount,
    total: Liquidity,
) -> Result<(Amount, Amount), AmmError> {
    let amount_a = mul_div(liquidity.get(), reserve_a.get(), total.get(), Rounding::Down)?;
    let amount_b = mul_div(liquidity.get(), reserve_b.get(), total.get(), Rounding::Down)?;
    Ok((Amount::new(amount_a), Amount::new(amount_b)))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn amt(v: u64) -> Amount {
        Amount::from(v)
    }

    // -- mul_div -------------------------------------------------------------

    #[test]
    fn mul_div_wide_intermediate() {
        // U256::MAX × 3 overflows 256 bits but the quotient does not.
        let Ok(r) = mul_div(U256::MAX, U256::from(3u8), U256::from(3u8), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(r, U256::MAX);
    }

    #[test]
    fn mul_div_rounding() {
        let seven = U256::from(7u8);
        let two = U256::from(2u8);
        assert_eq!(mul_div(seven, U256::one(), two, Rounding::Down), Ok(U256::from(3u8)));
        assert_eq!(mul_div(seven, U256::one(), two, Rounding::Up), Ok(U256::from(4u8)));
    }

    #[test]
    fn mul_div_errors() {
        assert_eq!(
            mul_div(U256::one(), U256::one(), U256::zero(), Rounding::Down),
            Err(AmmError::DivisionByZero)
        );
        assert!(matches!(
            mul_div(U256::MAX, U256::from(2u8), U256::one(), Rounding::Down),
            Err(AmmError::Overflow(_))
        ));
    }

    // -- get_amount_out -------------------------------------------------------

    #[test]
    fn amount_out_matches_formula() {
        // 200 × 10 / (100 + 10) = 18.18 -> 18
        assert_eq!(get_amount_out(amt(10), amt(100), amt(200)), Ok(amt(18)));
    }

    #[test]
    fn amount_out_one_whole_token() {
        let Ok(out) = get_amount_out(
            Amount::from_whole(1),
            Amount::from_whole(100),
            Amount::from_whole(200),
        ) else {
            panic!("expected Ok");
        };
        // 200e18 × 1e18 / 101e18
        assert_eq!(out, Amount::from(1_980_198_019_801_980_198u128));
        assert!(out < Amount::from_whole(3));
    }

    #[test]
    fn amount_out_stays_below_reserve() {
        let Ok(out) = get_amount_out(amt(1_000_000_000), amt(1), amt(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(out, amt(999));
    }

    #[test]
    fn amount_out_denominator_overflow() {
        assert!(matches!(
            get_amount_out(Amount::MAX, amt(1), amt(1_000)),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn amount_out_dust_is_zero() {
        assert_eq!(get_amount_out(amt(1), amt(1_000), amt(10)), Ok(Amount::ZERO));
    }

    #[test]
    fn amount_out_zero_operands() {
        assert_eq!(get_amount_out(Amount::ZERO, amt(1), amt(1)), Ok(Amount::ZERO));
        assert_eq!(get_amount_out(amt(1), amt(1), Amount::ZERO), Ok(Amount::ZERO));
        // 5 × 1 / (0 + 1)
        assert_eq!(get_amount_out(amt(1), Amount::ZERO, amt(5)), Ok(amt(5)));
    }

    #[test]
    fn amount_out_zero_denominator() {
        assert_eq!(
            get_amount_out(Amount::ZERO, Amount::ZERO, amt(5)),
            Err(AmmError::DivisionByZero)
        );
    }

    // -- quote -----------------------------------------------------------------

    #[test]
    fn quote_keeps_ratio() {
        assert_eq!(quote(amt(10), amt(100), amt(200)), Ok(amt(20)));
        assert_eq!(quote(amt(1), amt(3), amt(2)), Ok(Amount::ZERO));
        assert_eq!(
            quote(amt(1), Amount::ZERO, amt(2)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    // -- minting and burning -----------------------------------------------------

    #[test]
    fn initial_liquidity_is_fixed_iteration_sqrt() {
        let Ok(l) = initial_liquidity(amt(1_000), amt(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(l, Liquidity::from(7_853u64));
    }

    #[test]
    fn initial_liquidity_overflow() {
        assert!(matches!(
            initial_liquidity(Amount::MAX, amt(2)),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn proportional_takes_minimum() {
        // reserves 100/200, total 1000: deposit 10/30 -> min(100, 150) = 100
        let Ok(l) = proportional_liquidity(
            amt(10),
            amt(30),
            amt(100),
            amt(200),
            Liquidity::from(1_000u64),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(l, Liquidity::from(100u64));
    }

    #[test]
    fn burn_floors_both_sides() {
        let Ok((a, b)) = burn_amounts(
            Liquidity::from(1u64),
            amt(10),
            amt(20),
            Liquidity::from(3u64),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!((a, b), (amt(3), amt(6)));
    }

    #[test]
    fn burn_everything_returns_reserves() {
        let total = Liquidity::from(7_853u64);
        assert_eq!(
            burn_amounts(total, amt(1_000), amt(1_000), total),
            Ok((amt(1_000), amt(1_000)))
        );
    }
}

//! Fixed-iteration integer square root.

use primitive_types::U256;

/// Number of Newton refinements applied after the initial guess.
const ITERATIONS: usize = 7;

/// Integer square root by exactly seven Babylonian refinements.
///
/// Starting from `z = (x + 1) / 2, y = x`, each step sets `y = z` and
/// `z = (y + x / y) / 2`; afterwards `y` is lowered by one if `y² > x`.
///
/// The iteration count is fixed rather than run to a fixed point, so for
/// large inputs the result is an over-estimate of `⌊√x⌋`.  Initial
/// liquidity is minted from this value, which makes the exact output part
/// of the pool's observable behaviour: it must not be "fixed".
///
/// Every step is evaluated in a form that cannot overflow, so the function
/// is total over `U256`.  A square that does not fit 256 bits is treated as
/// exceeding `x`.
///
/// # Examples
///
/// ```
/// use primitive_types::U256;
/// use simple_swap::math::integer_sqrt;
///
/// assert_eq!(integer_sqrt(U256::from(16u64)), U256::from(4u64));
/// assert_eq!(integer_sqrt(U256::from(17u64)), U256::from(4u64));
/// // Seven iterations are not enough to converge from 10^6:
/// assert_eq!(integer_sqrt(U256::from(1_000_000u64)), U256::from(7_853u64));
/// ```
#[must_use]
pub fn integer_sqrt(x: U256) -> U256 {
    if x.is_zero() {
        return U256::zero();
    }

    let one = U256::one();
    let two = U256::from(2u8);

    // (x + 1) / 2
    let mut z = x / two + x % two;
    let mut y = x;
    for _ in 0..ITERATIONS {
        y = z;
        // z is never zero for x > 0, so neither is y.
        let q = x / y;
        // (y + q) / 2
        z = y / two + q / two + (y % two + q % two) / two;
    }

    let exceeds = y.checked_mul(y).map_or(true, |square| square > x);
    if exceeds {
        y -= one;
    }
    y
}

//! Spot price as an 18-decimal fixed-point ratio.

use core::fmt;

use primitive_types::U256;

use super::{Amount, Rounding, WAD};
use crate::error::AmmError;
use crate::math::mul_div;

/// Exchange rate between two tokens scaled by 10^18.
///
/// `Price::from_reserves(quote, base)` is "units of `quote` per unit of
/// `base`": a pool holding 100 A and 200 B prices A at `2 × 10^18`.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Amount, Price};
///
/// let price = Price::from_reserves(Amount::from_whole(200), Amount::from_whole(100))
///     .expect("non-zero base");
/// assert_eq!(price, Price::from_whole(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(U256);

impl Price {
    /// Price ratio of 1:1.
    pub const ONE: Self = Self(WAD);

    /// Price ratio of zero.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// Wraps a raw 18-decimal fixed-point value.
    #[must_use]
    pub const fn new(raw: U256) -> Self {
        Self(raw)
    }

    /// A whole-number price (`units × 10^18`).
    #[must_use]
    pub fn from_whole(units: u64) -> Self {
        Self(U256::from(units) * WAD)
    }

    /// Returns the raw fixed-point value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Computes `quote_reserve × 10^18 / base_reserve`, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `base_reserve` is zero.
    /// - [`AmmError::Overflow`] if the scaled numerator exceeds 256 bits.
    pub fn from_reserves(quote_reserve: Amount, base_reserve: Amount) -> Result<Self, AmmError> {
        mul_div(quote_reserve.get(), WAD, base_reserve.get(), Rounding::Down).map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (whole, frac) = self.0.div_mod(WAD);
        write!(f, "{whole}.{:018}", frac.low_u64())
    }
}

//! Raw token amount with checked arithmetic.

use core::fmt;

use primitive_types::U256;

/// Number of raw units in one whole token (18 decimals).
pub const WAD: U256 = U256([1_000_000_000_000_000_000, 0, 0, 0]);

/// A raw token amount in the smallest unit (10^-18 of a token).
///
/// `Amount` never interprets decimals; [`Amount::from_whole`] is the only
/// place the 18-decimal convention is applied.  All `U256` values are valid
/// amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of panicking.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Amount;
///
/// let a = Amount::from(100u64);
/// let b = Amount::from(200u64);
/// assert_eq!(a.checked_add(&b), Some(Amount::from(300u64)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::from(100u64)));
/// assert_eq!(Amount::from_whole(1).to_string(), "1000000000000000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256::MAX);

    /// Creates a new `Amount` from a raw `U256` value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Creates an amount of `units` whole tokens (`units × 10^18`).
    pub fn from_whole(units: u64) -> Self {
        // u64 × 10^18 < 2^128, far inside U256.
        Self(U256::from(units) * WAD)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(U256::from(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn from_whole_scales_by_wad() {
        assert_eq!(
            Amount::from_whole(100).get(),
            U256::from(100_000_000_000_000_000_000u128)
        );
        assert_eq!(Amount::from_whole(0), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Amount::from(1_000_000u64).to_string(), "1000000");
    }

    #[test]
    fn ordering() {
        assert!(Amount::from(1u64) < Amount::from(2u64));
    }

    // -- Checked arithmetic -------------------------------------------------

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::from(1u64)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::from(1u64).checked_sub(&Amount::from(2u64)), None);
    }

    #[test]
    fn sub_to_zero() {
        let a = Amount::from(42u64);
        assert_eq!(a.checked_sub(&a), Some(Amount::ZERO));
    }

    #[test]
    fn mul_beyond_u128() {
        // 100e18 × 200e18 does not fit u128 but fits U256.
        let Some(product) = Amount::from_whole(100).checked_mul(&Amount::from_whole(200)) else {
            panic!("product fits U256");
        };
        assert!(product.get() > U256::from(u128::MAX));
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::from(2u64)), None);
    }
}

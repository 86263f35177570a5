//! Liquidity units of a pool position.

use core::fmt;

use primitive_types::U256;


/// Liquidity units: the pool's internal share accounting.
///
/// Distinct from [`Amount`](super::Amount) because it measures proportional ownership of
/// both reserves, not a quantity of either token.  All `U256` values are
/// valid.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Liquidity;
///
/// let a = Liquidity::from(1_000u64);
/// let b = Liquidity::from(2_000u64);
/// assert_eq!(a.checked_add(&b), Some(Liquidity::from(3_000u64)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(U256);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// Creates a new `Liquidity` from a raw `U256` value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying `U256` value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the liquidity is zero.
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
}

impl From<U256> for Liquidity {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<u64> for Liquidity {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_constant() {
        assert!(Liquidity::ZERO.is_zero());
        assert_eq!(Liquidity::default(), Liquidity::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(Liquidity::from(1_000u64).to_string(), "1000");
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Liquidity::new(U256::MAX).checked_add(&Liquidity::from(1u64)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Liquidity::from(1u64).checked_sub(&Liquidity::from(2u64)), None);
    }

    #[test]
    fn sub_to_zero_is_zero() {
        let l = Liquidity::from(42u64);
        assert!(l.checked_sub(&l).is_some_and(|v| v.is_zero()));
    }
}

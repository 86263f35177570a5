//! Signed change to a single reserve.

use super::Amount;

/// A signed reserve adjustment over an unsigned [`Amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReserveDelta {
    /// Add to the reserve.
    Increase(Amount),
    /// Subtract from the reserve.
    Decrease(Amount),
}

impl ReserveDelta {
    /// No change.
    pub const NONE: Self = Self::Increase(Amount::ZERO);

    /// Applies the delta to `reserve`.
    ///
    /// Returns `None` if the result would be negative or exceed 256 bits.
    #[must_use]
    pub fn apply(self, reserve: Amount) -> Option<Amount> {
        match self {
            Self::Increase(amount) => reserve.checked_add(&amount),
            Self::Decrease(amount) => reserve.checked_sub(&amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_both_directions() {
        let r = Amount::from(10u64);
        assert_eq!(
            ReserveDelta::Increase(Amount::from(5u64)).apply(r),
            Some(Amount::from(15u64))
        );
        assert_eq!(
            ReserveDelta::Decrease(Amount::from(10u64)).apply(r),
            Some(Amount::ZERO)
        );
        assert_eq!(ReserveDelta::NONE.apply(r), Some(r));
    }

    #[test]
    fn decrease_below_zero_fails() {
        assert_eq!(
            ReserveDelta::Decrease(Amount::from(11u64)).apply(Amount::from(10u64)),
            None
        );
    }
}

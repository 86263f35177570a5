//! The pool's pair of distinct tokens.

use super::Address;
use crate::error::AmmError;

/// Which way round a caller named the pool's two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The caller's `(x, y)` is the pool's `(token_a, token_b)`.
    Forward,
    /// The caller's `(x, y)` is the pool's `(token_b, token_a)`.
    Reversed,
}

impl Orientation {
    /// Maps a pair of values from the caller's order into the pool's
    /// `(a, b)` order, or back again (the mapping is its own inverse).
    #[must_use]
    pub fn arrange<T>(self, x: T, y: T) -> (T, T) {
        match self {
            Self::Forward => (x, y),
            Self::Reversed => (y, x),
        }
    }
}

/// The two distinct tokens a pool is bound to.
///
/// Unlike a canonically sorted pair, `TokenPair` keeps the order it was
/// configured with: [`token_a`](Self::token_a) is the token whose balance
/// is the pool's `reserve_a`.  Membership checks accept either order.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Orientation, TokenPair};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
///
/// // Configuration order is preserved:
/// assert_eq!(pair.token_a(), b);
/// assert_eq!(pair.orient(a, b), Ok(Orientation::Reversed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token_a: Address,
    token_b: Address,
}

impl TokenPair {
    /// Creates a pair from two distinct token addresses.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if both addresses are the
    /// same.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self, AmmError> {
        if token_a == token_b {
            return Err(AmmError::InvalidConfiguration(
                "token pair requires two distinct addresses",
            ));
        }
        Ok(Self { token_a, token_b })
    }

    /// Returns the first configured token.
    #[must_use]
    pub const fn token_a(&self) -> Address {
        self.token_a
    }

    /// Returns the second configured token.
    #[must_use]
    pub const fn token_b(&self) -> Address {
        self.token_b
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Address) -> bool {
        self.token_a == *token || self.token_b == *token
    }

    /// Returns the counterpart of `token` in this pair, if it is a member.
    #[must_use]
    pub fn other(&self, token: &Address) -> Option<Address> {
        if *token == self.token_a {
            Some(self.token_b)
        } else if *token == self.token_b {
            Some(self.token_a)
        } else {
            None
        }
    }

    /// Determines how `(x, y)` lines up with the pool's `(token_a, token_b)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidTokenPair`] unless `{x, y}` is exactly
    /// this pair.
    pub fn orient(&self, x: Address, y: Address) -> Result<Orientation, AmmError> {
        if x == self.token_a && y == self.token_b {
            Ok(Orientation::Forward)
        } else if x == self.token_b && y == self.token_a {
            Ok(Orientation::Reversed)
        } else {
            Err(AmmError::InvalidTokenPair)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(v: u64) -> Address {
        Address::from_low_u64(v)
    }

    fn pair() -> TokenPair {
        let Ok(pair) = TokenPair::new(addr(1), addr(2)) else {
            panic!("expected Ok");
        };
        pair
    }

    #[test]
    fn preserves_configuration_order() {
        let Ok(p) = TokenPair::new(addr(9), addr(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(p.token_a(), addr(9));
        assert_eq!(p.token_b(), addr(3));
    }

    #[test]
    fn rejects_same_address() {
        let Err(e) = TokenPair::new(addr(1), addr(1)) else {
            panic!("expected Err");
        };
        assert!(matches!(e, AmmError::InvalidConfiguration(_)));
    }

    #[test]
    fn contains_members_only() {
        let p = pair();
        assert!(p.contains(&addr(1)));
        assert!(p.contains(&addr(2)));
        assert!(!p.contains(&addr(3)));
    }

    #[test]
    fn other_returns_counterpart() {
        let p = pair();
        assert_eq!(p.other(&addr(1)), Some(addr(2)));
        assert_eq!(p.other(&addr(2)), Some(addr(1)));
        assert_eq!(p.other(&addr(3)), None);
    }

    #[test]
    fn orient_either_order() {
        let p = pair();
        assert_eq!(p.orient(addr(1), addr(2)), Ok(Orientation::Forward));
        assert_eq!(p.orient(addr(2), addr(1)), Ok(Orientation::Reversed));
    }

    #[test]
    fn orient_rejects_foreign_and_duplicate() {
        let p = pair();
        assert_eq!(p.orient(addr(3), addr(2)), Err(AmmError::InvalidTokenPair));
        assert_eq!(p.orient(addr(1), addr(1)), Err(AmmError::InvalidTokenPair));
    }

    #[test]
    fn arrange_is_an_involution() {
        let o = Orientation::Reversed;
        let (a, b) = o.arrange(10, 20);
        assert_eq!((a, b), (20, 10));
        assert_eq!(o.arrange(a, b), (10, 20));
        assert_eq!(Orientation::Forward.arrange(10, 20), (10, 20));
    }
}

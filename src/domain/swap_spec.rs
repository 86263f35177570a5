//! Swap request and its two-token path.

use core::fmt;

use super::{Address, Amount, Deadline};
use crate::error::AmmError;

/// A validated two-hop route: exactly one input and one output token.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, SwapPath};
///
/// let a = Address::from_low_u64(1);
/// let b = Address::from_low_u64(2);
/// assert!(SwapPath::from_slice(&[a, b]).is_ok());
/// assert!(SwapPath::from_slice(&[a]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapPath {
    token_in: Address,
    token_out: Address,
}

impl SwapPath {
    /// Creates a path from its two endpoints.
    #[must_use]
    pub const fn new(token_in: Address, token_out: Address) -> Self {
        Self {
            token_in,
            token_out,
        }
    }

    /// Validates a caller-supplied route.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::PathLengthInvalid`] unless `path` has exactly two
    /// entries.  Membership in a pool is checked by the pool, not here.
    pub fn from_slice(path: &[Address]) -> Result<Self, AmmError> {
        match path {
            [token_in, token_out] => Ok(Self::new(*token_in, *token_out)),
            _ => Err(AmmError::PathLengthInvalid),
        }
    }

    /// The token sold.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// The token bought.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.token_out
    }
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.token_in, self.token_out)
    }
}

/// An exact-input swap: sell `amount_in` of `path[0]` for at least
/// `amount_out_min` of `path[1]`, delivered to `to`.
///
/// The path is kept as a raw list so that its length is validated together
/// with the rest of the call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapExactIn {
    /// Amount of the input token taken from the caller.
    pub amount_in: Amount,
    /// Smallest acceptable output.
    pub amount_out_min: Amount,
    /// `[token_in, token_out]`.
    pub path: Vec<Address>,
    /// Recipient of the output token.
    pub to: Address,
    /// Call expiry.
    pub deadline: Deadline,
}

impl SwapExactIn {
    /// Creates a request over a two-token route.
    pub fn new(
        amount_in: Amount,
        amount_out_min: Amount,
        path: SwapPath,
        to: Address,
        deadline: Deadline,
    ) -> Self {
        Self {
            amount_in,
            amount_out_min,
            path: vec![path.token_in(), path.token_out()],
            to,
            deadline,
        }
    }
}

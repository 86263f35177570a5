//! 160-bit account and token address.

use core::fmt;

use primitive_types::H160;

/// A 160-bit address identifying either a token contract or an account.
///
/// Tokens, liquidity providers, swappers and the pool's own account all
/// share this identity space, exactly as on an EVM chain.  All 20-byte
/// sequences are valid, so construction is infallible.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Address;
///
/// let addr = Address::from_low_u64(0xA);
/// assert_eq!(addr.as_bytes()[19], 0xA);
/// assert!(!addr.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(H160);

impl Address {
    /// Wraps an existing [`H160`].
    #[must_use]
    pub const fn new(inner: H160) -> Self {
        Self(inner)
    }

    /// Creates an address from raw big-endian bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(H160(bytes))
    }

    /// Creates an address whose low 8 bytes hold `value` (big-endian).
    ///
    /// Handy for fixtures: `Address::from_low_u64(1)` is `0x00..01`.
    #[must_use]
    pub fn from_low_u64(value: u64) -> Self {
        Self(H160::from_low_u64_be(value))
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self(H160([0u8; 20]))
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the underlying 20 bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 20] {
        self.0 .0
    }

    /// Returns the wrapped [`H160`].
    #[must_use]
    pub const fn get(&self) -> H160 {
        self.0
    }
}

impl From<H160> for Address {
    fn from(inner: H160) -> Self {
        Self(inner)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

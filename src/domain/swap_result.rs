//! Outcome of a swap.

use core::fmt;

use super::{Address, Amount, TokensSwapped};

/// A committed exact-input swap.
///
/// # Invariants
///
/// - `amount_in > 0` and `amount_out > 0`.
/// - `amount_out` is strictly below the output reserve before the swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    event: TokensSwapped,
}

impl SwapReceipt {
    pub(crate) const fn new(event: TokensSwapped) -> Self {
        Self { event }
    }

    /// Token sold.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.event.token_in
    }

    /// Token bought.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.event.token_out
    }

    /// Amount sold.
    pub const fn amount_in(&self) -> Amount {
        self.event.amount_in
    }

    /// Amount bought.
    pub const fn amount_out(&self) -> Amount {
        self.event.amount_out
    }

    /// The event appended to the pool's log.
    #[must_use]
    pub const fn event(&self) -> &TokensSwapped {
        &self.event
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap(in={}, out={})",
            self.event.amount_in, self.event.amount_out
        )
    }
}

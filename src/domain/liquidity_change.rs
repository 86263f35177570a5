//! Liquidity deposit and withdrawal requests, and their receipts.
//!
//! Requests name the tokens and amounts in the caller's order; the pool
//! maps them onto its own `(token_a, token_b)` order.  Receipts report the
//! amounts back in the caller's order, while the attached event carries the
//! pool's order.

use core::fmt;

use super::{Address, Amount, Deadline, Liquidity, LiquidityAdded, LiquidityRemoved};

/// Deposit up to the desired amounts of both pool tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidity {
    /// First token as named by the caller.
    pub token_a: Address,
    /// Second token as named by the caller.
    pub token_b: Address,
    /// Most of `token_a` the caller is willing to deposit.
    pub amount_a_desired: Amount,
    /// Most of `token_b` the caller is willing to deposit.
    pub amount_b_desired: Amount,
    /// Least of `token_a` the caller accepts depositing.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts depositing.
    pub amount_b_min: Amount,
    /// Recipient of the minted liquidity units.
    pub to: Address,
    /// Call expiry.
    pub deadline: Deadline,
}

impl AddLiquidity {
    /// A deposit whose minimums equal its desired amounts.
    #[must_use]
    pub const fn exact(
        token_a: Address,
        token_b: Address,
        amount_a: Amount,
        amount_b: Amount,
        to: Address,
        deadline: Deadline,
    ) -> Self {
        Self {
            token_a,
            token_b,
            amount_a_desired: amount_a,
            amount_b_desired: amount_b,
            amount_a_min: amount_a,
            amount_b_min: amount_b,
            to,
            deadline,
        }
    }

    /// Replaces the slippage minimums.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }
}

/// Burn liquidity units for a proportional share of both reserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidity {
    /// First token as named by the caller.
    pub token_a: Address,
    /// Second token as named by the caller.
    pub token_b: Address,
    /// Units to burn from the caller's position.
    pub liquidity: Liquidity,
    /// Least of `token_a` the caller accepts receiving.
    pub amount_a_min: Amount,
    /// Least of `token_b` the caller accepts receiving.
    pub amount_b_min: Amount,
    /// Recipient of both tokens.
    pub to: Address,
    /// Call expiry.
    pub deadline: Deadline,
}

impl RemoveLiquidity {
    /// A withdrawal with no slippage protection.
    #[must_use]
    pub const fn new(
        token_a: Address,
        token_b: Address,
        liquidity: Liquidity,
        to: Address,
        deadline: Deadline,
    ) -> Self {
        Self {
            token_a,
            token_b,
            liquidity,
            amount_a_min: Amount::ZERO,
            amount_b_min: Amount::ZERO,
            to,
            deadline,
        }
    }

    /// Replaces the slippage minimums.
    #[must_use]
    pub const fn with_minimums(mut self, amount_a_min: Amount, amount_b_min: Amount) -> Self {
        self.amount_a_min = amount_a_min;
        self.amount_b_min = amount_b_min;
        self
    }
}

/// Outcome of a committed deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddLiquidityReceipt {
    amount_a: Amount,
    amount_b: Amount,
    liquidity_minted: Liquidity,
    event: LiquidityAdded,
}

impl AddLiquidityReceipt {
    pub(crate) const fn new(
        amount_a: Amount,
        amount_b: Amount,
        liquidity_minted: Liquidity,
        event: LiquidityAdded,
    ) -> Self {
        Self {
            amount_a,
            amount_b,
            liquidity_minted,
            event,
        }
    }

    /// Amount of the caller's `token_a` deposited.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the caller's `token_b` deposited.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Units minted to the recipient.
    #[must_use]
    pub const fn liquidity_minted(&self) -> Liquidity {
        self.liquidity_minted
    }

    /// The event appended to the pool's log.
    #[must_use]
    pub const fn event(&self) -> &LiquidityAdded {
        &self.event
    }
}

impl fmt::Display for AddLiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AddLiquidity(a={}, b={}, minted={})",
            self.amount_a, self.amount_b, self.liquidity_minted
        )
    }
}

/// Outcome of a committed withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityReceipt {
    amount_a: Amount,
    amount_b: Amount,
    event: LiquidityRemoved,
}

impl RemoveLiquidityReceipt {
    pub(crate) const fn new(amount_a: Amount, amount_b: Amount, event: LiquidityRemoved) -> Self {
        Self {
            amount_a,
            amount_b,
            event,
        }
    }

    /// Amount of the caller's `token_a` released.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of the caller's `token_b` released.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// The event appended to the pool's log.
    #[must_use]
    pub const fn event(&self) -> &LiquidityRemoved {
        &self.event
    }
}

impl fmt::Display for RemoveLiquidityReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RemoveLiquidity(a={}, b={}, burned={})",
            self.amount_a, self.amount_b, self.event.liquidity_burned
        )
    }
}

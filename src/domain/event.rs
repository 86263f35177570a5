//! Records emitted by committed pool operations.

use core::fmt;

use super::{Address, Amount, Liquidity};

/// Emitted when liquidity is deposited.  Amounts are in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityAdded {
    /// The caller that supplied the tokens.
    pub provider: Address,
    /// Token A deposited.
    pub amount_a: Amount,
    /// Token B deposited.
    pub amount_b: Amount,
    /// Liquidity units minted to the recipient.
    pub liquidity_minted: Liquidity,
}

/// Emitted when liquidity is withdrawn.  Amounts are in pool order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityRemoved {
    /// The caller whose units were burned.
    pub provider: Address,
    /// Token A released.
    pub amount_a: Amount,
    /// Token B released.
    pub amount_b: Amount,
    /// Liquidity units burned.
    pub liquidity_burned: Liquidity,
}

/// Emitted when one pool token is exchanged for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokensSwapped {
    /// The caller that sold `token_in`.
    pub swapper: Address,
    /// Token sold into the pool.
    pub token_in: Address,
    /// Token bought out of the pool.
    pub token_out: Address,
    /// Amount sold.
    pub amount_in: Amount,
    /// Amount bought.
    pub amount_out: Amount,
}

/// Any event a pool can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// See [`LiquidityAdded`].
    LiquidityAdded(LiquidityAdded),
    /// See [`LiquidityRemoved`].
    LiquidityRemoved(LiquidityRemoved),
    /// See [`TokensSwapped`].
    TokensSwapped(TokensSwapped),
}

impl From<LiquidityAdded> for PoolEvent {
    fn from(e: LiquidityAdded) -> Self {
        Self::LiquidityAdded(e)
    }
}

impl From<LiquidityRemoved> for PoolEvent {
    fn from(e: LiquidityRemoved) -> Self {
        Self::LiquidityRemoved(e)
    }
}

impl From<TokensSwapped> for PoolEvent {
    fn from(e: TokensSwapped) -> Self {
        Self::TokensSwapped(e)
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityAdded(e) => write!(
                f,
                "LiquidityAdded(provider={}, a={}, b={}, minted={})",
                e.provider, e.amount_a, e.amount_b, e.liquidity_minted
            ),
            Self::LiquidityRemoved(e) => write!(
                f,
                "LiquidityRemoved(provider={}, a={}, b={}, burned={})",
                e.provider, e.amount_a, e.amount_b, e.liquidity_burned
            ),
            Self::TokensSwapped(e) => write!(
                f,
                "TokensSwapped(swapper={}, {} {} -> {} {})",
                e.swapper, e.amount_in, e.token_in, e.amount_out, e.token_out
            ),
        }
    }
}

/// Append-only record of committed events, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    entries: Vec<PoolEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an event.
    pub fn push(&mut self, event: impl Into<PoolEvent>) {
        self.entries.push(event.into());
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&PoolEvent> {
        self.entries.last()
    }

    /// Iterates over events oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &PoolEvent> {
        self.entries.iter()
    }

    /// Copies the recorded events.
    #[must_use]
    pub fn to_vec(&self) -> Vec<PoolEvent> {
        self.entries.clone()
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.entries)
    }
}

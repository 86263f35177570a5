//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use simple_swap::prelude::*;
//! ```

pub use crate::domain::{
    AddLiquidity, AddLiquidityReceipt, Address, Amount, Deadline, Liquidity, PoolEvent, Price,
    RemoveLiquidity, RemoveLiquidityReceipt, Rounding, SwapExactIn, SwapPath, SwapReceipt,
    TokenPair,
};

pub use crate::traits::{Clock, FromConfig, LiquidityPool, SwapPool, TokenLedger};

pub use crate::config::PoolConfig;

pub use crate::environment::{InMemoryTokenLedger, ManualClock, SystemClock};

pub use crate::pools::{PoolLedger, PoolSnapshot, SimpleSwapPool};

pub use crate::error::{AmmError, Result, TokenError};

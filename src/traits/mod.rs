//! Core trait abstractions.
//!
//! Pool-facing traits: [`SwapPool`] for exchanges and price queries,
//! [`LiquidityPool`] for deposits and withdrawals, [`FromConfig`] for
//! configuration-driven construction.
//!
//! Capabilities a pool consumes from its environment: [`TokenLedger`] for
//! token custody and [`Clock`] for deadlines.

mod clock;
mod from_config;
mod liquidity_pool;
mod swap_pool;
mod token_ledger;

pub use clock::Clock;
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
pub use token_ledger::TokenLedger;

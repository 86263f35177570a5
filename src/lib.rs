//! # Simple Swap
//!
//! A single-pair constant-product automated market maker.
//!
//! One pool holds reserves of two tokens and lets anyone:
//!
//! - deposit both tokens in proportion and receive liquidity units,
//! - burn liquidity units for a proportional share of both reserves,
//! - sell an exact amount of one token for as much of the other as the
//!   curve `reserve_a × reserve_b = k` allows,
//! - query the spot price and quote outputs.
//!
//! Every mutating call carries a deadline and slippage bounds, is
//! serialised by the pool lock, and either completes entirely or changes
//! nothing: reserves, positions, token balances and the event log included.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use simple_swap::prelude::*;
//!
//! let (usdc, weth) = (Address::from_low_u64(1), Address::from_low_u64(2));
//! let pool_account = Address::from_low_u64(100);
//! let (alice, bob) = (Address::from_low_u64(10), Address::from_low_u64(11));
//!
//! // 1. Fund two accounts and approve the pool
//! let tokens = Arc::new(InMemoryTokenLedger::new());
//! for who in [alice, bob] {
//!     for token in [usdc, weth] {
//!         tokens.mint_whole(token, who, 1_000).expect("mint");
//!         tokens.approve(token, who, pool_account, Amount::MAX);
//!     }
//! }
//!
//! // 2. Build the pool
//! let config = PoolConfig::for_tokens(usdc, weth, pool_account).expect("valid config");
//! let clock = Arc::new(ManualClock::new(1_700_000_000));
//! let pool = SimpleSwapPool::new(config, Arc::clone(&tokens), clock).expect("pool");
//!
//! // 3. Seed it with 100 USDC and 200 WETH
//! let deposit = AddLiquidity::exact(
//!     usdc,
//!     weth,
//!     Amount::from_whole(100),
//!     Amount::from_whole(200),
//!     alice,
//!     Deadline::at(1_700_000_060),
//! );
//! let receipt = pool.add_liquidity(alice, &deposit).expect("deposit");
//! assert!(!receipt.liquidity_minted().is_zero());
//!
//! // 4. Bob sells 1 USDC
//! let path = SwapPath::new(usdc, weth);
//! let request = SwapExactIn::new(Amount::from_whole(1), Amount::ZERO, path, bob, Deadline::NEVER);
//! let swapped = pool.swap_exact_tokens_for_tokens(bob, &request).expect("swap");
//!
//! assert!(swapped.amount_out() < Amount::from_whole(2));
//! assert_eq!(pool.events().len(), 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  SimpleSwapPool  │  lock, deadline, staging, events, logging
//! └────────┬─────────┘
//!          │ stages on a PoolLedger clone
//!          ▼
//! ┌──────────────────┐     ┌────────────────┐
//! │  Pool engines    │     │ TransferBatch  │  rollback on failure
//! │  liquidity, swap │     └───────┬────────┘
//! └────────┬─────────┘             │ TokenLedger trait
//!          │ math                  ▼
//!          ▼               ┌────────────────┐
//! ┌──────────────────┐     │ token custody  │
//! │  U256 formulas   │     └────────────────┘
//! └──────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`TokenPair`](domain::TokenPair), requests, receipts, events |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`TokenLedger`](traits::TokenLedger), [`Clock`](traits::Clock) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) blueprint |
//! | [`pools`]  | [`SimpleSwapPool`](pools::SimpleSwapPool) and its ledger |
//! | [`environment`] | In-memory token ledger and clocks |
//! | [`math`]   | Checked `U256` arithmetic, integer square root, curve formulas |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`TokenError`](error::TokenError) |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod environment;
pub mod error;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;

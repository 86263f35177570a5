//! Fundamental domain value types used throughout the pool engine.
//!
//! This module contains the value types that model the pool domain:
//! addresses, amounts, liquidity units, prices, deadlines, requests,
//! receipts and events.  Quantities are `U256` newtypes with checked
//! arithmetic; constructors validate what they can locally.

mod address;
mod amount;
mod deadline;
mod event;
mod liquidity;
mod liquidity_change;
mod price;
mod reserve_delta;
mod rounding;
mod swap_result;
mod swap_spec;
mod token_pair;

pub use address::Address;
pub use amount::{Amount, WAD};
pub use deadline::Deadline;
pub use event::{EventLog, LiquidityAdded, LiquidityRemoved, PoolEvent, TokensSwapped};
pub use liquidity::Liquidity;
pub use liquidity_change::{AddLiquidity, AddLiquidityReceipt, RemoveLiquidity, RemoveLiquidityReceipt};
pub use price::Price;
pub use reserve_delta::ReserveDelta;
pub use rounding::Rounding;
pub use swap_result::SwapReceipt;
pub use swap_spec::{SwapExactIn, SwapPath};
pub use token_pair::{Orientation, TokenPair};

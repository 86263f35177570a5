//! The constant-product pool and the engines it is assembled from.
//!
//! # Layout
//!
//! | Module | Role |
//! |--------|------|
//! | `ledger` | [`PoolLedger`]: reserves, supply and positions |
//! | `liquidity` | Deposit and withdrawal arithmetic on a ledger |
//! | `swap` | Path validation and exact-input swap on a ledger |
//! | `price` | Read-only spot price and output quotes |
//! | `transfers` | Token movements with rollback on failure |
//! | `simple_swap` | [`SimpleSwapPool`]: the lock-guarded aggregate |
//!
//! Only the aggregate touches the token ledger or the clock; the engines
//! are pure functions over a [`PoolLedger`].

mod ledger;
mod liquidity;
mod price;
mod simple_swap;
mod swap;
mod transfers;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use ledger::{PoolLedger, PoolSnapshot};
pub use simple_swap::SimpleSwapPool;

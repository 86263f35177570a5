//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: the ordered
//! token pair it trades and the account that holds its reserves.  Pools
//! are built from it through [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::PoolConfig;

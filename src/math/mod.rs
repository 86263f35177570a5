//! Integer arithmetic for constant-product calculations.
//!
//! This module provides [`mul_div`] for full-precision scaling with
//! explicit rounding, [`integer_sqrt`] for first-deposit minting, and the
//! pure constant-product formulas used by the pool engines.
//!
//! Everything here is `U256`-based and total: failures are reported as
//! [`AmmError`](crate::error::AmmError) values, never panics.

mod constant_product;
mod sqrt;

pub use constant_product::{
    burn_amounts, get_amount_out, initial_liquidity, mul_div, proportional_liquidity, quote,
};
pub use sqrt::integer_sqrt;

//! Ready-made implementations of the capabilities a pool consumes.
//!
//! - [`InMemoryTokenLedger`]: a [`TokenLedger`](crate::traits::TokenLedger)
//!   for any number of tokens.
//! - [`SystemClock`] and [`ManualClock`]: [`Clock`](crate::traits::Clock)
//!   sources for production and tests.

mod clock;
mod in_memory_ledger;

pub use clock::{ManualClock, SystemClock};
pub use in_memory_ledger::InMemoryTokenLedger;

//! Token-transfer capability consumed by pools.
//!
//! A pool never holds token balances itself: it asks a [`TokenLedger`] to
//! move tokens between the caller, the recipient and its own
//! [`pool_account`](crate::config::PoolConfig::pool_account).  The ledger is
//! shared, so every method takes `&self` and implementations synchronise
//! internally.
//!
//! # Transfer semantics
//!
//! - [`transfer`](TokenLedger::transfer) moves `amount` from `from` to `to`
//!   as if `from` itself initiated it.
//! - [`transfer_from`](TokenLedger::transfer_from) moves `amount` on behalf
//!   of `from` and consumes `spender`'s allowance.
//!
//! Both either succeed completely or leave every balance and allowance
//! untouched.

use crate::domain::{Address, Amount};
use crate::error::TokenError;

/// Fungible-token ledger for any number of token addresses.
pub trait TokenLedger: Send + Sync {
    /// Balance of `owner` in `token`; zero for unknown tokens or owners.
    fn balance_of(&self, token: Address, owner: Address) -> Amount;

    /// Amount `spender` may still pull from `owner`.
    fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s tokens to exactly `amount`.
    ///
    /// Returns `false` if the token is unknown to the ledger.
    fn approve(&self, token: Address, owner: Address, spender: Address, amount: Amount) -> bool;

    /// Moves `amount` of `token` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`TokenError::UnknownToken`] if the token is not registered.
    /// - [`TokenError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`TokenError::BalanceOverflow`] if `to`'s balance would overflow.
    fn transfer(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError>;

    /// Moves `amount` of `token` from `from` to `to` using `spender`'s
    /// allowance, which is reduced by `amount`.
    ///
    /// # Errors
    ///
    /// As [`transfer`](Self::transfer), plus
    /// [`TokenError::InsufficientAllowance`] if the allowance is too small.
    fn transfer_from(
        &self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError>;
}

//! In-memory fungible-token ledger.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::{Address, Amount};
use crate::error::TokenError;
use crate::traits::TokenLedger;

/// Balances, allowances and supply of one token.
#[derive(Debug, Clone, Default)]
struct TokenBook {
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl TokenBook {
    fn balance(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn set_balance(&mut self, owner: Address, amount: Amount) {
        if amount.is_zero() {
            self.balances.remove(&owner);
        } else {
            self.balances.insert(owner, amount);
        }
    }

    /// Moves `amount` from `from` to `to`; nothing changes on error.
    fn move_balance(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let from_balance = self.balance(&from);
        let from_after = from_balance
            .checked_sub(&amount)
            .ok_or(TokenError::InsufficientBalance { token, owner: from })?;
        if from == to {
            return Ok(());
        }
        let to_after = self
            .balance(&to)
            .checked_add(&amount)
            .ok_or(TokenError::BalanceOverflow(to))?;
        self.set_balance(from, from_after);
        self.set_balance(to, to_after);
        Ok(())
    }
}

/// A thread-safe ledger for any number of tokens, for tests and demos.
///
/// Tokens are registered explicitly or by their first [`mint`](Self::mint).
/// An allowance of [`Amount::MAX`] is treated as unlimited and is not
/// reduced by [`transfer_from`](TokenLedger::transfer_from).
///
/// # Examples
///
/// ```
/// use simple_swap::domain::{Address, Amount};
/// use simple_swap::environment::InMemoryTokenLedger;
/// use simple_swap::traits::TokenLedger;
///
/// let token = Address::from_low_u64(1);
/// let alice = Address::from_low_u64(10);
/// let bob = Address::from_low_u64(11);
///
/// let ledger = InMemoryTokenLedger::new();
/// ledger.mint_whole(token, alice, 5).expect("mint");
/// ledger.transfer(token, alice, bob, Amount::from_whole(2)).expect("transfer");
/// assert_eq!(ledger.balance_of(token, bob), Amount::from_whole(2));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryTokenLedger {
    books: RwLock<HashMap<Address, TokenBook>>,
}

impl InMemoryTokenLedger {
    /// Creates an empty ledger with no registered tokens.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with the given tokens registered.
    #[must_use]
    pub fn with_tokens(tokens: impl IntoIterator<Item = Address>) -> Self {
        let ledger = Self::new();
        for token in tokens {
            ledger.register(token);
        }
        ledger
    }

    /// Registers a token with zero supply.  Returns `false` if it already
    /// existed.
    pub fn register(&self, token: Address) -> bool {
        let mut books = self.books.write();
        if books.contains_key(&token) {
            return false;
        }
        books.insert(token, TokenBook::default());
        true
    }

    /// Returns `true` if the token is registered.
    #[must_use]
    pub fn is_registered(&self, token: Address) -> bool {
        self.books.read().contains_key(&token)
    }

    /// Creates `amount` raw units of `token` for `to`, registering the token
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::BalanceOverflow`] if the supply or the balance
    /// would exceed 256 bits.
    pub fn mint(&self, token: Address, to: Address, amount: Amount) -> Result<(), TokenError> {
        let mut books = self.books.write();
        let book = books.entry(token).or_default();
        let supply = book
            .total_supply
            .checked_add(&amount)
            .ok_or(TokenError::BalanceOverflow(token))?;
        let balance = book
            .balance(&to)
            .checked_add(&amount)
            .ok_or(TokenError::BalanceOverflow(to))?;
        book.total_supply = supply;
        book.set_balance(to, balance);
        debug!(%token, %to, %amount, "minted");
        Ok(())
    }

    /// Mints `units` whole tokens (`units × 10^18` raw units).
    ///
    /// # Errors
    ///
    /// As [`mint`](Self::mint).
    pub fn mint_whole(&self, token: Address, to: Address, units: u64) -> Result<(), TokenError> {
        self.mint(token, to, Amount::from_whole(units))
    }

    /// Total minted supply of `token`.
    pub fn total_supply(&self, token: Address) -> Amount {
        self.books
            .read()
            .get(&token)
            .map(|book| book.total_supply)
            .unwrap_or_default()
    }
}

impl TokenLedger for InMemoryTokenLedger {
    fn balance_of(&self, token: Address, owner: Address) -> Amount {
        self.books
            .read()
            .get(&token)
            .map(|book| book.balance(&owner))
            .unwrap_or_default()
    }

    fn allowance(&self, token: Address, owner: Address, spender: Address) -> Amount {
        self.books
            .read()
            .get(&token)
            .map(|book| book.allowance(&owner, &spender))
            .unwrap_or_default()
    }

    fn approve(&self, token: Address, owner: Address, spender: Address, amount: Amount) -> bool {
        let mut books = self.books.write();
        let Some(book) = books.get_mut(&token) else {
            return false;
        };
        if amount.is_zero() {
            book.allowances.remove(&(owner, spender));
        } else {
            book.allowances.insert((owner, spender), amount);
        }
        true
    }

    fn transfer(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let mut books = self.books.write();
        let book = books
            .get_mut(&token)
            .ok_or(TokenError::UnknownToken(token))?;
        book.move_balance(token, from, to, amount)
    }

    fn transfer_from(
        &self,
        token: Address,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        let mut books = self.books.write();
        let book = books
            .get_mut(&token)
            .ok_or(TokenError::UnknownToken(token))?;
        let allowance = book.allowance(&from, &spender);
        let remaining = allowance
            .checked_sub(&amount)
            .ok_or(TokenError::InsufficientAllowance {
                token,
                owner: from,
                spender,
            })?;
        book.move_balance(token, from, to, amount)?;
        if allowance != Amount::MAX {
            if remaining.is_zero() {
                book.allowances.remove(&(from, spender));
            } else {
                book.allowances.insert((from, spender), remaining);
            }
        }
        Ok(())
    }
}

//! Token movements of one pool call, with compensation on failure.

use tracing::{error, warn};

use crate::domain::{Address, Amount};
use crate::error::{AmmError, TokenError};
use crate::traits::TokenLedger;

/// A movement that has already been applied at the token ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Movement {
    /// `amount` pulled from `from` into the pool, consuming allowance.
    Pull {
        token: Address,
        from: Address,
        amount: Amount,
        prior_allowance: Amount,
    },
    /// `amount` paid from the pool to `to`.
    Push {
        token: Address,
        to: Address,
        amount: Amount,
    },
}

/// Performs a call's token movements in order and undoes the applied ones
/// if a movement fails or the batch is dropped without
/// [`commit`](Self::commit).
///
/// Undoing a pull returns the tokens and restores the allowance it
/// consumed; undoing a push takes the tokens back from the recipient.  A
/// compensation that itself fails is logged and skipped, so the remaining
/// ones still run.  When a failed movement is followed by a failed
/// compensation the caller receives [`AmmError::RollbackIncomplete`].
pub(crate) struct TransferBatch<'a, T: TokenLedger + ?Sized> {
    tokens: &'a T,
    pool: Address,
    applied: Vec<Movement>,
    committed: bool,
}

impl<'a, T: TokenLedger + ?Sized> TransferBatch<'a, T> {
    pub(crate) fn new(tokens: &'a T, pool: Address) -> Self {
        Self {
            tokens,
            pool,
            applied: Vec::with_capacity(2),
            committed: false,
        }
    }

    /// Moves `amount` of `token` from `from` into the pool account.
    pub(crate) fn pull(
        &mut self,
        token: Address,
        from: Address,
        amount: Amount,
    ) -> Result<(), AmmError> {
        let prior_allowance = self.tokens.allowance(token, from, self.pool);
        if let Err(cause) = self
            .tokens
            .transfer_from(token, self.pool, from, self.pool, amount)
        {
            return Err(self.abort(cause));
        }
        self.applied.push(Movement::Pull {
            token,
            from,
            amount,
            prior_allowance,
        });
        Ok(())
    }

    /// Moves `amount` of `token` from the pool account to `to`.
    pub(crate) fn push(&mut self, token: Address, to: Address, amount: Amount) -> Result<(), AmmError> {
        if let Err(cause) = self.tokens.transfer(token, self.pool, to, amount) {
            return Err(self.abort(cause));
        }
        self.applied.push(Movement::Push { token, to, amount });
        Ok(())
    }

    /// Keeps every applied movement.
    pub(crate) fn commit(mut self) {
        self.committed = true;
    }

    /// Undoes the applied movements after `cause` and folds any
    /// compensation failures into the returned error.
    fn abort(&mut self, cause: TokenError) -> AmmError {
        let mut failures = self.rollback();
        if failures.is_empty() {
            return AmmError::Transfer(cause);
        }
        let failed = failures.len();
        let compensation = failures.swap_remove(0);
        AmmError::RollbackIncomplete {
            cause,
            compensation,
            failed,
        }
    }

    /// Undoes applied movements newest first and returns the compensations
    /// that failed, in the order they were attempted.
    fn rollback(&mut self) -> Vec<TokenError> {
        let mut failures = Vec::new();
        if !self.applied.is_empty() {
            warn!(movements = self.applied.len(), "rolling back token transfers");
        }
        while let Some(movement) = self.applied.pop() {
            match movement {
                Movement::Pull {
                    token,
                    from,
                    amount,
                    prior_allowance,
                } => {
                    if let Err(e) = self.tokens.transfer(token, self.pool, from, amount) {
                        error!(%token, %from, %amount, error = %e, "failed to return pulled tokens");
                        failures.push(e);
                        continue;
                    }
                    if !self.tokens.approve(token, from, self.pool, prior_allowance) {
                        error!(%token, %from, "failed to restore allowance");
                        failures.push(TokenError::ApprovalRefused {
                            token,
                            owner: from,
                            spender: self.pool,
                        });
                    }
                }
                Movement::Push { token, to, amount } => {
                    if let Err(e) = self.tokens.transfer(token, to, self.pool, amount) {
                        error!(%token, %to, %amount, error = %e, "failed to recover pushed tokens");
                        failures.push(e);
                    }
                }
            }
        }
        failures
    }
}

impl<T: TokenLedger + ?Sized> Drop for TransferBatch<'_, T> {
    fn drop(&mut self) {
        if !self.committed {
            // Failures are already logged and there is no caller to tell.
            self.rollback();
        }
    }
}

//! Unified error types for the SimpleSwap engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type.  Every variant is a whole-operation abort: when a pool call
//! returns an error, no reserve, position, token balance or event has been
//! changed.
//!
//! The `Display` text of the pool-level variants is fixed: front-ends match
//! on these exact strings ("Transaction expired", "Invalid tokens", ...).

use thiserror::Error;

use crate::domain::Address;

/// Crate-wide result alias.
pub type Result<T, E = AmmError> = core::result::Result<T, E>;

/// Errors produced by the pool engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// `now > deadline` at call entry.
    #[error("Transaction expired")]
    DeadlineExpired,

    /// The token arguments are not the pool's pair, or a price was
    /// requested from a pool without liquidity.
    #[error("Invalid tokens")]
    InvalidTokenPair,

    /// A swap path did not contain exactly two tokens.
    #[error("Path length must be 2")]
    PathLengthInvalid,

    /// The first path entry is not one of the pool tokens.
    #[error("Invalid input token")]
    InvalidInputToken,

    /// The second path entry is not the counterpart of the input token.
    #[error("Invalid output token")]
    InvalidOutputToken,

    /// The computed output is below the caller's minimum.
    #[error("Insufficient output amount")]
    InsufficientOutputAmount,

    /// A burn exceeds the owner's balance, or the pool has no reserves.
    #[error("Insufficient liquidity")]
    InsufficientLiquidity,

    /// A reserve adjustment would make a reserve negative.
    #[error("Insufficient reserves")]
    InsufficientReserves,

    /// The ratio-optimal token A amount is below the caller's minimum.
    #[error("Insufficient A amount")]
    InsufficientAmountA,

    /// The ratio-optimal token B amount is below the caller's minimum.
    #[error("Insufficient B amount")]
    InsufficientAmountB,

    /// A deposit would mint zero liquidity units.
    #[error("Insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A configuration value failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Checked arithmetic exceeded the 256-bit range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The token collaborator refused a transfer.
    #[error("token transfer failed: {0}")]
    Transfer(#[from] TokenError),

    /// A transfer failed and undoing the earlier movements of the same call
    /// failed too.  Pool state is unchanged, but token balances are not
    /// fully restored.
    #[error("token transfer failed: {cause}; {failed} compensating transfer(s) also failed, first: {compensation}")]
    RollbackIncomplete {
        /// The refusal that aborted the call.
        cause: TokenError,
        /// The first compensation that failed.
        compensation: TokenError,
        /// How many compensations failed.
        failed: usize,
    },
}

/// Failures reported by a [`TokenLedger`](crate::traits::TokenLedger).
///
/// These are the collaborator's own errors; the engine wraps them in
/// [`AmmError::Transfer`] rather than translating them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token address is not known to the ledger.
    #[error("unknown token {0}")]
    UnknownToken(Address),

    /// The sender does not hold enough of the token.
    #[error("insufficient balance of {token} for {owner}")]
    InsufficientBalance {
        /// Token being moved.
        token: Address,
        /// Account that lacked funds.
        owner: Address,
    },

    /// The spender was not approved for enough of the owner's tokens.
    #[error("insufficient allowance of {token} from {owner} to {spender}")]
    InsufficientAllowance {
        /// Token being moved.
        token: Address,
        /// Account whose tokens were to be pulled.
        owner: Address,
        /// Account that attempted the pull.
        spender: Address,
    },

    /// A balance would exceed the 256-bit range.
    #[error("balance overflow of {0}")]
    BalanceOverflow(Address),

    /// The ledger refused to set an allowance.
    #[error("approval of {token} from {owner} to {spender} refused")]
    ApprovalRefused {
        /// Token being approved.
        token: Address,
        /// Account granting the allowance.
        owner: Address,
        /// Account receiving the allowance.
        spender: Address,
    },
}

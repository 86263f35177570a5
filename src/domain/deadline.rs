//! Absolute call expiry.

use core::fmt;

use crate::error::AmmError;

/// An absolute Unix timestamp (seconds) after which a call is rejected.
///
/// A call is admitted while `now <= deadline`; the check happens once at
/// entry and an admitted call is never cancelled.
///
/// # Examples
///
/// ```
/// use simple_swap::domain::Deadline;
///
/// let deadline = Deadline::at(1_000);
/// assert!(deadline.check(1_000).is_ok());
/// assert!(deadline.check(1_001).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(u64);

impl Deadline {
    /// A deadline that never expires.
    pub const NEVER: Self = Self(u64::MAX);

    /// Creates a deadline at the given Unix timestamp.
    #[must_use]
    pub const fn at(timestamp: u64) -> Self {
        Self(timestamp)
    }

    /// Creates a deadline `seconds` after `now`, saturating at [`Self::NEVER`].
    #[must_use]
    pub const fn after(now: u64, seconds: u64) -> Self {
        Self(now.saturating_add(seconds))
    }

    /// Returns the timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> u64 {
        self.0
    }

    /// Returns `true` once `now` has passed the deadline.
    #[must_use]
    pub const fn is_expired(&self, now: u64) -> bool {
        now > self.0
    }

    /// Admits the call if `now <= deadline`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::DeadlineExpired`] otherwise.
    pub const fn check(&self, now: u64) -> Result<(), AmmError> {
        if self.is_expired(now) {
            return Err(AmmError::DeadlineExpired);
        }
        Ok(())
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

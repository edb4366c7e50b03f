//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Domain-level error.
///
/// Both kinds are local validation failures signaled synchronously to the
/// caller. Nothing here is retried, recovered, or downgraded; callers inspect
/// the kind and present the reason to the end user unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A supplied monetary amount, initial balance, or overdraft limit was
    /// negative (or could not be parsed as a decimal amount).
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A withdrawal would drive the balance below the permitted floor.
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),
}

impl LedgerError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn insufficient_funds(msg: impl Into<String>) -> Self {
        Self::InsufficientFunds(msg.into())
    }
}

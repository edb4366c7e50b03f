//! Append-only activity log boundary.
//!
//! The shells around the ledger keep a cosmetic text log of what happened in a
//! session. This module defines the sink abstraction plus the line formats the
//! shells use; none of it is part of the ledger's contract.

pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::FileAuditSink;
pub use in_memory::InMemoryAuditSink;
pub use r#trait::{AuditError, AuditSink};

use bankledger_core::Money;
use chrono::{DateTime, Utc};

/// Session header line: `Current Date and Time: YYYY-MM-DD HH:MM:SS`.
pub fn timestamp_line(now: DateTime<Utc>) -> String {
    format!("Current Date and Time: {}", now.format("%Y-%m-%d %H:%M:%S"))
}

/// Balance line: `Current Balance: $%.2f`.
pub fn balance_line(balance: Money) -> String {
    format!("Current Balance: {balance}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_line_matches_the_log_format() {
        let now = Utc.with_ymd_and_hms(2026, 8, 7, 14, 30, 5).unwrap();
        assert_eq!(
            timestamp_line(now),
            "Current Date and Time: 2026-08-07 14:30:05"
        );
    }

    #[test]
    fn balance_line_renders_two_decimals() {
        assert_eq!(
            balance_line(Money::from_cents(130_000)),
            "Current Balance: $1300.00"
        );
        assert_eq!(
            balance_line(Money::from_cents(-10_000)),
            "Current Balance: $-100.00"
        );
    }
}

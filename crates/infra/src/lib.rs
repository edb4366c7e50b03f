//! Infrastructure layer: boundary collaborators around the account domain.

pub mod audit;

pub use audit::{AuditError, AuditSink, FileAuditSink, InMemoryAuditSink};

use thiserror::Error;

/// Failure while appending to an audit sink.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("failed to append to audit log: {0}")]
    Io(#[from] std::io::Error),
}

/// Append-only text sink for session activity lines.
///
/// Implementations make no ordering or durability promises beyond "lines come
/// back in the order they were appended". The ledger itself never depends on
/// this; it exists for the caller-facing shells.
pub trait AuditSink {
    fn append(&mut self, line: &str) -> Result<(), AuditError>;
}

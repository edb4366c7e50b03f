//! Tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, format).
pub mod tracing;

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

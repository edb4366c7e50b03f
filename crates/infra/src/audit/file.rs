use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::audit::r#trait::{AuditError, AuditSink};

/// Appends activity lines to a plain-text file (`log.txt` by convention),
/// creating it on first use.
///
/// The file is opened per append, so a sink can sit idle across a long session
/// without holding the handle.
#[derive(Debug)]
pub struct FileAuditSink {
    path: PathBuf,
}

impl FileAuditSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditSink {
    fn append(&mut self, line: &str) -> Result<(), AuditError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines_across_reopens() {
        let path = std::env::temp_dir().join(format!("bankledger-audit-{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);

        let mut sink = FileAuditSink::new(&path);
        sink.append("Current Date and Time: 2026-08-07 14:30:05")
            .unwrap();
        sink.append("Current Balance: $1300.00").unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "Current Date and Time: 2026-08-07 14:30:05\nCurrent Balance: $1300.00\n"
        );

        std::fs::remove_file(&path).unwrap();
    }
}

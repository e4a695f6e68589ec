use crate::literal::LiteralError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the record-to-curve pipeline.
///
/// Every variant is fatal for the run: processing stops at the first bad
/// line and nothing is retried or skipped.
#[derive(Debug, Error)]
pub enum TableError {
    /// Input file missing or unreadable.
    #[error("failed to read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token on a data line is not a valid integer literal.
    #[error("line {line}: invalid integer literal '{token}': {reason}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        reason: LiteralError,
    },

    /// A non-comment line with fewer than two fields (including blank lines).
    #[error("line {line}: expected at least 2 fields, found {found}")]
    ShortRecord { line: usize, found: usize },

    /// The curve formula is undefined for the record's raw value.
    #[error("line {line}: curve undefined for raw value {value}")]
    Domain { line: usize, value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_display() {
        let err = TableError::FileAccess {
            path: PathBuf::from("range.dat"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("range.dat"));
    }

    #[test]
    fn test_parse_display() {
        let err = TableError::Parse {
            line: 3,
            token: "abc".to_string(),
            reason: LiteralError::InvalidDigit,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("'abc'"));
    }

    #[test]
    fn test_short_record_display() {
        let err = TableError::ShortRecord { line: 7, found: 1 };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("found 1"));
    }

    #[test]
    fn test_domain_display() {
        let err = TableError::Domain { line: 2, value: -5 };
        let msg = err.to_string();
        assert!(msg.contains("line 2"));
        assert!(msg.contains("-5"));
    }
}

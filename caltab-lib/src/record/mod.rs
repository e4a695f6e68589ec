use crate::error::TableError;
use crate::literal;
use serde::Serialize;

/// One parsed non-comment input line: an ordered tuple of integer fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub fields: Vec<i64>,
    pub line: usize,
}

impl Record {
    #[must_use]
    pub fn new(fields: Vec<i64>, line: usize) -> Self {
        Record { fields, line }
    }

    /// Parse one data line into a record
    ///
    /// Splits on ASCII whitespace and parses every token as a
    /// base-autodetected integer literal. A record needs at least two
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Parse` for a malformed token and
    /// `TableError::ShortRecord` for a blank line or a line with fewer
    /// than two fields.
    pub fn parse(line: usize, text: &str) -> Result<Self, TableError> {
        let mut fields = Vec::new();
        for token in text.split_whitespace() {
            let value = literal::parse_auto(token).map_err(|reason| TableError::Parse {
                line,
                token: token.to_string(),
                reason,
            })?;
            fields.push(value);
        }

        if fields.len() < 2 {
            return Err(TableError::ShortRecord {
                line,
                found: fields.len(),
            });
        }

        Ok(Record { fields, line })
    }

    /// First field: the channel/index column
    #[must_use]
    pub fn channel(&self) -> i64 {
        self.fields[0]
    }

    /// Second field: the raw control value fed to the curve
    #[must_use]
    pub fn raw(&self) -> i64 {
        self.fields[1]
    }

    #[must_use]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }
}

/// A line is a comment when its first character is `#`
///
/// The first character exactly: indented `#` does not count, matching the
/// observed data format.
#[must_use]
pub fn is_comment(text: &str) -> bool {
    text.starts_with('#')
}

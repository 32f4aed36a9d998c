//! Error types for the phone extraction library.
//!
//! Only registry loading can fail. Normalization, scanning, and validation
//! are pure functions of their input and never error: malformed candidate
//! input is a normal `false`/empty-result case.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for phonedig operations.
pub type PhonedigResult<T> = Result<T, PhonedigError>;

/// Error type for registry construction.
#[derive(Debug, Error)]
pub enum PhonedigError {
    /// The area code source could not be read.
    #[error("failed to read area code table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record in the area code source did not parse.
    #[error("malformed area code record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PhonedigError::MalformedRecord {
            line: 7,
            reason: "expected 6 tab-separated fields, got 2".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed area code record at line 7: expected 6 tab-separated fields, got 2"
        );
    }
}

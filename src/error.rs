//! Error types for contact-intervals

use thiserror::Error;

/// Result type alias for contact-intervals operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for contact-intervals
#[derive(Error, Debug)]
pub enum Error {
    /// An input line that is not a well-formed contact record
    #[error("Parse error on line {line}: malformed {field} in {content:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// Name of the field that failed to parse
        field: &'static str,
        /// The offending line
        content: String,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal state that the pipeline guarantees can never occur
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::Parse {
            line: 3,
            field: "time",
            content: "x\t1\t2\ta\tb".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error on line 3: malformed time in \"x\\t1\\t2\\ta\\tb\""
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Error types for truth-table ingestion and canonicalization.

use std::fmt;
use std::io;

use crate::term::Minterm;

/// Errors raised while reading truth-table text.
///
/// Ingestion aborts on the first of these; no partial table is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The `.i` directive is missing
    MissingInputCount,
    /// The value of the `.i` directive is not a number
    InvalidInputCount {
        /// The offending value
        value: String,
    },
    /// A pattern does not have exactly `.i` characters
    PatternLengthMismatch {
        /// 1-based line number
        line: usize,
        /// Declared variable count
        expected: usize,
        /// Length of the pattern on that line
        actual: usize,
    },
    /// A pattern contains a character other than `0`, `1` or `-`
    InvalidPatternCharacter {
        /// 1-based line number
        line: usize,
        /// The invalid character
        character: char,
        /// Position in the pattern
        position: usize,
    },
    /// `.ilb` lists a different number of names than `.i` declares
    LabelCountMismatch {
        /// Declared variable count
        expected: usize,
        /// Number of names provided
        actual: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingInputCount => write!(f, "missing .i directive"),
            Self::InvalidInputCount { value } => {
                write!(f, "invalid .i directive value: '{value}'")
            }
            Self::PatternLengthMismatch {
                line,
                expected,
                actual,
            } => write!(
                f,
                "line {line}: pattern has {actual} characters, expected {expected}"
            ),
            Self::InvalidPatternCharacter {
                line,
                character,
                position,
            } => write!(
                f,
                "line {line}: invalid pattern character '{character}' at position {position}"
            ),
            Self::LabelCountMismatch { expected, actual } => write!(
                f,
                ".ilb lists {actual} names, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for FormatError {}

impl From<FormatError> for io::Error {
    fn from(err: FormatError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// The main error type of the crate.
#[derive(Debug)]
pub enum Error {
    /// Malformed truth-table text
    Format(FormatError),
    /// The variable count exceeds the configured ceiling
    TooManyVariables {
        /// Declared variable count
        count: usize,
        /// Configured ceiling
        limit: usize,
    },
    /// The greedy cover could not cover the remaining required minterms.
    ///
    /// This is an internal invariant violation: every required minterm is
    /// covered by at least its own prime implicant.
    UncoverableResidual {
        /// The required minterms left uncovered
        remaining: Vec<Minterm>,
    },
    /// IO error while reading input or writing output
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => write!(f, "format error: {e}"),
            Self::TooManyVariables { count, limit } => write!(
                f,
                "{count} variables exceed the configured limit of {limit}"
            ),
            Self::UncoverableResidual { remaining } => write!(
                f,
                "no prime implicant covers the remaining minterms {remaining:?}"
            ),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Format(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::TooManyVariables { .. } | Self::UncoverableResidual { .. } => None,
        }
    }
}

impl From<FormatError> for Error {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_length_message() {
        let err = FormatError::PatternLengthMismatch {
            line: 4,
            expected: 3,
            actual: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("expected 3"));
    }

    #[test]
    fn test_format_error_wraps() {
        let err: Error = FormatError::MissingInputCount.into();
        assert!(matches!(err, Error::Format(FormatError::MissingInputCount)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_residual_is_distinct() {
        let err = Error::UncoverableResidual {
            remaining: vec![3, 5],
        };
        assert!(!matches!(err, Error::Format(_)));
        assert!(err.to_string().contains("[3, 5]"));
    }

    #[test]
    fn test_format_error_to_io_error() {
        let io_err: io::Error = FormatError::MissingInputCount.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}

//! Error types for predicate checks and chains.

use std::fmt;

/// Errors raised by tests, chain construction and chain resolution.
///
/// # Examples
///
/// ```rust
/// use typo::{is, TypoError, Value};
///
/// match is::empty(&Value::from(5)) {
///     Err(TypoError::InvalidArgument { message }) => {
///         assert!(message.contains("empty"));
///     }
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypoError {
    /// A test or constructor was handed a value it cannot work with.
    InvalidArgument {
        /// What was wrong with the argument.
        message: String,
    },
    /// The operation is not available on this kind of chain.
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Why it is rejected.
        reason: &'static str,
    },
    /// A chain resolved to failure and no fallback was supplied.
    ChainFailed,
}

impl TypoError {
    /// Create an `InvalidArgument` error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        TypoError::InvalidArgument {
            message: message.into(),
        }
    }

    /// Returns `true` for `InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, TypoError::InvalidArgument { .. })
    }

    /// Returns `true` for `UnsupportedOperation`.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, TypoError::UnsupportedOperation { .. })
    }

    /// Returns `true` for `ChainFailed`.
    pub fn is_chain_failure(&self) -> bool {
        matches!(self, TypoError::ChainFailed)
    }
}

impl fmt::Display for TypoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypoError::InvalidArgument { message } => write!(f, "invalid argument: {}", message),
            TypoError::UnsupportedOperation { operation, reason } => {
                write!(f, "unsupported operation `{}`: {}", operation, reason)
            }
            TypoError::ChainFailed => f.write_str("typo: chain failed"),
        }
    }
}

impl std::error::Error for TypoError {}

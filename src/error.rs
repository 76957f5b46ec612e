//! Error types for decoding and value access.
//!
//! Decoding failures and accessor failures travel through the same [`Error`]
//! type so callers only deal with one channel.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: a character that cannot start or continue the construct
//!   being parsed, with line/column information
//! - **Unexpected End of Input**: the document stopped inside a string, array,
//!   inline table, table header or before a value
//! - **Recursion Limit**: arrays or inline tables nested deeper than allowed
//! - **Access Errors**: type mismatch, missing key, or index out of range on a
//!   decoded [`Value`](crate::Value)
//!
//! ## Examples
//!
//! ```rust
//! use serde_minitoml::{decode, Error};
//!
//! let err = decode("key = \"unterminated").unwrap_err();
//! assert!(err.is_eof());
//!
//! let root = decode("name = \"minitoml\"").unwrap();
//! let err = root.get("missing").unwrap_err();
//! assert!(matches!(err, Error::KeyNotFound(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents every failure the decoder or the value accessors can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A character that is not valid at this point of the document
    #[error("Syntax error at line {line}, column {col}: {msg}")]
    Syntax { line: usize, col: usize, msg: String },

    /// Input ended while a construct was still open
    #[error("Unexpected end of input at line {line}, column {col}: {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// Arrays or inline tables nested deeper than the configured limit
    #[error("Recursion limit of {limit} exceeded at line {line}, column {col}")]
    RecursionLimit {
        line: usize,
        col: usize,
        limit: usize,
    },

    /// An accessor was called on the wrong variant
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Table lookup of a key that is not present
    #[error("Key not found: {0}")]
    KeyNotFound(String),

    /// Array access past the last element
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at the given position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_minitoml::Error;
    ///
    /// let err = Error::syntax(3, 7, "bad value start");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an end-of-input error naming what the decoder was waiting for.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    pub fn recursion_limit(line: usize, col: usize, limit: usize) -> Self {
        Error::RecursionLimit { line, col, limit }
    }

    /// Creates a type mismatch error for a wrong-variant accessor call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_minitoml::Error;
    ///
    /// let err = Error::type_mismatch("integer", "string");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for malformed input that is not just truncated.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }

    /// Returns `true` if the input ended too early.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::UnexpectedEof { .. })
    }

    /// Position of a decode-time error, `None` for accessor errors.
    #[must_use]
    pub fn line_col(&self) -> Option<(usize, usize)> {
        match self {
            Error::Syntax { line, col, .. }
            | Error::UnexpectedEof { line, col, .. }
            | Error::RecursionLimit { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

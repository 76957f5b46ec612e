//! Configuration options for decoding.
//!
//! This module provides [`DecodeOptions`], passed to
//! [`decode_with_options`](crate::decode_with_options). The defaults accept
//! exactly the syntax [`decode`](crate::decode) accepts.
//!
//! ## Examples
//!
//! ```rust
//! use serde_minitoml::{decode_with_options, DecodeOptions};
//!
//! // Accept `true` / `false` as values
//! let options = DecodeOptions::new().with_bool_literals(true);
//! let root = decode_with_options("debug = true", &options).unwrap();
//! assert!(root.get("debug").unwrap().as_bool().unwrap());
//!
//! // Refuse deeply nested arrays
//! let options = DecodeOptions::new().with_max_depth(2);
//! assert!(decode_with_options("a = [[[1]]]", &options).is_err());
//! ```

/// Default limit on nested arrays and inline tables.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for the decoder.
///
/// # Examples
///
/// ```rust
/// use serde_minitoml::DecodeOptions;
///
/// let options = DecodeOptions::new();
/// assert_eq!(options.max_depth, 128);
/// assert!(!options.bool_literals);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeOptions {
    /// Maximum nesting of arrays and inline tables.
    pub max_depth: usize,
    /// Whether a value starting with `t` or `f` is read as a boolean literal.
    /// When disabled such a value is rejected as a bad value start.
    pub bool_literals: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            bool_literals: false,
        }
    }
}

impl DecodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the nesting limit for arrays and inline tables.
    ///
    /// A document nested deeper fails with
    /// [`Error::RecursionLimit`](crate::Error::RecursionLimit).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_bool_literals(mut self, enabled: bool) -> Self {
        self.bool_literals = enabled;
        self
    }
}

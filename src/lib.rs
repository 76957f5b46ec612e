//! # serde_minitoml
//!
//! A small, single-pass decoder for a strict subset of TOML.
//!
//! ## What does it read?
//!
//! Top-level `key = value` pairs, `[name]` table headers, `#` comments,
//! double-quoted strings, unsigned integers, arrays and inline tables. The
//! exact grammar, including its deliberate gaps, is described in
//! [`syntax`].
//!
//! ## Key Features
//!
//! - **Single Pass**: one character of lookahead, no backtracking
//! - **Typed Tree**: decoded documents are a closed [`Value`] enum with
//!   accessors that fail loudly on the wrong variant
//! - **Serde Compatible**: decode straight into your own types with
//!   [`from_str`]
//! - **Bounded Nesting**: a configurable depth limit keeps hostile input
//!   from exhausting the stack
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_minitoml::decode;
//!
//! let doc = r#"
//! title = "example" # a comment
//!
//! [owner]
//! name = "Tom"
//! ids = [1, 2, 3]
//! "#;
//!
//! let root = decode(doc).unwrap();
//! assert_eq!(root.get("title").unwrap().as_str().unwrap(), "example");
//!
//! let owner = root.get("owner").unwrap();
//! assert_eq!(owner.get("ids").unwrap().at(2).unwrap().as_integer().unwrap(), 3);
//! ```
//!
//! ### Deserializing into structs
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_minitoml::from_str;
//!
//! #[derive(Deserialize, PartialEq, Debug)]
//! struct Owner { name: String, ids: Vec<u32> }
//!
//! #[derive(Deserialize, PartialEq, Debug)]
//! struct Doc { title: String, owner: Owner }
//!
//! let doc: Doc = from_str("title = \"t\"\n[owner]\nname = \"Tom\"\nids = [1]").unwrap();
//! assert_eq!(doc.owner.name, "Tom");
//! ```
//!
//! ## Logging
//!
//! The decoder emits [`tracing`] events (`debug` for overwritten keys and
//! failed decodes, `trace` for table headers). Install any subscriber to see
//! them; the crate never installs one itself.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Decoding either returns a complete tree or an [`Error`]; never a partial
//!   tree
//! - No panics in the public API

pub mod de;
pub mod decoder;
pub mod error;
pub mod map;
pub mod options;
pub mod scanner;
pub mod syntax;
pub mod value;

pub use de::ValueDeserializer;
pub use decoder::Decoder;
pub use error::{Error, Result};
pub use map::Table;
pub use options::DecodeOptions;
pub use value::Value;

use serde::Deserialize;
use tracing::debug;

/// Decode a document into its root table.
///
/// # Examples
///
/// ```rust
/// use serde_minitoml::decode;
///
/// let root = decode("").unwrap();
/// assert!(root.is_empty());
///
/// assert!(decode("key = ").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the document is malformed or ends inside a construct.
/// Error messages include line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode(text: &str) -> Result<Table> {
    decode_with_options(text, &DecodeOptions::default())
}

/// Decode a document with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_minitoml::{decode_with_options, DecodeOptions};
///
/// let options = DecodeOptions::new().with_bool_literals(true);
/// let root = decode_with_options("enabled = false", &options).unwrap();
/// assert!(!root.get("enabled").unwrap().as_bool().unwrap());
/// ```
///
/// # Errors
///
/// Returns an error if the document is malformed, ends inside a construct,
/// or nests deeper than `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn decode_with_options(text: &str, options: &DecodeOptions) -> Result<Table> {
    let result = Decoder::with_options(text, options.clone()).decode();
    if let Err(err) = &result {
        debug!(error = %err, "decode failed");
    }
    result
}

/// Deserialize an instance of type `T` from a document.
///
/// # Examples
///
/// ```rust
/// use serde_minitoml::from_str;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the document cannot be decoded or the tree does not
/// fit type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    from_str_with_options(text, &DecodeOptions::default())
}

/// Deserialize an instance of type `T` from a document with custom options.
///
/// # Errors
///
/// Returns an error if the document cannot be decoded or the tree does not
/// fit type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options<T>(text: &str, options: &DecodeOptions) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let root = decode_with_options(text, options)?;
    T::deserialize(ValueDeserializer::new(Value::Table(root)))
}

/// Deserialize an instance of type `T` from the bytes of a document.
///
/// # Examples
///
/// ```rust
/// use serde_minitoml::from_slice;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_slice(b"x = 1\ny = 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, cannot be decoded,
/// or do not fit type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

//! Decoded value tree.
//!
//! This module provides the [`Value`] enum, the closed set of node types the
//! decoder produces. Every accessor exists on every variant but only succeeds
//! on its own one; the others fail with [`Error::TypeMismatch`] so that a
//! wrong assumption about the document's shape is reported instead of being
//! silently defaulted.
//!
//! ## Core Types
//!
//! - [`Value`]: a table, array, string, integer or boolean
//! - [`Table`](crate::Table): the insertion-ordered map behind `Value::Table`
//!
//! ## Usage Patterns
//!
//! ### Walking a decoded document
//!
//! ```rust
//! use serde_minitoml::decode;
//!
//! let root = decode("[server]\nports = [8080, 8081]\n").unwrap();
//! let ports = root.get("server").unwrap().get("ports").unwrap();
//!
//! assert_eq!(ports.at(1).unwrap().as_integer().unwrap(), 8081);
//! assert!(ports.at(2).is_err());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use serde_minitoml::Value;
//!
//! let value = Value::from(42);
//! let num = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::{Error, Result, Table};
use serde::{Serialize, Serializer};

/// A node of the decoded tree.
///
/// Containers own their children exclusively, so a decoded tree is acyclic
/// and is torn down by ordinary recursive drop.
///
/// # Examples
///
/// ```rust
/// use serde_minitoml::Value;
///
/// let text = Value::from("hello");
/// assert!(text.is_string());
/// assert_eq!(text.as_str().unwrap(), "hello");
/// assert!(text.as_integer().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Table(Table),
    Array(Vec<Value>),
    String(String),
    Integer(i64),
    Bool(bool),
}

impl Value {
    /// Name of the variant, as used in type mismatch errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Table(_) => "table",
            Value::Array(_) => "array",
            Value::String(_) => "string",
            Value::Integer(_) => "integer",
            Value::Bool(_) => "bool",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    fn mismatch(&self, expected: &str) -> Error {
        Error::type_mismatch(expected, self.type_name())
    }

    /// Borrows the value as a table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a table.
    pub fn as_table(&self) -> Result<&Table> {
        match self {
            Value::Table(table) => Ok(table),
            _ => Err(self.mismatch("table")),
        }
    }

    /// Looks up `key` in a table value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_minitoml::{decode, Error};
    ///
    /// let root = decode("owner = { name = \"Tom\" }").unwrap();
    /// let owner = root.get("owner").unwrap();
    /// assert_eq!(owner.get("name").unwrap().as_str().unwrap(), "Tom");
    /// assert!(matches!(owner.get("dob"), Err(Error::KeyNotFound(_))));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a table and
    /// [`Error::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.as_table()?.get(key)
    }

    /// Borrows the value as a slice of array elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an array.
    pub fn as_array(&self) -> Result<&[Value]> {
        match self {
            Value::Array(items) => Ok(items),
            _ => Err(self.mismatch("array")),
        }
    }

    /// Returns the array element at `index` (0-based).
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an array and
    /// [`Error::IndexOutOfRange`] if `index` is past the end.
    pub fn at(&self, index: usize) -> Result<&Value> {
        let items = self.as_array()?;
        items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, items.len()))
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a string.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(s) => Ok(s),
            _ => Err(self.mismatch("string")),
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not an integer.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Value::Integer(i) => Ok(*i),
            _ => Err(self.mismatch("integer")),
        }
    }

    /// Floats are never produced by the decoder, so this always fails.
    ///
    /// # Errors
    ///
    /// Always returns [`Error::TypeMismatch`].
    pub fn as_float(&self) -> Result<f64> {
        Err(self.mismatch("float"))
    }

    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the value is not a boolean.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(self.mismatch("bool")),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Table(table) => table.serialize(serializer),
            Value::Array(items) => items.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_integer()
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value.as_bool()
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

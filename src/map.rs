//! Ordered map type for decoded tables.
//!
//! This module provides [`Table`], a wrapper around [`IndexMap`] that keeps
//! keys in the order the decoder first saw them. Re-assigning an existing key
//! replaces the value in place, so iteration order stays deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use serde_minitoml::{Table, Value};
//!
//! let mut table = Table::new();
//! table.insert("name".to_string(), Value::from("minitoml"));
//! table.insert("port".to_string(), Value::from(8080));
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("port").unwrap().as_integer().unwrap(), 8080);
//! assert!(table.get("host").is_err());
//! ```

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Error, Result, Value};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table(IndexMap<String, Value>);

impl Table {
    /// Creates an empty `Table`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_minitoml::Table;
    ///
    /// let table = Table::new();
    /// assert!(table.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Table(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Table(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the table.
    ///
    /// If the table already contained this key, the value is replaced at its
    /// original position and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_minitoml::{Table, Value};
    ///
    /// let mut table = Table::new();
    /// assert!(table.insert("key".to_string(), Value::from(1)).is_none());
    /// assert_eq!(table.insert("key".to_string(), Value::from(2)), Some(Value::from(1)));
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.0.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns the value stored under `key`, or `None` if it is absent.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl IntoIterator for Table {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Table {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Table(IndexMap::from_iter(iter))
    }
}

impl Serialize for Table {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_keeps_position() {
        let mut table = Table::new();
        table.insert("a".to_string(), Value::from(1));
        table.insert("b".to_string(), Value::from(2));
        table.insert("a".to_string(), Value::from(3));

        let keys: Vec<&String> = table.keys().collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(table.get("a").unwrap(), &Value::from(3));
    }

    #[test]
    fn test_from_iterator() {
        let table: Table = vec![
            ("x".to_string(), Value::from(1)),
            ("y".to_string(), Value::from("two")),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert!(table.contains_key("y"));
        assert!(!table.contains_key("z"));
        assert!(table.find("z").is_none());
        assert_eq!(table.get("z").unwrap_err(), Error::key_not_found("z"));
    }
}

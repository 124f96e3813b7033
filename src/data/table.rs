//! Insertion-ordered string-keyed table

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// A small map that keeps entries in the order they were first inserted.
///
/// Crop and district tables rely on this: ranking ties are broken by the
/// order entries appear in the source document.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedTable<V> {
    entries: Vec<(String, V)>,
}

impl<V> OrderedTable<V> {
    /// Creates an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, replacing in place if the key already exists
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Case-sensitive lookup
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for OrderedTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedTable<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

impl<V: Serialize> Serialize for OrderedTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedTableVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedTableVisitor<V> {
    type Value = OrderedTable<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = OrderedTable::new();
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            table.insert(key, value);
        }
        Ok(table)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedTable<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedTableVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut table = OrderedTable::new();
        table.insert("Rice", 1);
        table.insert("Wheat", 2);
        table.insert("Rice", 3);

        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec!["Rice", "Wheat"]);
        assert_eq!(table.get("Rice"), Some(&3));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = OrderedTable::new().with("Rice", 450.0);
        assert!(table.contains_key("Rice"));
        assert!(!table.contains_key("rice"));
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let json = r#"{"Wheat": 1, "Cotton": 2, "Rice": 3}"#;
        let table: OrderedTable<u32> = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec!["Wheat", "Cotton", "Rice"]);

        let back = serde_json::to_string(&table).unwrap();
        assert_eq!(back, r#"{"Wheat":1,"Cotton":2,"Rice":3}"#);
    }
}

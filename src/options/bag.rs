//! Ordered option containers.
//!
//! [`OptionBag`] is the flat keyed collection build steps pass to each
//! other. Every value is an `Option<V>`: `None` is the explicit "absent"
//! sentinel, which is distinct from the key not being present at all.
//!
//! [`ExtractedOptions`] is the re-keyed subset produced by
//! [`extract_prefixed_options`](super::extract_prefixed_options).
//!
//! Both containers keep insertion order. Inserting an existing key replaces
//! the value in place and keeps the original position.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Flat, ordered option bag.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionBag<V = Value> {
    entries: Vec<(String, Option<V>)>,
}

impl<V> Default for OptionBag<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OptionBag<V> {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value if the key existed.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<V>) -> Option<Option<V>> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: Option<V>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a key. The outer `Option` is key presence, the inner one the value.
    pub fn get(&self, key: &str) -> Option<Option<&V>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_ref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&V>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Method form of [`extract_prefixed_options`](super::extract_prefixed_options).
    pub fn extract(&self, prefix: impl AsRef<str>) -> ExtractedOptions<V>
    where
        V: Clone,
    {
        super::extract_prefixed_options(Some(self), prefix)
    }
}

impl<K: Into<String>, V> FromIterator<(K, Option<V>)> for OptionBag<V> {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

impl<V> Extend<(String, Option<V>)> for OptionBag<V> {
    fn extend<I: IntoIterator<Item = (String, Option<V>)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl From<serde_json::Map<String, Value>> for OptionBag {
    /// JSON `null` becomes the absent sentinel.
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| match value {
                Value::Null => (key, None),
                value => (key, Some(value)),
            })
            .collect()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OptionBag<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BagVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for BagVisitor<V> {
            type Value = OptionBag<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of option names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut bag = OptionBag::new();
                while let Some((key, value)) = access.next_entry::<String, Option<V>>()? {
                    bag.insert(key, value);
                }
                Ok(bag)
            }
        }

        deserializer.deserialize_map(BagVisitor(PhantomData))
    }
}

/// Symbolic key of an extracted option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OptionKey(String);

impl OptionKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OptionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OptionKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for OptionKey {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for OptionKey {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl PartialEq<str> for OptionKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for OptionKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered mapping of extracted options, keyed by [`OptionKey`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedOptions<V = Value> {
    entries: Vec<(OptionKey, V)>,
}

impl<V> Default for ExtractedOptions<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> ExtractedOptions<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: OptionKey, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&OptionKey, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<V> IntoIterator for ExtractedOptions<V> {
    type Item = (OptionKey, V);
    type IntoIter = std::vec::IntoIter<(OptionKey, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<OptionKey>, V> FromIterator<(K, V)> for ExtractedOptions<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut extracted = Self::new();
        for (key, value) in iter {
            extracted.insert(key.into(), value);
        }
        extracted
    }
}

impl<V: Serialize> Serialize for ExtractedOptions<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

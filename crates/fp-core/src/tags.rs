//! Raw OpenStreetMap key/value attributes.
//!
//! `Tags` is what arrives from the data source, untouched.  Interpretation
//! into typed facts happens once, in `fp-tags`; nothing past that boundary
//! should be matching on raw strings.

use std::collections::BTreeMap;

/// Values that make an otherwise-present tag read as "not set".
const FALSY_VALUES: [&str; 4] = ["no", "none", "false", "0"];

/// An ordered key/value map.  `BTreeMap` keeps iteration (and therefore
/// diagnostics and serialization) deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tags(BTreeMap<String, String>);

impl Tags {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `true` if `key` is present with exactly `value`.
    #[inline]
    pub fn is(&self, key: &str, value: &str) -> bool {
        self.get(key) == Some(value)
    }

    /// `true` if `key` is present with any of `values`.
    #[inline]
    pub fn is_any(&self, key: &str, values: &[&str]) -> bool {
        self.get(key).is_some_and(|v| values.contains(&v))
    }

    /// `true` if `key` is present and not a negative token (`no`, `none`, …).
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !FALSY_VALUES.contains(&v))
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert only if `key` is absent.  Explicit tags always win over defaults.
    pub fn insert_default(&mut self, key: &str, value: &str) {
        self.0.entry(key.to_owned()).or_insert_with(|| value.to_owned());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Tags {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Tags {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

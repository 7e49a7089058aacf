//! Typed access to untyped front matter.
//!
//! [`FrontMatter`] wraps a YAML mapping. Fields are read through accessors
//! that return `None` when a key is missing *or* holds a value of the wrong
//! kind, so callers pick their own defaults per field.
//!
//! Keys may be dotted paths (`"assets.path"`): a literal key with the full
//! name wins, otherwise each segment descends into a nested mapping.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::ParseError;
use crate::yaml::parse_yaml_map;

/// Parsed front matter: an ordered YAML mapping with typed accessors.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter(Mapping);

impl FrontMatter {
    /// Parse a standalone YAML document (e.g. an `<id>.yaml` override).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the YAML is malformed or its root is not a mapping.
    pub fn from_yaml(content: &str) -> Result<Self, ParseError> {
        parse_yaml_map(content).map(Self)
    }

    /// Check if no keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a value by key or dotted path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.0.get(path) {
            return Some(value);
        }
        let (head, tail) = path.split_once('.')?;
        let mut current = self.0.get(head)?;
        for segment in tail.split('.') {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }

    /// Check if a key is present, whatever its value.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// String value, or `None` if missing or not a string.
    #[must_use]
    pub fn string(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Like [`string`](Self::string), but empty strings count as missing.
    #[must_use]
    pub fn non_empty_string(&self, path: &str) -> Option<&str> {
        self.string(path).filter(|s| !s.is_empty())
    }

    /// Boolean value, or `None` if missing or not a boolean.
    #[must_use]
    pub fn bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }

    /// List of strings, or `None` if missing, not a sequence, or any element
    /// is not a string.
    #[must_use]
    pub fn string_list(&self, path: &str) -> Option<Vec<String>> {
        self.get(path)?
            .as_sequence()?
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect()
    }

    /// List of mappings, or `None` if missing or not a sequence.
    ///
    /// Elements that are not mappings are skipped.
    #[must_use]
    pub fn mappings(&self, path: &str) -> Option<Vec<&Mapping>> {
        let items = self.get(path)?.as_sequence()?;
        Some(items.iter().filter_map(Value::as_mapping).collect())
    }

    /// Nested mapping, or `None` if missing or not a mapping.
    #[must_use]
    pub fn mapping(&self, path: &str) -> Option<&Mapping> {
        self.get(path).and_then(Value::as_mapping)
    }

    /// Recursively merge `overrides` on top of `self`.
    ///
    /// Keys present only on one side are kept. When both sides hold a
    /// mapping under the same key the mappings are merged key by key;
    /// any other collision is won by `overrides` wholesale (sequences are
    /// replaced, not concatenated).
    #[must_use]
    pub fn merged(mut self, overrides: FrontMatter) -> FrontMatter {
        merge_mappings(&mut self.0, overrides.0);
        self
    }

    /// Copy of the top-level mapping without the given keys.
    #[must_use]
    pub fn without_keys(&self, keys: &[&str]) -> Mapping {
        self.0
            .iter()
            .filter(|(key, _)| !key.as_str().is_some_and(|k| keys.contains(&k)))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Borrow the underlying mapping.
    #[must_use]
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Consume into the underlying mapping.
    #[must_use]
    pub fn into_mapping(self) -> Mapping {
        self.0
    }
}

impl From<Mapping> for FrontMatter {
    fn from(map: Mapping) -> Self {
        Self(map)
    }
}

/// Merge `overrides` into `base` in place, recursing into nested mappings.
pub(crate) fn merge_mappings(base: &mut Mapping, overrides: Mapping) {
    for (key, value) in overrides {
        if let Value::Mapping(incoming) = value {
            if let Some(Value::Mapping(existing)) = base.get_mut(&key) {
                merge_mappings(existing, incoming);
            } else {
                base.insert(key, Value::Mapping(incoming));
            }
        } else {
            base.insert(key, value);
        }
    }
}

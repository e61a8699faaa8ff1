//! Resolved substitution parameters
//!
//! A `ParameterSet` is assembled from layered sources (template context,
//! param file, explicit `-p` flags) and is read-only once built.

use std::collections::BTreeMap;

/// Mapping from placeholder name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterSet {
    values: BTreeMap<String, String>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a new set with `entries` applied on top (later entries win)
    pub fn layered<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in entries {
            self.values.insert(k.into(), v.into());
        }
        self
    }

    /// Return a new set where `defaults` only fill keys not already present
    pub fn with_defaults<I, K, V>(mut self, defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in defaults {
            self.values.entry(k.into()).or_insert_with(|| v.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Error for a `-p` token that is not `key=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamParseError(pub String);

impl std::fmt::Display for ParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "expected KEY=VALUE, got '{}'", self.0)
    }
}

impl std::error::Error for ParamParseError {}

/// A single explicit `key=value` parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    pub value: String,
}

impl std::str::FromStr for Param {
    type Err = ParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            None => Err(ParamParseError(s.to_string())),
        }
    }
}

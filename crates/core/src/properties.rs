//! Harness properties
//!
//! Bindings are configured through flat string properties, the same
//! `key=value` form the harness reads from its workload and `-p` flags.
//! The loader accepts the common subset of Java properties files: one
//! `key=value` (or `key:value`) pair per line, `#` and `!` comments, blank
//! lines ignored, surrounding whitespace trimmed.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::error::{DbError, Result};

/// String-keyed configuration passed to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse properties from text.
    pub fn parse(text: &str) -> Self {
        let mut props = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let split = line.find(|c: char| c == '=' || c == ':');
            let (key, value) = match split {
                Some(at) => (&line[..at], &line[at + 1..]),
                None => (line, ""),
            };
            props.set(key.trim(), value.trim());
        }
        props
    }

    /// Read and parse a properties file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Set a property, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Get a property value or a default.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Get a property parsed as `T`.
    ///
    /// Returns `Ok(None)` when the property is absent.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidProperty`] if the value does not parse.
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|e| DbError::InvalidProperty {
                    key: key.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no properties are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

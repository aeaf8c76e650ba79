//! Extraction path type

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered, non-empty sequence of object keys from the document root
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ExtractionPath {
    keys: Vec<String>,
}

impl ExtractionPath {
    /// Create a path, rejecting an empty key list
    pub fn new<I, S>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys: Vec<String> = keys.into_iter().map(Into::into).collect();
        if keys.is_empty() {
            return Err(Error::invalid_value(
                "path",
                "extraction path must contain at least one key",
            ));
        }
        Ok(Self { keys })
    }

    /// Path of a single top-level key
    pub fn single(key: impl Into<String>) -> Self {
        Self {
            keys: vec![key.into()],
        }
    }

    /// Extend the path by one key
    #[must_use]
    pub fn child(mut self, key: impl Into<String>) -> Self {
        self.keys.push(key.into());
        self
    }

    /// Parse a dot-separated path such as `Periodos.Conjuntos`
    pub fn parse(dotted: &str) -> Result<Self> {
        if dotted.trim().is_empty() {
            return Err(Error::invalid_value("path", "path string is empty"));
        }
        Self::new(dotted.split('.'))
    }

    /// Keys in walk order
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false for a constructed path
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Last key of the path, used to name single-column tables
    pub fn terminal_key(&self) -> &str {
        self.keys.last().map_or("", String::as_str)
    }
}

impl TryFrom<Vec<String>> for ExtractionPath {
    type Error = Error;

    fn try_from(keys: Vec<String>) -> Result<Self> {
        Self::new(keys)
    }
}

impl From<ExtractionPath> for Vec<String> {
    fn from(path: ExtractionPath) -> Self {
        path.keys
    }
}

impl fmt::Display for ExtractionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keys.join("."))
    }
}

//! Free-text search query.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A normalized free-text query.
///
/// The raw input is trimmed and lower-cased once at construction, so every
/// list view matches the same way. A blank query is inactive and matches
/// every record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Normalize a raw query string.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Whether the query constrains anything.
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    /// The normalized query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Check whether any of the given fields contains the query,
    /// ignoring case.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if !self.is_active() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for SearchQuery {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.needle)
    }
}

impl Serialize for SearchQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.needle)
    }
}

impl<'de> Deserialize<'de> for SearchQuery {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

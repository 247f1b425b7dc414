//! Request-side data model

use placeintel_common::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// A single category entry as supplied by the place provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryEntry {
    #[serde(default)]
    pub name: String,
}

/// Input place record, immutable for the duration of a request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceInput {
    #[serde(default)]
    pub name: String,

    /// Ordered; the first entry is the authoritative primary category
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,

    /// Opaque provider payload, passed through unused by the engines
    #[serde(default)]
    pub location: Value,
}

impl PlaceInput {
    /// Decode a `place` JSON value into a typed record
    ///
    /// All fields are optional; a malformed object (e.g. `categories` that is
    /// not an array) is an internal failure, not a validation error, and the
    /// whole request fails with it.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| Error::Internal(format!("malformed place object: {}", e)))
    }
}

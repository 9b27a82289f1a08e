//! Category domain models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Domain model representing a stored category row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// The closed set of categories a quote may belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryName {
    Sweet,
    Funny,
    Dark,
    Sarcastic,
}

impl CategoryName {
    pub const ALL: [CategoryName; 4] = [
        CategoryName::Sweet,
        CategoryName::Funny,
        CategoryName::Dark,
        CategoryName::Sarcastic,
    ];

    /// Canonical (stored) name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryName::Sweet => "sweet",
            CategoryName::Funny => "funny",
            CategoryName::Dark => "dark",
            CategoryName::Sarcastic => "sarcastic",
        }
    }

    /// Comma separated list of every canonical name, in declaration order.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Trims surrounding whitespace and lowercases a user supplied name.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryName {
    type Err = ValidationError;

    /// Parses after normalization; the error keeps the raw input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = Self::normalize(s);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_string()))
    }
}

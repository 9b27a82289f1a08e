//! Quote domain models.

use serde::{Deserialize, Serialize};

use crate::categories::Category;

/// Domain model representing a stored quote together with its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i32,
    pub text: String,
    pub author: Option<String>,
    pub category: Category,
}

/// Input model for persisting a new quote. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub text: String,
    pub author: Option<String>,
    pub category_id: i32,
}

/// Flattened quote shape returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDto {
    pub id: i32,
    pub text: String,
    pub author: Option<String>,
    pub category: String,
}

/// Raw creation input. Missing or null fields deserialize to `None` so that
/// validation, not the body parser, reports them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateQuoteDto {
    pub text: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

impl From<Quote> for QuoteDto {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            text: quote.text,
            author: quote.author,
            category: quote.category.name,
        }
    }
}

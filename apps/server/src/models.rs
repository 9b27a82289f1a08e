use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use quotebook_core::quotes as core_quotes;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: i32,
    pub text: String,
    pub author: Option<String>,
    /// Canonical category name.
    pub category: String,
}

impl From<core_quotes::QuoteDto> for Quote {
    fn from(q: core_quotes::QuoteDto) -> Self {
        Self {
            id: q.id,
            text: q.text,
            author: q.author,
            category: q.category,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateQuote {
    pub text: Option<String>,
    pub author: Option<String>,
    /// One of sweet, funny, dark, sarcastic (case and surrounding whitespace ignored).
    pub category: Option<String>,
}

impl From<CreateQuote> for core_quotes::CreateQuoteDto {
    fn from(c: CreateQuote) -> Self {
        Self {
            text: c.text,
            author: c.author,
            category: c.category,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct QuoteQuery {
    pub category: Option<String>,
}

//! Database models for quotes.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::categories::CategoryDB;
use quotebook_core::categories::Category;
use quotebook_core::quotes::{NewQuote, Quote};

/// Database model for quotes
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::quotes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct QuoteDB {
    pub id: i32,
    pub text: String,
    pub author: Option<String>,
    pub category_id: i32,
}

/// Database model for creating a new quote; the id is assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::quotes)]
pub struct NewQuoteDB {
    pub text: String,
    pub author: Option<String>,
    pub category_id: i32,
}

impl QuoteDB {
    /// Joins the row with its category into the domain model.
    pub fn into_domain(self, category: CategoryDB) -> Quote {
        Quote {
            id: self.id,
            text: self.text,
            author: self.author,
            category: Category::from(category),
        }
    }
}

impl From<NewQuote> for NewQuoteDB {
    fn from(domain: NewQuote) -> Self {
        Self {
            text: domain.text,
            author: domain.author,
            category_id: domain.category_id,
        }
    }
}

//! Database models for categories.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Database model for categories
#[derive(
    Queryable, Identifiable, Selectable, PartialEq, Eq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CategoryDB {
    pub id: i32,
    pub name: String,
}

impl From<CategoryDB> for quotebook_core::categories::Category {
    fn from(db: CategoryDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
        }
    }
}

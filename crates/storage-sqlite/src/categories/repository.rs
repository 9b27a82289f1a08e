use quotebook_core::categories::{Category, CategoryRepositoryTrait};
use quotebook_core::Result;

use super::model::CategoryDB;
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::categories;
use diesel::prelude::*;

use std::sync::Arc;

/// Read-only access to the seeded categories.
pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CategoryRepository { pool }
    }
}

impl CategoryRepositoryTrait for CategoryRepository {
    fn find_by_name(&self, name: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        let category_db = categories::table
            .filter(categories::name.eq(name))
            .select(CategoryDB::as_select())
            .first::<CategoryDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(category_db.map(Category::from))
    }
}

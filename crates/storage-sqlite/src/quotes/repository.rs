use quotebook_core::quotes::{NewQuote, Quote, QuoteFilter, QuoteRepositoryTrait};
use quotebook_core::Result;

use super::model::{NewQuoteDB, QuoteDB};
use crate::categories::CategoryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{categories, quotes};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;

use std::sync::Arc;

pub struct QuoteRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl QuoteRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        QuoteRepository { pool, writer }
    }
}

#[async_trait]
impl QuoteRepositoryTrait for QuoteRepository {
    fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = quotes::table
            .inner_join(categories::table)
            .select((QuoteDB::as_select(), CategoryDB::as_select()))
            .order(quotes::id.asc())
            .into_boxed();

        if let QuoteFilter::Category(name) = filter {
            query = query.filter(categories::name.eq(name.as_str()));
        }

        let rows = query
            .load::<(QuoteDB, CategoryDB)>(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Loaded {} quotes", rows.len());

        Ok(rows
            .into_iter()
            .map(|(quote_db, category_db)| quote_db.into_domain(category_db))
            .collect())
    }

    async fn insert_quote(&self, new_quote: NewQuote) -> Result<Quote> {
        let new_quote_db: NewQuoteDB = new_quote.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Quote> {
                let quote_db = diesel::insert_into(quotes::table)
                    .values(&new_quote_db)
                    .returning(QuoteDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;

                let category_db = categories::table
                    .find(quote_db.category_id)
                    .select(CategoryDB::as_select())
                    .first(conn)
                    .map_err(StorageError::from)?;

                Ok(quote_db.into_domain(category_db))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::CategoryRepository;
    use crate::db::{create_pool, init, run_migrations, write_actor::spawn_writer};
    use quotebook_core::categories::CategoryRepositoryTrait;
    use quotebook_core::Error;
    use tempfile::tempdir;

    /// Creates a migrated temp database with the writer actor running.
    /// The temp dir is returned to keep it alive for the test.
    fn create_test_repositories() -> (QuoteRepository, CategoryRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path = init(&db_path.to_string_lossy()).expect("Failed to init database");

        let pool = create_pool(&db_path).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone());

        (
            QuoteRepository::new(Arc::clone(&pool), writer),
            CategoryRepository::new(pool),
            temp_dir,
        )
    }

    fn new_quote(
        categories: &CategoryRepository,
        text: &str,
        author: Option<&str>,
        category: &str,
    ) -> NewQuote {
        let category = categories
            .find_by_name(category)
            .unwrap()
            .expect("seeded category");
        NewQuote {
            text: text.to_string(),
            author: author.map(str::to_string),
            category_id: category.id,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_returns_category() {
        let (repo, categories, _temp_dir) = create_test_repositories();

        let first = repo
            .insert_quote(new_quote(&categories, "First", Some("Ann"), "sweet"))
            .await
            .unwrap();
        let second = repo
            .insert_quote(new_quote(&categories, "Second", None, "dark"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.text, "First");
        assert_eq!(first.author.as_deref(), Some("Ann"));
        assert_eq!(first.category.name, "sweet");
        assert_eq!(second.author, None);
        assert_eq!(second.category.name, "dark");
    }

    #[tokio::test]
    async fn test_list_quotes_with_and_without_filter() {
        let (repo, categories, _temp_dir) = create_test_repositories();
        for (text, category) in [("a", "funny"), ("b", "dark"), ("c", "funny"), ("d", "sweet")] {
            repo.insert_quote(new_quote(&categories, text, None, category))
                .await
                .unwrap();
        }

        let all = repo.list_quotes(&QuoteFilter::All).unwrap();
        assert_eq!(all.len(), 4);

        let funny = repo
            .list_quotes(&QuoteFilter::Category("funny".to_string()))
            .unwrap();
        let texts: Vec<&str> = funny.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);

        assert!(repo
            .list_quotes(&QuoteFilter::Category("Funny".to_string()))
            .unwrap()
            .is_empty());
        assert!(repo
            .list_quotes(&QuoteFilter::Category("sarcastic".to_string()))
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_insert_with_unknown_category_id_is_rejected() {
        let (repo, _categories, _temp_dir) = create_test_repositories();

        let err = repo
            .insert_quote(NewQuote {
                text: "Orphan".to_string(),
                author: None,
                category_id: 9999,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Database(_)));
        assert!(repo.list_quotes(&QuoteFilter::All).unwrap().is_empty());
    }
}

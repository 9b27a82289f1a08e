use std::sync::Arc;

use crate::config::{Config, LogFormat};
use quotebook_core::quotes::{QuoteService, QuoteServiceTrait};
use quotebook_storage_sqlite::{
    categories::CategoryRepository,
    db::{self, write_actor, WriteHandle},
    quotes::QuoteRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait + Send + Sync>,
    /// Kept for readiness checks; the service holds its own clone.
    pub writer: WriteHandle,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Opens the database, applies migrations, starts the writer actor and wires
/// the repositories into the quote service.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let quote_repo = Arc::new(QuoteRepository::new(pool.clone(), writer.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool));
    let quote_service = Arc::new(QuoteService::new(quote_repo, category_repo));

    Ok(Arc::new(AppState {
        quote_service,
        writer,
    }))
}

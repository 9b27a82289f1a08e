use crate::errors::Result;
use crate::quotes::quotes_filter::QuoteFilter;
use crate::quotes::quotes_model::{CreateQuoteDto, NewQuote, Quote, QuoteDto};
use async_trait::async_trait;

/// Trait for quote repository operations
#[async_trait]
pub trait QuoteRepositoryTrait: Send + Sync {
    fn list_quotes(&self, filter: &QuoteFilter) -> Result<Vec<Quote>>;
    async fn insert_quote(&self, new_quote: NewQuote) -> Result<Quote>;
}

/// Trait for quote service operations
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    fn get_quotes(&self, category: Option<&str>) -> Result<Vec<QuoteDto>>;
    async fn create_quote(&self, input: CreateQuoteDto) -> Result<QuoteDto>;
}

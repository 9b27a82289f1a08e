use log::debug;
use std::sync::Arc;

use super::quotes_filter::QuoteFilter;
use super::quotes_model::{CreateQuoteDto, NewQuote, QuoteDto};
use super::quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};
use crate::categories::{CategoryName, CategoryRepositoryTrait};
use crate::errors::{Result, ValidationError};
use async_trait::async_trait;

/// Service for listing and creating quotes
pub struct QuoteService {
    quote_repository: Arc<dyn QuoteRepositoryTrait>,
    category_repository: Arc<dyn CategoryRepositoryTrait>,
}

impl QuoteService {
    pub fn new(
        quote_repository: Arc<dyn QuoteRepositoryTrait>,
        category_repository: Arc<dyn CategoryRepositoryTrait>,
    ) -> Self {
        QuoteService {
            quote_repository,
            category_repository,
        }
    }

    /// Returns the text and the raw category when both carry non-blank content.
    fn require_fields(input: &mut CreateQuoteDto) -> Result<(String, String)> {
        let text = input.text.take().filter(|t| !t.trim().is_empty());
        let category = input.category.take().filter(|c| !c.trim().is_empty());
        match (text, category) {
            (Some(text), Some(category)) => Ok((text, category)),
            _ => Err(ValidationError::RequiredFields.into()),
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    fn get_quotes(&self, category: Option<&str>) -> Result<Vec<QuoteDto>> {
        let filter = QuoteFilter::from_query(category);
        debug!("Listing quotes with filter {:?}", filter);
        let quotes = self.quote_repository.list_quotes(&filter)?;
        Ok(quotes.into_iter().map(QuoteDto::from).collect())
    }

    async fn create_quote(&self, mut input: CreateQuoteDto) -> Result<QuoteDto> {
        let (text, raw_category) = Self::require_fields(&mut input)?;

        let category_name: CategoryName = raw_category.parse()?;
        let category = self
            .category_repository
            .find_by_name(category_name.as_str())?
            .ok_or_else(|| ValidationError::UnknownCategory(raw_category.clone()))?;

        let new_quote = NewQuote {
            text,
            author: input.author,
            category_id: category.id,
        };
        let created = self.quote_repository.insert_quote(new_quote).await?;
        debug!(
            "Created quote {} in category '{}'",
            created.id, created.category.name
        );
        Ok(QuoteDto::from(created))
    }
}

//! Quotes module - domain models, the list filter, services, and traits.
//!
//! ```text
//! QuoteService ──► QuoteRepositoryTrait     (list / insert)
//!      │
//!      └────────► CategoryRepositoryTrait  (resolve category by name)
//! ```

mod quotes_filter;
mod quotes_model;
mod quotes_service;
mod quotes_traits;


pub use quotes_filter::{QuoteFilter, ALL_CATEGORIES};
pub use quotes_model::{CreateQuoteDto, NewQuote, Quote, QuoteDto};
pub use quotes_service::QuoteService;
pub use quotes_traits::{QuoteRepositoryTrait, QuoteServiceTrait};

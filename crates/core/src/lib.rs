//! Quotebook Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for listing and creating quotes.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod categories;
pub mod errors;
pub mod quotes;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

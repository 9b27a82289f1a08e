//! SQLite storage implementation for Quotebook.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `quotebook-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations (schema plus the seeded categories)
//! - Repository implementations for quotes and categories
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod categories;
pub mod quotes;

// Re-export database utilities
pub use db::{create_pool, get_connection, init, run_migrations, DbConnection, DbPool, WriteHandle};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from quotebook-core for convenience
pub use quotebook_core::errors::{DatabaseError, Error, Result};

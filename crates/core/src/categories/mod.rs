//! Categories module - the fixed set of quote categories and their lookup trait.

mod categories_model;
mod categories_traits;

pub use categories_model::{Category, CategoryName};
pub use categories_traits::CategoryRepositoryTrait;

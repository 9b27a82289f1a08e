use crate::categories::categories_model::Category;
use crate::errors::Result;

/// Trait for category repository operations.
///
/// Categories are seeded by the storage layer and are read-only here.
pub trait CategoryRepositoryTrait: Send + Sync {
    /// Returns the category whose stored name equals `name`, if any.
    fn find_by_name(&self, name: &str) -> Result<Option<Category>>;
}

use crate::quotes::quotes_model::Quote;

/// Query value that selects every quote regardless of category.
pub const ALL_CATEGORIES: &str = "all";

/// Predicate used when listing quotes.
///
/// The category name is matched exactly as given. Creation normalizes
/// category names but listing does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteFilter {
    All,
    Category(String),
}

impl QuoteFilter {
    /// Builds the filter from the optional `category` query value.
    /// Absent, empty, and `"all"` all select every quote.
    pub fn from_query(category: Option<&str>) -> Self {
        match category {
            None | Some("") | Some(ALL_CATEGORIES) => QuoteFilter::All,
            Some(name) => QuoteFilter::Category(name.to_string()),
        }
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            QuoteFilter::All => true,
            QuoteFilter::Category(name) => quote.category.name == *name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;

    fn quote_in(category: &str) -> Quote {
        Quote {
            id: 1,
            text: "text".to_string(),
            author: None,
            category: Category {
                id: 1,
                name: category.to_string(),
            },
        }
    }

    #[test]
    fn test_from_query_selects_all() {
        assert_eq!(QuoteFilter::from_query(None), QuoteFilter::All);
        assert_eq!(QuoteFilter::from_query(Some("")), QuoteFilter::All);
        assert_eq!(QuoteFilter::from_query(Some("all")), QuoteFilter::All);
    }

    #[test]
    fn test_from_query_is_case_sensitive() {
        assert_eq!(
            QuoteFilter::from_query(Some("ALL")),
            QuoteFilter::Category("ALL".to_string())
        );
        assert_eq!(
            QuoteFilter::from_query(Some(" funny")),
            QuoteFilter::Category(" funny".to_string())
        );
    }

    #[test]
    fn test_matches_exact_name_only() {
        let filter = QuoteFilter::from_query(Some("funny"));
        assert!(filter.matches(&quote_in("funny")));
        assert!(!filter.matches(&quote_in("Funny")));
        assert!(!filter.matches(&quote_in("dark")));
        assert!(QuoteFilter::All.matches(&quote_in("dark")));
    }
}

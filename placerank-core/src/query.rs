//! The query context a similarity scorer evaluates places against.
//!
//! Callers may supply a keyword, a category and a place name at once, but
//! only one of them is ever used: keyword beats category, category beats
//! name. Collapsing the optional filters into one enum up front keeps the
//! precedence in a single place.

/// The single filter a recommendation request is scored against.
///
/// # Examples
/// ```
/// use placerank_core::QueryContext;
///
/// let query = QueryContext::from_filters(Some("koshary"), Some("Restaurant"), None);
/// assert_eq!(query, QueryContext::Keyword("koshary".into()));
///
/// let open = QueryContext::from_filters(Some(""), None, None);
/// assert_eq!(open, QueryContext::Open);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryContext {
    /// Free-text keyword searched for in the place descriptions.
    Keyword(String),
    /// Exact category name.
    Category(String),
    /// Substring of the place name.
    PlaceName(String),
    /// No filter; every place is equally relevant.
    #[default]
    Open,
}

impl QueryContext {
    /// Collapse optional filters into one context by precedence.
    ///
    /// Empty strings count as absent.
    #[must_use]
    pub fn from_filters(
        keyword: Option<&str>,
        category: Option<&str>,
        place_name: Option<&str>,
    ) -> Self {
        let present = |value: Option<&str>| value.filter(|text| !text.is_empty()).map(str::to_owned);
        if let Some(text) = present(keyword) {
            return Self::Keyword(text);
        }
        if let Some(text) = present(category) {
            return Self::Category(text);
        }
        present(place_name).map_or(Self::Open, Self::PlaceName)
    }
}

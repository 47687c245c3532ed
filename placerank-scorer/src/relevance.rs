//! Text relevance between a place and a query context.

use placerank_core::{Place, QueryContext, SimilarityScorer};

/// Similarity when the keyword occurs in the place descriptions.
pub const KEYWORD_MATCH_SCORE: f64 = 0.8;
/// Similarity when the requested category equals the place category.
pub const CATEGORY_MATCH_SCORE: f64 = 1.0;
/// Similarity when the place name contains the requested name.
pub const NAME_MATCH_SCORE: f64 = 1.0;
/// Flat similarity when the request carries no filter.
pub const OPEN_QUERY_SCORE: f64 = 0.6;

/// Case-insensitive substring matcher over names, categories and
/// descriptions.
///
/// Exactly one rule fires per query, chosen by the [`QueryContext`] variant;
/// a place that fails that rule scores `0.0`.
///
/// # Examples
/// ```
/// use placerank_core::{Place, QueryContext, SimilarityScorer};
/// use placerank_scorer::TextRelevanceScorer;
///
/// let place = Place::new(1, "Cairo Marriott", "Hotel");
/// let scorer = TextRelevanceScorer;
/// assert_eq!(scorer.similarity(&place, &QueryContext::Category("hotel".into())), 1.0);
/// assert_eq!(scorer.similarity(&place, &QueryContext::PlaceName("hilton".into())), 0.0);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextRelevanceScorer;

impl TextRelevanceScorer {
    fn keyword_score(place: &Place, keyword: &str) -> f64 {
        // Descriptions are joined without a separator, so a keyword may
        // straddle the boundary between them.
        let haystack =
            format!("{}{}", place.short_description, place.full_description).to_lowercase();
        if haystack.contains(&keyword.to_lowercase()) {
            KEYWORD_MATCH_SCORE
        } else {
            0.0
        }
    }

    fn category_score(place: &Place, category: &str) -> f64 {
        if place.category.to_lowercase() == category.to_lowercase() {
            CATEGORY_MATCH_SCORE
        } else {
            0.0
        }
    }

    fn name_score(place: &Place, name: &str) -> f64 {
        if place.name.to_lowercase().contains(&name.to_lowercase()) {
            NAME_MATCH_SCORE
        } else {
            0.0
        }
    }
}

impl SimilarityScorer for TextRelevanceScorer {
    fn similarity(&self, place: &Place, query: &QueryContext) -> f64 {
        let raw = match query {
            QueryContext::Keyword(keyword) => Self::keyword_score(place, keyword),
            QueryContext::Category(category) => Self::category_score(place, category),
            QueryContext::PlaceName(name) => Self::name_score(place, name),
            QueryContext::Open => OPEN_QUERY_SCORE,
        };
        Self::sanitise(raw)
    }
}

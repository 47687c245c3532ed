//! Scoring for Placerank recommendations.
//!
//! The crate provides the two scoring stages of the recommendation pipeline:
//! - **Text relevance** ([`TextRelevanceScorer`]) measures how well a place
//!   matches the single filter a request resolves to. It implements
//!   [`SimilarityScorer`](placerank_core::SimilarityScorer) so the engine can
//!   swap in alternative matchers.
//! - **Composite scoring** ([`CompositeScorer`]) blends similarity with
//!   proximity, rating and a popularity bonus into the scalar used to order
//!   recommendations.
//!
//! # Examples
//!
//! ```
//! use placerank_core::{Place, QueryContext, SimilarityScorer};
//! use placerank_scorer::{CompositeScorer, ScoreInputs, TextRelevanceScorer};
//!
//! let place = Place::new(1, "Abou Tarek", "Restaurant")
//!     .with_descriptions("Koshary institution", "A famous downtown restaurant.");
//! let query = QueryContext::Keyword("koshary".into());
//! let similarity = TextRelevanceScorer.similarity(&place, &query);
//! assert_eq!(similarity, 0.8);
//!
//! let score = CompositeScorer.score(&ScoreInputs {
//!     similarity,
//!     distance_km: Some(1.0),
//!     rating: 4.0,
//!     category: &place.category,
//!     full_description: &place.full_description,
//! });
//! // 0.8 * 0.4 + 0.5 * 0.3 + 0.8 * 0.2 plus the popularity bonus
//! assert!((score - 0.93).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]

mod composite;
mod relevance;
pub mod signals;

pub use composite::{
    CompositeScorer, PROXIMITY_WEIGHT, RATING_WEIGHT, SIMILARITY_WEIGHT, ScoreBreakdown,
    ScoreInputs,
};
pub use relevance::{
    CATEGORY_MATCH_SCORE, KEYWORD_MATCH_SCORE, NAME_MATCH_SCORE, OPEN_QUERY_SCORE,
    TextRelevanceScorer,
};
pub use signals::{POPULARITY_BONUS, POPULARITY_KEYWORDS};

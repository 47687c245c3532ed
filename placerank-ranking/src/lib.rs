//! Ranking pipeline and engine facade for Placerank.
//!
//! The crate turns a snapshot of catalogued places into ordered results:
//! - [`rank`] orders scored candidates by composite score and truncates.
//! - [`CategoryBalancer`] assembles a top-rated list with a fixed quota per
//!   [`CategoryBucket`](placerank_core::CategoryBucket).
//! - [`nearest`] orders places purely by distance.
//!
//! [`RecommendationEngine`] wires these stages to a
//! [`PlaceCatalog`](placerank_core::PlaceCatalog), a
//! [`SimilarityScorer`](placerank_core::SimilarityScorer) and an
//! [`AreaLookup`](placerank_core::AreaLookup) injected at construction.
//! Every request works on one immutable snapshot; the engine holds no
//! mutable state and can be shared across threads.
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use placerank_core::{MemoryCatalog, NoAreas, Place, RecommendRequest};
//! use placerank_ranking::RecommendationEngine;
//! use placerank_scorer::TextRelevanceScorer;
//!
//! let catalog = MemoryCatalog::new(vec![
//!     Place::new(1, "Felfela", "Restaurant")
//!         .with_rating("4.3")
//!         .with_location(Coord { x: 31.2394, y: 30.0489 }),
//! ]);
//! let engine = RecommendationEngine::new(catalog, TextRelevanceScorer, NoAreas);
//! let request = RecommendRequest::new(Coord { x: 31.2357, y: 30.0444 });
//! let results = engine.recommend(&request)?;
//! assert_eq!(results.len(), 1);
//! # Ok::<(), placerank_ranking::EngineError>(())
//! ```

#![forbid(unsafe_code)]

mod balancer;
mod engine;
mod proximity;
mod ranker;
mod response;

pub use balancer::{
    BalancedEntry, CategoryBalancer, DESCRIPTION_CHARS_PER_UNIT, DESCRIPTION_UNIT_WEIGHT,
    HISTORICAL_BASE_SCORE, IMAGE_WEIGHT, bucket_score,
};
pub use engine::{EngineError, RecommendationEngine};
pub use proximity::{NearbyCandidate, nearest};
pub use ranker::{ScoredCandidate, rank};
pub use response::{BalancedPlace, NearbyPlace, QueryOutcome, Recommendation};

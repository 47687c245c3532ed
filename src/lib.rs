//! Facade crate for the Placerank recommendation engine.
//!
//! This crate re-exports the domain types, the relevance and composite
//! scorers, and the ranking engine. The SQLite catalogue is available behind
//! the `store-sqlite` feature.
//!
//! ```rust
//! use geo::Coord;
//! use placerank::{
//!     AddressAreaTable, MemoryCatalog, Place, RecommendRequest, RecommendationEngine,
//!     TextRelevanceScorer,
//! };
//!
//! let catalog = MemoryCatalog::new(vec![
//!     Place::new(1, "Cafe Riche", "Cafe").with_rating("4.1"),
//! ]);
//! let engine = RecommendationEngine::new(catalog, TextRelevanceScorer, AddressAreaTable::default());
//! let results = engine.recommend(&RecommendRequest::new(Coord { x: 31.24, y: 30.05 }))?;
//! assert_eq!(results.len(), 1);
//! # Ok::<(), placerank::EngineError>(())
//! ```

#![forbid(unsafe_code)]

pub use placerank_core::{
    AddressAreaTable, AreaLookup, AreaRule, CatalogError, CategoryBucket, MemoryCatalog,
    NearbyRequest, NoAreas, Place, PlaceCatalog, PlaceLinks, QueryContext, RecommendRequest,
    RequestValidationError, SimilarityScorer, TopRatedRequest, distance_km, haversine_km,
    normalize_rating,
};

#[cfg(feature = "store-sqlite")]
pub use placerank_core::{SqlitePlaceCatalog, SqlitePlaceCatalogError};

pub use placerank_scorer::{CompositeScorer, ScoreBreakdown, ScoreInputs, TextRelevanceScorer};

pub use placerank_ranking::{
    BalancedPlace, EngineError, NearbyPlace, QueryOutcome, Recommendation, RecommendationEngine,
};

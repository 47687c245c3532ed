//! Core domain types for the Placerank recommendation engine.
//!
//! The crate holds everything the ranking pipeline shares: the read-only
//! [`Place`] record, geodesic distance, rating normalisation, category
//! buckets, area detection, request validation, and the seams behind which
//! the catalogue and the similarity scorer plug in.

#![forbid(unsafe_code)]

pub mod area;
pub mod catalog;
pub mod category;
pub mod distance;
pub mod place;
pub mod query;
pub mod rating;
pub mod request;
pub mod scorer;
pub mod test_support;

pub use area::{AddressAreaTable, AreaLookup, AreaRule, NoAreas};
#[cfg(feature = "serde")]
pub use area::AreaTableError;
pub use catalog::{CatalogError, MemoryCatalog, PlaceCatalog};
#[cfg(feature = "store-sqlite")]
pub use catalog::{PLACES_SCHEMA, SqlitePlaceCatalog, SqlitePlaceCatalogError};
pub use category::{CategoryBucket, is_hotel_like};
pub use distance::{EARTH_RADIUS_KM, distance_km, haversine_km};
pub use place::{Place, PlaceLinks};
pub use query::QueryContext;
pub use rating::{MAX_RATING, normalize_rating, parse_rating};
pub use request::{
    DEFAULT_NEARBY_TOP_N, DEFAULT_RECOMMEND_TOP_N, DEFAULT_TOP_RATED_TOP_N, NearbyRequest,
    RecommendRequest, RequestValidationError, TopRatedRequest,
};
pub use scorer::SimilarityScorer;

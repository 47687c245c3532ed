//! Request parameters for the three engine entry points.
//!
//! Each request validates itself before the engine touches the catalogue so
//! malformed input fails fast with a typed error.

use geo::Coord;
use thiserror::Error;

use crate::QueryContext;
use crate::rating::MAX_RATING;

/// Default result count for recommendations.
pub const DEFAULT_RECOMMEND_TOP_N: usize = 10;
/// Default result count for balanced top-rated listings.
pub const DEFAULT_TOP_RATED_TOP_N: usize = 250;
/// Default result count for nearby searches.
pub const DEFAULT_NEARBY_TOP_N: usize = 10;

/// Errors returned by request validation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RequestValidationError {
    /// The latitude or longitude was non-finite or out of range.
    #[error("origin ({latitude}, {longitude}) is not a valid WGS84 coordinate")]
    InvalidOrigin {
        /// Requested latitude in degrees.
        latitude: f64,
        /// Requested longitude in degrees.
        longitude: f64,
    },
    /// The minimum rating was non-finite or outside `0.0..=5.0`.
    #[error("minimum rating {min_rating} must be between 0 and 5")]
    InvalidMinRating {
        /// Requested minimum rating.
        min_rating: f64,
    },
}

fn validate_origin(origin: Coord<f64>) -> Result<(), RequestValidationError> {
    let latitude_ok = origin.y.is_finite() && (-90.0..=90.0).contains(&origin.y);
    let longitude_ok = origin.x.is_finite() && (-180.0..=180.0).contains(&origin.x);
    if latitude_ok && longitude_ok {
        Ok(())
    } else {
        Err(RequestValidationError::InvalidOrigin {
            latitude: origin.y,
            longitude: origin.x,
        })
    }
}

/// Parameters for a personalised recommendation.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use placerank_core::{QueryContext, RecommendRequest};
///
/// let request = RecommendRequest::new(Coord { x: 31.2357, y: 30.0444 })
///     .with_keyword("koshary")
///     .with_top_n(5);
/// assert!(request.validate().is_ok());
/// assert_eq!(request.query(), QueryContext::Keyword("koshary".into()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendRequest {
    /// User position (`x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// Maximum number of results.
    #[cfg_attr(feature = "serde", serde(default = "default_recommend_top_n"))]
    pub top_n: usize,
    /// Free-text keyword matched against descriptions.
    #[cfg_attr(feature = "serde", serde(default))]
    pub keyword: Option<String>,
    /// Category name matched exactly, ignoring case.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: Option<String>,
    /// Substring matched against place names.
    #[cfg_attr(feature = "serde", serde(default))]
    pub place_name: Option<String>,
    /// Places with a normalised rating below this are dropped before scoring.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_rating: f64,
    /// Restrict candidates to one detected area.
    #[cfg_attr(feature = "serde", serde(default))]
    pub area: Option<String>,
}

#[cfg(feature = "serde")]
const fn default_recommend_top_n() -> usize {
    DEFAULT_RECOMMEND_TOP_N
}

impl RecommendRequest {
    /// Construct a request around `origin` with default settings.
    #[must_use]
    pub const fn new(origin: Coord<f64>) -> Self {
        Self {
            origin,
            top_n: DEFAULT_RECOMMEND_TOP_N,
            keyword: None,
            category: None,
            place_name: None,
            min_rating: 0.0,
            area: None,
        }
    }

    /// Set the result count.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the keyword filter.
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Set the category filter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the place-name filter.
    #[must_use]
    pub fn with_place_name(mut self, place_name: impl Into<String>) -> Self {
        self.place_name = Some(place_name.into());
        self
    }

    /// Set the minimum normalised rating.
    #[must_use]
    pub const fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// Restrict results to one area.
    #[must_use]
    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    /// Return the query context these filters resolve to.
    #[must_use]
    pub fn query(&self) -> QueryContext {
        QueryContext::from_filters(
            self.keyword.as_deref(),
            self.category.as_deref(),
            self.place_name.as_deref(),
        )
    }

    /// Validate the origin and minimum rating.
    ///
    /// # Errors
    /// Returns [`RequestValidationError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        validate_origin(self.origin)?;
        if !self.min_rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.min_rating) {
            return Err(RequestValidationError::InvalidMinRating {
                min_rating: self.min_rating,
            });
        }
        Ok(())
    }
}

/// Parameters for a category-balanced top-rated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopRatedRequest {
    /// Approximate number of results; each bucket receives a quarter.
    #[cfg_attr(feature = "serde", serde(default = "default_top_rated_top_n"))]
    pub top_n: usize,
}

#[cfg(feature = "serde")]
const fn default_top_rated_top_n() -> usize {
    DEFAULT_TOP_RATED_TOP_N
}

impl TopRatedRequest {
    /// Construct a request for `top_n` results.
    #[must_use]
    pub const fn new(top_n: usize) -> Self {
        Self { top_n }
    }
}

impl Default for TopRatedRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_RATED_TOP_N)
    }
}

/// Parameters for a pure nearest-place search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearbyRequest {
    /// Search origin (`x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// Maximum number of results.
    #[cfg_attr(feature = "serde", serde(default = "default_nearby_top_n"))]
    pub top_n: usize,
}

#[cfg(feature = "serde")]
const fn default_nearby_top_n() -> usize {
    DEFAULT_NEARBY_TOP_N
}

impl NearbyRequest {
    /// Construct a request around `origin` with the default result count.
    #[must_use]
    pub const fn new(origin: Coord<f64>) -> Self {
        Self {
            origin,
            top_n: DEFAULT_NEARBY_TOP_N,
        }
    }

    /// Set the result count.
    #[must_use]
    pub const fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Validate the origin.
    ///
    /// # Errors
    /// Returns [`RequestValidationError::InvalidOrigin`] for coordinates
    /// outside WGS84 bounds.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        validate_origin(self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CAIRO: Coord<f64> = Coord {
        x: 31.2357,
        y: 30.0444,
    };

    #[rstest]
    fn defaults_match_documented_values() {
        let request = RecommendRequest::new(CAIRO);
        assert_eq!(request.top_n, 10);
        assert_eq!(request.min_rating, 0.0);
        assert_eq!(TopRatedRequest::default().top_n, 250);
        assert_eq!(NearbyRequest::new(CAIRO).top_n, 10);
    }

    #[rstest]
    #[case(Coord { x: 0.0, y: 91.0 })]
    #[case(Coord { x: -181.0, y: 0.0 })]
    #[case(Coord { x: f64::NAN, y: 0.0 })]
    #[case(Coord { x: 0.0, y: f64::INFINITY })]
    fn rejects_invalid_origins(#[case] origin: Coord<f64>) {
        let err = RecommendRequest::new(origin)
            .validate()
            .expect_err("origin should be rejected");
        assert!(matches!(err, RequestValidationError::InvalidOrigin { .. }));
        assert!(NearbyRequest::new(origin).validate().is_err());
    }

    #[rstest]
    #[case(-0.5)]
    #[case(5.5)]
    #[case(f64::NAN)]
    fn rejects_invalid_min_rating(#[case] min_rating: f64) {
        let err = RecommendRequest::new(CAIRO)
            .with_min_rating(min_rating)
            .validate()
            .expect_err("min rating should be rejected");
        assert!(matches!(err, RequestValidationError::InvalidMinRating { .. }));
    }

    #[rstest]
    fn zero_top_n_is_valid() {
        assert!(RecommendRequest::new(CAIRO).with_top_n(0).validate().is_ok());
        assert!(NearbyRequest::new(CAIRO).with_top_n(0).validate().is_ok());
    }

    #[rstest]
    fn query_follows_filter_precedence() {
        let request = RecommendRequest::new(CAIRO)
            .with_category("Cafe")
            .with_place_name("Fishawy");
        assert_eq!(request.query(), QueryContext::Category("Cafe".into()));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_with_defaults() {
        let request: RecommendRequest =
            serde_json::from_str(r#"{"origin": {"x": 31.2, "y": 30.0}}"#).expect("decode");
        assert_eq!(request.top_n, DEFAULT_RECOMMEND_TOP_N);
        assert!(request.keyword.is_none());
    }
}

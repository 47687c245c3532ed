//! Score how well a place matches a query.
//!
//! The `SimilarityScorer` trait assigns a similarity to a
//! [`Place`](crate::Place) given a [`QueryContext`](crate::QueryContext).

use crate::{Place, QueryContext};

/// Calculate a similarity score for a place.
///
/// Higher scores indicate a better match between the place and the query.
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. The method is infallible; implementers return
/// `0.0` when the place does not match.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return values in the range `0.0..=1.0`.
///
/// Use [`SimilarityScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use placerank_core::{Place, QueryContext, SimilarityScorer};
///
/// struct UnitScorer;
///
/// impl SimilarityScorer for UnitScorer {
///     fn similarity(&self, _place: &Place, _query: &QueryContext) -> f64 {
///         1.0
///     }
/// }
///
/// let place = Place::new(1, "Fishawy", "Cafe");
/// assert_eq!(UnitScorer.similarity(&place, &QueryContext::Open), 1.0);
/// ```
pub trait SimilarityScorer: Send + Sync {
    /// Return the similarity of `place` to `query`.
    fn similarity(&self, place: &Place, query: &QueryContext) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

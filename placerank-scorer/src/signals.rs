//! Individual signals blended by the composite scorer.
//!
//! Each helper maps one raw property of a candidate onto a bounded
//! contribution. They are exposed so callers can explain a score.

use placerank_core::{MAX_RATING, is_hotel_like};

/// Additive bonus for places whose description suggests popularity.
pub const POPULARITY_BONUS: f64 = 0.3;

/// Words in a full description that earn [`POPULARITY_BONUS`].
pub const POPULARITY_KEYWORDS: [&str; 3] = ["popular", "visited", "famous"];

/// Upper bound of the ten-point scale used by hotel catalogues.
const HOTEL_RATING_SCALE: f64 = 10.0;

/// Map a rating on its source scale onto `0.0..=1.0`.
///
/// Hotel-like categories are rated out of ten, everything else out of five,
/// so a perfect hotel and a perfect cafe both contribute `1.0`. An empty
/// category contributes nothing.
///
/// # Examples
/// ```
/// use placerank_scorer::signals::rating_component;
///
/// assert_eq!(rating_component(4.0, "Restaurant"), 0.8);
/// assert_eq!(rating_component(8.0, "Boutique Hotel"), 0.8);
/// assert_eq!(rating_component(4.0, ""), 0.0);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "rating components are ratios of the rating scale"
)]
#[must_use]
pub fn rating_component(rating: f64, category: &str) -> f64 {
    if category.is_empty() || !rating.is_finite() {
        return 0.0;
    }
    let scale = if is_hotel_like(category) {
        HOTEL_RATING_SCALE
    } else {
        MAX_RATING
    };
    (rating / scale).clamp(0.0, 1.0)
}

/// Return `1 / (distance + 1)`, or `1.0` when the distance is unknown.
///
/// Negative or NaN distances are treated as zero.
#[expect(
    clippy::float_arithmetic,
    reason = "proximity decays with the reciprocal of distance"
)]
#[must_use]
pub fn proximity_component(distance_km: Option<f64>) -> f64 {
    let distance = distance_km.filter(|value| *value > 0.0).unwrap_or(0.0);
    1.0 / (distance + 1.0)
}

/// Return [`POPULARITY_BONUS`] when the description mentions popularity.
///
/// # Examples
/// ```
/// use placerank_scorer::signals::popularity_bonus;
///
/// assert_eq!(popularity_bonus("A FAMOUS bazaar"), 0.3);
/// assert_eq!(popularity_bonus("A quiet courtyard"), 0.0);
/// ```
#[must_use]
pub fn popularity_bonus(full_description: &str) -> f64 {
    let description = full_description.to_lowercase();
    if POPULARITY_KEYWORDS
        .iter()
        .any(|keyword| description.contains(keyword))
    {
        POPULARITY_BONUS
    } else {
        0.0
    }
}

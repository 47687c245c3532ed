//! Nearest places by great-circle distance.

use geo::Coord;
use placerank_core::{Place, haversine_km};

/// A place paired with its distance from the search origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyCandidate<'a> {
    /// The catalogued place.
    pub place: &'a Place,
    /// Haversine distance from the origin in kilometres.
    pub distance_km: f64,
}

/// Return up to `top_n` places closest to `origin`, nearest first.
///
/// Places without usable coordinates are skipped. No rating or category
/// filter applies; equal distances keep catalogue order.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placerank_core::Place;
/// use placerank_ranking::nearest;
///
/// let origin = Coord { x: 31.2357, y: 30.0444 };
/// let places = vec![
///     Place::new(1, "Far", "Cafe").with_location(Coord { x: 31.5, y: 30.3 }),
///     Place::new(2, "Unknown", "Cafe"),
///     Place::new(3, "Near", "Cafe").with_location(Coord { x: 31.24, y: 30.05 }),
/// ];
/// let ids: Vec<_> = nearest(&places, origin, 5).iter().map(|c| c.place.id).collect();
/// assert_eq!(ids, vec![3, 1]);
/// ```
#[must_use]
pub fn nearest(places: &[Place], origin: Coord<f64>, top_n: usize) -> Vec<NearbyCandidate<'_>> {
    let mut candidates: Vec<NearbyCandidate<'_>> = places
        .iter()
        .filter_map(|place| {
            place.coordinates().map(|location| NearbyCandidate {
                place,
                distance_km: haversine_km(origin, location),
            })
        })
        .collect();
    let skipped = places.len().saturating_sub(candidates.len());
    if skipped > 0 {
        log::debug!("skipped {skipped} places without coordinates");
    }
    candidates.sort_by(|lhs, rhs| lhs.distance_km.total_cmp(&rhs.distance_km));
    candidates.truncate(top_n);
    candidates
}

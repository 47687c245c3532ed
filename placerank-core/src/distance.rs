//! Great-circle distance between WGS84 coordinates.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Coordinates follow the `geo` convention of
//! `x = longitude` and `y = latitude`, in degrees.

use geo::Coord;

/// Mean Earth radius in kilometres used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the haversine distance in kilometres between two points.
///
/// The function is total: NaN inputs propagate to a NaN result.
///
/// # Examples
/// ```
/// use placerank_core::distance_km;
///
/// let d = distance_km(30.0444, 31.2357, 30.0444, 31.2357);
/// assert_eq!(d, 0.0);
/// ```
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine_km(Coord { x: lon1, y: lat1 }, Coord { x: lon2, y: lat2 })
}

/// Return the haversine distance in kilometres between two coordinates.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placerank_core::haversine_km;
///
/// let cairo = Coord { x: 31.2357, y: 30.0444 };
/// let giza = Coord { x: 31.1342, y: 29.9792 };
/// let d = haversine_km(cairo, giza);
/// assert!((d - 12.1).abs() < 0.5);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat1 = from.y.to_radians();
    let lat2 = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lon = (to.x - from.x).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push the chord fractionally above 1 for antipodal points.
    let angle = 2.0 * half_chord.sqrt().clamp(0.0, 1.0).asin();
    EARTH_RADIUS_KM * angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identical_points_are_zero_apart() {
        assert_eq!(distance_km(51.5, -0.12, 51.5, -0.12), 0.0);
    }

    #[rstest]
    #[case(0.0, 0.0, 0.0, 1.0, 111.19)]
    #[case(0.0, 0.0, 1.0, 0.0, 111.19)]
    #[case(51.5074, -0.1278, 48.8566, 2.3522, 343.5)]
    #[case(30.0444, 31.2357, 29.9792, 31.1342, 12.1)]
    fn matches_reference_distances(
        #[case] lat1: f64,
        #[case] lon1: f64,
        #[case] lat2: f64,
        #[case] lon2: f64,
        #[case] expected: f64,
    ) {
        let d = distance_km(lat1, lon1, lat2, lon2);
        assert!(
            (d - expected).abs() <= expected * 0.005 + 0.1,
            "expected ~{expected} km, got {d}"
        );
    }

    #[rstest]
    fn antipodal_points_span_half_the_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[rstest]
    fn nan_propagates() {
        assert!(distance_km(f64::NAN, 0.0, 0.0, 0.0).is_nan());
    }
}

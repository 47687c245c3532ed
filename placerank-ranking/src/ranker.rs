//! Order scored candidates and keep the best.

use placerank_core::Place;
use placerank_scorer::ScoreBreakdown;

/// A place scored for one request.
///
/// Candidates borrow from the snapshot they were built from and live only for
/// the duration of a single call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    /// The catalogued place.
    pub place: &'a Place,
    /// Distance to the user, when both positions are known.
    pub distance_km: Option<f64>,
    /// Rating normalised into `0.0..=5.0`.
    pub normalized_rating: f64,
    /// Component contributions and the composite total.
    pub breakdown: ScoreBreakdown,
}

impl ScoredCandidate<'_> {
    /// Return the composite score used for ordering.
    #[must_use]
    pub const fn composite_score(&self) -> f64 {
        self.breakdown.total
    }
}

/// Sort candidates by descending composite score and keep the first `top_n`.
///
/// The sort is stable, so candidates with equal scores keep their input
/// order. The output holds `min(top_n, candidates.len())` entries.
#[must_use]
pub fn rank(mut candidates: Vec<ScoredCandidate<'_>>, top_n: usize) -> Vec<ScoredCandidate<'_>> {
    candidates.sort_by(|lhs, rhs| rhs.composite_score().total_cmp(&lhs.composite_score()));
    candidates.truncate(top_n);
    candidates
}

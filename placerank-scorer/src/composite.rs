//! Weighted blend of similarity, proximity, rating and popularity.

use crate::signals::{popularity_bonus, proximity_component, rating_component};

/// Weight applied to the similarity component.
pub const SIMILARITY_WEIGHT: f64 = 0.4;
/// Weight applied to the proximity component.
pub const PROXIMITY_WEIGHT: f64 = 0.3;
/// Weight applied to the rating component.
pub const RATING_WEIGHT: f64 = 0.2;

/// Raw signals for one candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInputs<'a> {
    /// Similarity in `0.0..=1.0` from a
    /// [`SimilarityScorer`](placerank_core::SimilarityScorer).
    pub similarity: f64,
    /// Distance to the user, if both positions are known.
    pub distance_km: Option<f64>,
    /// Rating as parsed from the catalogue, on the category's own scale
    /// (out of ten for hotels, out of five otherwise).
    pub rating: f64,
    /// Place category, used to pick the rating scale.
    pub category: &'a str,
    /// Full description, searched for popularity keywords.
    pub full_description: &'a str,
}

/// Per-component contributions behind a composite score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Similarity in `0.0..=1.0`.
    pub similarity: f64,
    /// Proximity in `0.0..=1.0`.
    pub proximity: f64,
    /// Rating component in `0.0..=1.0`.
    pub rating: f64,
    /// Popularity bonus, either `0.0` or the full bonus.
    pub popularity: f64,
    /// Weighted sum of the components.
    pub total: f64,
}

/// Scorer producing the scalar used to order recommendations.
///
/// The score is unbounded above by design of the additive popularity bonus;
/// only the relative order of scores is meaningful.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CompositeScorer;

impl CompositeScorer {
    /// Return the component contributions and their weighted total.
    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score is a weighted sum"
    )]
    #[must_use]
    pub fn breakdown(&self, inputs: &ScoreInputs<'_>) -> ScoreBreakdown {
        let similarity = if inputs.similarity.is_finite() {
            inputs.similarity.clamp(0.0, 1.0)
        } else {
            log::warn!(
                "discarding non-finite similarity {} for category {:?}",
                inputs.similarity,
                inputs.category
            );
            0.0
        };
        let proximity = proximity_component(inputs.distance_km);
        let rating = rating_component(inputs.rating, inputs.category);
        let popularity = popularity_bonus(inputs.full_description);
        let total = similarity * SIMILARITY_WEIGHT
            + proximity * PROXIMITY_WEIGHT
            + rating * RATING_WEIGHT
            + popularity;
        ScoreBreakdown {
            similarity,
            proximity,
            rating,
            popularity,
            total,
        }
    }

    /// Return the composite score for one candidate.
    #[must_use]
    pub fn score(&self, inputs: &ScoreInputs<'_>) -> f64 {
        self.breakdown(inputs).total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn inputs<'a>(
        similarity: f64,
        distance_km: Option<f64>,
        rating: f64,
        category: &'a str,
    ) -> ScoreInputs<'a> {
        ScoreInputs {
            similarity,
            distance_km,
            rating,
            category,
            full_description: "",
        }
    }

    #[rstest]
    fn weighs_components() {
        // 0.8 * 0.4 + 0.5 * 0.3 + 0.8 * 0.2
        let score = CompositeScorer.score(&inputs(0.8, Some(1.0), 4.0, "Restaurant"));
        assert!((score - 0.63).abs() < 1e-12);
    }

    #[rstest]
    fn popularity_bonus_is_additive() {
        let mut candidate = inputs(0.0, None, 0.0, "Museum");
        let plain = CompositeScorer.score(&candidate);
        candidate.full_description = "The most famous museum in Egypt";
        let popular = CompositeScorer.score(&candidate);
        assert!((popular - plain - 0.3).abs() < 1e-12);
    }

    #[rstest]
    fn unknown_distance_counts_as_adjacent() {
        let unknown = CompositeScorer.breakdown(&inputs(0.6, None, 0.0, "Cafe"));
        let adjacent = CompositeScorer.breakdown(&inputs(0.6, Some(0.0), 0.0, "Cafe"));
        assert_eq!(unknown, adjacent);
        assert_eq!(unknown.proximity, 1.0);
    }

    #[rstest]
    fn hotel_ratings_use_ten_point_scale() {
        let breakdown = CompositeScorer.breakdown(&inputs(0.0, None, 9.0, "Hotel"));
        assert!((breakdown.rating - 0.9).abs() < 1e-12);
    }

    #[rstest]
    fn perfect_hotel_and_perfect_cafe_score_alike() {
        let hotel = CompositeScorer.breakdown(&inputs(0.6, Some(0.0), 10.0, "Hotel"));
        let cafe = CompositeScorer.breakdown(&inputs(0.6, Some(0.0), 5.0, "Cafe"));
        assert_eq!(hotel.rating, 1.0);
        assert_eq!(hotel, cafe);
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(2.0)]
    fn similarity_is_sanitised(#[case] similarity: f64) {
        let breakdown = CompositeScorer.breakdown(&inputs(similarity, None, 0.0, ""));
        assert!((0.0..=1.0).contains(&breakdown.similarity));
    }
}

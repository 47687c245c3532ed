//! Category-balanced top-rated listings.
//!
//! A plain top-N over the whole catalogue lets one well-rated category crowd
//! out the rest. The balancer instead ranks each [`CategoryBucket`]
//! separately and takes the same quota from every bucket. Unused quota is
//! never lent to another bucket.

use placerank_core::{CategoryBucket, MAX_RATING, Place};

/// Base score for an unrated historical place.
pub const HISTORICAL_BASE_SCORE: f64 = 2.0;
/// Score added per photo of an unrated historical place.
pub const IMAGE_WEIGHT: f64 = 0.3;
/// Score added per [`DESCRIPTION_CHARS_PER_UNIT`] description characters.
pub const DESCRIPTION_UNIT_WEIGHT: f64 = 0.2;
/// Description length, in characters, worth one [`DESCRIPTION_UNIT_WEIGHT`].
pub const DESCRIPTION_CHARS_PER_UNIT: f64 = 250.0;

/// Score a place within its bucket.
///
/// Rated places score their normalised rating. Historical sites are often
/// unrated, so an unrated historical place is scored from how well it is
/// documented instead, capped at [`MAX_RATING`].
///
/// # Examples
/// ```
/// use placerank_core::{CategoryBucket, Place};
/// use placerank_ranking::bucket_score;
///
/// let citadel = Place::new(1, "Citadel of Saladin", "Citadel")
///     .with_image_count(2)
///     .with_descriptions("", "x".repeat(500));
/// // 2 + 2 * 0.3 + (500 / 250) * 0.2
/// let score = bucket_score(&citadel, CategoryBucket::Historical);
/// assert!((score - 3.0).abs() < 1e-9);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "documentation-based scores are weighted sums"
)]
#[must_use]
pub fn bucket_score(place: &Place, bucket: CategoryBucket) -> f64 {
    let rating = place.normalized_rating();
    if bucket != CategoryBucket::Historical || rating > 0.0 {
        return rating;
    }
    let images = f64::from(place.image_count);
    let chars = description_chars(&place.full_description);
    let documented = HISTORICAL_BASE_SCORE
        + images * IMAGE_WEIGHT
        + (chars / DESCRIPTION_CHARS_PER_UNIT) * DESCRIPTION_UNIT_WEIGHT;
    documented.min(MAX_RATING)
}

fn description_chars(description: &str) -> f64 {
    let count = description.chars().count();
    u32::try_from(count).map_or(f64::from(u32::MAX), f64::from)
}

/// One place selected for a balanced listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalancedEntry<'a> {
    /// The catalogued place.
    pub place: &'a Place,
    /// Bucket the place was drawn from.
    pub bucket: CategoryBucket,
    /// Score used to rank the place within its bucket.
    pub bucket_score: f64,
    /// Rating normalised into `0.0..=5.0`, used for the final order.
    pub normalized_rating: f64,
}

/// Assembles top-rated listings with an equal quota per category bucket.
///
/// # Examples
/// ```
/// use placerank_core::Place;
/// use placerank_ranking::CategoryBalancer;
///
/// let places = vec![
///     Place::new(1, "Sofitel", "Hotel").with_rating("9"),
///     Place::new(2, "Kempinski", "Hotel").with_rating("8"),
///     Place::new(3, "Zooba", "Restaurant").with_rating("4.6"),
/// ];
/// let listing = CategoryBalancer.balance(&places, 4);
/// // One slot per bucket: the best hotel and the only restaurant.
/// let ids: Vec<_> = listing.iter().map(|entry| entry.place.id).collect();
/// assert_eq!(ids, vec![3, 1]);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CategoryBalancer;

impl CategoryBalancer {
    /// Return the per-bucket quota for a listing of `top_n` places.
    #[must_use]
    pub const fn quota(top_n: usize) -> usize {
        top_n.div_euclid(CategoryBucket::ALL.len())
    }

    /// Select up to [`Self::quota`] places from each bucket.
    ///
    /// Each bucket is ranked by [`bucket_score`]; the selections are then
    /// concatenated in [`CategoryBucket::ALL`] order and stably sorted by
    /// descending normalised rating. Places outside every bucket are
    /// ignored.
    #[must_use]
    pub fn balance<'a>(&self, places: &'a [Place], top_n: usize) -> Vec<BalancedEntry<'a>> {
        let quota = Self::quota(top_n);
        let mut listing = Vec::new();
        for bucket in CategoryBucket::ALL {
            let mut members: Vec<BalancedEntry<'a>> = places
                .iter()
                .filter(|place| CategoryBucket::classify(&place.category) == Some(bucket))
                .map(|place| BalancedEntry {
                    place,
                    bucket,
                    bucket_score: bucket_score(place, bucket),
                    normalized_rating: place.normalized_rating(),
                })
                .collect();
            log::debug!("bucket {bucket} holds {} places", members.len());
            members.sort_by(|lhs, rhs| rhs.bucket_score.total_cmp(&lhs.bucket_score));
            members.truncate(quota);
            listing.extend(members);
        }
        listing.sort_by(|lhs, rhs| rhs.normalized_rating.total_cmp(&lhs.normalized_rating));
        listing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rated(id: u64, category: &str, rating: &str) -> Place {
        Place::new(id, format!("{category} {id}"), category).with_rating(rating)
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 0)]
    #[case(4, 1)]
    #[case(250, 62)]
    fn quota_is_a_quarter_rounded_down(#[case] top_n: usize, #[case] expected: usize) {
        assert_eq!(CategoryBalancer::quota(top_n), expected);
    }

    #[rstest]
    fn rated_historical_place_uses_its_rating() {
        let place = rated(1, "Museum", "4.2").with_image_count(50);
        assert_eq!(bucket_score(&place, CategoryBucket::Historical), 4.2);
    }

    #[rstest]
    fn unrated_non_historical_place_scores_zero() {
        let place = rated(1, "Cafe", "").with_image_count(50);
        assert_eq!(bucket_score(&place, CategoryBucket::Cafe), 0.0);
    }

    #[rstest]
    fn documentation_score_is_capped() {
        let place = Place::new(1, "Khan el-Khalili", "Landmark")
            .with_image_count(10)
            .with_descriptions("", "a".repeat(1000));
        assert_eq!(bucket_score(&place, CategoryBucket::Historical), 5.0);
    }

    #[rstest]
    fn description_length_counts_characters_not_bytes() {
        // 250 two-byte characters count as one unit.
        let place = Place::new(1, "Qasr", "Palace").with_descriptions("", "é".repeat(250));
        let score = bucket_score(&place, CategoryBucket::Historical);
        assert!((score - 2.2).abs() < 1e-9);
    }

    #[rstest]
    fn takes_equal_quota_from_each_bucket() {
        let mut places = Vec::new();
        for id in 0..6 {
            places.push(rated(id, "Hotel", "9"));
        }
        places.push(rated(10, "Restaurant", "4.9"));
        places.push(rated(11, "Cafe", "3.1"));
        places.push(rated(12, "Mosque", "4.0"));
        places.push(rated(13, "Gym", "5"));

        let listing = CategoryBalancer.balance(&places, 8);
        let hotels = listing
            .iter()
            .filter(|entry| entry.bucket == CategoryBucket::Hotel)
            .count();
        assert_eq!(hotels, 2);
        assert_eq!(listing.len(), 5);
        assert!(listing.iter().all(|entry| entry.place.id != 13));
    }

    #[rstest]
    fn final_order_is_by_rating_with_bucket_order_for_ties() {
        let places = vec![
            rated(1, "Cafe", "4.5"),
            rated(2, "Hotel", "9"),
            rated(3, "Restaurant", "4.8"),
            rated(4, "Church", "2"),
        ];
        let ids: Vec<_> = CategoryBalancer
            .balance(&places, 4)
            .iter()
            .map(|entry| entry.place.id)
            .collect();
        // Hotel and cafe both normalise to 4.5; the hotel bucket comes first.
        assert_eq!(ids, vec![3, 2, 1, 4]);
    }

    #[rstest]
    fn unrated_historical_places_rank_by_documentation_but_sort_last() {
        let places = vec![
            Place::new(1, "Bare tomb", "Tomb"),
            Place::new(2, "Documented tomb", "Tomb").with_image_count(5),
            rated(3, "Cafe", "3"),
        ];
        let listing = CategoryBalancer.balance(&places, 4);
        let ids: Vec<_> = listing.iter().map(|entry| entry.place.id).collect();
        assert_eq!(ids, vec![3, 2]);
        let tomb = listing.get(1).expect("tomb selected");
        assert!((tomb.bucket_score - 3.5).abs() < 1e-9);
        assert_eq!(tomb.normalized_rating, 0.0);
    }
}

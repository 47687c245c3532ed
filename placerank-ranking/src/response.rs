//! Records returned by the engine entry points.
//!
//! Every record owns a copy of its place so responses outlive the snapshot
//! they were computed from.

use placerank_core::{CategoryBucket, Place};

/// One personalised recommendation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Catalogue identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Catalogue category.
    pub category: String,
    /// Distance to the user; `None` when the place has no coordinates.
    pub distance_km: Option<f64>,
    /// Rating normalised into `0.0..=5.0`.
    pub rating: f64,
    /// Composite score the results are ordered by.
    pub score: f64,
    /// Map link passed through from the catalogue.
    pub map_link: Option<String>,
    /// Detected area, if any.
    pub area: Option<String>,
    /// Full catalogue record.
    pub place_details: Place,
}

/// One entry of a category-balanced top-rated listing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalancedPlace {
    /// Full catalogue record.
    pub place: Place,
    /// Bucket the place was drawn from.
    pub bucket: CategoryBucket,
    /// Score used to rank the place within its bucket.
    pub bucket_score: f64,
    /// Rating normalised into `0.0..=5.0`.
    pub rating: f64,
    /// Detected area, if any.
    pub area: Option<String>,
}

/// One entry of a nearest-place search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearbyPlace {
    /// Full catalogue record.
    pub place: Place,
    /// Distance from the search origin in kilometres.
    pub distance_km: f64,
    /// Detected area, if any.
    pub area: Option<String>,
}

/// Success-or-failure envelope reported to callers.
///
/// A failed call carries a message and no results; partial results are never
/// reported.
///
/// # Examples
/// ```
/// use placerank_ranking::QueryOutcome;
///
/// let outcome: QueryOutcome<u64> = QueryOutcome::failure("catalogue offline");
/// assert!(!outcome.success);
/// assert!(outcome.results.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryOutcome<T> {
    /// Whether the call succeeded.
    pub success: bool,
    /// Failure description; absent on success.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub message: Option<String>,
    /// Ordered results; empty on failure.
    #[cfg_attr(feature = "serde", serde(default))]
    pub results: Vec<T>,
}

impl<T> QueryOutcome<T> {
    /// Wrap successful results.
    #[must_use]
    pub const fn ok(results: Vec<T>) -> Self {
        Self {
            success: true,
            message: None,
            results,
        }
    }

    /// Report a failure with no results.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            results: Vec::new(),
        }
    }

    /// Convert an engine result into an envelope, rendering the error text.
    pub fn from_result<E>(result: Result<Vec<T>, E>) -> Self
    where
        E: std::fmt::Display,
    {
        match result {
            Ok(results) => Self::ok(results),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn ok_outcome_has_no_message() {
        let outcome = QueryOutcome::ok(vec![1_u8, 2]);
        assert!(outcome.success);
        assert!(outcome.message.is_none());
        assert_eq!(outcome.results, vec![1, 2]);
    }

    #[rstest]
    fn error_results_become_failures() {
        let outcome: QueryOutcome<u8> = QueryOutcome::from_result(Err("offline"));
        assert!(!outcome.success);
        assert_eq!(outcome.message.as_deref(), Some("offline"));
        assert!(outcome.results.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn success_envelope_omits_message() {
        let json = serde_json::to_value(QueryOutcome::ok(vec![7_u8])).expect("serialise");
        assert_eq!(json, serde_json::json!({ "success": true, "results": [7] }));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn failure_envelope_has_empty_results() {
        let json =
            serde_json::to_value(QueryOutcome::<u8>::failure("boom")).expect("serialise");
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "boom", "results": [] })
        );
    }
}

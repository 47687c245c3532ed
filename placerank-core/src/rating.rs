//! Normalise free-form rating text onto a `0.0..=5.0` scale.
//!
//! Catalogue ratings arrive as text on mixed scales: hotels are rated out of
//! ten, everything else out of five. The normaliser applies one rule to every
//! category: any value above five is assumed to be on the ten-point scale.
//! A raw `5` is therefore ambiguous between a perfect five-point score and a
//! middling ten-point score; it is kept as `5.0`.

/// Upper bound of the normalised rating scale.
pub const MAX_RATING: f64 = 5.0;

/// Parse raw rating text on its own scale.
///
/// Unparsable, negative, or non-finite input yields `0.0`. No rescaling is
/// applied, so a hotel rated `"9"` parses as `9.0`.
///
/// # Examples
/// ```
/// use placerank_core::parse_rating;
///
/// assert_eq!(parse_rating(" 9 "), 9.0);
/// assert_eq!(parse_rating("-1"), 0.0);
/// assert_eq!(parse_rating("n/a"), 0.0);
/// ```
#[must_use]
pub fn parse_rating(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

/// Convert raw rating text into a rating in `0.0..=5.0`.
///
/// Unparsable, negative, or non-finite input yields `0.0`. Values above
/// [`MAX_RATING`] are halved and rounded to one decimal place; anything that
/// still exceeds the scale after rescaling is clamped.
///
/// # Examples
/// ```
/// use placerank_core::normalize_rating;
///
/// assert_eq!(normalize_rating("8"), 4.0);
/// assert_eq!(normalize_rating("3.5"), 3.5);
/// assert_eq!(normalize_rating("abc"), 0.0);
/// ```
#[must_use]
pub fn normalize_rating(raw: &str) -> f64 {
    let value = parse_rating(raw);
    if value > MAX_RATING {
        return rescale_ten_point(value).min(MAX_RATING);
    }
    value
}

#[expect(
    clippy::float_arithmetic,
    reason = "rescaling a ten-point rating requires floating-point division"
)]
fn rescale_ten_point(value: f64) -> f64 {
    let rescaled = value / 10.0 * MAX_RATING;
    (rescaled * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("8", 4.0)]
    #[case("9", 4.5)]
    #[case("10", 5.0)]
    #[case("8.6", 4.3)]
    #[case("3.5", 3.5)]
    #[case(" 4.2 ", 4.2)]
    #[case("0", 0.0)]
    #[case("abc", 0.0)]
    #[case("", 0.0)]
    #[case("4/5", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    #[case("-2", 0.0)]
    #[case("42", 5.0)]
    fn normalises_raw_ratings(#[case] raw: &str, #[case] expected: f64) {
        let rating = normalize_rating(raw);
        assert!(
            (rating - expected).abs() < 1e-9,
            "{raw:?} should normalise to {expected}, got {rating}"
        );
    }

    // A ten-point 5.0 cannot be told apart from a five-point 5.0; the value
    // passes through untouched.
    #[rstest]
    fn exact_five_is_treated_as_five_point_scale() {
        assert_eq!(normalize_rating("5"), 5.0);
        assert_eq!(normalize_rating("5.0"), 5.0);
    }

    #[rstest]
    #[case("9.2", 9.2)]
    #[case("4", 4.0)]
    #[case("", 0.0)]
    #[case("NaN", 0.0)]
    #[case("-3", 0.0)]
    fn parsing_keeps_the_source_scale(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_rating(raw), expected);
    }

    #[rstest]
    fn just_above_five_is_rescaled() {
        assert!((normalize_rating("6") - 3.0).abs() < 1e-9);
    }
}

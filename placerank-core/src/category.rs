//! Category buckets used for balanced top-rated listings.
//!
//! Catalogue categories are open-ended strings. Top-rated listings group them
//! into four mutually exclusive buckets; every monument-style category falls
//! into [`CategoryBucket::Historical`].
//!
//! # Examples
//! ```
//! use placerank_core::CategoryBucket;
//!
//! assert_eq!(CategoryBucket::classify("Hotel"), Some(CategoryBucket::Hotel));
//! assert_eq!(CategoryBucket::classify("Mosque"), Some(CategoryBucket::Historical));
//! assert_eq!(CategoryBucket::classify("Gym"), None);
//! ```

/// Category names grouped under [`CategoryBucket::Historical`].
const HISTORICAL_CATEGORIES: &[&str] = &[
    "historical",
    "historic site",
    "monument",
    "museum",
    "mosque",
    "church",
    "synagogue",
    "palace",
    "temple",
    "citadel",
    "fortress",
    "archaeological site",
    "landmark",
    "mausoleum",
    "tomb",
    "pyramid",
    "gate",
    "castle",
    "ruins",
];

/// A top-rated bucket grouping one or more catalogue categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CategoryBucket {
    /// Hotels and other lodging.
    Hotel,
    /// Restaurants.
    Restaurant,
    /// Cafés.
    Cafe,
    /// Monuments, museums, religious and archaeological sites.
    Historical,
}

impl CategoryBucket {
    /// Every bucket, in the order balanced listings are assembled.
    pub const ALL: [Self; 4] = [Self::Hotel, Self::Restaurant, Self::Cafe, Self::Historical];

    /// Return the bucket as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Cafe => "cafe",
            Self::Historical => "historical",
        }
    }

    /// Map a catalogue category onto its bucket.
    ///
    /// Matching ignores case and surrounding whitespace. Any hotel-like
    /// category lands in [`CategoryBucket::Hotel`]; categories outside every
    /// bucket return `None`.
    #[must_use]
    pub fn classify(category: &str) -> Option<Self> {
        let normalised = category.trim().to_lowercase();
        match normalised.as_str() {
            "" => None,
            "restaurant" => Some(Self::Restaurant),
            "cafe" | "café" | "coffee shop" => Some(Self::Cafe),
            other if is_hotel_like(other) => Some(Self::Hotel),
            other if HISTORICAL_CATEGORIES.contains(&other) => Some(Self::Historical),
            _ => None,
        }
    }
}

impl std::fmt::Display for CategoryBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report whether a category rates on the ten-point hotel scale.
///
/// # Examples
/// ```
/// use placerank_core::is_hotel_like;
///
/// assert!(is_hotel_like("Boutique Hotel"));
/// assert!(!is_hotel_like("Restaurant"));
/// ```
#[must_use]
pub fn is_hotel_like(category: &str) -> bool {
    category.to_lowercase().contains("hotel")
}

//! Catalogue records consumed by the ranking pipeline.

use geo::Coord;

use crate::rating::normalize_rating;

/// Optional outbound links attached to a place.
///
/// Links are passed through to responses untouched and never influence
/// scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceLinks {
    /// Link to a map view of the place.
    #[cfg_attr(feature = "serde", serde(default))]
    pub map: Option<String>,
    /// Link to a booking page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub booking: Option<String>,
    /// Link to further information.
    #[cfg_attr(feature = "serde", serde(default))]
    pub info: Option<String>,
}

/// A point of interest read from the catalogue.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. Records
/// without geodata carry `None`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placerank_core::Place;
///
/// let place = Place::new(1, "Koshary Abou Tarek", "Restaurant")
///     .with_location(Coord { x: 31.2421, y: 30.0500 })
///     .with_rating("4.5");
///
/// assert_eq!(place.normalized_rating(), 4.5);
/// assert!(place.coordinates().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    /// Stable catalogue identifier.
    pub id: u64,
    /// Display name; may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Free-form postal address.
    #[cfg_attr(feature = "serde", serde(default))]
    pub address: String,
    /// Open-ended category label such as `"Hotel"` or `"Museum"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Rating text exactly as stored, on a five- or ten-point scale.
    #[cfg_attr(feature = "serde", serde(default, rename = "rating"))]
    pub rating_raw: String,
    /// Geospatial position, when known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: Option<Coord<f64>>,
    /// One-line summary.
    #[cfg_attr(feature = "serde", serde(default))]
    pub short_description: String,
    /// Long-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub full_description: String,
    /// Number of attached photos.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image_count: u32,
    /// Outbound links.
    #[cfg_attr(feature = "serde", serde(default))]
    pub links: PlaceLinks,
}

impl Place {
    /// Construct a place with a name and category and no other data.
    pub fn new(id: u64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Set the position while returning `self` for chaining.
    #[must_use]
    pub const fn with_location(mut self, location: Coord<f64>) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the raw rating text.
    #[must_use]
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating_raw = rating.into();
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the short and full descriptions.
    #[must_use]
    pub fn with_descriptions(
        mut self,
        short_description: impl Into<String>,
        full_description: impl Into<String>,
    ) -> Self {
        self.short_description = short_description.into();
        self.full_description = full_description.into();
        self
    }

    /// Set the photo count.
    #[must_use]
    pub const fn with_image_count(mut self, image_count: u32) -> Self {
        self.image_count = image_count;
        self
    }

    /// Set the outbound links.
    #[must_use]
    pub fn with_links(mut self, links: PlaceLinks) -> Self {
        self.links = links;
        self
    }

    /// Return the position if it is present and finite.
    ///
    /// A location with a NaN or infinite component counts as missing.
    #[must_use]
    pub fn coordinates(&self) -> Option<Coord<f64>> {
        self.location
            .filter(|coord| coord.x.is_finite() && coord.y.is_finite())
    }

    /// Return the rating rescaled into `0.0..=5.0`.
    #[must_use]
    pub fn normalized_rating(&self) -> f64 {
        normalize_rating(&self.rating_raw)
    }
}

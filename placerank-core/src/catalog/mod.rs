//! Read access to the place catalogue.
//!
//! The catalogue is owned by an external persistence layer. The engine only
//! needs an immutable, internally consistent snapshot of it for the duration
//! of one request; [`PlaceCatalog`] is the seam through which that snapshot
//! is injected.

use thiserror::Error;

use crate::Place;

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{PLACES_SCHEMA, SqlitePlaceCatalog, SqlitePlaceCatalogError};

/// Errors raised when the catalogue cannot produce a snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be reached.
    #[error("place catalogue is unavailable: {reason}")]
    Unavailable {
        /// Human-readable cause.
        reason: String,
    },
    /// The backing store failed while reading places.
    #[error("place catalogue failed to load places: {source}")]
    Backend {
        /// Error raised by the backing store.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Read-only access to a snapshot of catalogued places.
///
/// Implementations must be thread-safe and must return a consistent view:
/// the engine never re-reads the catalogue within one request.
///
/// # Examples
///
/// ```rust
/// use placerank_core::{CatalogError, MemoryCatalog, Place, PlaceCatalog};
///
/// let catalog = MemoryCatalog::new(vec![Place::new(1, "El Fishawy", "Cafe")]);
/// let snapshot = catalog.snapshot()?;
/// assert_eq!(snapshot.len(), 1);
/// # Ok::<(), CatalogError>(())
/// ```
pub trait PlaceCatalog: Send + Sync {
    /// Materialise every catalogued place.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when the backing store cannot be read.
    fn snapshot(&self) -> Result<Vec<Place>, CatalogError>;
}

impl<T> PlaceCatalog for Box<T>
where
    T: PlaceCatalog + ?Sized,
{
    fn snapshot(&self) -> Result<Vec<Place>, CatalogError> {
        (**self).snapshot()
    }
}

/// Catalogue held entirely in memory.
///
/// Useful for callers that already hold a materialised snapshot and in tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryCatalog {
    places: Vec<Place>,
}

impl MemoryCatalog {
    /// Wrap an existing list of places.
    #[must_use]
    pub const fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    /// Build a catalogue from any collection of places.
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        Self::new(places.into_iter().collect())
    }
}

impl PlaceCatalog for MemoryCatalog {
    fn snapshot(&self) -> Result<Vec<Place>, CatalogError> {
        Ok(self.places.clone())
    }
}

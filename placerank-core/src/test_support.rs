//! Deterministic collaborators for unit and behaviour tests.
//!
//! These helpers are public so downstream crates can reuse them in their own
//! test suites without re-implementing a catalogue or a scorer.

use crate::{CatalogError, Place, PlaceCatalog, QueryContext, SimilarityScorer};

/// Test `SimilarityScorer` that only understands category queries.
///
/// Returns `1.0` for an exact, case-insensitive category match, `0.5` for an
/// open query, and `0.0` otherwise.
#[derive(Debug, Copy, Clone, Default)]
pub struct CategoryOnlyScorer;

impl SimilarityScorer for CategoryOnlyScorer {
    fn similarity(&self, place: &Place, query: &QueryContext) -> f64 {
        match query {
            QueryContext::Category(category) if place.category.eq_ignore_ascii_case(category) => {
                1.0
            }
            QueryContext::Open => 0.5,
            _ => 0.0,
        }
    }
}

/// Catalogue that always fails with [`CatalogError::Unavailable`].
#[derive(Debug, Clone)]
pub struct UnavailableCatalog {
    reason: String,
}

impl UnavailableCatalog {
    /// Create a catalogue that reports `reason` on every snapshot.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl PlaceCatalog for UnavailableCatalog {
    fn snapshot(&self) -> Result<Vec<Place>, CatalogError> {
        Err(CatalogError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}

/// Create a SQLite database at `path` holding `places`.
///
/// The schema matches [`crate::PLACES_SCHEMA`]; an existing table is reused.
///
/// # Errors
/// Returns any `rusqlite` error raised while creating or populating the file.
#[cfg(feature = "store-sqlite")]
pub fn write_places_database(
    path: &std::path::Path,
    places: &[Place],
) -> Result<(), rusqlite::Error> {
    let mut connection = rusqlite::Connection::open(path)?;
    connection.execute(crate::PLACES_SCHEMA, [])?;
    let transaction = connection.transaction()?;
    {
        let mut insert = transaction.prepare(
            "INSERT INTO places (id, name, address, category, rating, latitude, longitude,
                short_description, full_description, image_count, map_link, booking_link, info_link)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )?;
        for place in places {
            let id = i64::try_from(place.id)
                .map_err(|err| rusqlite::Error::ToSqlConversionFailure(Box::new(err)))?;
            insert.execute(rusqlite::params![
                id,
                place.name,
                place.address,
                place.category,
                place.rating_raw,
                place.location.map(|coord| coord.y),
                place.location.map(|coord| coord.x),
                place.short_description,
                place.full_description,
                place.image_count,
                place.links.map,
                place.links.booking,
                place.links.info,
            ])?;
        }
    }
    transaction.commit()
}

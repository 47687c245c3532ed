//! SQLite-backed place catalogue.

use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Mutex,
};

use geo::Coord;
use rusqlite::{Connection, OpenFlags, Row, types::ValueRef};
use thiserror::Error;

use crate::{Place, PlaceLinks};

use super::{CatalogError, PlaceCatalog};

/// DDL for the `places` table read by [`SqlitePlaceCatalog`].
pub const PLACES_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS places (
    id INTEGER PRIMARY KEY,
    name TEXT,
    address TEXT,
    category TEXT,
    rating TEXT,
    latitude REAL,
    longitude REAL,
    short_description TEXT,
    full_description TEXT,
    image_count INTEGER NOT NULL DEFAULT 0,
    map_link TEXT,
    booking_link TEXT,
    info_link TEXT
)";

const SELECT_PLACES_SQL: &str = "SELECT id, name, address, category, rating, latitude, longitude,
        short_description, full_description, image_count, map_link, booking_link, info_link
     FROM places
     ORDER BY id";

/// Error raised when opening or reading the SQLite catalogue.
#[derive(Debug, Error)]
pub enum SqlitePlaceCatalogError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}: {source}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// Preparing or executing a query failed.
    #[error("failed to {operation}: {source}")]
    Query {
        /// Description of the failed operation.
        operation: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// A stored identifier could not be represented as `u64`.
    #[error("place id {id} is outside the supported range")]
    PlaceIdOutOfRange {
        /// Identifier read from SQLite.
        id: i64,
    },
    /// The connection mutex was poisoned by a panicking reader.
    #[error("SQLite connection lock was poisoned")]
    LockPoisoned,
}

impl From<SqlitePlaceCatalogError> for CatalogError {
    fn from(source: SqlitePlaceCatalogError) -> Self {
        Self::Backend {
            source: Box::new(source),
        }
    }
}

/// Read-only catalogue backed by a `places` table in SQLite.
///
/// The connection is opened once and shared behind a mutex; every
/// [`PlaceCatalog::snapshot`] call reads the full table afresh.
pub struct SqlitePlaceCatalog {
    path: PathBuf,
    connection: Mutex<Connection>,
}

impl fmt::Debug for SqlitePlaceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlitePlaceCatalog")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqlitePlaceCatalog {
    /// Open the database at `database_path` read-only.
    ///
    /// # Errors
    /// Returns [`SqlitePlaceCatalogError::OpenDatabase`] when SQLite refuses
    /// the file, and [`SqlitePlaceCatalogError::Query`] when the `places`
    /// table cannot be queried.
    pub fn open<P>(database_path: P) -> Result<Self, SqlitePlaceCatalogError>
    where
        P: AsRef<Path>,
    {
        let path = database_path.as_ref();
        let connection = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|source| SqlitePlaceCatalogError::OpenDatabase {
                path: path.to_path_buf(),
                source,
            })?;
        connection
            .prepare_cached(SELECT_PLACES_SQL)
            .map_err(|source| SqlitePlaceCatalogError::Query {
                operation: "prepare place selection",
                source,
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            connection: Mutex::new(connection),
        })
    }

    /// Return the database location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every place from the database, ordered by id.
    ///
    /// # Errors
    /// Returns [`SqlitePlaceCatalogError`] when the query fails or a row
    /// holds an identifier outside the `u64` range.
    pub fn load_places(&self) -> Result<Vec<Place>, SqlitePlaceCatalogError> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| SqlitePlaceCatalogError::LockPoisoned)?;
        let mut statement = connection.prepare_cached(SELECT_PLACES_SQL).map_err(|source| {
            SqlitePlaceCatalogError::Query {
                operation: "prepare place selection",
                source,
            }
        })?;
        let mut rows = statement
            .query([])
            .map_err(|source| SqlitePlaceCatalogError::Query {
                operation: "query places",
                source,
            })?;

        let mut places = Vec::new();
        while let Some(row) = rows.next().map_err(|source| SqlitePlaceCatalogError::Query {
            operation: "read place row",
            source,
        })? {
            places.push(read_place(row)?);
        }
        log::debug!(
            "loaded {} places from {}",
            places.len(),
            self.path.display()
        );
        Ok(places)
    }
}

impl PlaceCatalog for SqlitePlaceCatalog {
    fn snapshot(&self) -> Result<Vec<Place>, CatalogError> {
        self.load_places().map_err(CatalogError::from)
    }
}

fn read_place(row: &Row<'_>) -> Result<Place, SqlitePlaceCatalogError> {
    let row_error = |source| SqlitePlaceCatalogError::Query {
        operation: "decode place row",
        source,
    };
    let raw_id: i64 = row.get(0).map_err(row_error)?;
    let id = u64::try_from(raw_id)
        .map_err(|_| SqlitePlaceCatalogError::PlaceIdOutOfRange { id: raw_id })?;

    let latitude: Option<f64> = row.get(5).map_err(row_error)?;
    let longitude: Option<f64> = row.get(6).map_err(row_error)?;
    let location = latitude
        .zip(longitude)
        .map(|(lat, lon)| Coord { x: lon, y: lat });

    let raw_images: Option<i64> = row.get(9).map_err(row_error)?;
    let image_count = raw_images.map_or(0, |count| {
        u32::try_from(count).unwrap_or_else(|_| {
            log::warn!("place {id} has an invalid image count {count}; treating it as zero");
            0
        })
    });

    Ok(Place {
        id,
        name: text_column(row, 1).map_err(row_error)?,
        address: text_column(row, 2).map_err(row_error)?,
        category: text_column(row, 3).map_err(row_error)?,
        rating_raw: text_column(row, 4).map_err(row_error)?,
        location,
        short_description: text_column(row, 7).map_err(row_error)?,
        full_description: text_column(row, 8).map_err(row_error)?,
        image_count,
        links: PlaceLinks {
            map: optional_text(row, 10).map_err(row_error)?,
            booking: optional_text(row, 11).map_err(row_error)?,
            info: optional_text(row, 12).map_err(row_error)?,
        },
    })
}

/// Read a loosely typed column as text; NULL becomes an empty string.
///
/// Spreadsheet imports store ratings as TEXT, REAL, or INTEGER depending on
/// the source cell, so numeric values are rendered back to text.
fn text_column(row: &Row<'_>, index: usize) -> Result<String, rusqlite::Error> {
    Ok(optional_text(row, index)?.unwrap_or_default())
}

fn optional_text(row: &Row<'_>, index: usize) -> Result<Option<String>, rusqlite::Error> {
    let value = match row.get_ref(index)? {
        ValueRef::Null => None,
        ValueRef::Integer(number) => Some(number.to_string()),
        ValueRef::Real(number) => Some(number.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    };
    Ok(value)
}

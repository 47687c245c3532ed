//! Catalogue and area-table inputs shared by every query subcommand.

use camino::{Utf8Path, Utf8PathBuf};
use placerank_core::{AddressAreaTable, AreaLookup, PlaceCatalog};
use placerank_ranking::RecommendationEngine;
use placerank_scorer::TextRelevanceScorer;

use crate::{ARG_AREAS, ARG_CATALOG, CliError, DEFAULT_CATALOG_FILE, fs};

/// Engine type assembled by the CLI.
pub(crate) type CliEngine =
    RecommendationEngine<Box<dyn PlaceCatalog>, TextRelevanceScorer, Box<dyn AreaLookup>>;

/// Resolved locations of the catalogue and optional area table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CatalogSources {
    /// Path to the SQLite place catalogue.
    pub(crate) catalog: Utf8PathBuf,
    /// Path to a JSON area table; the built-in table is used when absent.
    pub(crate) areas: Option<Utf8PathBuf>,
}

impl CatalogSources {
    /// Apply defaults: the catalogue lives at `<data_dir>/places.db` and the
    /// data directory defaults to the working directory.
    pub(crate) fn resolve(
        data_dir: Option<Utf8PathBuf>,
        catalog_override: Option<Utf8PathBuf>,
        areas: Option<Utf8PathBuf>,
    ) -> Self {
        let catalog = catalog_override.unwrap_or_else(|| {
            data_dir
                .unwrap_or_else(|| Utf8PathBuf::from("."))
                .join(DEFAULT_CATALOG_FILE)
        });
        Self { catalog, areas }
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(areas) = &self.areas {
            require_existing(areas, ARG_AREAS)?;
        }
        Ok(())
    }
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load the area table at `path`, or the built-in table when no path is set.
pub(crate) fn load_area_table(path: Option<&Utf8Path>) -> Result<AddressAreaTable, CliError> {
    let Some(path) = path else {
        return Ok(AddressAreaTable::default());
    };
    let payload = fs::read_utf8_file(path).map_err(|source| CliError::ReadAreaTable {
        path: path.to_path_buf(),
        source,
    })?;
    AddressAreaTable::from_json(&payload).map_err(|source| CliError::ParseAreaTable {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the engine for the current invocation.
pub(crate) trait EngineBuilder {
    fn build(&self, sources: &CatalogSources) -> Result<CliEngine, CliError>;
}

/// Builds an engine over the SQLite catalogue named by the sources.
pub(crate) struct DefaultEngineBuilder;

impl EngineBuilder for DefaultEngineBuilder {
    #[cfg(feature = "store-sqlite")]
    fn build(&self, sources: &CatalogSources) -> Result<CliEngine, CliError> {
        let catalog = placerank_core::SqlitePlaceCatalog::open(sources.catalog.as_std_path())?;
        let areas = load_area_table(sources.areas.as_deref())?;
        log::debug!(
            "opened catalogue {} with {} area rules",
            sources.catalog,
            areas.rules().len()
        );
        Ok(RecommendationEngine::new(
            Box::new(catalog),
            TextRelevanceScorer,
            Box::new(areas),
        ))
    }

    #[cfg(not(feature = "store-sqlite"))]
    fn build(&self, _sources: &CatalogSources) -> Result<CliEngine, CliError> {
        Err(CliError::MissingFeature {
            feature: "store-sqlite",
            action: "Opening the place catalogue",
        })
    }
}

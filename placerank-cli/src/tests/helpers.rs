//! Test helpers for building catalogues and stub engines.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use placerank_core::{NoAreas, test_support::UnavailableCatalog};
use placerank_ranking::RecommendationEngine;
use placerank_scorer::TextRelevanceScorer;
use tempfile::TempDir;

use crate::sources::{CatalogSources, CliEngine};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

/// Temporary data directory removed on drop.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn catalog(&self) -> Utf8PathBuf {
        self.root.join(DEFAULT_CATALOG_FILE)
    }
}

/// Engine builder that always serves a failing catalogue.
pub(super) struct UnavailableEngineBuilder;

impl EngineBuilder for UnavailableEngineBuilder {
    fn build(&self, _sources: &CatalogSources) -> Result<CliEngine, CliError> {
        Ok(RecommendationEngine::new(
            Box::new(UnavailableCatalog::new("database is locked")),
            TextRelevanceScorer,
            Box::new(NoAreas),
        ))
    }
}

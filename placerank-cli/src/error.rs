//! Error types emitted by the Placerank CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use placerank_core::{AreaTableError, RequestValidationError};
use placerank_ranking::EngineError;
use thiserror::Error;

/// Errors emitted by the Placerank CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply the option.
        env: &'static str,
    },
    /// The requested operation requires a missing compile-time feature.
    #[error("{action} requires the `{feature}` feature to be enabled")]
    MissingFeature {
        /// Cargo feature that must be enabled.
        feature: &'static str,
        /// Operation that needed the feature.
        action: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the input.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The request parameters failed validation.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestValidationError),
    /// Reading the area table failed.
    #[error("failed to read area table at {path:?}: {source}")]
    ReadAreaTable {
        /// Location of the area table.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The area table JSON could not be decoded.
    #[error("failed to parse area table at {path:?}: {source}")]
    ParseAreaTable {
        /// Location of the area table.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: AreaTableError,
    },
    /// Opening the SQLite catalogue failed.
    #[cfg(feature = "store-sqlite")]
    #[error(transparent)]
    OpenCatalog(#[from] placerank_core::SqlitePlaceCatalogError),
    /// The engine failed to answer the query.
    #[error(transparent)]
    Query(#[from] EngineError),
    /// Serializing the query outcome failed.
    #[error("failed to serialize query outcome: {0}")]
    SerializeOutcome(#[source] serde_json::Error),
    /// Writing the query output failed.
    #[error("failed to write query output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

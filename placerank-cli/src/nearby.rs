//! Nearby command implementation for the Placerank CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placerank_core::{DEFAULT_NEARBY_TOP_N, NearbyRequest};
use placerank_ranking::NearbyPlace;
use serde::{Deserialize, Serialize};

use crate::output::report;
use crate::sources::{CatalogSources, EngineBuilder};
use crate::{
    ARG_AREAS, ARG_CATALOG, ARG_DATA_DIR, ARG_LATITUDE, ARG_LONGITUDE, ARG_TOP_N, CliError,
    ENV_NEARBY_LATITUDE, ENV_NEARBY_LONGITUDE,
};

/// CLI arguments for the `nearby` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the catalogued places closest to a position by great-circle \
                 distance. Places without coordinates are skipped.",
    about = "List the places closest to a position"
)]
#[ortho_config(prefix = "PLACERANK")]
pub(crate) struct NearbyArgs {
    /// Latitude of the search origin in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the search origin in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Maximum number of results (default 10).
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Directory containing `places.db`.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Override the path to the SQLite place catalogue.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// JSON area table replacing the built-in one.
    #[arg(long = ARG_AREAS, value_name = "path")]
    #[serde(default)]
    pub(crate) areas: Option<Utf8PathBuf>,
}

impl NearbyArgs {
    pub(crate) fn into_config(self) -> Result<NearbyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        NearbyConfig::try_from(merged)
    }
}

/// Resolved `nearby` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NearbyConfig {
    /// Validated engine request.
    pub(crate) request: NearbyRequest,
    /// Catalogue inputs.
    pub(crate) sources: CatalogSources,
}

impl TryFrom<NearbyArgs> for NearbyConfig {
    type Error = CliError;

    fn try_from(args: NearbyArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_NEARBY_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_NEARBY_LONGITUDE,
        })?;
        let request = NearbyRequest::new(Coord {
            x: longitude,
            y: latitude,
        })
        .with_top_n(args.top_n.unwrap_or(DEFAULT_NEARBY_TOP_N));
        request.validate()?;

        Ok(Self {
            request,
            sources: CatalogSources::resolve(args.data_dir, args.catalog, args.areas),
        })
    }
}

pub(crate) fn run_nearby_with(
    args: NearbyArgs,
    builder: &dyn EngineBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = args.into_config().and_then(|config| {
        config.sources.validate_sources()?;
        execute_nearby(&config, builder)
    });
    report(writer, outcome)
}

fn execute_nearby(
    config: &NearbyConfig,
    builder: &dyn EngineBuilder,
) -> Result<Vec<NearbyPlace>, CliError> {
    let engine = builder.build(&config.sources)?;
    Ok(engine.nearby(&config.request)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<NearbyConfig, CliError> {
    let merged = NearbyArgs::merge_from_layers(layers).map_err(CliError::from)?;
    NearbyConfig::try_from(merged)
}

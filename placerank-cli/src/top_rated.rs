//! Top-rated command implementation for the Placerank CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placerank_core::{DEFAULT_TOP_RATED_TOP_N, TopRatedRequest};
use placerank_ranking::BalancedPlace;
use serde::{Deserialize, Serialize};

use crate::output::report;
use crate::sources::{CatalogSources, EngineBuilder};
use crate::{ARG_AREAS, ARG_CATALOG, ARG_DATA_DIR, ARG_TOP_N, CliError};

/// CLI arguments for the `top-rated` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank places within four buckets (restaurants, cafes, hotels and \
                 historical sites) and print an equal share of each.",
    about = "List the best places of every category"
)]
#[ortho_config(prefix = "PLACERANK")]
pub(crate) struct TopRatedArgs {
    /// Approximate number of results; each bucket receives a quarter (default 250).
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

impl TopRatedArgs {
    pub(crate) fn into_config(self) -> Result<TopRatedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(TopRatedConfig::from(merged))
    }
}

/// Resolved `top-rated` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TopRatedConfig {
    /// Engine request.
    pub(crate) request: TopRatedRequest,
    /// Catalogue inputs.
    pub(crate) sources: CatalogSources,
}

impl From<TopRatedArgs> for TopRatedConfig {
    fn from(args: TopRatedArgs) -> Self {
        Self {
            request: TopRatedRequest::new(args.top_n.unwrap_or(DEFAULT_TOP_RATED_TOP_N)),
            sources: CatalogSources::resolve(args.data_dir, args.catalog, args.areas),
        }
    }
}

pub(crate) fn run_top_rated_with(
    args: TopRatedArgs,
    builder: &dyn EngineBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = args.into_config().and_then(|config| {
        config.sources.validate_sources()?;
        execute_top_rated(&config, builder)
    });
    report(writer, outcome)
}

fn execute_top_rated(
    config: &TopRatedConfig,
    builder: &dyn EngineBuilder,
) -> Result<Vec<BalancedPlace>, CliError> {
    let engine = builder.build(&config.sources)?;
    Ok(engine.top_rated(&config.request)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<TopRatedConfig, CliError> {
    let merged = TopRatedArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(TopRatedConfig::from(merged))
}

//! Recommend command implementation for the Placerank CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placerank_core::{DEFAULT_RECOMMEND_TOP_N, RecommendRequest};
use placerank_ranking::Recommendation;
use serde::{Deserialize, Serialize};

use crate::output::report;
use crate::sources::{CatalogSources, EngineBuilder};
use crate::{
    ARG_AREA, ARG_AREAS, ARG_CATALOG, ARG_CATEGORY, ARG_DATA_DIR, ARG_KEYWORD, ARG_LATITUDE,
    ARG_LONGITUDE, ARG_MIN_RATING, ARG_PLACE_NAME, ARG_TOP_N, CliError, ENV_RECOMMEND_LATITUDE,
    ENV_RECOMMEND_LONGITUDE,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every catalogued place against the filters by similarity, \
                 proximity, rating and popularity, then print the best matches. \
                 Only one filter applies: keyword beats category, category beats \
                 place name.",
    about = "Recommend places near a position"
)]
#[ortho_config(prefix = "PLACERANK")]
pub(crate) struct RecommendArgs {
    /// Latitude of the user in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the user in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Maximum number of recommendations (default 10).
    #[arg(long = ARG_TOP_N, value_name = "count")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Keyword searched for in place descriptions.
    #[arg(long = ARG_KEYWORD, value_name = "text")]
    #[serde(default)]
    pub(crate) keyword: Option<String>,
    /// Category matched exactly, ignoring case.
    #[arg(long = ARG_CATEGORY, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Text searched for in place names.
    #[arg(long = ARG_PLACE_NAME, value_name = "text")]
    #[serde(default)]
    pub(crate) place_name: Option<String>,
    /// Drop places rated below this value on the 0-5 scale.
    #[arg(long = ARG_MIN_RATING, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    /// Only recommend places in this area.
    #[arg(long = ARG_AREA, value_name = "name")]
    #[serde(default)]
    pub(crate) area: Option<String>,
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

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecommendConfig {
    /// Validated engine request.
    pub(crate) request: RecommendRequest,
    /// Catalogue inputs.
    pub(crate) sources: CatalogSources,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_LATITUDE,
            env: ENV_RECOMMEND_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_LONGITUDE,
            env: ENV_RECOMMEND_LONGITUDE,
        })?;

        let request = RecommendRequest {
            origin: Coord {
                x: longitude,
                y: latitude,
            },
            top_n: args.top_n.unwrap_or(DEFAULT_RECOMMEND_TOP_N),
            keyword: args.keyword,
            category: args.category,
            place_name: args.place_name,
            min_rating: args.min_rating.unwrap_or(0.0),
            area: args.area,
        };
        request.validate()?;

        Ok(Self {
            request,
            sources: CatalogSources::resolve(args.data_dir, args.catalog, args.areas),
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn EngineBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let outcome = args.into_config().and_then(|config| {
        config.sources.validate_sources()?;
        execute_recommend(&config, builder)
    });
    report(writer, outcome)
}

fn execute_recommend(
    config: &RecommendConfig,
    builder: &dyn EngineBuilder,
) -> Result<Vec<Recommendation>, CliError> {
    let engine = builder.build(&config.sources)?;
    Ok(engine.recommend(&config.request)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}

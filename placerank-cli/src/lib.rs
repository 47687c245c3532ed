//! Command-line interface for querying a Placerank catalogue.
//!
//! Three subcommands mirror the engine entry points: `recommend`,
//! `top-rated` and `nearby`. Each reads a SQLite catalogue (`places.db`),
//! optionally an area table, and prints a JSON `QueryOutcome` envelope on
//! stdout. Settings layer CLI flags over `PLACERANK_*` environment variables
//! and configuration files via `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod nearby;
mod output;
mod recommend;
mod sources;
mod top_rated;

pub use error::CliError;

use nearby::{NearbyArgs, run_nearby_with};
use recommend::{RecommendArgs, run_recommend_with};
use sources::{DefaultEngineBuilder, EngineBuilder};
use top_rated::{TopRatedArgs, run_top_rated_with};

pub(crate) const ARG_LATITUDE: &str = "latitude";
pub(crate) const ARG_LONGITUDE: &str = "longitude";
pub(crate) const ARG_TOP_N: &str = "top-n";
pub(crate) const ARG_KEYWORD: &str = "keyword";
pub(crate) const ARG_CATEGORY: &str = "category";
pub(crate) const ARG_PLACE_NAME: &str = "place-name";
pub(crate) const ARG_MIN_RATING: &str = "min-rating";
pub(crate) const ARG_AREA: &str = "area";
pub(crate) const ARG_DATA_DIR: &str = "data-dir";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_AREAS: &str = "areas";
pub(crate) const ENV_RECOMMEND_LATITUDE: &str = "PLACERANK_CMDS_RECOMMEND_LATITUDE";
pub(crate) const ENV_RECOMMEND_LONGITUDE: &str = "PLACERANK_CMDS_RECOMMEND_LONGITUDE";
pub(crate) const ENV_NEARBY_LATITUDE: &str = "PLACERANK_CMDS_NEARBY_LATITUDE";
pub(crate) const ENV_NEARBY_LONGITUDE: &str = "PLACERANK_CMDS_NEARBY_LONGITUDE";

/// Default catalogue file name inside the data directory.
pub(crate) const DEFAULT_CATALOG_FILE: &str = "places.db";

/// Run the Placerank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, configuration, or the query
/// fails. Every failure except argument parsing is also reported on stdout
/// as a failure envelope.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &DefaultEngineBuilder, &mut stdout)
}

fn dispatch(
    command: Command,
    builder: &dyn EngineBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Recommend(args) => run_recommend_with(args, builder, writer),
        Command::TopRated(args) => run_top_rated_with(args, builder, writer),
        Command::Nearby(args) => run_nearby_with(args, builder, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "placerank",
    about = "Rank and recommend places from a local catalogue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend places near a position, optionally filtered.
    Recommend(RecommendArgs),
    /// List the best places of every category.
    TopRated(TopRatedArgs),
    /// List the places closest to a position.
    Nearby(NearbyArgs),
}

#[cfg(test)]
mod tests;

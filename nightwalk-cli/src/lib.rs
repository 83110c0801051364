//! Command-line interface for planning night museum tours.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod error;
mod list;
mod plan;

pub use error::CliError;

use list::{ListArgs, run_list};
use plan::{PlanArgs, run_plan};

const ARG_CATALOGUE: &str = "catalogue";
const ARG_STOPS: &str = "stops";
const ARG_START_TIME: &str = "start-time";
const ARG_WINDOW_END: &str = "window-end";
const ARG_MAX_STOPS: &str = "max-stops";
const ARG_DIRECTIONS_BASE_URL: &str = "directions-base-url";
const ENV_PLAN_CATALOGUE: &str = "NIGHTWALK_CMDS_PLAN_CATALOGUE";
const ENV_PLAN_STOPS: &str = "NIGHTWALK_CMDS_PLAN_STOPS";
const ENV_LIST_CATALOGUE: &str = "NIGHTWALK_CMDS_LIST_CATALOGUE";

/// Run the Nightwalk CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::List(args) => run_list(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nightwalk",
    about = "Plan the shortest walking tour between museums open at night",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the selected museums into the shortest tour from Dam Square.
    Plan(PlanArgs),
    /// List routable museums by distance from Dam Square.
    List(ListArgs),
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;

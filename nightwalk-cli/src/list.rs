//! List command implementation for the Nightwalk CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use nightwalk_core::{Stop, WalkingModel};
use nightwalk_data::{Catalogue, ExcludedEntry, RankedStop, dam_square};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_CATALOGUE, CliError, ENV_LIST_CATALOGUE, write_json};

/// CLI arguments for the `list` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List every museum in the catalogue that can be routed, \
                 nearest to Dam Square first, with its straight-line \
                 distance and walking time. Museums without coordinates are \
                 reported separately.",
    about = "List museums by distance"
)]
#[ortho_config(prefix = "NIGHTWALK")]
pub(crate) struct ListArgs {
    /// Path to the JSON museum catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
}

/// JSON document printed by `list`.
#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    start: &'a Stop,
    museums: Vec<RankedStop>,
    excluded: &'a [ExcludedEntry],
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_list_with(args, &mut stdout)
}

pub(crate) fn run_list_with(args: ListArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let path = merged.catalogue.ok_or(CliError::MissingArgument {
        field: ARG_CATALOGUE,
        env: ENV_LIST_CATALOGUE,
    })?;
    let catalogue = Catalogue::from_path(&path)?;
    let start = dam_square();
    let museums = catalogue.by_distance_from(&start, &WalkingModel::default())?;
    write_json(
        writer,
        &ListOutput {
            start: &start,
            museums,
            excluded: catalogue.excluded(),
        },
    )
}

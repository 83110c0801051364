//! Plan command implementation for the Nightwalk CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use nightwalk_core::{
    CancellationToken, ClockTime, DEFAULT_DIRECTIONS_BASE_URL, DirectionsLinkBuilder,
    ScheduleConfig, ScheduleReporter, SolveRequest, TourPlan, TourPlanner,
};
use nightwalk_data::{Catalogue, ExcludedEntry, dam_square};
use nightwalk_solver_exhaustive::{ExhaustiveSolver, ExhaustiveSolverConfig};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CATALOGUE, ARG_DIRECTIONS_BASE_URL, ARG_MAX_STOPS, ARG_START_TIME, ARG_STOPS,
    ARG_WINDOW_END, CliError, ENV_PLAN_CATALOGUE, ENV_PLAN_STOPS, write_json,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Order the selected museums into the shortest walking tour \
                 from Dam Square and report the time budget, whether it fits \
                 the night, and a directions link. The catalogue is a JSON \
                 array of museums with optional coordinates.",
    about = "Plan a night museum tour"
)]
#[ortho_config(prefix = "NIGHTWALK")]
pub(crate) struct PlanArgs {
    /// Path to the JSON museum catalogue.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Comma-separated museum ids to visit, e.g. "3,7,12".
    #[arg(long = ARG_STOPS, value_name = "ids")]
    #[serde(default)]
    pub(crate) stops: Option<String>,
    /// Clock time the tour starts, as HH:MM (default 19:00).
    #[arg(long = ARG_START_TIME, value_name = "HH:MM")]
    #[serde(default)]
    pub(crate) start_time: Option<String>,
    /// Clock time the tour must end by, as HH:MM (default 02:00).
    #[arg(long = ARG_WINDOW_END, value_name = "HH:MM")]
    #[serde(default)]
    pub(crate) window_end: Option<String>,
    /// Largest number of museums to order exhaustively (default 8).
    #[arg(long = ARG_MAX_STOPS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_stops: Option<usize>,
    /// Base URL of the directions service.
    #[arg(long = ARG_DIRECTIONS_BASE_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) directions_base_url: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON museum catalogue.
    pub(crate) catalogue: Utf8PathBuf,
    /// Museum ids in the order they were requested.
    pub(crate) stop_ids: Vec<u64>,
    /// Night window the tour is placed in.
    pub(crate) schedule: ScheduleConfig,
    /// Solver limits.
    pub(crate) solver: ExhaustiveSolverConfig,
    /// Directions link settings.
    pub(crate) directions: DirectionsLinkBuilder,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_PLAN_CATALOGUE,
        })?;
        let stops = args.stops.ok_or(CliError::MissingArgument {
            field: ARG_STOPS,
            env: ENV_PLAN_STOPS,
        })?;
        let stop_ids = parse_stop_ids(&stops)?;

        let defaults = ScheduleConfig::default();
        let schedule = ScheduleConfig {
            tour_start: parse_clock(args.start_time.as_deref(), ARG_START_TIME)?
                .unwrap_or(defaults.tour_start),
            window_end: parse_clock(args.window_end.as_deref(), ARG_WINDOW_END)?
                .unwrap_or(defaults.window_end),
        };

        let solver = ExhaustiveSolverConfig {
            max_stops: args
                .max_stops
                .unwrap_or(ExhaustiveSolverConfig::default().max_stops),
        };

        let base_url = args
            .directions_base_url
            .as_deref()
            .unwrap_or(DEFAULT_DIRECTIONS_BASE_URL);
        let directions = DirectionsLinkBuilder::new(base_url).map_err(|source| {
            CliError::InvalidDirectionsBaseUrl {
                field: ARG_DIRECTIONS_BASE_URL,
                source,
            }
        })?;

        Ok(Self {
            catalogue,
            stop_ids,
            schedule,
            solver,
            directions,
        })
    }
}

fn parse_stop_ids(raw: &str) -> Result<Vec<u64>, CliError> {
    raw.split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| {
            value.parse().map_err(|_| CliError::InvalidStopId {
                field: ARG_STOPS,
                value: value.to_owned(),
            })
        })
        .collect()
}

fn parse_clock(raw: Option<&str>, field: &'static str) -> Result<Option<ClockTime>, CliError> {
    raw.map(|value| {
        value
            .parse()
            .map_err(|source| CliError::InvalidClockTime { field, source })
    })
    .transpose()
}

/// JSON document printed by `plan`.
#[derive(Debug, Serialize)]
struct PlanOutput<'a> {
    #[serde(flatten)]
    plan: &'a TourPlan,
    /// Human-readable schedule summary.
    summary: String,
    /// Catalogue entries that could not be offered for routing.
    excluded: &'a [ExcludedEntry],
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_plan(&config, writer)
}

pub(crate) fn execute_plan(config: &PlanConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let catalogue = Catalogue::from_path(&config.catalogue)?;
    let start = dam_square();
    let stops = catalogue.select(&start, &config.stop_ids)?;
    let request = SolveRequest { start, stops };
    log::debug!(
        "planning {} museums from {}",
        request.stops.len(),
        config.catalogue
    );

    let planner = TourPlanner::new(ExhaustiveSolver::with_config(config.solver))
        .with_schedule(ScheduleReporter::new(config.schedule))
        .with_directions(config.directions.clone());
    let plan = planner
        .plan(&request, &CancellationToken::new())
        .map_err(|source| CliError::Solve { source })?;

    let output = PlanOutput {
        plan: &plan,
        summary: plan.schedule.to_string(),
        excluded: catalogue.excluded(),
    };
    write_json(writer, &output)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

//! Error types emitted by the Nightwalk CLI.
//!
//! Keep this error type reasonably small, as every CLI helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use nightwalk_core::{ClockTimeError, DirectionsLinkError, SolveError};
use nightwalk_data::CatalogueError;
use thiserror::Error;

/// Errors emitted by the Nightwalk CLI.
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
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A stop identifier in the selection is not a number.
    #[error("invalid stop id {value:?} in --{field}")]
    InvalidStopId {
        /// Option the identifier came from.
        field: &'static str,
        /// Offending text.
        value: String,
    },
    /// A clock time option could not be parsed.
    #[error("invalid --{field}: {source}")]
    InvalidClockTime {
        /// Option the time came from.
        field: &'static str,
        /// Underlying parse error.
        #[source]
        source: ClockTimeError,
    },
    /// The directions base URL cannot be used.
    #[error("invalid --{field}: {source}")]
    InvalidDirectionsBaseUrl {
        /// Option the URL came from.
        field: &'static str,
        /// Underlying URL error.
        #[source]
        source: DirectionsLinkError,
    },
    /// Loading or querying the museum catalogue failed.
    #[error(transparent)]
    Catalogue(Box<CatalogueError>),
    /// The solver rejected the request.
    #[error("solver failed: {source}")]
    Solve {
        /// Underlying solver error.
        source: SolveError,
    },
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

impl From<CatalogueError> for CliError {
    fn from(source: CatalogueError) -> Self {
        Self::Catalogue(Box::new(source))
    }
}

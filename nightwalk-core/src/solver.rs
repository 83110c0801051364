//! Route optimisation boundary.
//!
//! A [`Solver`] orders the stops of a [`SolveRequest`] into the tour with the
//! smallest total walking distance. Callers exclude unlocated stops before
//! solving; requests that still contain one are rejected by
//! [`SolveRequest::validate`] rather than guessed at.

use std::collections::HashSet;
use std::time::Duration;

use thiserror::Error;

use crate::{CancellationToken, Stop, Tour, TourError};

/// Parameters for a solve request.
///
/// # Examples
/// ```rust
/// use nightwalk_core::{SolveRequest, Stop};
///
/// let request = SolveRequest {
///     start: Stop::at(0, "Dam Square", 52.373055, 4.892222),
///     stops: vec![Stop::at(1, "Rijksmuseum", 52.3600, 4.8852)],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest {
    /// Fixed first stop of every candidate tour.
    pub start: Stop,
    /// Unordered stops to visit after the start.
    pub stops: Vec<Stop>,
}

impl SolveRequest {
    /// Check the preconditions every solver relies on.
    ///
    /// All stops, start included, must have a finite location and a unique
    /// identifier.
    pub fn validate(&self) -> Result<(), SolveError> {
        let mut seen = HashSet::with_capacity(self.stops.len() + 1);
        for stop in std::iter::once(&self.start).chain(&self.stops) {
            if !stop.is_routable() {
                return Err(SolveError::MissingLocation { id: stop.id });
            }
            if !seen.insert(stop.id) {
                return Err(SolveError::DuplicateStop { id: stop.id });
            }
        }
        Ok(())
    }
}

/// Diagnostic information about a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent solving.
    pub solve_time: Duration,
    /// Number of candidate orderings whose distance was evaluated.
    pub candidates_evaluated: u64,
}

/// Response from a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse {
    /// Shortest tour found, beginning at the request's start.
    pub tour: Tour,
    /// Great-circle length of `tour` in kilometres.
    pub total_distance_km: f64,
    /// Diagnostic information about the solve.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A stop lacks a usable location and cannot be routed.
    #[error("stop {id} has no usable location")]
    MissingLocation {
        /// Identifier of the unlocated stop.
        id: u64,
    },
    /// A stop identifier appeared more than once.
    #[error("stop {id} was requested more than once")]
    DuplicateStop {
        /// Identifier of the repeated stop.
        id: u64,
    },
    /// More stops were requested than the solver will search exhaustively.
    #[error("{requested} stops requested but at most {limit} are supported")]
    TooManyStops {
        /// Number of non-start stops in the request.
        requested: usize,
        /// Configured upper bound.
        limit: usize,
    },
    /// The caller cancelled the search before it completed.
    #[error("solve was cancelled")]
    Cancelled,
    /// The solver assembled an ordering that is not a valid tour.
    #[error("solver produced an invalid tour: {0}")]
    InvalidTour(#[from] TourError),
}

/// Order a request's stops into the shortest tour from its start.
///
/// Implementations must keep the start first, never repeat a stop, return
/// `[start]` when there is nothing to visit, and break distance ties in
/// favour of the ordering that comes first lexicographically by input
/// position. Long searches should poll `cancel` and return
/// [`SolveError::Cancelled`] once it is set.
/// Solvers must be `Send + Sync` to operate safely across threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a tour or an error.
    fn solve(
        &self,
        request: &SolveRequest,
        cancel: &CancellationToken,
    ) -> Result<SolveResponse, SolveError>;
}

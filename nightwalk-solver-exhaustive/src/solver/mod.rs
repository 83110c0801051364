//! `ExhaustiveSolver` implementation.
//!
//! Every ordering of the requested stops is scored against a precomputed
//! distance matrix. The first ordering in lexicographic order of input
//! positions wins ties.

use std::time::Instant;

use geo::Coord;
use nightwalk_core::{
    CancellationToken, Diagnostics, SolveError, SolveRequest, SolveResponse, Solver, Stop, Tour,
};

use crate::permutation::{DistanceMatrix, Permutations};

/// Configuration for [`ExhaustiveSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExhaustiveSolverConfig {
    /// Largest number of non-start stops the solver will search.
    ///
    /// Eight stops means 40 320 orderings, which completes well within a
    /// second. Each extra stop multiplies the work by the new stop count.
    pub max_stops: usize,
}

impl Default for ExhaustiveSolverConfig {
    fn default() -> Self {
        Self { max_stops: 8 }
    }
}

/// Solver that evaluates every permutation of the requested stops.
///
/// # Examples
/// ```rust
/// use nightwalk_core::{CancellationToken, SolveRequest, Solver, Stop};
/// use nightwalk_solver_exhaustive::ExhaustiveSolver;
///
/// let request = SolveRequest {
///     start: Stop::at(0, "Dam Square", 52.373055, 4.892222),
///     stops: vec![
///         Stop::at(1, "Rijksmuseum", 52.3600, 4.8852),
///         Stop::at(2, "Royal Palace", 52.3702, 4.8952),
///     ],
/// };
/// let response = ExhaustiveSolver::default()
///     .solve(&request, &CancellationToken::new())
///     .expect("solve succeeds");
/// assert_eq!(response.tour.ids(), vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    config: ExhaustiveSolverConfig,
}

impl ExhaustiveSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(config: ExhaustiveSolverConfig) -> Self {
        Self { config }
    }

    /// Configuration the solver was built with.
    #[must_use]
    pub const fn config(&self) -> &ExhaustiveSolverConfig {
        &self.config
    }

    fn check_size(&self, request: &SolveRequest) -> Result<(), SolveError> {
        let requested = request.stops.len();
        if requested > self.config.max_stops {
            return Err(SolveError::TooManyStops {
                requested,
                limit: self.config.max_stops,
            });
        }
        Ok(())
    }
}

impl Solver for ExhaustiveSolver {
    fn solve(
        &self,
        request: &SolveRequest,
        cancel: &CancellationToken,
    ) -> Result<SolveResponse, SolveError> {
        request.validate()?;
        self.check_size(request)?;
        let started_at = Instant::now();

        if request.stops.is_empty() {
            return Ok(SolveResponse {
                tour: Tour::starting_at(request.start.clone()),
                total_distance_km: 0.0,
                diagnostics: Diagnostics {
                    solve_time: started_at.elapsed(),
                    candidates_evaluated: 0,
                },
            });
        }

        let nodes = routable_nodes(request)?;
        let matrix = DistanceMatrix::new(&nodes);
        let best = search(&matrix, request.stops.len(), cancel)?;

        let ordered: Vec<Stop> = std::iter::once(request.start.clone())
            .chain(
                best.order
                    .iter()
                    .filter_map(|&position| request.stops.get(position).cloned()),
            )
            .collect();
        let tour = Tour::new(ordered)?;

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            candidates_evaluated: best.evaluated,
        };
        log::debug!(
            "exhaustive search over {} stops evaluated {} orderings in {:?}",
            request.stops.len(),
            diagnostics.candidates_evaluated,
            diagnostics.solve_time
        );

        Ok(SolveResponse {
            tour,
            total_distance_km: best.distance_km,
            diagnostics,
        })
    }
}

struct BestOrder {
    order: Vec<usize>,
    distance_km: f64,
    evaluated: u64,
}

fn routable_nodes(request: &SolveRequest) -> Result<Vec<Coord<f64>>, SolveError> {
    std::iter::once(&request.start)
        .chain(&request.stops)
        .map(|stop| {
            stop.routable_location()
                .ok_or(SolveError::MissingLocation { id: stop.id })
        })
        .collect()
}

fn search(
    matrix: &DistanceMatrix,
    stop_count: usize,
    cancel: &CancellationToken,
) -> Result<BestOrder, SolveError> {
    search_until(matrix, stop_count, |_| cancel.is_cancelled())
}

/// Score every ordering, asking `should_stop` before each candidate.
///
/// `should_stop` receives the number of candidates evaluated so far.
fn search_until(
    matrix: &DistanceMatrix,
    stop_count: usize,
    mut should_stop: impl FnMut(u64) -> bool,
) -> Result<BestOrder, SolveError> {
    let mut permutations = Permutations::new(stop_count);
    let mut best = BestOrder {
        order: permutations.current().to_vec(),
        distance_km: f64::INFINITY,
        evaluated: 0,
    };
    loop {
        if should_stop(best.evaluated) {
            log::debug!(
                "exhaustive search cancelled after {} orderings",
                best.evaluated
            );
            return Err(SolveError::Cancelled);
        }
        let candidate = permutations.current();
        let distance = matrix.path_from_start(candidate);
        best.evaluated += 1;
        if distance < best.distance_km {
            best.distance_km = distance;
            best.order.clone_from_slice(candidate);
        }
        if !permutations.advance() {
            return Ok(best);
        }
    }
}

#[cfg(test)]
mod tests;

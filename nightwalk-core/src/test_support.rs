//! Test-only stops and solvers shared by unit, behaviour and property tests.

use std::time::Instant;

use crate::{
    CancellationToken, Diagnostics, SolveError, SolveRequest, SolveResponse, Solver, Stop, Tour,
};

/// Dam Square, the usual starting point in Amsterdam fixtures.
#[must_use]
pub fn dam_square() -> Stop {
    Stop::at(0, "Dam Square", 52.373_055, 4.892_222)
}

/// A handful of located Amsterdam museums with ids starting at 1.
#[must_use]
pub fn amsterdam_museums() -> Vec<Stop> {
    vec![
        Stop::at(1, "Rijksmuseum", 52.3600, 4.8852),
        Stop::at(2, "Royal Palace", 52.3702, 4.8952),
        Stop::at(3, "Anne Frank House", 52.3752, 4.8840),
        Stop::at(4, "Van Gogh Museum", 52.3584, 4.8811),
        Stop::at(5, "Hermitage", 52.3653, 4.9024),
        Stop::at(6, "NEMO Science Museum", 52.3741, 4.9123),
    ]
}

/// `Solver` that visits stops in request order without optimising.
///
/// Useful for exercising callers of [`Solver`] with predictable output.
#[derive(Debug, Default, Copy, Clone)]
pub struct InputOrderSolver;

impl Solver for InputOrderSolver {
    fn solve(
        &self,
        request: &SolveRequest,
        cancel: &CancellationToken,
    ) -> Result<SolveResponse, SolveError> {
        let started_at = Instant::now();
        request.validate()?;
        if cancel.is_cancelled() {
            return Err(SolveError::Cancelled);
        }
        let stops = std::iter::once(request.start.clone())
            .chain(request.stops.iter().cloned())
            .collect();
        let tour = Tour::new(stops)?;
        Ok(SolveResponse {
            total_distance_km: tour.total_distance_km(),
            tour,
            diagnostics: Diagnostics {
                solve_time: started_at.elapsed(),
                candidates_evaluated: 1,
            },
        })
    }
}

//! Property-based tests for the exhaustive solver.
//!
//! # Invariants tested
//!
//! - **Optimality:** no ordering of the stops is shorter than the result.
//! - **Tie-breaking:** among equally short orderings, the first in
//!   lexicographic order of input positions is returned.
//! - **Completeness:** the tour starts at the start and visits every stop
//!   exactly once.
//! - **Distance consistency:** the reported distance matches the tour.


use std::collections::HashSet;

use nightwalk_core::test_support::dam_square;
use nightwalk_core::{CancellationToken, SolveRequest, Solver, Stop};
use nightwalk_solver_exhaustive::ExhaustiveSolver;
use proptest::prelude::*;

use proptest_support::{reference_shortest, stop_set_strategy};

fn solve(stops: Vec<Stop>) -> (SolveRequest, nightwalk_core::SolveResponse) {
    let request = SolveRequest {
        start: dam_square(),
        stops,
    };
    let response = ExhaustiveSolver::new()
        .solve(&request, &CancellationToken::new())
        .expect("generated requests are valid");
    (request, response)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the solver matches a brute-force reference exactly, which
    /// covers both optimality and the first-ordering tie-break.
    #[test]
    fn matches_reference_search(stops in stop_set_strategy(6)) {
        let (request, response) = solve(stops);
        let (expected_ids, expected_distance) =
            reference_shortest(&request.start, &request.stops);

        prop_assert_eq!(response.tour.ids(), expected_ids);
        prop_assert_eq!(response.total_distance_km, expected_distance);
    }

    /// Property: the tour begins at the start and visits each stop once.
    #[test]
    fn visits_every_stop_once(stops in stop_set_strategy(6)) {
        let (request, response) = solve(stops);
        let ids = response.tour.ids();

        prop_assert_eq!(ids.first().copied(), Some(request.start.id));
        prop_assert_eq!(ids.len(), request.stops.len() + 1);
        let unique: HashSet<u64> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        for stop in &request.stops {
            prop_assert!(unique.contains(&stop.id), "stop {} missing", stop.id);
        }
    }

    /// Property: the reported distance is the tour's own great-circle length.
    #[test]
    fn reported_distance_matches_tour(stops in stop_set_strategy(5)) {
        let (_, response) = solve(stops);
        prop_assert_eq!(response.total_distance_km, response.tour.total_distance_km());
        prop_assert!(response.total_distance_km.is_finite());
        prop_assert!(response.total_distance_km >= 0.0);
    }

    /// Property: duplicated locations under distinct ids tie, and input order
    /// decides which comes first.
    #[test]
    fn colocated_stops_keep_input_order(stops in stop_set_strategy(3)) {
        let doubled: Vec<Stop> = stops
            .iter()
            .flat_map(|stop| {
                let twin = Stop { id: stop.id + 100, ..stop.clone() };
                [stop.clone(), twin]
            })
            .collect();
        let (_, response) = solve(doubled);
        let ids = response.tour.ids();
        for stop in &stops {
            let first = ids.iter().position(|id| *id == stop.id);
            let twin = ids.iter().position(|id| *id == stop.id + 100);
            prop_assert!(first < twin, "stop {} should precede its twin", stop.id);
        }
    }
}

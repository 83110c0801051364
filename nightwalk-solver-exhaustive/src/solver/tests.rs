//! Tests for the `ExhaustiveSolver`.

use super::*;
use nightwalk_core::distance_km;
use nightwalk_core::test_support::{amsterdam_museums, dam_square};
use rstest::{fixture, rstest};
use std::time::Duration;

#[fixture]
fn solver() -> ExhaustiveSolver {
    ExhaustiveSolver::new()
}

fn request(stops: Vec<Stop>) -> SolveRequest {
    SolveRequest {
        start: dam_square(),
        stops,
    }
}

fn location(stop: &Stop) -> Coord<f64> {
    stop.routable_location().expect("fixture stops are located")
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "expected distance is the sum of two legs"
)]
fn dam_square_visits_royal_palace_before_rijksmuseum(solver: ExhaustiveSolver) {
    let rijksmuseum = Stop::at(1, "Rijksmuseum", 52.3600, 4.8852);
    let royal_palace = Stop::at(2, "Royal Palace", 52.3702, 4.8952);
    let expected = distance_km(location(&dam_square()), location(&royal_palace))
        + distance_km(location(&royal_palace), location(&rijksmuseum));

    let response = solver
        .solve(
            &request(vec![rijksmuseum, royal_palace]),
            &CancellationToken::new(),
        )
        .expect("solve should succeed");

    assert_eq!(response.tour.ids(), vec![0, 2, 1]);
    assert_eq!(response.total_distance_km, expected);
    assert_eq!(response.diagnostics.candidates_evaluated, 2);
}

#[rstest]
fn empty_request_returns_start_only(solver: ExhaustiveSolver) {
    let response = solver
        .solve(&request(Vec::new()), &CancellationToken::new())
        .expect("solve should succeed");

    assert_eq!(response.tour.ids(), vec![0]);
    assert_eq!(response.total_distance_km, 0.0);
    assert_eq!(response.diagnostics.candidates_evaluated, 0);
}

#[rstest]
fn empty_request_ignores_cancellation(solver: ExhaustiveSolver) {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let response = solver
        .solve(&request(Vec::new()), &cancel)
        .expect("nothing to search");
    assert_eq!(response.tour.ids(), vec![0]);
}

#[rstest]
fn single_stop_is_visited_directly(solver: ExhaustiveSolver) {
    let van_gogh = Stop::at(4, "Van Gogh Museum", 52.3584, 4.8811);
    let expected = distance_km(location(&dam_square()), location(&van_gogh));

    let response = solver
        .solve(&request(vec![van_gogh]), &CancellationToken::new())
        .expect("solve should succeed");

    assert_eq!(response.tour.ids(), vec![0, 4]);
    assert_eq!(response.total_distance_km, expected);
    assert_eq!(response.diagnostics.candidates_evaluated, 1);
}

#[rstest]
fn all_museums_evaluate_every_ordering(solver: ExhaustiveSolver) {
    let response = solver
        .solve(&request(amsterdam_museums()), &CancellationToken::new())
        .expect("solve should succeed");

    assert_eq!(response.diagnostics.candidates_evaluated, 720);
    assert_eq!(response.tour.len(), 7);
    assert_eq!(response.tour.start().id, 0);
    assert_eq!(response.total_distance_km, response.tour.total_distance_km());
}

#[rstest]
#[case::input_order(vec![1, 2], vec![0, 1, 2])]
#[case::reversed_input(vec![2, 1], vec![0, 2, 1])]
fn ties_keep_first_lexicographic_ordering(
    solver: ExhaustiveSolver,
    #[case] input_ids: Vec<u64>,
    #[case] expected: Vec<u64>,
) {
    // Mirror images about the start's meridian give equal totals either way.
    let east = Stop::at(1, "East", 0.0, 1.0);
    let west = Stop::at(2, "West", 0.0, -1.0);
    let stops = input_ids
        .iter()
        .map(|id| if *id == 1 { east.clone() } else { west.clone() })
        .collect();
    let tied = SolveRequest {
        start: Stop::at(0, "Origin", 0.0, 0.0),
        stops,
    };

    let response = solver
        .solve(&tied, &CancellationToken::new())
        .expect("solve should succeed");

    assert_eq!(response.tour.ids(), expected);
}

#[rstest]
fn cancelled_token_aborts_search(solver: ExhaustiveSolver) {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = solver.solve(&request(amsterdam_museums()), &cancel);

    assert_eq!(result, Err(SolveError::Cancelled));
}

#[rstest]
fn cancelling_from_another_thread_interrupts_a_running_search() {
    let solver = ExhaustiveSolver::with_config(ExhaustiveSolverConfig { max_stops: 11 });
    let mut stops = amsterdam_museums();
    stops.extend([
        Stop::at(7, "Stedelijk Museum", 52.3580, 4.8799),
        Stop::at(8, "Rembrandt House", 52.3694, 4.9012),
        Stop::at(9, "Moco Museum", 52.3599, 4.8813),
        Stop::at(10, "Amsterdam Museum", 52.3700, 4.8899),
        Stop::at(11, "Maritime Museum", 52.3717, 4.9152),
    ]);
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    let handle = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(20));
        canceller.cancel();
    });

    let result = solver.solve(&request(stops), &cancel);
    handle.join().expect("canceller thread finishes");

    assert_eq!(result, Err(SolveError::Cancelled));
}

fn museum_matrix() -> DistanceMatrix {
    let nodes: Vec<Coord<f64>> = std::iter::once(dam_square())
        .chain(amsterdam_museums())
        .map(|stop| location(&stop))
        .collect();
    DistanceMatrix::new(&nodes)
}

#[rstest]
fn search_checks_for_cancellation_before_every_candidate() {
    let mut polls = Vec::new();

    let best = search_until(&museum_matrix(), 6, |evaluated| {
        polls.push(evaluated);
        false
    })
    .expect("search runs to completion");

    assert_eq!(best.evaluated, 720);
    assert_eq!(polls, (0..720).collect::<Vec<u64>>());
}

#[rstest]
fn search_stops_part_way_through_when_cancelled() {
    let mut polls = 0_u64;

    let result = search_until(&museum_matrix(), 6, |evaluated| {
        polls += 1;
        evaluated == 10
    });

    assert!(matches!(result, Err(SolveError::Cancelled)));
    assert_eq!(polls, 11);
}

#[rstest]
fn too_many_stops_are_rejected_before_searching() {
    let solver = ExhaustiveSolver::with_config(ExhaustiveSolverConfig { max_stops: 3 });

    let result = solver.solve(&request(amsterdam_museums()), &CancellationToken::new());

    assert_eq!(
        result,
        Err(SolveError::TooManyStops {
            requested: 6,
            limit: 3,
        })
    );
}

#[rstest]
fn unlocated_stop_is_rejected(solver: ExhaustiveSolver) {
    let stops = vec![
        Stop::at(1, "Rijksmuseum", 52.3600, 4.8852),
        Stop::unlocated(9, "Closed Archive"),
    ];

    let result = solver.solve(&request(stops), &CancellationToken::new());

    assert_eq!(result, Err(SolveError::MissingLocation { id: 9 }));
}

#[rstest]
fn duplicate_stop_is_rejected(solver: ExhaustiveSolver) {
    let rijksmuseum = Stop::at(1, "Rijksmuseum", 52.3600, 4.8852);

    let result = solver.solve(
        &request(vec![rijksmuseum.clone(), rijksmuseum]),
        &CancellationToken::new(),
    );

    assert_eq!(result, Err(SolveError::DuplicateStop { id: 1 }));
}

#[rstest]
fn default_config_allows_eight_stops() {
    assert_eq!(ExhaustiveSolver::new().config().max_stops, 8);
}

//! Facade crate for the Nightwalk tour planner.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! solver behind a feature flag.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "solver-exhaustive")]
//! # {
//! use nightwalk::{CancellationToken, ExhaustiveSolver, SolveRequest, Stop, TourPlanner};
//!
//! let request = SolveRequest {
//!     start: Stop::at(0, "Dam Square", 52.373055, 4.892222),
//!     stops: vec![
//!         Stop::at(1, "Rijksmuseum", 52.3600, 4.8852),
//!         Stop::at(2, "Royal Palace", 52.3702, 4.8952),
//!     ],
//! };
//! let plan = TourPlanner::new(ExhaustiveSolver::default())
//!     .plan(&request, &CancellationToken::new())
//!     .expect("plan succeeds");
//! assert_eq!(plan.tour.ids(), vec![0, 2, 1]);
//! assert_eq!(plan.total_minutes, 122);
//! # }
//! ```

#![forbid(unsafe_code)]

pub use nightwalk_core::{
    CancellationToken, ClockTime, ClockTimeError, DEFAULT_DIRECTIONS_BASE_URL, Diagnostics,
    DirectionsLinkBuilder, DirectionsLinkError, EARTH_RADIUS_KM, Leg, ScheduleConfig,
    ScheduleReporter, ScheduleSummary, SolveError, SolveRequest, SolveResponse, Solver, Stop,
    Tour, TourError, TourPlan, TourPlanner, WalkingModel, directions_link, distance_km,
    format_duration, path_distance_km,
};

#[cfg(feature = "solver-exhaustive")]
pub use nightwalk_solver_exhaustive::{ExhaustiveSolver, ExhaustiveSolverConfig};

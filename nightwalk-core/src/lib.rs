//! Core domain types for the Nightwalk tour planner.
//!
//! A planning request starts from a fixed [`Stop`] and a handful of selected
//! stops. A [`Solver`] orders them into the shortest [`Tour`], after which the
//! [`WalkingModel`], [`ScheduleReporter`] and [`DirectionsLinkBuilder`] derive
//! the time budget, the night schedule and a shareable directions link.
//!
//! Everything here is request-scoped value data: nothing is cached or shared
//! between requests.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cancel;
pub mod directions;
pub mod distance;
pub mod plan;
pub mod schedule;
pub mod solver;
mod stop;
pub mod time_model;
mod tour;

pub use cancel::CancellationToken;
pub use directions::{
    DEFAULT_DIRECTIONS_BASE_URL, DirectionsLinkBuilder, DirectionsLinkError, directions_link,
};
pub use distance::{EARTH_RADIUS_KM, distance_km, path_distance_km};
pub use plan::{Leg, TourPlan, TourPlanner};
pub use schedule::{ClockTime, ClockTimeError, ScheduleConfig, ScheduleReporter, ScheduleSummary};
pub use solver::{Diagnostics, SolveError, SolveRequest, SolveResponse, Solver};
pub use stop::Stop;
pub use time_model::{WalkingModel, format_duration};
pub use tour::{Tour, TourError};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

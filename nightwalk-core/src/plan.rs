//! End-to-end tour planning.
//!
//! [`TourPlanner`] runs a [`Solver`] and derives everything a visitor needs
//! from the winning tour: per-leg walking estimates, the total time budget, the
//! night schedule and a directions link. The schedule and the link are computed
//! independently from the same tour.

use crate::{
    CancellationToken, Diagnostics, DirectionsLinkBuilder, ScheduleReporter, ScheduleSummary,
    SolveError, SolveRequest, Solver, Tour, WalkingModel, distance_km,
};

/// One walked leg between consecutive stops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Stop the leg departs from.
    pub from: u64,
    /// Stop the leg arrives at.
    pub to: u64,
    /// Great-circle length in kilometres.
    pub distance_km: f64,
    /// Estimated walking minutes including the leg allowance.
    pub walking_minutes: u32,
}

/// A solved tour with its derived time budget and directions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourPlan {
    /// Stops in visiting order, start first.
    pub tour: Tour,
    /// Walked legs in visiting order.
    pub legs: Vec<Leg>,
    /// Great-circle length of the tour in kilometres.
    pub total_distance_km: f64,
    /// Walking plus dwell minutes.
    pub total_minutes: u32,
    /// Placement of the tour on the night clock.
    pub schedule: ScheduleSummary,
    /// Directions link, absent for tours with fewer than two stops.
    pub directions_link: Option<String>,
    /// Diagnostic information from the solver.
    pub diagnostics: Diagnostics,
}

/// Plans tours with a solver and the derived-estimate settings.
///
/// # Examples
/// ```
/// use nightwalk_core::{
///     CancellationToken, Diagnostics, SolveError, SolveRequest, SolveResponse, Solver, Stop,
///     Tour, TourPlanner,
/// };
///
/// /// Visits the single requested stop.
/// struct OneStopSolver;
///
/// impl Solver for OneStopSolver {
///     fn solve(
///         &self,
///         request: &SolveRequest,
///         _cancel: &CancellationToken,
///     ) -> Result<SolveResponse, SolveError> {
///         let mut stops = vec![request.start.clone()];
///         stops.extend(request.stops.iter().take(1).cloned());
///         let tour = Tour::new(stops)?;
///         Ok(SolveResponse {
///             total_distance_km: tour.total_distance_km(),
///             tour,
///             diagnostics: Diagnostics::default(),
///         })
///     }
/// }
///
/// # fn main() -> Result<(), SolveError> {
/// let planner = TourPlanner::new(OneStopSolver);
/// let request = SolveRequest {
///     start: Stop::at(0, "Dam Square", 52.373055, 4.892222),
///     stops: vec![Stop::at(2, "Royal Palace", 52.3702, 4.8952)],
/// };
/// let plan = planner.plan(&request, &CancellationToken::new())?;
///
/// assert_eq!(plan.total_minutes, 9 + 45);
/// assert!(plan.schedule.is_feasible());
/// assert!(plan.directions_link.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TourPlanner<S> {
    solver: S,
    walking: WalkingModel,
    schedule: ScheduleReporter,
    links: DirectionsLinkBuilder,
}

impl<S: Solver> TourPlanner<S> {
    /// Construct a planner with default walking, schedule and link settings.
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            walking: WalkingModel::default(),
            schedule: ScheduleReporter::default(),
            links: DirectionsLinkBuilder::default(),
        }
    }

    /// Replace the walking model.
    #[must_use]
    pub fn with_walking_model(mut self, walking: WalkingModel) -> Self {
        self.walking = walking;
        self
    }

    /// Replace the schedule reporter.
    #[must_use]
    pub fn with_schedule(mut self, schedule: ScheduleReporter) -> Self {
        self.schedule = schedule;
        self
    }

    /// Replace the directions link builder.
    #[must_use]
    pub fn with_directions(mut self, links: DirectionsLinkBuilder) -> Self {
        self.links = links;
        self
    }

    /// Solve `request` and derive the plan for the winning tour.
    pub fn plan(
        &self,
        request: &SolveRequest,
        cancel: &CancellationToken,
    ) -> Result<TourPlan, SolveError> {
        let response = self.solver.solve(request, cancel)?;
        let tour = response.tour;
        let total_minutes = self.walking.total_tour_minutes(&tour);
        let schedule = self.schedule.report(total_minutes);
        let directions_link = self.links.link(&tour);
        log::info!(
            "planned {} stops over {:.2} km in {total_minutes} minutes",
            tour.len(),
            response.total_distance_km
        );
        Ok(TourPlan {
            legs: self.legs(&tour),
            tour,
            total_distance_km: response.total_distance_km,
            total_minutes,
            schedule,
            directions_link,
            diagnostics: response.diagnostics,
        })
    }

    fn legs(&self, tour: &Tour) -> Vec<Leg> {
        tour.stops()
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => {
                    let distance = distance_km(from.routable_location()?, to.routable_location()?);
                    Some(Leg {
                        from: from.id,
                        to: to.id,
                        distance_km: distance,
                        walking_minutes: self.walking.walking_minutes(distance),
                    })
                }
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::InputOrderSolver;
    use crate::{ClockTime, ScheduleConfig, Stop};
    use rstest::{fixture, rstest};

    #[fixture]
    fn request() -> SolveRequest {
        SolveRequest {
            start: Stop::at(0, "Dam Square", 52.373055, 4.892222),
            stops: vec![
                Stop::at(2, "Royal Palace", 52.3702, 4.8952),
                Stop::at(1, "Rijksmuseum", 52.3600, 4.8852),
            ],
        }
    }

    #[rstest]
    fn plan_derives_legs_and_totals(request: SolveRequest) {
        let plan = TourPlanner::new(InputOrderSolver)
            .plan(&request, &CancellationToken::new())
            .expect("valid request");
        let minutes: Vec<u32> = plan.legs.iter().map(|leg| leg.walking_minutes).collect();
        assert_eq!(minutes, vec![9, 23]);
        assert_eq!(plan.total_minutes, 9 + 23 + 2 * 45);
        assert_eq!(
            plan.schedule.to_string(),
            "Estimated tour time: 2h 2m\nStart: 19:00\nEnd: 21:02"
        );
    }

    #[rstest]
    fn start_only_plan_has_no_link(mut request: SolveRequest) {
        request.stops.clear();
        let plan = TourPlanner::new(InputOrderSolver)
            .plan(&request, &CancellationToken::new())
            .expect("valid request");
        assert_eq!(plan.tour.len(), 1);
        assert!(plan.legs.is_empty());
        assert_eq!(plan.total_minutes, 0);
        assert_eq!(plan.directions_link, None);
    }

    #[rstest]
    fn configured_settings_flow_into_plan(request: SolveRequest) {
        let late = ScheduleConfig {
            tour_start: ClockTime::new(0, 30).expect("valid"),
            ..ScheduleConfig::default()
        };
        let plan = TourPlanner::new(InputOrderSolver)
            .with_schedule(ScheduleReporter::new(late))
            .with_directions(
                DirectionsLinkBuilder::new("https://maps.example.org/dir/").expect("valid"),
            )
            .plan(&request, &CancellationToken::new())
            .expect("valid request");
        assert!(!plan.schedule.is_feasible());
        assert!(
            plan.directions_link
                .is_some_and(|link| link.starts_with("https://maps.example.org/dir/"))
        );
    }

    #[rstest]
    fn solver_errors_are_propagated(mut request: SolveRequest) {
        request.stops.push(Stop::unlocated(7, "Archive"));
        let err = TourPlanner::new(InputOrderSolver)
            .plan(&request, &CancellationToken::new())
            .expect_err("unlocated stop");
        assert_eq!(err, SolveError::MissingLocation { id: 7 });
    }
}

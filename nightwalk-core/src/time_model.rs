//! Walking-time estimates for legs and whole tours.
//!
//! Legs are walked at a constant speed with a fixed allowance for crossings
//! and traffic lights. Every stop after the start adds a fixed dwell time.

use crate::{Tour, distance_km};

/// Parameters for converting distances into elapsed minutes.
///
/// # Examples
/// ```
/// use nightwalk_core::WalkingModel;
///
/// let model = WalkingModel::default();
/// // 2 km at 4 km/h is 30 minutes, plus the 3-minute leg allowance.
/// assert_eq!(model.walking_minutes(2.0), 33);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkingModel {
    /// Constant walking speed.
    pub speed_kmh: f64,
    /// Minutes added to every leg for crossings and delays.
    pub leg_allowance_minutes: u32,
    /// Minutes spent at every stop after the start.
    pub dwell_minutes: u32,
}

impl Default for WalkingModel {
    fn default() -> Self {
        Self {
            speed_kmh: 4.0,
            leg_allowance_minutes: 3,
            dwell_minutes: 45,
        }
    }
}

impl WalkingModel {
    /// Minutes needed to walk `distance_km`, rounded half away from zero,
    /// plus the leg allowance.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "minutes are a rounded, clamped float converted with a saturating cast"
    )]
    pub fn walking_minutes(&self, distance_km: f64) -> u32 {
        let minutes = (distance_km / self.speed_kmh * 60.0).round().max(0.0);
        (minutes as u32).saturating_add(self.leg_allowance_minutes)
    }

    /// Total elapsed minutes for `tour`: walking time for every leg plus the
    /// dwell time at each stop after the start.
    ///
    /// Legs touching an unlocated stop contribute nothing. A tour that only
    /// contains its start takes zero minutes.
    #[must_use]
    pub fn total_tour_minutes(&self, tour: &Tour) -> u32 {
        tour.stops()
            .windows(2)
            .filter_map(|leg| match leg {
                [from, to] => from.routable_location().zip(to.routable_location()),
                _ => None,
            })
            .map(|(from, to)| {
                self.walking_minutes(distance_km(from, to))
                    .saturating_add(self.dwell_minutes)
            })
            .fold(0_u32, u32::saturating_add)
    }
}

/// Render a minute count as `"{hours}h {minutes}m"`.
///
/// # Examples
/// ```
/// use nightwalk_core::format_duration;
///
/// assert_eq!(format_duration(165), "2h 45m");
/// assert_eq!(format_duration(45), "0h 45m");
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "splitting minutes into whole hours is intentional"
)]
pub fn format_duration(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

//! Night schedules for planned tours.
//!
//! A tour starts at a configurable clock time and must finish inside the
//! operating window that runs from the start until [`ScheduleConfig::window_end`]
//! (19:00 to 02:00 by default). Tours that would still be running afterwards
//! are reported as [`ScheduleSummary::Infeasible`] rather than failing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::format_duration;

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A wall-clock time of day with minute precision.
///
/// Parsed from and displayed as `"HH:MM"` in 24-hour notation.
///
/// # Examples
/// ```
/// use nightwalk_core::ClockTime;
///
/// # fn main() -> Result<(), nightwalk_core::ClockTimeError> {
/// let start: ClockTime = "19:00".parse()?;
/// assert_eq!(start.add_minutes(420).to_string(), "02:00");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct ClockTime {
    minutes_since_midnight: u16,
}

/// Errors returned when building or parsing a [`ClockTime`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockTimeError {
    /// The text was not of the form `HH:MM`.
    #[error("clock time {input:?} is not of the form HH:MM")]
    Malformed {
        /// Rejected input.
        input: String,
    },
    /// Hour or minute fell outside a single day.
    #[error("clock time {hour:02}:{minute:02} is out of range")]
    OutOfRange {
        /// Requested hour.
        hour: u16,
        /// Requested minute.
        minute: u16,
    },
}

impl ClockTime {
    /// Midnight.
    pub const MIDNIGHT: Self = Self {
        minutes_since_midnight: 0,
    };

    /// Validates and constructs a [`ClockTime`].
    pub const fn new(hour: u16, minute: u16) -> Result<Self, ClockTimeError> {
        if hour >= 24 || minute >= MINUTES_PER_HOUR {
            return Err(ClockTimeError::OutOfRange { hour, minute });
        }
        Ok(Self {
            minutes_since_midnight: hour * MINUTES_PER_HOUR + minute,
        })
    }

    #[expect(
        clippy::integer_division,
        reason = "hours are whole divisions of the minute count"
    )]
    const fn hour(self) -> u16 {
        self.minutes_since_midnight / MINUTES_PER_HOUR
    }

    #[expect(
        clippy::integer_division_remainder_used,
        reason = "minutes past the hour are a remainder"
    )]
    const fn minute(self) -> u16 {
        self.minutes_since_midnight % MINUTES_PER_HOUR
    }

    /// The time `minutes` later, wrapping past midnight.
    #[must_use]
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::cast_possible_truncation,
        reason = "the remainder is below MINUTES_PER_DAY and fits in u16"
    )]
    pub const fn add_minutes(self, minutes: u32) -> Self {
        let day = MINUTES_PER_DAY as u32;
        let wrapped = (self.minutes_since_midnight as u32 + minutes % day) % day;
        Self {
            minutes_since_midnight: wrapped as u16,
        }
    }

    /// Whether `self` lies in the half-open clock interval `[from, until)`,
    /// which may wrap past midnight.
    const fn is_within(self, from: Self, until: Self) -> bool {
        let now = self.minutes_since_midnight;
        let lower = from.minutes_since_midnight;
        let upper = until.minutes_since_midnight;
        if lower <= upper {
            lower <= now && now < upper
        } else {
            now >= lower || now < upper
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = || ClockTimeError::Malformed {
            input: input.to_owned(),
        };
        let (hour, minute) = input.trim().split_once(':').ok_or_else(malformed)?;
        let is_field = |field: &str, max_len: usize| {
            !field.is_empty() && field.len() <= max_len && field.bytes().all(|b| b.is_ascii_digit())
        };
        if !is_field(hour, 2) || minute.len() != 2 || !is_field(minute, 2) {
            return Err(malformed());
        }
        let hour = hour.parse().map_err(|_| malformed())?;
        let minute = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

/// Clock settings for [`ScheduleReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleConfig {
    /// Clock time at which every tour begins; also opens the operating window.
    pub tour_start: ClockTime,
    /// Clock time by which the tour must be over.
    pub window_end: ClockTime,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            tour_start: ClockTime {
                minutes_since_midnight: 19 * MINUTES_PER_HOUR,
            },
            window_end: ClockTime {
                minutes_since_midnight: 2 * MINUTES_PER_HOUR,
            },
        }
    }
}

/// Outcome of scheduling a tour inside the operating window.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "status", rename_all = "snake_case")
)]
pub enum ScheduleSummary {
    /// The tour finishes inside the window.
    Feasible {
        /// Clock time the tour begins.
        start: ClockTime,
        /// Clock time the tour ends.
        end: ClockTime,
        /// Total elapsed minutes.
        total_minutes: u32,
    },
    /// The tour would still be running after the window closes.
    Infeasible {
        /// Clock time the window closes.
        window_end: ClockTime,
        /// Total elapsed minutes.
        total_minutes: u32,
    },
}

impl ScheduleSummary {
    /// Whether the tour fits inside the operating window.
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    /// Total elapsed minutes that were scheduled.
    #[must_use]
    pub const fn total_minutes(&self) -> u32 {
        match self {
            Self::Feasible { total_minutes, .. } | Self::Infeasible { total_minutes, .. } => {
                *total_minutes
            }
        }
    }
}

impl fmt::Display for ScheduleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feasible {
                start,
                end,
                total_minutes,
            } => write!(
                f,
                "Estimated tour time: {}\nStart: {start}\nEnd: {end}",
                format_duration(*total_minutes)
            ),
            Self::Infeasible { window_end, .. } => write!(
                f,
                "Your tour will extend past {window_end}. Consider reducing the number of stops."
            ),
        }
    }
}

/// Places tour durations on the night clock.
///
/// # Examples
/// ```
/// use nightwalk_core::{ScheduleConfig, ScheduleReporter};
///
/// let reporter = ScheduleReporter::new(ScheduleConfig::default());
///
/// let summary = reporter.report(122);
/// assert!(summary.is_feasible());
/// assert_eq!(summary.to_string(), "Estimated tour time: 2h 2m\nStart: 19:00\nEnd: 21:02");
///
/// assert!(!reporter.report(420).is_feasible());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleReporter {
    config: ScheduleConfig,
}

impl ScheduleReporter {
    /// Construct a reporter for the given clock settings.
    #[must_use]
    pub const fn new(config: ScheduleConfig) -> Self {
        Self { config }
    }

    /// The clock settings in use.
    #[must_use]
    pub const fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Summarise a tour lasting `total_minutes`.
    ///
    /// The tour is infeasible when its end time falls between the window end
    /// (inclusive) and the tour start (exclusive), or when it lasts a full day
    /// or more.
    #[must_use]
    pub fn report(&self, total_minutes: u32) -> ScheduleSummary {
        let ScheduleConfig {
            tour_start,
            window_end,
        } = self.config;
        let end = tour_start.add_minutes(total_minutes);
        let spans_a_day = total_minutes >= u32::from(MINUTES_PER_DAY);
        if spans_a_day || end.is_within(window_end, tour_start) {
            log::debug!(
                "tour of {total_minutes} minutes from {tour_start} ends at {end}, past {window_end}"
            );
            return ScheduleSummary::Infeasible {
                window_end,
                total_minutes,
            };
        }
        ScheduleSummary::Feasible {
            start: tour_start,
            end,
            total_minutes,
        }
    }
}

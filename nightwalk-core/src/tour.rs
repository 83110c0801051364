//! Ordered walks beginning at a fixed start.

use std::collections::HashSet;

use geo::Coord;
use thiserror::Error;

use crate::{Stop, path_distance_km};

/// An ordered, non-empty sequence of stops whose first element is the start.
///
/// Stop identifiers never repeat within a tour.
///
/// # Examples
/// ```
/// use nightwalk_core::{Stop, Tour};
///
/// # fn main() -> Result<(), nightwalk_core::TourError> {
/// let start = Stop::at(0, "Dam Square", 52.373055, 4.892222);
/// let museum = Stop::at(1, "Rijksmuseum", 52.3600, 4.8852);
/// let tour = Tour::new(vec![start, museum])?;
///
/// assert_eq!(tour.start().name, "Dam Square");
/// assert_eq!(tour.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Stop>", into = "Vec<Stop>")
)]
pub struct Tour {
    stops: Vec<Stop>,
}

/// Errors returned by [`Tour::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// No stops were supplied.
    #[error("tour must contain at least the start stop")]
    Empty,
    /// A stop identifier appeared more than once.
    #[error("stop {id} appears more than once in the tour")]
    DuplicateStop {
        /// Identifier of the repeated stop.
        id: u64,
    },
}

impl Tour {
    /// Validates and constructs a [`Tour`].
    pub fn new(stops: Vec<Stop>) -> Result<Self, TourError> {
        if stops.is_empty() {
            return Err(TourError::Empty);
        }
        let mut seen = HashSet::with_capacity(stops.len());
        if let Some(repeat) = stops.iter().find(|stop| !seen.insert(stop.id)) {
            return Err(TourError::DuplicateStop { id: repeat.id });
        }
        Ok(Self { stops })
    }

    /// Construct the trivial tour that only visits `start`.
    #[must_use]
    pub fn starting_at(start: Stop) -> Self {
        Self { stops: vec![start] }
    }

    /// Return a new tour with `stop` appended to the end.
    ///
    /// # Examples
    /// ```
    /// use nightwalk_core::{Stop, Tour, TourError};
    ///
    /// let tour = Tour::starting_at(Stop::at(0, "Dam Square", 52.373055, 4.892222));
    /// let longer = tour.with_stop(Stop::at(1, "Rijksmuseum", 52.36, 4.8852))?;
    /// assert_eq!(longer.len(), 2);
    ///
    /// let err = longer
    ///     .with_stop(Stop::at(1, "Rijksmuseum", 52.36, 4.8852))
    ///     .unwrap_err();
    /// assert_eq!(err, TourError::DuplicateStop { id: 1 });
    /// # Ok::<(), TourError>(())
    /// ```
    pub fn with_stop(&self, stop: Stop) -> Result<Self, TourError> {
        let mut stops = self.stops.clone();
        stops.push(stop);
        Self::new(stops)
    }

    /// The fixed starting stop.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "`new` and `starting_at` both guarantee at least one stop"
    )]
    pub fn start(&self) -> &Stop {
        &self.stops[0]
    }

    /// All stops in visiting order, start included.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stops visited after the start.
    #[must_use]
    pub fn visits(&self) -> &[Stop] {
        self.stops.get(1..).unwrap_or_default()
    }

    /// Number of stops including the start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Identifiers in visiting order.
    #[must_use]
    pub fn ids(&self) -> Vec<u64> {
        self.stops.iter().map(|stop| stop.id).collect()
    }

    /// Routable coordinates in visiting order; unlocated stops are skipped.
    #[must_use]
    pub fn coordinates(&self) -> Vec<Coord<f64>> {
        self.stops
            .iter()
            .filter_map(Stop::routable_location)
            .collect()
    }

    /// Total great-circle length of the tour in kilometres.
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        path_distance_km(&self.coordinates())
    }

    /// Consume the tour and return its stops.
    #[must_use]
    pub fn into_stops(self) -> Vec<Stop> {
        self.stops
    }
}

impl TryFrom<Vec<Stop>> for Tour {
    type Error = TourError;

    fn try_from(stops: Vec<Stop>) -> Result<Self, Self::Error> {
        Self::new(stops)
    }
}

impl From<Tour> for Vec<Stop> {
    fn from(tour: Tour) -> Self {
        tour.stops
    }
}

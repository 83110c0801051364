//! Shareable walking-directions links for planned tours.
//!
//! Links follow the path-segment waypoint scheme
//! `https://<service>/dir/<lat1>,<lng1>/<lat2>,<lng2>/...`, start first.

use thiserror::Error;
use url::Url;

use crate::{Stop, Tour};

/// Directions service used unless another base URL is configured.
pub const DEFAULT_DIRECTIONS_BASE_URL: &str = "https://www.google.com/maps/dir/";

/// Errors returned by [`DirectionsLinkBuilder::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectionsLinkError {
    /// The base URL could not be parsed.
    #[error("invalid directions base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    /// The base URL cannot carry path segments, e.g. `mailto:` URLs.
    #[error("directions base URL {base_url:?} cannot carry waypoints")]
    CannotBeABase {
        /// Rejected base URL.
        base_url: String,
    },
}

/// Renders ordered stops into a directions-service URL.
///
/// # Examples
/// ```
/// use nightwalk_core::{DirectionsLinkBuilder, Stop, Tour};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tour = Tour::new(vec![
///     Stop::at(0, "Dam Square", 52.373055, 4.892222),
///     Stop::at(2, "Royal Palace", 52.3702, 4.8952),
/// ])?;
/// let link = DirectionsLinkBuilder::default().link(&tour);
///
/// assert_eq!(
///     link.as_deref(),
///     Some("https://www.google.com/maps/dir/52.373055,4.892222/52.3702,4.8952")
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsLinkBuilder {
    base_url: Url,
}

impl Default for DirectionsLinkBuilder {
    #[expect(
        clippy::expect_used,
        reason = "DEFAULT_DIRECTIONS_BASE_URL is a constant absolute URL"
    )]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_DIRECTIONS_BASE_URL)
                .expect("default directions base URL parses"),
        }
    }
}

impl DirectionsLinkBuilder {
    /// Validates and constructs a builder for another directions service.
    pub fn new(base_url: &str) -> Result<Self, DirectionsLinkError> {
        let parsed = Url::parse(base_url)?;
        if parsed.cannot_be_a_base() {
            return Err(DirectionsLinkError::CannotBeABase {
                base_url: base_url.to_owned(),
            });
        }
        Ok(Self { base_url: parsed })
    }

    /// The base URL waypoints are appended to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Directions for `tour`, or `None` when it has fewer than two stops.
    #[must_use]
    pub fn link(&self, tour: &Tour) -> Option<String> {
        self.link_for(tour.stops())
    }

    /// Directions through `stops` in the given order.
    ///
    /// Returns `None` for fewer than two stops. Stops without a usable
    /// location are skipped; if none remain, no link is produced. Each
    /// waypoint is rendered as `"{lat},{lng}"` and percent-encoded as a path
    /// segment.
    #[must_use]
    pub fn link_for(&self, stops: &[Stop]) -> Option<String> {
        if stops.len() < 2 {
            return None;
        }
        let waypoints: Vec<String> = stops
            .iter()
            .filter_map(Stop::routable_location)
            .map(|coord| format!("{},{}", coord.y, coord.x))
            .collect();
        if waypoints.is_empty() {
            return None;
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(&waypoints);
        Some(url.into())
    }
}

/// Directions for `tour` through the default service.
///
/// # Examples
/// ```
/// use nightwalk_core::{Stop, Tour, directions::directions_link};
///
/// let tour = Tour::starting_at(Stop::at(0, "Dam Square", 52.373055, 4.892222));
/// assert_eq!(directions_link(&tour), None);
/// ```
#[must_use]
pub fn directions_link(tour: &Tour) -> Option<String> {
    DirectionsLinkBuilder::default().link(tour)
}

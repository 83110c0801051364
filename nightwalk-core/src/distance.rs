//! Great-circle distances between coordinates.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Inputs are not validated: non-finite coordinates
//! produce non-finite distances.

use geo::Coord;

/// Mean Earth radius used by every distance in the planner.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two WGS84 coordinates.
///
/// The result is symmetric and zero for identical points.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use nightwalk_core::distance_km;
///
/// let dam = Coord { x: 4.892222, y: 52.373055 };
/// let rijks = Coord { x: 4.8852, y: 52.3600 };
///
/// let there = distance_km(dam, rijks);
/// assert!((there - 1.5279).abs() < 1e-3);
/// assert_eq!(there, distance_km(rijks, dam));
/// assert_eq!(distance_km(dam, dam), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let half_d_lat = (b.y - a.y).to_radians() / 2.0;
    let half_d_lng = (b.x - a.x).to_radians() / 2.0;
    let h = half_d_lat.sin().powi(2) + lat_a.cos() * lat_b.cos() * half_d_lng.sin().powi(2);
    let central_angle = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * central_angle
}

/// Sum of consecutive leg distances along `path`.
///
/// Paths with fewer than two points have length zero.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "path length accumulates floating-point leg distances"
)]
pub fn path_distance_km(path: &[Coord<f64>]) -> f64 {
    path.windows(2)
        .filter_map(|leg| match leg {
            [from, to] => Some(distance_km(*from, *to)),
            _ => None,
        })
        .fold(0.0, |total, leg| total + leg)
}

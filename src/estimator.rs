//! Straight-line route synthesis with great-circle distance and a constant
//! speed travel time. No road network is involved: the path is a planar
//! interpolation in degree space and is only a visual proxy for short,
//! intra-city trips.

use crate::entities::{Coordinates, RouteEstimate, RouteOptions, RoutePath};
use crate::error::Error;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[tracing::instrument(level = "debug")]
pub fn estimate_route(
    origin: &Coordinates,
    destination: &Coordinates,
    options: &RouteOptions,
) -> Result<RouteEstimate, Error> {
    options.validate()?;
    origin.validate()?;
    destination.validate()?;

    // validate() bounds steps to 1..=MAX_STEPS
    let path = interpolate_path(origin, destination, options.steps as usize);
    let distance_km = haversine_distance_km(origin, destination);
    let duration_minutes = estimate_minutes(distance_km, options.average_speed_kmh);

    tracing::debug!(
        distance_km,
        path_km = path_length_km(&path),
        duration_minutes,
        "estimated route"
    );

    Ok(RouteEstimate {
        path,
        distance_km,
        distance_label: format_distance(distance_km),
        duration_minutes,
        duration_label: format_duration(duration_minutes),
    })
}

/// Returns `steps + 1` evenly spaced points from `origin` to `destination`.
pub fn interpolate_path(origin: &Coordinates, destination: &Coordinates, steps: usize) -> RoutePath {
    if steps == 0 {
        return RoutePath::new(vec![*origin]);
    }

    let delta_lat = (destination.latitude - origin.latitude) / steps as f64;
    let delta_lng = (destination.longitude - origin.longitude) / steps as f64;

    let mut points: Vec<Coordinates> = (0..steps)
        .map(|i| Coordinates {
            latitude: origin.latitude + delta_lat * i as f64,
            longitude: origin.longitude + delta_lng * i as f64,
        })
        .collect();

    // pinned so the last point is exactly the destination, not origin + delta * steps
    points.push(*destination);

    RoutePath::new(points)
}

pub fn haversine_distance_km(origin: &Coordinates, destination: &Coordinates) -> f64 {
    let d_lat = (destination.latitude - origin.latitude).to_radians();
    let d_lng = (destination.longitude - origin.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + origin.latitude.to_radians().cos()
            * destination.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2);
    // rounding can push near-antipodal pairs just past 1.0
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Sum of the great-circle lengths of the path's segments.
///
/// Diverges from the endpoint distance as routes get longer, because the
/// path itself is interpolated in flat degree space.
pub fn path_length_km(path: &RoutePath) -> f64 {
    path.line_string()
        .lines()
        .map(|line| {
            haversine_distance_km(&line.start_point().into(), &line.end_point().into())
        })
        .sum()
}

pub fn estimate_minutes(distance_km: f64, average_speed_kmh: f64) -> i64 {
    (distance_km / average_speed_kmh * 60.0).round() as i64
}

pub fn format_duration(minutes: i64) -> String {
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{} h {} min", minutes / 60, minutes % 60)
    }
}

pub fn format_distance(distance_km: f64) -> String {
    format!("{:.2} km", distance_km)
}

use geo_types::LineString;
use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::Error;

pub const DEFAULT_STEPS: i64 = 50;
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 30.0;
pub const MAX_STEPS: i64 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    pub steps: i64,
    pub average_speed_kmh: f64,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            average_speed_kmh: DEFAULT_AVERAGE_SPEED_KMH,
        }
    }
}

impl RouteOptions {
    pub fn new(steps: i64, average_speed_kmh: f64) -> Result<Self, Error> {
        let options = Self {
            steps,
            average_speed_kmh,
        };
        options.validate()?;

        Ok(options)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.steps <= 0 {
            return Err(Error::InvalidConfiguration(format!(
                "steps must be positive, got {}",
                self.steps
            )));
        }

        if self.steps > MAX_STEPS {
            return Err(Error::InvalidConfiguration(format!(
                "steps must not exceed {}, got {}",
                MAX_STEPS, self.steps
            )));
        }

        if !self.average_speed_kmh.is_finite() || self.average_speed_kmh <= 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "average speed must be a positive number of km/h, got {}",
                self.average_speed_kmh
            )));
        }

        Ok(())
    }
}

/// Planar interpolation between two endpoints. Not a road route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(Vec<Coordinates>);

impl RoutePath {
    pub fn new(points: Vec<Coordinates>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Coordinates] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&Coordinates> {
        self.0.first()
    }

    pub fn last(&self) -> Option<&Coordinates> {
        self.0.last()
    }

    pub fn line_string(&self) -> LineString<f64> {
        self.0
            .iter()
            .map(|point| (point.longitude, point.latitude))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimate {
    pub path: RoutePath,
    pub distance_km: f64,
    pub distance_label: String,
    pub duration_minutes: i64,
    pub duration_label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_delivery_settings() {
        let options = RouteOptions::default();

        assert_eq!(options.steps, 50);
        assert_eq!(options.average_speed_kmh, 30.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn rejects_zero_and_negative() {
        for (steps, speed) in [(0, 30.0), (-5, 30.0), (50, 0.0), (50, -12.0)] {
            assert!(matches!(
                RouteOptions::new(steps, speed),
                Err(Error::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn rejects_non_finite_speed() {
        assert!(RouteOptions::new(50, f64::NAN).is_err());
        assert!(RouteOptions::new(50, f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_oversized_steps() {
        assert!(RouteOptions::new(MAX_STEPS, 30.0).is_ok());
        assert!(RouteOptions::new(MAX_STEPS + 1, 30.0).is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let options: RouteOptions = serde_json::from_str(r#"{"steps": 10}"#).unwrap();

        assert_eq!(options.steps, 10);
        assert_eq!(options.average_speed_kmh, DEFAULT_AVERAGE_SPEED_KMH);
    }

    #[test]
    fn path_serializes_as_plain_list() {
        let path = RoutePath::new(vec![Coordinates {
            latitude: 1.0,
            longitude: 2.0,
        }]);

        let value = serde_json::to_value(&path).unwrap();
        assert_eq!(value, serde_json::json!([{"latitude": 1.0, "longitude": 2.0}]));
    }
}

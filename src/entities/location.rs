use chrono::{DateTime, Utc};
use geo_types::Point;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A geographic position in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, Error> {
        let coordinates = Self {
            latitude,
            longitude,
        };
        coordinates.validate()?;

        Ok(coordinates)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidCoordinate(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }

        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidCoordinate(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            )));
        }

        Ok(())
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.longitude, coordinates.latitude)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Self {
            latitude: point.y(),
            longitude: point.x(),
        }
    }
}

/// One reading from a location provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub coordinates: Coordinates,
    pub accuracy_m: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(coordinates: Coordinates, accuracy_m: Option<f64>) -> Self {
        Self {
            coordinates,
            accuracy_m,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(10.7769, 106.7009).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            Coordinates::new(91.0, 0.0),
            Err(Error::InvalidCoordinate(_))
        ));
        assert!(matches!(
            Coordinates::new(0.0, 181.0),
            Err(Error::InvalidCoordinate(_))
        ));
        assert!(matches!(
            Coordinates::new(-90.5, 0.0),
            Err(Error::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
        assert!(Coordinates::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn point_uses_longitude_as_x() {
        let coordinates = Coordinates::new(10.7769, 106.7009).unwrap();
        let point: Point<f64> = coordinates.into();

        assert_eq!(point.x(), 106.7009);
        assert_eq!(point.y(), 10.7769);
        assert_eq!(Coordinates::from(point), coordinates);
    }
}

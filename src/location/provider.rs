use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, LocationFix};
use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Device location services as seen by the application.
///
/// `current_position` fails with `Error::PermissionDenied` when access was
/// refused and with `Error::LocationUnavailable` for transient failures.
#[async_trait]
pub trait LocationProvider {
    async fn request_permission(&self) -> Result<PermissionStatus, Error>;
    async fn current_position(&self) -> Result<LocationFix, Error>;
}

pub type DynLocationProvider = Arc<dyn LocationProvider + Send + Sync>;

/// Always reports the same position.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    coordinates: Coordinates,
    permission: PermissionStatus,
}

impl FixedLocationProvider {
    pub fn new(coordinates: Coordinates) -> Result<Self, Error> {
        coordinates.validate()?;

        Ok(Self {
            coordinates,
            permission: PermissionStatus::Granted,
        })
    }

    pub fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_permission(&self) -> Result<PermissionStatus, Error> {
        Ok(self.permission)
    }

    async fn current_position(&self) -> Result<LocationFix, Error> {
        if self.permission == PermissionStatus::Denied {
            return Err(Error::PermissionDenied);
        }

        Ok(LocationFix::new(self.coordinates, Some(0.0)))
    }
}

pub const DEFAULT_SIMULATED_STEP_DEG: f64 = 0.0001;
const SIMULATED_ACCURACY_M: f64 = 5.0;

/// Random walk around a starting point, for running without a device.
#[derive(Debug)]
pub struct SimulatedLocationProvider {
    position: Mutex<Coordinates>,
    step: Normal<f64>,
}

impl SimulatedLocationProvider {
    pub fn new(start: Coordinates, step_deg: f64) -> Result<Self, Error> {
        start.validate()?;

        let step = Normal::new(0.0, step_deg).map_err(|err| {
            Error::InvalidConfiguration(format!("simulated step {}: {}", step_deg, err))
        })?;

        Ok(Self {
            position: Mutex::new(start),
            step,
        })
    }

    fn advance(&self) -> Result<Coordinates, Error> {
        let mut rng = rand::thread_rng();
        let mut position = self
            .position
            .lock()
            .map_err(|_| Error::LocationUnavailable("simulated position lock poisoned".into()))?;

        position.latitude = (position.latitude + self.step.sample(&mut rng)).clamp(-90.0, 90.0);
        position.longitude =
            (position.longitude + self.step.sample(&mut rng)).clamp(-180.0, 180.0);

        Ok(*position)
    }
}

#[async_trait]
impl LocationProvider for SimulatedLocationProvider {
    async fn request_permission(&self) -> Result<PermissionStatus, Error> {
        Ok(PermissionStatus::Granted)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    async fn current_position(&self) -> Result<LocationFix, Error> {
        let coordinates = self.advance()?;

        Ok(LocationFix::new(coordinates, Some(SIMULATED_ACCURACY_M)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::haversine_distance_km;
    use tokio_test::{assert_err, assert_ok};

    fn start() -> Coordinates {
        Coordinates::new(10.7769, 106.7009).unwrap()
    }

    #[tokio::test]
    async fn fixed_provider_reports_its_position() {
        let provider = FixedLocationProvider::new(start()).unwrap();

        assert_eq!(
            assert_ok!(provider.request_permission().await),
            PermissionStatus::Granted
        );
        let fix = assert_ok!(provider.current_position().await);
        assert_eq!(fix.coordinates, start());
    }

    #[tokio::test]
    async fn denied_permission_is_not_a_transient_failure() {
        let provider = FixedLocationProvider::new(start())
            .unwrap()
            .with_permission(PermissionStatus::Denied);

        let err = assert_err!(provider.current_position().await);
        assert_eq!(err, Error::PermissionDenied);
    }

    #[test]
    fn fixed_provider_rejects_invalid_position() {
        let bad = Coordinates {
            latitude: 120.0,
            longitude: 0.0,
        };

        assert!(FixedLocationProvider::new(bad).is_err());
    }

    #[tokio::test]
    async fn simulated_provider_moves_in_small_steps() {
        let provider = SimulatedLocationProvider::new(start(), DEFAULT_SIMULATED_STEP_DEG).unwrap();

        let mut previous = start();
        for _ in 0..20 {
            let fix = assert_ok!(provider.current_position().await);
            assert!(fix.coordinates.validate().is_ok());
            // 0.0001 degree steps never reach a kilometre
            assert!(haversine_distance_km(&previous, &fix.coordinates) < 1.0);
            previous = fix.coordinates;
        }
    }

    #[tokio::test]
    async fn simulated_provider_stays_in_range_at_the_pole() {
        let pole = Coordinates::new(90.0, 180.0).unwrap();
        let provider = SimulatedLocationProvider::new(pole, 1.0).unwrap();

        for _ in 0..50 {
            let fix = provider.current_position().await.unwrap();
            assert!(fix.coordinates.validate().is_ok());
        }
    }

    #[test]
    fn simulated_provider_rejects_bad_step() {
        assert!(matches!(
            SimulatedLocationProvider::new(start(), f64::NAN),
            Err(Error::InvalidConfiguration(_))
        ));
    }
}

use std::time::Duration;

use async_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use uuid::Uuid;

use super::provider::{DynLocationProvider, PermissionStatus};
use crate::entities::{Coordinates, LocationFix};
use crate::error::Error;
use crate::estimator::haversine_distance_km;

pub const DEFAULT_TIME_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_DISTANCE_INTERVAL_M: f64 = 10.0;

const UPDATE_BUFFER: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WatchOptions {
    pub time_interval: Duration,
    pub distance_interval_m: f64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            time_interval: DEFAULT_TIME_INTERVAL,
            distance_interval_m: DEFAULT_DISTANCE_INTERVAL_M,
        }
    }
}

impl WatchOptions {
    pub fn validate(&self) -> Result<(), Error> {
        if self.time_interval.is_zero() {
            return Err(Error::InvalidConfiguration(
                "watch time interval must be non-zero".into(),
            ));
        }

        if !self.distance_interval_m.is_finite() || self.distance_interval_m < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "watch distance interval must be a non-negative number of metres, got {}",
                self.distance_interval_m
            )));
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchState {
    Inactive,
    Active,
}

/// Handle to a running stream of location updates.
///
/// The caller owns it: `stop` (or dropping the handle) ends the polling task
/// and closes the update channel. Several watches may run side by side.
#[derive(Debug)]
pub struct LocationWatch {
    id: Uuid,
    updates: Receiver<LocationFix>,
    task: Option<JoinHandle<()>>,
}

impl LocationWatch {
    #[tracing::instrument(skip(provider))]
    pub async fn start(provider: DynLocationProvider, options: WatchOptions) -> Result<Self, Error> {
        options.validate()?;

        if provider.request_permission().await? == PermissionStatus::Denied {
            return Err(Error::PermissionDenied);
        }

        let id = Uuid::new_v4();
        let (sender, updates) = async_channel::bounded(UPDATE_BUFFER);
        let task = tokio::spawn(poll_provider(id, provider, options, sender));

        tracing::info!(%id, "location watch started");

        Ok(Self {
            id,
            updates,
            task: Some(task),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Inactive once stopped, or once the provider ended the watch itself.
    pub fn state(&self) -> WatchState {
        if self.task.is_some() && !self.updates.is_closed() {
            WatchState::Active
        } else {
            WatchState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        self.state() == WatchState::Active
    }

    /// Another receiver on the same update channel.
    pub fn updates(&self) -> Receiver<LocationFix> {
        self.updates.clone()
    }

    /// Waits for the next published fix; `None` once the watch has ended.
    pub async fn next(&self) -> Option<LocationFix> {
        self.updates.recv().await.ok()
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.updates.close();
            tracing::info!(id = %self.id, "location watch stopped");
        }
    }
}

impl Drop for LocationWatch {
    fn drop(&mut self) {
        self.stop();
    }
}

fn moved_enough(last: Option<&Coordinates>, next: &Coordinates, distance_interval_m: f64) -> bool {
    match last {
        Some(last) => haversine_distance_km(last, next) * 1000.0 >= distance_interval_m,
        None => true,
    }
}

async fn poll_provider(
    id: Uuid,
    provider: DynLocationProvider,
    options: WatchOptions,
    sender: Sender<LocationFix>,
) {
    let mut ticker = tokio::time::interval(options.time_interval);
    let mut last_published: Option<Coordinates> = None;

    loop {
        ticker.tick().await;

        let fix = match provider.current_position().await {
            Ok(fix) => fix,
            Err(Error::PermissionDenied) => {
                tracing::warn!(%id, "location permission revoked, ending watch");
                sender.close();
                return;
            }
            Err(err) => {
                tracing::warn!(%id, "skipping location update: {}", err);
                continue;
            }
        };

        if !moved_enough(
            last_published.as_ref(),
            &fix.coordinates,
            options.distance_interval_m,
        ) {
            continue;
        }

        last_published = Some(fix.coordinates);

        if sender.send(fix).await.is_err() {
            return;
        }
    }
}

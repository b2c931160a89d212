use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{Engine, Tracking};

use async_channel::Receiver;
use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    api::LocationAPI,
    entities::LocationFix,
    error::Error,
    location::{LocationWatch, PermissionStatus, WatchState},
};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn refresh_location(&self) -> Result<LocationFix, Error> {
        if self.location_provider.request_permission().await? == PermissionStatus::Denied {
            return Err(Error::PermissionDenied);
        }

        let fix = self.location_provider.current_position().await?;
        fix.coordinates.validate()?;

        *self.current_location.write().await = Some(fix.clone());

        Ok(fix)
    }

    async fn current_location(&self) -> Option<LocationFix> {
        self.current_location.read().await.clone()
    }

    #[tracing::instrument(skip(self))]
    async fn start_tracking(&self) -> Result<WatchState, Error> {
        let mut tracking = self.tracking.lock().await;

        if let Some(running) = tracking.as_ref() {
            if running.watch.is_active() {
                return Ok(running.watch.state());
            }
        }

        if let Some(ended) = tracking.take() {
            ended.stop();
        }

        let watch =
            LocationWatch::start(self.location_provider.clone(), self.watch_options).await?;

        let stopped = Arc::new(AtomicBool::new(false));
        let forwarder = tokio::spawn(forward_updates(
            watch.id(),
            watch.updates(),
            stopped.clone(),
            self.current_location.clone(),
        ));

        let state = watch.state();
        *tracking = Some(Tracking {
            watch,
            stopped,
            forwarder,
        });

        Ok(state)
    }

    #[tracing::instrument(skip(self))]
    async fn stop_tracking(&self) -> WatchState {
        if let Some(running) = self.tracking.lock().await.take() {
            running.stop();
        }

        WatchState::Inactive
    }

    async fn is_tracking(&self) -> bool {
        self.tracking
            .lock()
            .await
            .as_ref()
            .map_or(false, |running| running.watch.is_active())
    }
}

/// Copies published fixes into `current_location` until the watch ends.
///
/// Fixes still buffered when `stopped` is set are dropped, so they never
/// overwrite what a newer watch wrote.
async fn forward_updates(
    watch_id: Uuid,
    updates: Receiver<LocationFix>,
    stopped: Arc<AtomicBool>,
    current_location: Arc<RwLock<Option<LocationFix>>>,
) {
    futures::pin_mut!(updates);

    while let Some(fix) = updates.next().await {
        // checked under the lock: a newer watch only writes after `stopped` is set
        let mut location = current_location.write().await;
        if stopped.load(Ordering::SeqCst) {
            break;
        }

        tracing::debug!(%watch_id, "location updated");
        *location = Some(fix);
    }
}

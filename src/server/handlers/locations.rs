use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::LocationFix;
use crate::error::Error;
use crate::location::WatchState;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct TrackingStatus {
    state: WatchState,
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<Option<LocationFix>> {
    api.current_location().await.into()
}

pub async fn refresh(Extension(api): Extension<DynAPI>) -> Result<Json<LocationFix>, Error> {
    let fix = api.refresh_location().await?;

    Ok(fix.into())
}

pub async fn tracking(Extension(api): Extension<DynAPI>) -> Json<TrackingStatus> {
    let state = if api.is_tracking().await {
        WatchState::Active
    } else {
        WatchState::Inactive
    };

    Json(TrackingStatus { state })
}

pub async fn start_tracking(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<TrackingStatus>, Error> {
    let state = api.start_tracking().await?;

    Ok(Json(TrackingStatus { state }))
}

pub async fn stop_tracking(Extension(api): Extension<DynAPI>) -> Json<TrackingStatus> {
    let state = api.stop_tracking().await;

    Json(TrackingStatus { state })
}

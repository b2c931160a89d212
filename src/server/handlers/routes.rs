use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, RouteEstimate, RouteOptions};
use crate::error::Error;
use crate::server::DynAPI;

#[derive(Serialize, Deserialize)]
pub struct EstimateParams {
    origin: Coordinates,
    destination: Coordinates,
    options: Option<RouteOptions>,
}

pub async fn estimate(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EstimateParams>,
) -> Result<Json<RouteEstimate>, Error> {
    let estimate = api
        .estimate_route(params.origin, params.destination, params.options)
        .await?;

    Ok(estimate.into())
}

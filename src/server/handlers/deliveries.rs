use axum::extract::{Extension, Json, Path};

use crate::entities::{DeliveryPoint, Selection};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn list(Extension(api): Extension<DynAPI>) -> Result<Json<Vec<DeliveryPoint>>, Error> {
    let points = api.list_delivery_points().await?;

    Ok(points.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<DeliveryPoint>, Error> {
    let point = api.find_delivery_point(&id).await?;

    Ok(point.into())
}

pub async fn select(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<Selection>, Error> {
    let selection = api.select_delivery_point(&id).await?;

    Ok(selection.into())
}

use axum::extract::{Extension, Json};

use crate::entities::{MapScene, Selection};
use crate::error::Error;
use crate::server::DynAPI;

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<Option<Selection>> {
    api.current_selection().await.into()
}

pub async fn clear(Extension(api): Extension<DynAPI>) -> Json<Option<Selection>> {
    api.clear_selection().await.into()
}

pub async fn scene(Extension(api): Extension<DynAPI>) -> Result<Json<MapScene>, Error> {
    let scene = api.map_scene().await?;

    Ok(scene.into())
}

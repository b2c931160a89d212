use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{DeliveryAPI, LocationAPI, SelectionAPI},
    entities::{MapScene, Selection},
    error::Error,
    estimator,
};

#[async_trait]
impl SelectionAPI for Engine {
    /// Draws a route from the current location to the point. On failure the
    /// previous selection is left untouched.
    #[tracing::instrument(skip(self))]
    async fn select_delivery_point(&self, id: &str) -> Result<Selection, Error> {
        let point = self.find_delivery_point(id).await?;

        let origin = self
            .current_location()
            .await
            .ok_or(Error::NoCurrentLocation)?
            .coordinates;

        let estimate = estimator::estimate_route(&origin, &point.coordinates, &self.route_options)?;

        tracing::info!(
            "route to {}: {} / {}",
            point.title,
            estimate.distance_label,
            estimate.duration_label
        );

        let selection = Selection::new(point, origin, estimate);
        *self.selection.write().await = Some(selection.clone());

        Ok(selection)
    }

    #[tracing::instrument(skip(self))]
    async fn clear_selection(&self) -> Option<Selection> {
        self.selection.write().await.take()
    }

    async fn current_selection(&self) -> Option<Selection> {
        self.selection.read().await.clone()
    }

    #[tracing::instrument(skip(self))]
    async fn map_scene(&self) -> Result<MapScene, Error> {
        let points = self.list_delivery_points().await?;
        let current_location = self.current_location().await;
        let selection = self.current_selection().await;

        Ok(MapScene::build(
            &points,
            current_location.as_ref(),
            selection.as_ref(),
        ))
    }
}

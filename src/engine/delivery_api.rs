use super::Engine;

use async_trait::async_trait;

use crate::{api::DeliveryAPI, entities::DeliveryPoint, error::Error};

#[async_trait]
impl DeliveryAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_delivery_points(&self) -> Result<Vec<DeliveryPoint>, Error> {
        self.deliveries.list_points().await
    }

    #[tracing::instrument(skip(self))]
    async fn find_delivery_point(&self, id: &str) -> Result<DeliveryPoint, Error> {
        self.deliveries
            .list_points()
            .await?
            .into_iter()
            .find(|point| point.id == id)
            .ok_or_else(|| Error::DeliveryPointNotFound(id.into()))
    }
}

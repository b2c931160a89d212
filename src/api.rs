use async_trait::async_trait;

use crate::entities::{
    Coordinates, DeliveryPoint, LocationFix, MapScene, RouteEstimate, RouteOptions, Selection,
};
use crate::error::Error;
use crate::location::WatchState;

#[async_trait]
pub trait RouteAPI {
    async fn estimate_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        options: Option<RouteOptions>,
    ) -> Result<RouteEstimate, Error>;
}

#[async_trait]
pub trait DeliveryAPI {
    async fn list_delivery_points(&self) -> Result<Vec<DeliveryPoint>, Error>;

    async fn find_delivery_point(&self, id: &str) -> Result<DeliveryPoint, Error>;
}

#[async_trait]
pub trait LocationAPI {
    async fn refresh_location(&self) -> Result<LocationFix, Error>;

    async fn current_location(&self) -> Option<LocationFix>;

    async fn start_tracking(&self) -> Result<WatchState, Error>;

    async fn stop_tracking(&self) -> WatchState;

    async fn is_tracking(&self) -> bool;
}

#[async_trait]
pub trait SelectionAPI {
    async fn select_delivery_point(&self, id: &str) -> Result<Selection, Error>;

    async fn clear_selection(&self) -> Option<Selection>;

    async fn current_selection(&self) -> Option<Selection>;

    async fn map_scene(&self) -> Result<MapScene, Error>;
}

pub trait API: RouteAPI + DeliveryAPI + LocationAPI + SelectionAPI {}

use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, RouteEstimate, RouteOptions},
    error::Error,
    estimator,
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn estimate_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        options: Option<RouteOptions>,
    ) -> Result<RouteEstimate, Error> {
        let options = options.unwrap_or(self.route_options);

        estimator::estimate_route(&origin, &destination, &options)
    }
}

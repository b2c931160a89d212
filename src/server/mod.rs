mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post},
    Router,
};

use crate::api::API;
use crate::error::Error;
use crate::server::handlers::{deliveries, locations, routes, selection};

type DynAPI = Arc<dyn API + Send + Sync>;

pub fn router<T: API + Sync + Send + 'static>(api: T) -> Router {
    let api = Arc::new(api) as DynAPI;

    Router::new()
        .route("/deliveries", get(deliveries::list))
        .route("/deliveries/:id", get(deliveries::find))
        .route("/deliveries/:id/select", post(deliveries::select))
        .route("/routes/estimate", post(routes::estimate))
        .route(
            "/selection",
            get(selection::find).delete(selection::clear),
        )
        .route("/scene", get(selection::scene))
        .route("/location", get(locations::find).post(locations::refresh))
        .route("/location/tracking", get(locations::tracking))
        .route("/location/tracking/start", patch(locations::start_tracking))
        .route("/location/tracking/stop", patch(locations::stop_tracking))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|err| Error::Server(err.to_string()))
}

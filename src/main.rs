use courier::api::LocationAPI;
use courier::config::Config;
use courier::engine::Engine;
use courier::error::Error;
use courier::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    tracing::info!(?config, "starting courier");

    let engine = Engine::from_config(&config)?;

    // routes can only be drawn once a position is known
    match engine.refresh_location().await {
        Ok(fix) => tracing::info!(?fix.coordinates, "initial location"),
        Err(err) => tracing::warn!("could not get initial location: {}", err),
    }

    serve(engine, config.addr).await
}

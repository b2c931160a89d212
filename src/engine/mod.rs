mod delivery_api;
mod location_api;
mod route_api;
mod selection_api;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;

use crate::{
    api::API,
    config::Config,
    deliveries::{DeliverySource, JsonFileDeliveries, SampleDeliveries},
    entities::{LocationFix, RouteOptions, Selection},
    error::Error,
    location::{
        DynLocationProvider, FixedLocationProvider, LocationWatch, SimulatedLocationProvider,
        WatchOptions, DEFAULT_SIMULATED_STEP_DEG,
    },
};

pub type DynDeliverySource = Arc<dyn DeliverySource + Send + Sync>;

pub struct Engine {
    deliveries: DynDeliverySource,
    location_provider: DynLocationProvider,
    route_options: RouteOptions,
    watch_options: WatchOptions,
    current_location: Arc<RwLock<Option<LocationFix>>>,
    selection: RwLock<Option<Selection>>,
    tracking: Mutex<Option<Tracking>>,
}

/// The engine's own watch plus the task copying its fixes into
/// `current_location`.
struct Tracking {
    watch: LocationWatch,
    stopped: Arc<AtomicBool>,
    forwarder: JoinHandle<()>,
}

impl Tracking {
    fn stop(mut self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.watch.stop();
        self.forwarder.abort();
    }
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip(deliveries, location_provider))]
    pub fn new(
        deliveries: DynDeliverySource,
        location_provider: DynLocationProvider,
        route_options: RouteOptions,
        watch_options: WatchOptions,
    ) -> Result<Self, Error> {
        route_options.validate()?;
        watch_options.validate()?;

        Ok(Self {
            deliveries,
            location_provider,
            route_options,
            watch_options,
            current_location: Arc::new(RwLock::new(None)),
            selection: RwLock::new(None),
            tracking: Mutex::new(None),
        })
    }

    #[tracing::instrument(name = "Engine::from_config", skip_all)]
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let deliveries: DynDeliverySource = match &config.deliveries_path {
            Some(path) => Arc::new(JsonFileDeliveries::load(path)?),
            None => Arc::new(SampleDeliveries),
        };

        let location_provider: DynLocationProvider = if config.simulate_movement {
            Arc::new(SimulatedLocationProvider::new(
                config.start_location,
                DEFAULT_SIMULATED_STEP_DEG,
            )?)
        } else {
            Arc::new(FixedLocationProvider::new(config.start_location)?)
        };

        Self::new(
            deliveries,
            location_provider,
            config.route_options,
            config.watch_options,
        )
    }
}

impl API for Engine {}

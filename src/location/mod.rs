mod provider;
mod watch;

pub use provider::{
    DynLocationProvider, FixedLocationProvider, LocationProvider, PermissionStatus,
    SimulatedLocationProvider, DEFAULT_SIMULATED_STEP_DEG,
};
pub use watch::{
    LocationWatch, WatchOptions, WatchState, DEFAULT_DISTANCE_INTERVAL_M, DEFAULT_TIME_INTERVAL,
};

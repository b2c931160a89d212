use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::entities::{Coordinates, RouteOptions};
use crate::error::Error;
use crate::location::WatchOptions;

pub const ADDR_VAR: &str = "COURIER_ADDR";
pub const ROUTE_STEPS_VAR: &str = "COURIER_ROUTE_STEPS";
pub const AVERAGE_SPEED_VAR: &str = "COURIER_AVERAGE_SPEED_KMH";
pub const DELIVERIES_PATH_VAR: &str = "COURIER_DELIVERIES_PATH";
pub const START_LATITUDE_VAR: &str = "COURIER_START_LATITUDE";
pub const START_LONGITUDE_VAR: &str = "COURIER_START_LONGITUDE";
pub const SIMULATE_MOVEMENT_VAR: &str = "COURIER_SIMULATE_MOVEMENT";
pub const TRACKING_INTERVAL_VAR: &str = "COURIER_TRACKING_INTERVAL_MS";
pub const TRACKING_DISTANCE_VAR: &str = "COURIER_TRACKING_DISTANCE_M";

const DEFAULT_START: Coordinates = Coordinates {
    latitude: 10.7769,
    longitude: 106.7009,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub addr: SocketAddr,
    pub route_options: RouteOptions,
    pub deliveries_path: Option<PathBuf>,
    pub start_location: Coordinates,
    pub simulate_movement: bool,
    pub watch_options: WatchOptions,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let defaults = RouteOptions::default();
        let route_options = RouteOptions {
            steps: parse_or(&lookup, ROUTE_STEPS_VAR, defaults.steps)?,
            average_speed_kmh: parse_or(&lookup, AVERAGE_SPEED_VAR, defaults.average_speed_kmh)?,
        };
        route_options.validate()?;

        let start_location = Coordinates::new(
            parse_or(&lookup, START_LATITUDE_VAR, DEFAULT_START.latitude)?,
            parse_or(&lookup, START_LONGITUDE_VAR, DEFAULT_START.longitude)?,
        )?;

        let watch_defaults = WatchOptions::default();
        let watch_options = WatchOptions {
            time_interval: Duration::from_millis(parse_or(
                &lookup,
                TRACKING_INTERVAL_VAR,
                watch_defaults.time_interval.as_millis() as u64,
            )?),
            distance_interval_m: parse_or(
                &lookup,
                TRACKING_DISTANCE_VAR,
                watch_defaults.distance_interval_m,
            )?,
        };
        watch_options.validate()?;

        Ok(Self {
            addr: parse_or(&lookup, ADDR_VAR, default_addr())?,
            route_options,
            deliveries_path: optional(&lookup, DELIVERIES_PATH_VAR)?.map(PathBuf::from),
            start_location,
            simulate_movement: parse_or(&lookup, SIMULATE_MOVEMENT_VAR, false)?,
            watch_options,
        })
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 3000))
}

fn invalid<E: std::fmt::Display>(key: &str) -> impl Fn(E) -> Error + '_ {
    move |err| Error::InvalidConfiguration(format!("{}: {}", key, err))
}

fn optional<F>(lookup: &F, key: &str) -> Result<Option<String>, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, Error>
where
    F: Fn(&str) -> Result<String, env::VarError>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional(lookup, key)? {
        Some(value) => value.trim().parse().map_err(invalid(key)),
        None => Ok(default),
    }
}

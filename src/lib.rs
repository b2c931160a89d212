pub mod api;
pub mod config;
pub mod deliveries;
pub mod engine;
pub mod entities;
pub mod error;
pub mod estimator;
pub mod location;
pub mod server;

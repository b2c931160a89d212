pub mod deliveries;
pub mod locations;
pub mod routes;
pub mod selection;

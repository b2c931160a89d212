mod delivery;
mod location;
mod route;
mod scene;
mod selection;

pub use delivery::{DeliveryPoint, Status};
pub use location::{Coordinates, LocationFix};
pub use route::{
    RouteEstimate, RouteOptions, RoutePath, DEFAULT_AVERAGE_SPEED_KMH, DEFAULT_STEPS, MAX_STEPS,
};
pub use scene::{MapScene, Marker, MarkerKind, CURRENT_LOCATION_TITLE};
pub use selection::Selection;

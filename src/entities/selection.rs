use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, DeliveryPoint, RouteEstimate};

/// The chosen delivery point together with the route drawn to it.
///
/// Stored as a whole so the point, the path and the estimate are always
/// replaced or cleared together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub id: Uuid,
    pub point: DeliveryPoint,
    pub origin: Coordinates,
    pub estimate: RouteEstimate,
    pub created_at: DateTime<Utc>,
}

impl Selection {
    pub fn new(point: DeliveryPoint, origin: Coordinates, estimate: RouteEstimate) -> Self {
        Self {
            id: Uuid::new_v4(),
            point,
            origin,
            estimate,
            created_at: Utc::now(),
        }
    }

    pub fn is_for(&self, point_id: &str) -> bool {
        self.point.id == point_id
    }
}

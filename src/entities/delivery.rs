use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;
use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPoint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub status: Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Pending => "pending".into(),
            Self::InProgress => "in-progress".into(),
            Self::Completed => "completed".into(),
        }
    }
}

impl DeliveryPoint {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            coordinates,
            status: Status::Pending,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.id.trim().is_empty() {
            return Err(Error::InvalidDeliveryData(
                "delivery point id must not be empty".into(),
            ));
        }

        self.coordinates.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&Status::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let status: Status = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, Status::Completed);
        assert_eq!(status.name(), "completed");
    }

    #[test]
    fn new_points_are_pending() {
        let point = DeliveryPoint::new(
            "7",
            "Order #007",
            "1 Ham Nghi, D.1",
            Coordinates {
                latitude: 10.77,
                longitude: 106.70,
            },
        );

        assert_eq!(point.status, Status::Pending);
        assert!(point.validate().is_ok());
    }

    #[test]
    fn validate_checks_id_and_coordinates() {
        let mut point = DeliveryPoint::new(
            " ",
            "Order",
            "",
            Coordinates {
                latitude: 10.77,
                longitude: 106.70,
            },
        );
        assert!(matches!(
            point.validate(),
            Err(Error::InvalidDeliveryData(_))
        ));

        point.id = "1".into();
        point.coordinates.latitude = 95.0;
        assert!(matches!(
            point.validate(),
            Err(Error::InvalidCoordinate(_))
        ));
    }
}

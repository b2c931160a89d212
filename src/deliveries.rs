use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;

use crate::entities::{Coordinates, DeliveryPoint};
use crate::error::Error;

#[async_trait]
pub trait DeliverySource {
    async fn list_points(&self) -> Result<Vec<DeliveryPoint>, Error>;
}

/// The three sample orders around District 1 and 3 of Ho Chi Minh City.
#[derive(Debug, Default)]
pub struct SampleDeliveries;

impl SampleDeliveries {
    pub fn points() -> Vec<DeliveryPoint> {
        vec![
            DeliveryPoint::new(
                "1",
                "Order #001",
                "123 Nguyen Hue, D.1",
                Coordinates {
                    latitude: 10.7769,
                    longitude: 106.7009,
                },
            ),
            DeliveryPoint::new(
                "2",
                "Order #002",
                "456 Le Loi, D.1",
                Coordinates {
                    latitude: 10.7731,
                    longitude: 106.6989,
                },
            ),
            DeliveryPoint::new(
                "3",
                "Order #003",
                "789 Pasteur, D.3",
                Coordinates {
                    latitude: 10.7809,
                    longitude: 106.6959,
                },
            ),
        ]
    }
}

#[async_trait]
impl DeliverySource for SampleDeliveries {
    async fn list_points(&self) -> Result<Vec<DeliveryPoint>, Error> {
        Ok(Self::points())
    }
}

/// Delivery points read once from a JSON array on disk.
#[derive(Debug)]
pub struct JsonFileDeliveries {
    points: Vec<DeliveryPoint>,
}

impl JsonFileDeliveries {
    #[tracing::instrument]
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = std::fs::read_to_string(path)?;
        let source = Self::from_json(&data)?;

        tracing::info!("loaded {} delivery points", source.points.len());

        Ok(source)
    }

    pub fn from_json(data: &str) -> Result<Self, Error> {
        let points: Vec<DeliveryPoint> = serde_json::from_str(data)?;

        let mut seen = HashSet::new();
        for point in &points {
            point.validate()?;

            if !seen.insert(point.id.as_str()) {
                return Err(Error::InvalidDeliveryData(format!(
                    "duplicate delivery point id {}",
                    point.id
                )));
            }
        }

        Ok(Self { points })
    }
}

#[async_trait]
impl DeliverySource for JsonFileDeliveries {
    async fn list_points(&self) -> Result<Vec<DeliveryPoint>, Error> {
        Ok(self.points.clone())
    }
}

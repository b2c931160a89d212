use serde::{Deserialize, Serialize};

use crate::entities::{Coordinates, DeliveryPoint, LocationFix, Selection, Status};

pub const CURRENT_LOCATION_TITLE: &str = "Your location";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum MarkerKind {
    CurrentLocation,
    Delivery { status: Status },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: Option<String>,
    pub kind: MarkerKind,
    pub title: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub selected: bool,
}

/// What the map surface draws: markers plus at most one route polyline.
/// Camera framing is left to the surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    pub markers: Vec<Marker>,
    pub polyline: Vec<Coordinates>,
}

impl MapScene {
    pub fn build(
        points: &[DeliveryPoint],
        current_location: Option<&LocationFix>,
        selection: Option<&Selection>,
    ) -> Self {
        let mut markers = Vec::with_capacity(points.len() + 1);

        if let Some(fix) = current_location {
            markers.push(Marker {
                id: None,
                kind: MarkerKind::CurrentLocation,
                title: CURRENT_LOCATION_TITLE.into(),
                description: String::new(),
                coordinates: fix.coordinates,
                selected: false,
            });
        }

        markers.extend(points.iter().map(|point| Marker {
            id: Some(point.id.clone()),
            kind: MarkerKind::Delivery {
                status: point.status,
            },
            title: point.title.clone(),
            description: point.description.clone(),
            coordinates: point.coordinates,
            selected: selection.map_or(false, |s| s.is_for(&point.id)),
        }));

        let polyline = selection
            .map(|s| s.estimate.path.points().to_vec())
            .unwrap_or_default();

        Self { markers, polyline }
    }

    pub fn selected_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|marker| marker.selected)
    }
}

//! Scene update service
//!
//! Turns a device location (and optionally a compass heading) into
//! everything the renderer needs for one refresh: the horizon box for terrain
//! loading, the terrain yaw, and a placement for every configured point of
//! interest. The service holds only its configuration, so one instance can
//! be shared across threads.

use serde::Serialize;

use crate::algorithms::{
    bearing, horizon_bounding_box, normalize_heading_degrees, placement_for_bearing, Placement,
};
use crate::core::{BoundingBox, GeoCoordinate, PointOfInterest};
use crate::utils::config::{ConfigError, ConfigurationManager, SceneConfig};
use crate::validation::GeoResult;

/// Placement of one point-of-interest marker, in renderer-friendly form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPlacement {
    pub name: String,
    /// Compass bearing to the target in degrees
    pub bearing_deg: f64,
    /// Marker position in the viewer frame (x east, y up, -z north)
    pub position: [f64; 3],
    /// 4×4 homogeneous transform, column-major
    pub transform: [[f64; 4]; 4],
}

impl MarkerPlacement {
    fn from_placement(poi: &PointOfInterest, placement: &Placement) -> Self {
        let position = placement.position();
        let matrix = placement.to_homogeneous();

        let mut transform = [[0.0; 4]; 4];
        for (column, values) in transform.iter_mut().enumerate() {
            for (row, value) in values.iter_mut().enumerate() {
                *value = matrix[(row, column)];
            }
        }

        Self {
            name: poi.name.clone(),
            bearing_deg: placement.azimuth().degrees(),
            position: [position.x, position.y, position.z],
            transform,
        }
    }
}

/// Everything computed for one device update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneUpdate {
    pub device: GeoCoordinate,
    /// Horizon box, when horizon display is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizon: Option<BoundingBox>,
    /// Heading folded into `[0, 360)`, when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_deg: Option<f64>,
    /// Terrain yaw in radians, when a heading was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrain_yaw_rad: Option<f64>,
    pub markers: Vec<MarkerPlacement>,
}

/// Stateless service computing scene updates from device locations
#[derive(Debug, Clone)]
pub struct SceneService {
    config: SceneConfig,
}

impl SceneService {
    /// Create a service, rejecting an invalid configuration
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        let mut manager = ConfigurationManager::new();
        manager.update_config(config)?;
        Ok(Self {
            config: manager.into_config(),
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Horizon box around the device
    pub fn horizon(&self, device: &GeoCoordinate) -> GeoResult<BoundingBox> {
        horizon_bounding_box(device, &self.config.horizon)
    }

    /// One marker placement per configured point of interest, in order
    pub fn place_markers(&self, device: &GeoCoordinate) -> GeoResult<Vec<MarkerPlacement>> {
        self.config
            .points_of_interest
            .iter()
            .map(|poi| {
                let azimuth = bearing(device, &poi.coordinate)?;
                let placement = placement_for_bearing(azimuth, self.config.forward_offset_m)?;
                tracing::debug!(poi = %poi.name, bearing = %azimuth, "marker placed");
                Ok(MarkerPlacement::from_placement(poi, &placement))
            })
            .collect()
    }

    /// Full scene update for a device location and optional heading
    pub fn update(&self, device: &GeoCoordinate, heading: Option<f64>) -> GeoResult<SceneUpdate> {
        let horizon = if self.config.show_horizon {
            Some(self.horizon(device)?)
        } else {
            None
        };

        let heading_deg = heading.map(normalize_heading_degrees).transpose()?;
        let terrain_yaw_rad = heading_deg.map(f64::to_radians);

        let markers = self.place_markers(device)?;

        tracing::debug!(
            device = %device,
            markers = markers.len(),
            horizon = horizon.is_some(),
            "scene update computed"
        );

        Ok(SceneUpdate {
            device: *device,
            horizon,
            heading_deg,
            terrain_yaw_rad,
            markers,
        })
    }
}

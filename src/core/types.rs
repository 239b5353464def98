//! Core data types for world-scale placement

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::fmt;

/// Geographic position of a device or point of interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude above the reference surface in meters, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)?;
        if let Some(altitude) = self.altitude {
            write!(f, " @ {:.1}m", altitude)?;
        }
        Ok(())
    }
}

/// Direction to a target, clockwise from true north.
///
/// Always normalized to `[0, 2π)` radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Bearing(f64);

impl Bearing {
    pub const NORTH: Bearing = Bearing(0.0);

    /// Wrap an arbitrary finite angle into `[0, 2π)`.
    pub fn from_radians(radians: f64) -> Self {
        let wrapped = radians.rem_euclid(TAU);
        // rem_euclid may round up to TAU for tiny negative inputs
        if wrapped >= TAU {
            return Self::NORTH;
        }
        // folds -0.0 into 0.0
        Bearing(wrapped + 0.0)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.degrees())
    }
}

/// Latitude/longitude rectangle in degrees.
///
/// Boxes crossing the antimeridian are not wrapped; their longitudes simply
/// extend past ±180.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub max_latitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub min_longitude: f64,
}

impl BoundingBox {
    pub fn latitude_span(&self) -> f64 {
        self.max_latitude - self.min_latitude
    }

    pub fn longitude_span(&self) -> f64 {
        self.max_longitude - self.min_longitude
    }

    pub fn contains(&self, coordinate: &GeoCoordinate) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&coordinate.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&coordinate.longitude)
    }

    /// Whether the longitude range extends past the antimeridian
    pub fn crosses_antimeridian(&self) -> bool {
        self.min_longitude < -180.0 || self.max_longitude > 180.0
    }
}

/// Named geographic target shown as a marker in the AR view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub name: String,
    pub coordinate: GeoCoordinate,
}

impl PointOfInterest {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            coordinate: GeoCoordinate::new(latitude, longitude),
        }
    }

    /// Demo set of western US national parks and peaks
    pub fn default_set() -> Vec<PointOfInterest> {
        vec![
            PointOfInterest::new("Yellowstone", 44.4280, -110.5885),
            PointOfInterest::new("Joshua Tree", 33.8734, -115.9010),
            PointOfInterest::new("Mt. Hood", 45.3736, -121.6960),
        ]
    }
}

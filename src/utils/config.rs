use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::{
    PointOfInterest, DEFAULT_FORWARD_OFFSET_M, HORIZON_FACTOR_NEAR, HORIZON_FACTOR_STANDARD,
};
use crate::validation::CoordinateValidator;

/// How the horizon estimator scales a degree of longitude by latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LongitudeScale {
    /// `cos(latitude)` with the latitude value in degrees fed straight to the
    /// cosine. Reproduces the deployed behaviour.
    #[default]
    LegacyDegrees,
    /// `cos(latitude)` with the latitude converted to radians first
    Radians,
}

/// Horizon estimation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonConfig {
    /// Horizon distance in km per square root of altitude in meters
    pub distance_factor: f64,
    /// Longitude scaling mode
    #[serde(default)]
    pub longitude_scale: LongitudeScale,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            distance_factor: HORIZON_FACTOR_STANDARD,
            longitude_scale: LongitudeScale::default(),
        }
    }
}

/// Named horizon distance presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizonPreset {
    /// Geometric horizon, 3.57 km per sqrt(m)
    Standard,
    /// Near-field terrain, 1.0 km per sqrt(m)
    Near,
}

impl HorizonPreset {
    pub fn distance_factor(self) -> f64 {
        match self {
            HorizonPreset::Standard => HORIZON_FACTOR_STANDARD,
            HorizonPreset::Near => HORIZON_FACTOR_NEAR,
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Horizon estimation parameters
    pub horizon: HorizonConfig,
    /// Distance in front of the viewer at which markers are placed (meters)
    pub forward_offset_m: f64,
    /// Whether a horizon box is produced on each update
    pub show_horizon: bool,
    /// Markers to place, in display order
    pub points_of_interest: Vec<PointOfInterest>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::from_preset(HorizonPreset::Standard)
    }
}

impl SceneConfig {
    /// Default scene with the given horizon preset and the demo points of interest
    pub fn from_preset(preset: HorizonPreset) -> Self {
        Self {
            horizon: HorizonConfig {
                distance_factor: preset.distance_factor(),
                longitude_scale: LongitudeScale::default(),
            },
            forward_offset_m: DEFAULT_FORWARD_OFFSET_M,
            show_horizon: true,
            points_of_interest: PointOfInterest::default_set(),
        }
    }

    pub fn with_points_of_interest(mut self, points: Vec<PointOfInterest>) -> Self {
        self.points_of_interest = points;
        self
    }

    pub fn with_longitude_scale(mut self, scale: LongitudeScale) -> Self {
        self.horizon.longitude_scale = scale;
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid parameter value
    #[error("invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter { parameter: String, value: String, reason: String },

    /// Configuration file I/O error
    #[error("failed to access config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("invalid config JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No file path to save to
    #[error("no file path set for saving configuration")]
    NoFilePath,
}

impl ConfigError {
    fn invalid(parameter: impl Into<String>, value: impl ToString, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Configuration validation result
#[derive(Debug)]
pub struct ValidationResult {
    /// Whether configuration is valid
    pub is_valid: bool,
    /// Validation errors
    pub errors: Vec<ConfigError>,
    /// Validation warnings
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// First error, if the configuration was rejected
    pub fn into_error(self) -> Option<ConfigError> {
        self.errors.into_iter().next()
    }
}

/// Validate a scene configuration, collecting every problem found
pub fn validate_scene_config(config: &SceneConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let factor = config.horizon.distance_factor;
    if !factor.is_finite() || factor <= 0.0 {
        errors.push(ConfigError::invalid(
            "horizon.distance_factor",
            factor,
            "must be finite and greater than zero",
        ));
    } else if factor > 10.0 {
        warnings.push(format!(
            "Horizon distance factor {} is well beyond the geometric horizon ({})",
            factor, HORIZON_FACTOR_STANDARD
        ));
    }

    let offset = config.forward_offset_m;
    if !offset.is_finite() || offset < 0.0 {
        errors.push(ConfigError::invalid(
            "forward_offset_m",
            offset,
            "must be finite and non-negative",
        ));
    } else if offset == 0.0 {
        warnings.push("Forward offset of 0 m places every marker inside the viewer".to_string());
    }

    if config.points_of_interest.is_empty() {
        warnings.push("No points of interest configured".to_string());
    }

    let mut seen = HashSet::new();
    for (index, poi) in config.points_of_interest.iter().enumerate() {
        if poi.name.trim().is_empty() {
            errors.push(ConfigError::invalid(
                format!("points_of_interest[{}].name", index),
                &poi.name,
                "must not be empty",
            ));
        }

        if let Err(e) = CoordinateValidator::validate_wgs84(&poi.coordinate) {
            errors.push(ConfigError::invalid(
                format!("points_of_interest[{}].coordinate", index),
                poi.coordinate,
                e.to_string(),
            ));
        }

        if !seen.insert(poi.name.as_str()) {
            warnings.push(format!("Duplicate point of interest name '{}'", poi.name));
        }
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

/// Main configuration manager
pub struct ConfigurationManager {
    /// Current scene configuration
    config: SceneConfig,
    /// Configuration file path
    config_file_path: Option<PathBuf>,
    /// Whether configuration has been modified
    is_modified: bool,
}

impl Default for ConfigurationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigurationManager {
    /// Create a new configuration manager with default settings
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            config,
            config_file_path: None,
            is_modified: false,
        }
    }

    /// Create configuration manager and load from file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut manager = Self::new();
        manager.load_from_file(path)?;
        Ok(manager)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn into_config(self) -> SceneConfig {
        self.config
    }

    /// Replace the scene configuration after validating it
    pub fn update_config(&mut self, config: SceneConfig) -> Result<(), ConfigError> {
        Self::ensure_valid(&config)?;
        self.config = config;
        self.is_modified = true;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: SceneConfig = serde_json::from_str(&content)?;
        Self::ensure_valid(&config)?;

        tracing::debug!(
            path = %path.display(),
            points = config.points_of_interest.len(),
            distance_factor = config.horizon.distance_factor,
            "loaded scene configuration"
        );

        self.config = config;
        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save configuration to JSON file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.config)?;

        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        self.config_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        Ok(())
    }

    /// Save to the currently loaded file path
    pub fn save(&mut self) -> Result<(), ConfigError> {
        match self.config_file_path.clone() {
            Some(path) => self.save_to_file(path),
            None => Err(ConfigError::NoFilePath),
        }
    }

    /// Check if configuration has been modified since last save
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Set the horizon distance factor
    pub fn set_distance_factor(&mut self, factor: f64) -> Result<f64, ConfigError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigError::invalid(
                "horizon.distance_factor",
                factor,
                "must be finite and greater than zero",
            ));
        }
        let old = self.config.horizon.distance_factor;
        self.config.horizon.distance_factor = factor;
        self.is_modified = true;
        Ok(old)
    }

    pub fn apply_preset(&mut self, preset: HorizonPreset) -> f64 {
        let old = self.config.horizon.distance_factor;
        self.config.horizon.distance_factor = preset.distance_factor();
        self.is_modified = true;
        old
    }

    pub fn set_longitude_scale(&mut self, scale: LongitudeScale) -> LongitudeScale {
        let old = self.config.horizon.longitude_scale;
        self.config.horizon.longitude_scale = scale;
        self.is_modified = true;
        old
    }

    /// Set the marker forward offset (meters)
    pub fn set_forward_offset(&mut self, offset_m: f64) -> Result<f64, ConfigError> {
        if !offset_m.is_finite() || offset_m < 0.0 {
            return Err(ConfigError::invalid(
                "forward_offset_m",
                offset_m,
                "must be finite and non-negative",
            ));
        }
        let old = self.config.forward_offset_m;
        self.config.forward_offset_m = offset_m;
        self.is_modified = true;
        Ok(old)
    }

    pub fn set_show_horizon(&mut self, show: bool) -> bool {
        let old = self.config.show_horizon;
        self.config.show_horizon = show;
        self.is_modified = true;
        old
    }

    /// Append a point of interest after validating its coordinate
    pub fn add_point_of_interest(&mut self, poi: PointOfInterest) -> Result<(), ConfigError> {
        if poi.name.trim().is_empty() {
            return Err(ConfigError::invalid("name", &poi.name, "must not be empty"));
        }
        CoordinateValidator::validate_wgs84(&poi.coordinate)
            .map_err(|e| ConfigError::invalid("coordinate", poi.coordinate, e.to_string()))?;

        self.config.points_of_interest.push(poi);
        self.is_modified = true;
        Ok(())
    }

    /// Remove every point of interest with the given name
    pub fn remove_point_of_interest(&mut self, name: &str) -> usize {
        let before = self.config.points_of_interest.len();
        self.config.points_of_interest.retain(|poi| poi.name != name);
        let removed = before - self.config.points_of_interest.len();
        if removed > 0 {
            self.is_modified = true;
        }
        removed
    }

    fn ensure_valid(config: &SceneConfig) -> Result<(), ConfigError> {
        let validation = validate_scene_config(config);
        for warning in &validation.warnings {
            tracing::warn!("{}", warning);
        }
        match validation.into_error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GeoCoordinate;

    #[test]
    fn test_default_scene_config() {
        let config = SceneConfig::default();
        assert_eq!(config.horizon.distance_factor, 3.57);
        assert_eq!(config.horizon.longitude_scale, LongitudeScale::LegacyDegrees);
        assert_eq!(config.forward_offset_m, 10.0);
        assert!(config.show_horizon);
        assert_eq!(config.points_of_interest.len(), 3);
    }

    #[test]
    fn test_presets() {
        assert_eq!(SceneConfig::from_preset(HorizonPreset::Near).horizon.distance_factor, 1.0);
        assert_eq!(SceneConfig::from_preset(HorizonPreset::Standard).horizon.distance_factor, 3.57);
    }

    #[test]
    fn test_default_config_is_valid() {
        let result = validate_scene_config(&SceneConfig::default());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_config_collects_all_errors() {
        let config = SceneConfig {
            horizon: HorizonConfig {
                distance_factor: -1.0,
                longitude_scale: LongitudeScale::Radians,
            },
            forward_offset_m: f64::NAN,
            show_horizon: true,
            points_of_interest: vec![
                PointOfInterest::new("", 10.0, 10.0),
                PointOfInterest::new("Nowhere", 95.0, 0.0),
            ],
        };

        let result = validate_scene_config(&config);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 4);
    }

    #[test]
    fn test_duplicate_names_warn() {
        let config = SceneConfig::default().with_points_of_interest(vec![
            PointOfInterest::new("Peak", 45.0, -121.0),
            PointOfInterest::new("Peak", 46.0, -121.0),
        ]);

        let result = validate_scene_config(&config);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_config_json_shape() {
        let json = r#"{
            "horizon": { "distance_factor": 1.0, "longitude_scale": "radians" },
            "forward_offset_m": 15.0,
            "show_horizon": false,
            "points_of_interest": [
                { "name": "Mt. Rainier", "coordinate": { "latitude": 46.8523, "longitude": -121.7603 } }
            ]
        }"#;

        let config: SceneConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.horizon.longitude_scale, LongitudeScale::Radians);
        assert_eq!(config.forward_offset_m, 15.0);
        assert!(!config.show_horizon);
        assert_eq!(config.points_of_interest[0].coordinate, GeoCoordinate::new(46.8523, -121.7603));
    }

    #[test]
    fn test_longitude_scale_defaults_to_legacy() {
        let config: HorizonConfig = serde_json::from_str(r#"{ "distance_factor": 2.0 }"#).unwrap();
        assert_eq!(config.longitude_scale, LongitudeScale::LegacyDegrees);
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");

        let mut manager = ConfigurationManager::new();
        manager.set_distance_factor(1.0).unwrap();
        manager.set_longitude_scale(LongitudeScale::Radians);
        manager
            .add_point_of_interest(PointOfInterest::new("Half Dome", 37.7459, -119.5332))
            .unwrap();
        assert!(manager.is_modified());

        manager.save_to_file(&path).unwrap();
        assert!(!manager.is_modified());

        let loaded = ConfigurationManager::from_file(&path).unwrap();
        assert_eq!(loaded.config(), manager.config());
        assert_eq!(loaded.config().points_of_interest.len(), 4);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");

        let mut config = SceneConfig::default();
        config.horizon.distance_factor = 0.0;
        fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();

        assert!(matches!(
            ConfigurationManager::from_file(&path),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_load_reports_missing_file_and_bad_json() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            ConfigurationManager::from_file(dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));

        let path = dir.path().join("garbage.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ConfigurationManager::from_file(&path),
            Err(ConfigError::Serialization(_))
        ));
    }

    #[test]
    fn test_save_without_path_fails() {
        let mut manager = ConfigurationManager::new();
        assert!(matches!(manager.save(), Err(ConfigError::NoFilePath)));
    }

    #[test]
    fn test_runtime_adjustments() {
        let mut manager = ConfigurationManager::new();

        assert_eq!(manager.set_forward_offset(20.0).unwrap(), 10.0);
        assert!(manager.set_forward_offset(-5.0).is_err());
        assert!(manager.set_distance_factor(f64::INFINITY).is_err());
        assert_eq!(manager.apply_preset(HorizonPreset::Near), 3.57);
        assert!(manager.set_show_horizon(false));

        assert!(manager
            .add_point_of_interest(PointOfInterest::new("Bad", 0.0, 181.0))
            .is_err());
        assert_eq!(manager.remove_point_of_interest("Mt. Hood"), 1);
        assert_eq!(manager.remove_point_of_interest("Mt. Hood"), 0);
        assert_eq!(manager.config().points_of_interest.len(), 2);
    }

    #[test]
    fn test_update_config_validates() {
        let mut manager = ConfigurationManager::new();
        let mut config = SceneConfig::default();
        config.forward_offset_m = -1.0;

        assert!(manager.update_config(config).is_err());
        assert!(!manager.is_modified());
    }
}

//! worldscale - compute a world-scale AR scene update from the command line
//!
//! Stands in for the presentation layer: takes a device fix, runs the
//! geodesy core and prints the resulting scene update as JSON on stdout.
//! Logs go to stderr; set `RUST_LOG=worldscale=debug` for detail.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use worldscale::{
    ConfigurationManager, GeoCoordinate, HorizonPreset, LongitudeScale, SceneConfig, SceneService,
};

/// Horizon preset selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum PresetArg {
    /// Geometric horizon (3.57 km per sqrt(m) of altitude)
    Standard,
    /// Near-field terrain (1.0 km per sqrt(m) of altitude)
    Near,
}

impl From<PresetArg> for HorizonPreset {
    fn from(preset: PresetArg) -> Self {
        match preset {
            PresetArg::Standard => HorizonPreset::Standard,
            PresetArg::Near => HorizonPreset::Near,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "worldscale", version, about = "Place points of interest and horizon terrain around a device")]
struct Cli {
    /// Device latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Device longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Device altitude in meters (defaults to the 2 m floor)
    #[arg(long, allow_negative_numbers = true)]
    alt: Option<f64>,

    /// True compass heading in degrees
    #[arg(long, allow_negative_numbers = true)]
    heading: Option<f64>,

    /// Scene configuration JSON file
    #[arg(long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Horizon preset used when no config file is given
    #[arg(long, value_enum, default_value_t = PresetArg::Standard)]
    preset: PresetArg,

    /// Scale longitude with the latitude converted to radians
    #[arg(long)]
    fix_longitude_scale: bool,

    /// Write the effective configuration to this file
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let mut manager = match &cli.config {
        Some(path) => ConfigurationManager::from_file(path)?,
        None => ConfigurationManager::with_config(SceneConfig::from_preset(cli.preset.into())),
    };

    if cli.fix_longitude_scale {
        manager.set_longitude_scale(LongitudeScale::Radians);
    }

    if let Some(path) = &cli.write_config {
        manager.save_to_file(path)?;
        tracing::info!(path = %path.display(), "configuration written");
    }

    let device = GeoCoordinate {
        latitude: cli.lat,
        longitude: cli.lon,
        altitude: cli.alt,
    };

    let service = SceneService::new(manager.into_config())?;
    let update = service.update(&device, cli.heading)?;

    println!("{}", serde_json::to_string_pretty(&update)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_coordinates() {
        let cli = Cli::try_parse_from(["worldscale", "--lat", "37.7749", "--lon", "-122.4194", "--heading", "-45"]).unwrap();
        assert_eq!(cli.lon, -122.4194);
        assert_eq!(cli.heading, Some(-45.0));
        assert_eq!(cli.preset, PresetArg::Standard);
        assert!(!cli.fix_longitude_scale);
    }

    #[test]
    fn test_cli_preset_and_config_conflict() {
        let result = Cli::try_parse_from([
            "worldscale", "--lat", "0", "--lon", "0", "--config", "scene.json", "--preset", "near",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_location() {
        assert!(Cli::try_parse_from(["worldscale", "--lat", "0"]).is_err());
    }

    #[test]
    fn test_preset_conversion() {
        assert_eq!(HorizonPreset::from(PresetArg::Near), HorizonPreset::Near);
    }
}

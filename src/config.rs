// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::db::keys;
use crate::models::{Coords, PanOptions};
use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the file-backed key-value store
    pub storage_dir: PathBuf,
    /// Key of the workouts snapshot
    pub storage_key: String,
    /// Zoom used when creating the map and when focusing a workout
    pub map_zoom: u8,
    /// Duration of the focus transition, in seconds
    pub pan_duration_secs: f64,
    /// Position reported by the fixed geolocation provider, if any
    pub home_position: Option<Coords>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("data"),
            storage_key: keys::WORKOUTS.to_string(),
            map_zoom: 15,
            pan_duration_secs: 1.0,
            home_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first, if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let home_position = match (env::var("TRACKER_HOME_LAT"), env::var("TRACKER_HOME_LNG")) {
            (Ok(lat), Ok(lng)) => Some(Coords::new(
                parse_var("TRACKER_HOME_LAT", &lat)?,
                parse_var("TRACKER_HOME_LNG", &lng)?,
            )),
            _ => None,
        };

        let pan_duration_secs: f64 = match env::var("TRACKER_PAN_DURATION_SECS") {
            Ok(raw) => parse_var("TRACKER_PAN_DURATION_SECS", &raw)?,
            Err(_) => 1.0,
        };
        if !pan_duration_secs.is_finite() || pan_duration_secs < 0.0 {
            return Err(ConfigError::Invalid(
                "TRACKER_PAN_DURATION_SECS",
                "must be a non-negative number".to_string(),
            ));
        }

        Ok(Self {
            storage_dir: env::var("TRACKER_STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            storage_key: env::var("TRACKER_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| keys::WORKOUTS.to_string()),
            map_zoom: match env::var("TRACKER_MAP_ZOOM") {
                Ok(raw) => parse_var("TRACKER_MAP_ZOOM", &raw)?,
                Err(_) => 15,
            },
            pan_duration_secs,
            home_position,
        })
    }

    /// Pan options derived from the zoom and transition settings.
    pub fn pan_options(&self) -> PanOptions {
        PanOptions {
            zoom: self.map_zoom,
            animate: true,
            duration_secs: self.pan_duration_secs,
        }
    }
}

fn parse_var<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::Invalid(name, e.to_string()))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}

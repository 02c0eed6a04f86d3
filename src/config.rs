//! Configuration for the geokit command line tool
//!
//! Settings are read from TOML. Built-in defaults come from the embedded
//! `geokit.toml`; a user file only needs to name the keys it changes.

use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::LevelFilter;

use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // Parse the embedded defaults once
    static ref DEFAULT_SETTINGS: Settings = {
        let content = include_str!("../geokit.toml");
        Settings::from_str_with_base(content, &Settings::fallback()).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in settings: {}", e);
            Settings::fallback()
        })
    };
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Log file; when unset, logging goes to the console only
    pub log_file: Option<String>,
    /// Maximum log level
    pub log_level: LevelFilter,
    /// Decimal places used when printing coordinates
    pub precision: usize,
    /// Radius in meters for bounds around a point when none is given
    pub default_radius: f64,
}

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS.clone()
    }
}

impl Settings {
    fn fallback() -> Self {
        Settings {
            log_file: None,
            log_level: LevelFilter::Info,
            precision: 6,
            default_radius: 0.0,
        }
    }

    /// Load settings from a TOML file on top of the defaults
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    fn from_str_with_base(content: &str, base: &Settings) -> GeoResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(GeoError::ConfigError(format!("Failed to parse TOML: {}", e))),
        };

        let mut settings = base.clone();
        let table = match toml_value.get("geokit") {
            Some(value) => value
                .as_table()
                .ok_or_else(|| GeoError::ConfigError("[geokit] must be a table".to_string()))?,
            None => return Ok(settings),
        };

        if let Some(value) = table.get("log_file") {
            let path = value
                .as_str()
                .ok_or_else(|| GeoError::ConfigError("log_file must be a string".to_string()))?;
            settings.log_file = Some(path.to_string());
        }

        if let Some(value) = table.get("log_level") {
            let level = value
                .as_str()
                .ok_or_else(|| GeoError::ConfigError("log_level must be a string".to_string()))?;
            settings.log_level = level
                .parse::<LevelFilter>()
                .map_err(|_| GeoError::ConfigError(format!("Unknown log level: {}", level)))?;
        }

        if let Some(value) = table.get("precision") {
            let precision = value
                .as_integer()
                .filter(|p| (0..=17).contains(p))
                .ok_or_else(|| {
                    GeoError::ConfigError("precision must be an integer between 0 and 17".to_string())
                })?;
            settings.precision = precision as usize;
        }

        if let Some(value) = table.get("default_radius") {
            // Accept integers too: `default_radius = 500`
            let radius = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .filter(|r| r.is_finite() && *r >= 0.0)
                .ok_or_else(|| {
                    GeoError::ConfigError("default_radius must be a non-negative number".to_string())
                })?;
            settings.default_radius = radius;
        }

        Ok(settings)
    }
}

impl FromStr for Settings {
    type Err = GeoError;

    /// Parse settings from a TOML string on top of the defaults
    fn from_str(content: &str) -> GeoResult<Self> {
        Self::from_str_with_base(content, &Settings::default())
    }
}

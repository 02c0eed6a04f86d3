//! Custom error types for coordinate handling

use std::fmt;
use std::io;

/// Geokit error types
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Latitude out of [-90, 90] or a NaN component
    InvalidCoordinate { lng: f64, lat: f64 },
    /// Malformed coordinate or bounding box string
    ParseError(String),
    /// Malformed configuration
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidCoordinate { lng, lat } => write!(
                f,
                "Invalid LngLat object: ({}, {}); latitude must be within [-90, 90] and neither value may be NaN",
                lng, lat
            ),
            GeoError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "Geokit error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

/// Result type for geokit operations
pub type GeoResult<T> = Result<T, GeoError>;

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

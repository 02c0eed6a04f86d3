//! Coordinate utility functions
//!
//! Parsing of the comma separated coordinate strings accepted on the command
//! line and in configuration, and fixed-precision formatting of results.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::coordinate::{LngLat, LngLatBounds};
use crate::errors::{GeoError, GeoResult};

lazy_static! {
    // A signed decimal number with optional exponent, surrounded by optional whitespace
    static ref NUMBER_LIST: Regex = Regex::new(
        r"^\s*[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?\s*(,\s*[-+]?(\d+\.?\d*|\.\d+)([eE][-+]?\d+)?\s*)*$"
    ).expect("number list pattern is valid");
}

/// Split a comma separated list of numbers
///
/// # Arguments
/// * `s` - Input such as "-74.006, 40.7128"
///
/// # Returns
/// The parsed values in order, or a parse error naming the input
pub fn parse_numbers(s: &str) -> GeoResult<Vec<f64>> {
    if !NUMBER_LIST.is_match(s) {
        return Err(GeoError::ParseError(format!(
            "'{}' is not a comma separated list of numbers",
            s
        )));
    }

    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| GeoError::ParseError(format!("Invalid number '{}': {}", part.trim(), e)))
        })
        .collect()
}

/// Parse "lng,lat" into its two components
pub fn parse_pair(s: &str) -> GeoResult<(f64, f64)> {
    let values = parse_numbers(s)?;
    match values.as_slice() {
        [lng, lat] => {
            debug!("Parsed coordinate: lng={}, lat={}", lng, lat);
            Ok((*lng, *lat))
        }
        _ => Err(GeoError::ParseError(format!(
            "Coordinate must be in format 'lng,lat', got {} values",
            values.len()
        ))),
    }
}

/// Parse "west,south,east,north" into its four components
pub fn parse_bbox(s: &str) -> GeoResult<[f64; 4]> {
    let values = parse_numbers(s)?;
    match values.as_slice() {
        [west, south, east, north] => {
            debug!(
                "Parsed bounding box: west={}, south={}, east={}, north={}",
                west, south, east, north
            );
            Ok([*west, *south, *east, *north])
        }
        _ => Err(GeoError::ParseError(format!(
            "Bounding box must have 4 comma-separated values (west,south,east,north), got {}",
            values.len()
        ))),
    }
}

/// Format a coordinate with a fixed number of decimals
pub fn format_lng_lat(point: &LngLat, precision: usize) -> String {
    format!(
        "{:.prec$},{:.prec$}",
        point.lng(),
        point.lat(),
        prec = precision
    )
}

/// Format bounds as "west,south,east,north" with a fixed number of decimals
pub fn format_bounds(bounds: &LngLatBounds, precision: usize) -> String {
    match bounds.to_array() {
        Some([[west, south], [east, north]]) => format!(
            "{:.prec$},{:.prec$},{:.prec$},{:.prec$}",
            west,
            south,
            east,
            north,
            prec = precision
        ),
        None => "empty".to_string(),
    }
}

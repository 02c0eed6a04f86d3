//! Geographic coordinate in degrees

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::lng_lat_bounds::LngLatBounds;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_METERS: f64 = 6371008.8;

/// Length of the equator in meters
pub const EARTH_CIRCUMFERENCE_METERS: f64 = 40075017.0;

/// A longitude/latitude pair in degrees
///
/// Latitude is checked at construction; longitude is not, so values past
/// +/-180 are kept as given until [`LngLat::wrap`] is called.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    lng: f64,
    lat: f64,
}

impl LngLat {
    /// Create a new coordinate, failing for a non-finite longitude or a
    /// latitude outside [-90, 90] (NaN included)
    pub fn new(lng: f64, lat: f64) -> GeoResult<Self> {
        if !lng.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(GeoError::InvalidCoordinate { lng, lat });
        }
        Ok(LngLat { lng, lat })
    }

    /// Build from values already known to be valid
    pub(crate) fn from_valid(lng: f64, lat: f64) -> Self {
        debug_assert!(lng.is_finite() && (-90.0..=90.0).contains(&lat));
        LngLat { lng, lat }
    }

    /// Create from a `[lng, lat]` array
    pub fn from_array(values: [f64; 2]) -> GeoResult<Self> {
        Self::new(values[0], values[1])
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Same coordinate with longitude brought into (-180, 180]
    pub fn wrap(&self) -> LngLat {
        LngLat::from_valid(wrap(self.lng, -180.0, 180.0), self.lat)
    }

    /// Great-circle distance to `other` in meters
    ///
    /// Uses the spherical law of cosines on a sphere of radius
    /// [`EARTH_RADIUS_METERS`].
    pub fn distance_to(&self, other: &LngLat) -> f64 {
        let rad = PI / 180.0;
        let lat1 = self.lat * rad;
        let lat2 = other.lat * rad;
        let a = lat1.sin() * lat2.sin()
            + lat1.cos() * lat2.cos() * ((other.lng - self.lng) * rad).cos();

        // Rounding can push `a` just past 1 for identical points
        EARTH_RADIUS_METERS * a.min(1.0).acos()
    }

    /// Square bounds extending `radius_meters` from this point in each direction
    ///
    /// Converts meters to degrees with a flat-earth approximation, so the
    /// longitude extent grows without bound near the poles. Fails when a
    /// resulting corner lies beyond a pole.
    pub fn to_bounds(&self, radius_meters: f64) -> GeoResult<LngLatBounds> {
        let lat_accuracy = 360.0 * radius_meters / EARTH_CIRCUMFERENCE_METERS;
        let lng_accuracy = lat_accuracy / (PI / 180.0 * self.lat).cos();

        Ok(LngLatBounds::from_corners(
            LngLat::new(self.lng - lng_accuracy, self.lat - lat_accuracy)?,
            LngLat::new(self.lng + lng_accuracy, self.lat + lat_accuracy)?,
        ))
    }
}

/// Wrap `n` into the range `(min, max]`
pub fn wrap(n: f64, min: f64, max: f64) -> f64 {
    let d = max - min;
    let w = ((n - min) % d + d) % d + min;
    if w == min {
        max
    } else {
        w
    }
}

impl fmt::Display for LngLat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LngLat({}, {})", self.lng, self.lat)
    }
}

impl FromStr for LngLat {
    type Err = GeoError;

    /// Parse "lng,lat"
    fn from_str(s: &str) -> GeoResult<Self> {
        let (lng, lat) = coordinate_utils::parse_pair(s)?;
        LngLat::new(lng, lat)
    }
}

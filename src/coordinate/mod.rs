//! Coordinate handling
//!
//! Plain value types for 2D vector math and for geographic coordinates and
//! bounding boxes in longitude/latitude degrees.

mod lng_lat;
mod lng_lat_bounds;
mod point;

// Re-export key types
pub use self::lng_lat::{wrap, LngLat, EARTH_CIRCUMFERENCE_METERS, EARTH_RADIUS_METERS};
pub use self::lng_lat_bounds::{ExtendTarget, LngLatBounds};
pub use self::point::Point;

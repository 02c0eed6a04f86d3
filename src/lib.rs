//! Geographic coordinate, bounding box and 2D vector utilities
//!
//! [`LngLat`] is a validated longitude/latitude pair, [`LngLatBounds`] a
//! southwest/northeast box that can be grown with
//! [`extend`](LngLatBounds::extend), and [`Point`] a 2D vector with
//! copy-returning and in-place operations.

pub mod errors;
pub mod config;
pub mod utils;
pub mod coordinate;
pub mod commands;
pub mod cli;

pub use coordinate::{ExtendTarget, LngLat, LngLatBounds, Point};
pub use errors::{GeoError, GeoResult};

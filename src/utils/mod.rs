//! Utility modules for common functionality

pub mod logger;
pub mod coordinate_utils;

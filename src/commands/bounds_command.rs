//! Bounds-around-a-point command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::lng_lat_arg;
use crate::config::Settings;
use crate::coordinate::LngLat;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils::format_bounds;

/// Command that builds square bounds of a given radius around a coordinate
pub struct BoundsCommand<'a> {
    center: LngLat,
    radius_meters: f64,
    settings: &'a Settings,
}

impl<'a> BoundsCommand<'a> {
    /// Create a new bounds command
    ///
    /// Falls back to the configured default radius when `--radius` is absent.
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> GeoResult<Self> {
        let center = lng_lat_arg(args, "input")?;
        let radius_meters = args
            .get_one::<f64>("radius")
            .copied()
            .unwrap_or(settings.default_radius);

        if !radius_meters.is_finite() || radius_meters < 0.0 {
            return Err(GeoError::GenericError(format!(
                "Radius must be a non-negative number of meters, got {}",
                radius_meters
            )));
        }
        debug!("Bounds around {} with radius {} m", center, radius_meters);

        Ok(BoundsCommand { center, radius_meters, settings })
    }
}

impl<'a> Command for BoundsCommand<'a> {
    fn execute(&self) -> GeoResult<String> {
        let bounds = self.center.to_bounds(self.radius_meters)?;
        info!("Bounds for {} m around {}: {}", self.radius_meters, self.center, bounds);

        Ok(format!("Bounds: {}", format_bounds(&bounds, self.settings.precision)))
    }
}

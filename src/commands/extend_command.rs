//! Command that grows bounds over a set of coordinates

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::lng_lat_arg;
use crate::config::Settings;
use crate::coordinate::{LngLat, LngLatBounds};
use crate::errors::GeoResult;
use crate::utils::coordinate_utils::{format_bounds, format_lng_lat};

/// Command that reports the bounds covering several coordinates
pub struct ExtendCommand<'a> {
    points: Vec<LngLat>,
    settings: &'a Settings,
}

impl<'a> ExtendCommand<'a> {
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> GeoResult<Self> {
        let mut points = vec![lng_lat_arg(args, "input")?];
        if let Some(values) = args.get_many::<String>("extend") {
            for value in values {
                points.push(value.parse()?);
            }
        }
        debug!("Extending bounds over {} points", points.len());

        Ok(ExtendCommand { points, settings })
    }
}

impl<'a> Command for ExtendCommand<'a> {
    fn execute(&self) -> GeoResult<String> {
        let mut bounds = LngLatBounds::new();
        for point in &self.points {
            bounds.extend(*point);
        }
        info!("Bounds over {} points: {}", self.points.len(), bounds);

        let mut report = format!("Bounds: {}", format_bounds(&bounds, self.settings.precision));
        if let Some(center) = bounds.get_center() {
            report.push_str(&format!(
                "\n  Center: {}",
                format_lng_lat(&center, self.settings.precision)
            ));
        }
        Ok(report)
    }
}

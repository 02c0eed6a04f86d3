//! Coordinate description command

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::commands::lng_lat_arg;
use crate::config::Settings;
use crate::coordinate::LngLat;
use crate::errors::GeoResult;
use crate::utils::coordinate_utils::format_lng_lat;

/// Command that prints a coordinate and its wrapped form
pub struct DescribeCommand<'a> {
    point: LngLat,
    settings: &'a Settings,
}

impl<'a> DescribeCommand<'a> {
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> GeoResult<Self> {
        let point = lng_lat_arg(args, "input")?;
        Ok(DescribeCommand { point, settings })
    }
}

impl<'a> Command for DescribeCommand<'a> {
    fn execute(&self) -> GeoResult<String> {
        let wrapped = self.point.wrap();
        debug!("Wrapped {} to {}", self.point, wrapped);

        Ok(format!(
            "{}\n  Wrapped: {}",
            self.point,
            format_lng_lat(&wrapped, self.settings.precision)
        ))
    }
}

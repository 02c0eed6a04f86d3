//! Great-circle distance command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::lng_lat_arg;
use crate::config::Settings;
use crate::coordinate::LngLat;
use crate::errors::GeoResult;

/// Command for measuring the distance between two coordinates
pub struct DistanceCommand<'a> {
    from: LngLat,
    to: LngLat,
    settings: &'a Settings,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap; needs `input` and `to`
    /// * `settings` - Output settings
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> GeoResult<Self> {
        let from = lng_lat_arg(args, "input")?;
        let to = lng_lat_arg(args, "to")?;
        debug!("Distance from {} to {}", from, to);

        Ok(DistanceCommand { from, to, settings })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<String> {
        let meters = self.from.distance_to(&self.to);
        info!("Distance between {} and {}: {} m", self.from, self.to, meters);

        Ok(format!(
            "Distance: {:.prec$} m",
            meters,
            prec = self.settings.precision
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_utils::matches;

    #[test]
    fn test_new_york_to_los_angeles() {
        let settings = Settings {
            precision: 0,
            ..Settings::default()
        };
        let args = matches(&["-74.0060,40.7128", "--to", "-118.2437,34.0522"]);
        let command = DistanceCommand::new(&args, &settings).unwrap();
        assert_eq!(command.execute().unwrap(), "Distance: 3935752 m");
    }

    #[test]
    fn test_invalid_target() {
        let settings = Settings::default();
        let args = matches(&["0,0", "--to", "0,-91"]);
        assert!(DistanceCommand::new(&args, &settings).is_err());
    }
}

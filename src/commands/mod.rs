//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod describe_command;
pub mod distance_command;
pub mod bounds_command;
pub mod within_command;
pub mod extend_command;

pub use command_traits::{Command, CommandFactory};
pub use describe_command::DescribeCommand;
pub use distance_command::DistanceCommand;
pub use bounds_command::BoundsCommand;
pub use within_command::WithinCommand;
pub use extend_command::ExtendCommand;

use clap::ArgMatches;
use crate::config::Settings;
use crate::coordinate::LngLat;
use crate::errors::{GeoError, GeoResult};

/// Factory for creating command instances based on CLI arguments
///
/// Options are checked in a fixed order: `--to`, `--within`, `--extend`,
/// `--bounds`. Without any of them the coordinate is described.
pub struct GeokitCommandFactory;

impl GeokitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeokitCommandFactory
    }
}

impl Default for GeokitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for GeokitCommandFactory {
    fn create_command(&self, args: &ArgMatches, settings: &'a Settings) -> GeoResult<Box<dyn Command + 'a>> {
        if args.contains_id("to") {
            Ok(Box::new(DistanceCommand::new(args, settings)?))
        } else if args.contains_id("within") {
            Ok(Box::new(WithinCommand::new(args, settings)?))
        } else if args.contains_id("extend") {
            Ok(Box::new(ExtendCommand::new(args, settings)?))
        } else if args.get_flag("bounds") {
            Ok(Box::new(BoundsCommand::new(args, settings)?))
        } else {
            Ok(Box::new(DescribeCommand::new(args, settings)?))
        }
    }
}

/// Read a required `lng,lat` argument
pub(crate) fn lng_lat_arg(args: &ArgMatches, name: &str) -> GeoResult<LngLat> {
    args.get_one::<String>(name)
        .ok_or_else(|| GeoError::GenericError(format!("Missing argument: {}", name)))?
        .parse()
}

#[cfg(test)]
pub(crate) mod test_utils {
    use clap::ArgMatches;
    use crate::cli::build_cli;

    /// Parse a command line the way the binary does
    pub fn matches(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["geokit"];
        argv.extend_from_slice(args);
        build_cli().try_get_matches_from(argv).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::test_utils::matches;

    fn run(args: &[&str]) -> GeoResult<String> {
        let settings = Settings::default();
        let factory = GeokitCommandFactory::new();
        let command = factory.create_command(&matches(args), &settings)?;
        command.execute()
    }

    #[test]
    fn test_dispatch() {
        assert!(run(&["10,20"]).unwrap().starts_with("LngLat(10, 20)"));
        assert!(run(&["0,0", "--to", "1,0"]).unwrap().starts_with("Distance:"));
        assert!(run(&["0,0", "--within", "-1,-1,1,1"]).unwrap().contains("inside"));
        assert!(run(&["0,0", "--extend", "2,2"]).unwrap().starts_with("Bounds:"));
        assert!(run(&["0,0", "--bounds", "--radius", "10"]).unwrap().starts_with("Bounds:"));
    }

    #[test]
    fn test_invalid_input_is_reported() {
        assert!(matches!(run(&["0,95"]), Err(GeoError::InvalidCoordinate { .. })));
        assert!(matches!(run(&["zero,zero"]), Err(GeoError::ParseError(_))));
    }
}

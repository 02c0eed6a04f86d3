//! Command line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command for the geokit binary
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geokit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Geographic coordinate and bounding box calculations")
        .arg(
            Arg::new("input")
                .help("Coordinate as 'lng,lat'")
                .required(true)
                .allow_hyphen_values(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML settings file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Great-circle distance in meters to this 'lng,lat'")
                .value_name("LNGLAT")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("bounds")
                .short('b')
                .long("bounds")
                .help("Square bounds around the coordinate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("radius")
                .long("radius")
                .help("Radius in meters for --bounds")
                .value_name("METERS")
                .value_parser(clap::value_parser!(f64))
                .required(false),
        )
        .arg(
            Arg::new("within")
                .long("within")
                .help("Check whether the coordinate lies in 'west,south,east,north'")
                .value_name("BBOX")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("extend")
                .long("extend")
                .help("Bounds covering the coordinate and these 'lng,lat' values")
                .value_name("LNGLAT")
                .allow_hyphen_values(true)
                .action(ArgAction::Append)
                .required(false),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let matches = build_cli()
            .try_get_matches_from(["geokit", "-74.006,40.7128", "--to", "-118.2437,34.0522"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("input").map(String::as_str),
            Some("-74.006,40.7128")
        );
        assert_eq!(
            matches.get_one::<String>("to").map(String::as_str),
            Some("-118.2437,34.0522")
        );
    }
}

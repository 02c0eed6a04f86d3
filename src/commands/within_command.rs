//! Point-in-bounds command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::lng_lat_arg;
use crate::config::Settings;
use crate::coordinate::{LngLat, LngLatBounds};
use crate::errors::{GeoError, GeoResult};

/// Command that checks whether a coordinate lies in a bounding box
pub struct WithinCommand<'a> {
    point: LngLat,
    bounds: LngLatBounds,
    settings: &'a Settings,
}

impl<'a> WithinCommand<'a> {
    /// Create a new within command
    ///
    /// The box is given as "west,south,east,north"; west > east describes
    /// a box crossing the antimeridian.
    pub fn new(args: &ArgMatches, settings: &'a Settings) -> GeoResult<Self> {
        let point = lng_lat_arg(args, "input")?;
        let bounds = args
            .get_one::<String>("within")
            .ok_or_else(|| GeoError::GenericError("Missing argument: within".to_string()))?
            .parse::<LngLatBounds>()?;
        debug!("Checking {} against {}", point, bounds);

        Ok(WithinCommand { point, bounds, settings })
    }
}

impl<'a> Command for WithinCommand<'a> {
    fn execute(&self) -> GeoResult<String> {
        let inside = self.bounds.contains(&self.point);
        info!("{} inside {}: {}", self.point, self.bounds, inside);

        let center_distance = match self.bounds.get_center() {
            Some(center) => center.distance_to(&self.point),
            None => 0.0,
        };
        Ok(format!(
            "{} is {} {} ({:.prec$} m from its center)",
            self.point,
            if inside { "inside" } else { "outside" },
            self.bounds,
            center_distance,
            prec = self.settings.precision
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_utils::matches;

    fn report(args: &[&str]) -> String {
        let settings = Settings {
            precision: 0,
            ..Settings::default()
        };
        WithinCommand::new(&matches(args), &settings)
            .unwrap()
            .execute()
            .unwrap()
    }

    #[test]
    fn test_inside_and_outside() {
        assert_eq!(
            report(&["0,0", "--within", "-1,-1,1,1"]),
            "LngLat(0, 0) is inside LngLatBounds(LngLat(-1, -1), LngLat(1, 1)) (0 m from its center)"
        );
        assert!(report(&["2,0", "--within", "-1,-1,1,1"]).contains(" outside "));
    }

    #[test]
    fn test_wrapped_box() {
        assert!(report(&["0,0", "--within", "170,-10,-170,10"]).contains(" inside "));
        assert!(report(&["180,0", "--within", "170,-10,-170,10"]).contains(" outside "));
    }

    #[test]
    fn test_malformed_box() {
        let settings = Settings::default();
        let args = matches(&["0,0", "--within", "1,2,3"]);
        assert!(WithinCommand::new(&args, &settings).is_err());
    }
}

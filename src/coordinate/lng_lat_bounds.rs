//! Bounding box in longitude/latitude space

use std::fmt;
use std::str::FromStr;

use super::lng_lat::LngLat;
use crate::errors::{GeoError, GeoResult};
use crate::utils::coordinate_utils;

/// Anything a bounding box can be extended by
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtendTarget {
    /// A single coordinate
    Point(LngLat),
    /// The corners of another box
    Bounds(LngLatBounds),
}

impl From<LngLat> for ExtendTarget {
    fn from(point: LngLat) -> Self {
        ExtendTarget::Point(point)
    }
}

impl From<LngLatBounds> for ExtendTarget {
    fn from(bounds: LngLatBounds) -> Self {
        ExtendTarget::Bounds(bounds)
    }
}

/// A box defined by its southwest and northeast corners
///
/// A box missing either corner is empty. When the southwest longitude is
/// greater than the northeast one, the box crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LngLatBounds {
    southwest: Option<LngLat>,
    northeast: Option<LngLat>,
}

impl LngLatBounds {
    /// Create an empty bounding box
    pub fn new() -> Self {
        LngLatBounds::default()
    }

    /// Create a bounding box from two corners, taken as given
    pub fn from_corners(southwest: LngLat, northeast: LngLat) -> Self {
        LngLatBounds {
            southwest: Some(southwest),
            northeast: Some(northeast),
        }
    }

    pub fn set_south_west(&mut self, southwest: LngLat) -> &mut Self {
        self.southwest = Some(southwest);
        self
    }

    pub fn set_north_east(&mut self, northeast: LngLat) -> &mut Self {
        self.northeast = Some(northeast);
        self
    }

    pub fn south_west(&self) -> Option<LngLat> {
        self.southwest
    }

    pub fn north_east(&self) -> Option<LngLat> {
        self.northeast
    }

    /// Grow the box to include a point or another box
    ///
    /// Longitudes are merged with a plain min/max, so a box crossing the
    /// antimeridian is not merged across it. Extending by an empty box does
    /// nothing.
    pub fn extend<T: Into<ExtendTarget>>(&mut self, target: T) -> &mut Self {
        let (sw2, ne2) = match target.into() {
            ExtendTarget::Point(point) => (point, point),
            ExtendTarget::Bounds(bounds) => match (bounds.southwest, bounds.northeast) {
                (Some(sw), Some(ne)) => (sw, ne),
                _ => return self,
            },
        };

        // A lone corner set through a setter still takes part in the merge
        let southwest = match self.southwest.or(self.northeast) {
            None => sw2,
            Some(sw) => LngLat::from_valid(sw.lng().min(sw2.lng()), sw.lat().min(sw2.lat())),
        };
        let northeast = match self.northeast.or(self.southwest) {
            None => ne2,
            Some(ne) => LngLat::from_valid(ne.lng().max(ne2.lng()), ne.lat().max(ne2.lat())),
        };

        self.southwest = Some(southwest);
        self.northeast = Some(northeast);
        self
    }

    /// Raw midpoint of the two corners
    pub fn get_center(&self) -> Option<LngLat> {
        let (sw, ne) = self.corners()?;
        // Halve before adding so huge longitudes cannot overflow to infinity
        Some(LngLat::from_valid(
            sw.lng() / 2.0 + ne.lng() / 2.0,
            sw.lat() / 2.0 + ne.lat() / 2.0,
        ))
    }

    pub fn get_north_west(&self) -> Option<LngLat> {
        let (sw, ne) = self.corners()?;
        Some(LngLat::from_valid(sw.lng(), ne.lat()))
    }

    pub fn get_south_east(&self) -> Option<LngLat> {
        let (sw, ne) = self.corners()?;
        Some(LngLat::from_valid(ne.lng(), sw.lat()))
    }

    pub fn get_west(&self) -> Option<f64> {
        self.southwest.map(|sw| sw.lng())
    }

    pub fn get_south(&self) -> Option<f64> {
        self.southwest.map(|sw| sw.lat())
    }

    pub fn get_east(&self) -> Option<f64> {
        self.northeast.map(|ne| ne.lng())
    }

    pub fn get_north(&self) -> Option<f64> {
        self.northeast.map(|ne| ne.lat())
    }

    /// Check if this box contains `point`, edges included
    ///
    /// For a box crossing the antimeridian the longitude test becomes
    /// `sw.lng >= lng >= ne.lng`. An empty box contains nothing.
    pub fn contains(&self, point: &LngLat) -> bool {
        let (sw, ne) = match self.corners() {
            Some(corners) => corners,
            None => return false,
        };
        let (lng, lat) = (point.lng(), point.lat());

        let contains_latitude = sw.lat() <= lat && lat <= ne.lat();
        let contains_longitude = if sw.lng() > ne.lng() {
            sw.lng() >= lng && lng >= ne.lng()
        } else {
            sw.lng() <= lng && lng <= ne.lng()
        };

        contains_latitude && contains_longitude
    }

    /// True when either corner is unset
    pub fn is_empty(&self) -> bool {
        self.southwest.is_none() || self.northeast.is_none()
    }

    /// Corners as `[[west, south], [east, north]]`
    pub fn to_array(&self) -> Option<[[f64; 2]; 2]> {
        let (sw, ne) = self.corners()?;
        Some([sw.to_array(), ne.to_array()])
    }

    fn corners(&self) -> Option<(LngLat, LngLat)> {
        match (self.southwest, self.northeast) {
            (Some(sw), Some(ne)) => Some((sw, ne)),
            _ => None,
        }
    }
}

impl fmt::Display for LngLatBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.corners() {
            Some((sw, ne)) => write!(f, "LngLatBounds({}, {})", sw, ne),
            None => write!(f, "LngLatBounds(empty)"),
        }
    }
}

impl FromStr for LngLatBounds {
    type Err = GeoError;

    /// Parse "west,south,east,north"
    fn from_str(s: &str) -> GeoResult<Self> {
        let [west, south, east, north] = coordinate_utils::parse_bbox(s)?;
        Ok(LngLatBounds::from_corners(
            LngLat::new(west, south)?,
            LngLat::new(east, north)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ll(lng: f64, lat: f64) -> LngLat {
        LngLat::new(lng, lat).unwrap()
    }

    #[test]
    fn test_empty() {
        let bounds = LngLatBounds::new();
        assert!(bounds.is_empty());
        assert_eq!(bounds.get_center(), None);
        assert_eq!(bounds.to_array(), None);
        assert!(!bounds.contains(&ll(0.0, 0.0)));
        assert_eq!(bounds.to_string(), "LngLatBounds(empty)");
    }

    #[test]
    fn test_half_set_is_empty() {
        let mut bounds = LngLatBounds::new();
        bounds.set_south_west(ll(1.0, 1.0));
        assert!(bounds.is_empty());
        bounds.set_north_east(ll(2.0, 2.0));
        assert!(!bounds.is_empty());
    }

    #[test]
    fn test_corners_are_not_reordered() {
        let bounds = LngLatBounds::from_corners(ll(10.0, 10.0), ll(-10.0, -10.0));
        assert_eq!(bounds.south_west(), Some(ll(10.0, 10.0)));
        assert_eq!(bounds.north_east(), Some(ll(-10.0, -10.0)));
    }

    #[test]
    fn test_extend_single_point_center() {
        let p = ll(-73.9749, 40.7736);
        let mut bounds = LngLatBounds::new();
        bounds.extend(p);
        assert_eq!(bounds.get_center(), Some(p));
        assert_eq!(bounds.south_west(), Some(p));
        assert_eq!(bounds.north_east(), Some(p));
    }

    #[test]
    fn test_extend_points() {
        let mut bounds = LngLatBounds::new();
        bounds.extend(ll(10.0, 5.0)).extend(ll(-3.0, 20.0)).extend(ll(4.0, -1.0));
        assert_eq!(bounds.south_west(), Some(ll(-3.0, -1.0)));
        assert_eq!(bounds.north_east(), Some(ll(10.0, 20.0)));
    }

    #[test]
    fn test_extend_bounds() {
        let mut bounds = LngLatBounds::from_corners(ll(0.0, 0.0), ll(10.0, 10.0));
        bounds.extend(LngLatBounds::from_corners(ll(-5.0, 2.0), ll(5.0, 15.0)));
        assert_eq!(bounds.south_west(), Some(ll(-5.0, 0.0)));
        assert_eq!(bounds.north_east(), Some(ll(10.0, 15.0)));
    }

    #[test]
    fn test_extend_empty_with_bounds_copies_corners() {
        let source = LngLatBounds::from_corners(ll(1.0, 2.0), ll(3.0, 4.0));
        let mut bounds = LngLatBounds::new();
        bounds.extend(source);
        assert_eq!(bounds, source);

        bounds.extend(ll(10.0, 10.0));
        assert_eq!(source.north_east(), Some(ll(3.0, 4.0)));
    }

    #[test]
    fn test_extend_with_empty_is_noop() {
        let mut bounds = LngLatBounds::from_corners(ll(0.0, 0.0), ll(1.0, 1.0));
        let before = bounds;
        bounds.extend(LngLatBounds::new());
        assert_eq!(bounds, before);

        let mut empty = LngLatBounds::new();
        empty.extend(LngLatBounds::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_extend_does_not_merge_across_antimeridian() {
        let mut bounds = LngLatBounds::from_corners(ll(170.0, 0.0), ll(-170.0, 10.0));
        bounds.extend(ll(175.0, 5.0));
        assert_eq!(bounds.south_west(), Some(ll(170.0, 0.0)));
        assert_eq!(bounds.north_east(), Some(ll(175.0, 10.0)));
    }

    #[test]
    fn test_extend_with_one_corner_set() {
        let mut bounds = LngLatBounds::new();
        bounds.set_north_east(ll(5.0, 5.0));
        bounds.extend(ll(-1.0, 8.0));
        assert_eq!(bounds.south_west(), Some(ll(-1.0, 5.0)));
        assert_eq!(bounds.north_east(), Some(ll(5.0, 8.0)));
    }

    #[test]
    fn test_derived_corners() {
        let bounds = LngLatBounds::from_corners(ll(-10.0, -20.0), ll(30.0, 40.0));
        assert_eq!(bounds.get_center(), Some(ll(10.0, 10.0)));
        assert_eq!(bounds.get_north_west(), Some(ll(-10.0, 40.0)));
        assert_eq!(bounds.get_south_east(), Some(ll(30.0, -20.0)));
        assert_eq!(bounds.get_west(), Some(-10.0));
        assert_eq!(bounds.get_south(), Some(-20.0));
        assert_eq!(bounds.get_east(), Some(30.0));
        assert_eq!(bounds.get_north(), Some(40.0));
        assert_eq!(bounds.to_array(), Some([[-10.0, -20.0], [30.0, 40.0]]));
    }

    #[test]
    fn test_center_of_extreme_longitudes() {
        let far_east = ll(f64::MAX, 0.0);
        let bounds = LngLatBounds::from_corners(far_east, far_east);
        assert_eq!(bounds.get_center(), Some(far_east));

        let spread = LngLatBounds::from_corners(ll(-f64::MAX, -90.0), ll(f64::MAX, 90.0));
        assert_eq!(spread.get_center(), Some(ll(0.0, 0.0)));
    }

    #[test]
    fn test_contains() {
        let bounds = LngLatBounds::from_corners(ll(-10.0, -10.0), ll(10.0, 10.0));
        assert!(bounds.contains(&ll(0.0, 0.0)));
        assert!(bounds.contains(&ll(10.0, -10.0)));
        assert!(!bounds.contains(&ll(11.0, 0.0)));
        assert!(!bounds.contains(&ll(0.0, 10.5)));
    }

    #[test]
    fn test_contains_flips_longitude_test_when_wrapped() {
        let bounds = LngLatBounds::from_corners(ll(170.0, -10.0), ll(-170.0, 10.0));
        // The flipped comparison sw.lng >= lng >= ne.lng accepts the
        // longitudes between the corners, so 0 is inside and 180 is not
        assert!(bounds.contains(&ll(0.0, 0.0)));
        assert!(bounds.contains(&ll(170.0, 0.0)));
        assert!(bounds.contains(&ll(-170.0, 0.0)));
        assert!(!bounds.contains(&ll(180.0, 0.0)));
        assert!(!bounds.contains(&ll(0.0, 11.0)));
    }

    #[test]
    fn test_display() {
        let bounds = LngLatBounds::from_corners(ll(-1.5, 2.0), ll(3.0, 4.25));
        assert_eq!(
            bounds.to_string(),
            "LngLatBounds(LngLat(-1.5, 2), LngLat(3, 4.25))"
        );
    }

    #[test]
    fn test_from_str() {
        let bounds: LngLatBounds = "-10, -20, 30, 40".parse().unwrap();
        assert_eq!(bounds.south_west(), Some(ll(-10.0, -20.0)));
        assert_eq!(bounds.north_east(), Some(ll(30.0, 40.0)));
        assert!("1,2,3".parse::<LngLatBounds>().is_err());
        assert!("0,-95,1,1".parse::<LngLatBounds>().is_err());
    }
}

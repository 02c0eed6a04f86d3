//! Point structure for 2D vector math
//!
//! Every transforming operation comes in two flavors: a copy-returning
//! method that leaves the receiver untouched, and an `_in_place` method that
//! mutates the receiver and returns it for chaining. Arithmetic with points
//! and scalars goes through the standard operator traits.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// A point (or vector) in a 2D plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// The origin
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Multiply by another point elementwise
    pub fn mult_by_point(&self, other: &Point) -> Point {
        let mut p = *self;
        p.mult_by_point_in_place(other);
        p
    }

    /// Divide by another point elementwise
    pub fn div_by_point(&self, other: &Point) -> Point {
        let mut p = *self;
        p.div_by_point_in_place(other);
        p
    }

    /// Rotate around the origin by `angle` radians
    pub fn rotate(&self, angle: f64) -> Point {
        let mut p = *self;
        p.rotate_in_place(angle);
        p
    }

    /// Rotate around `pivot` by `angle` radians
    pub fn rotate_around(&self, angle: f64, pivot: &Point) -> Point {
        let mut p = *self;
        p.rotate_around_in_place(angle, pivot);
        p
    }

    /// Multiply by the 2x2 matrix `[a, b, c, d]` (row major)
    pub fn mat_mult(&self, m: &[f64; 4]) -> Point {
        let mut p = *self;
        p.mat_mult_in_place(m);
        p
    }

    /// Vector of length 1 in the same direction
    ///
    /// A zero-length point has no direction: the division is not guarded and
    /// both components come out NaN.
    pub fn unit(&self) -> Point {
        let mut p = *self;
        p.unit_in_place();
        p
    }

    /// Perpendicular vector, rotated 90 degrees counter-clockwise
    pub fn perp(&self) -> Point {
        let mut p = *self;
        p.perp_in_place();
        p
    }

    /// Round both components to the nearest integer, ties away from zero
    pub fn round(&self) -> Point {
        let mut p = *self;
        p.round_in_place();
        p
    }

    pub fn mult_by_point_in_place(&mut self, other: &Point) -> &mut Self {
        self.x *= other.x;
        self.y *= other.y;
        self
    }

    pub fn div_by_point_in_place(&mut self, other: &Point) -> &mut Self {
        self.x /= other.x;
        self.y /= other.y;
        self
    }

    pub fn rotate_in_place(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let x = cos * self.x - sin * self.y;
        let y = sin * self.x + cos * self.y;
        self.x = x;
        self.y = y;
        self
    }

    pub fn rotate_around_in_place(&mut self, angle: f64, pivot: &Point) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        self.x = pivot.x + cos * dx - sin * dy;
        self.y = pivot.y + sin * dx + cos * dy;
        self
    }

    pub fn mat_mult_in_place(&mut self, m: &[f64; 4]) -> &mut Self {
        let x = m[0] * self.x + m[1] * self.y;
        let y = m[2] * self.x + m[3] * self.y;
        self.x = x;
        self.y = y;
        self
    }

    pub fn unit_in_place(&mut self) -> &mut Self {
        let mag = self.mag();
        *self /= mag;
        self
    }

    pub fn perp_in_place(&mut self) -> &mut Self {
        let y = self.y;
        self.y = self.x;
        self.x = -y;
        self
    }

    pub fn round_in_place(&mut self) -> &mut Self {
        self.x = self.x.round();
        self.y = self.y.round();
        self
    }

    /// Euclidean length
    pub fn mag(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Exact component equality, no tolerance
    pub fn equals(&self, other: &Point) -> bool {
        self == other
    }

    /// Euclidean distance to `other`
    pub fn dist(&self, other: &Point) -> f64 {
        self.dist_sqr(other).sqrt()
    }

    /// Squared Euclidean distance to `other`
    pub fn dist_sqr(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Angle from the positive x axis, in radians
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Angle of the vector from `other` to this point
    pub fn angle_to(&self, other: &Point) -> f64 {
        (self.y - other.y).atan2(self.x - other.x)
    }

    /// Signed angle between this vector and `other`
    pub fn angle_with(&self, other: &Point) -> f64 {
        self.angle_with_sep(other.x, other.y)
    }

    /// Signed angle between this vector and the vector `(x, y)`
    pub fn angle_with_sep(&self, x: f64, y: f64) -> f64 {
        (self.x * y - self.y * x).atan2(self.x * x + self.y * y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Point) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, other: Point) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}

impl MulAssign<f64> for Point {
    fn mul_assign(&mut self, k: f64) {
        self.x *= k;
        self.y *= k;
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, k: f64) -> Point {
        Point::new(self.x / k, self.y / k)
    }
}

impl DivAssign<f64> for Point {
    fn div_assign(&mut self, k: f64) {
        self.x /= k;
        self.y /= k;
    }
}

//! Geometry - points on the seal plane
//!
//! Angles are in degrees, 0 points straight up and angles grow clockwise.
//! Coordinates are millimeters with the origin at the seal center and
//! y growing downwards (SVG user space).

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Euclidean distance from the origin
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f64) -> Point2D {
        self.scale(rhs)
    }
}

/// Unit vector for an angle, 0° = up, clockwise
pub fn unit_vector(angle_degrees: f64) -> Point2D {
    let rad = angle_degrees.to_radians();
    Point2D::new(rad.sin(), -rad.cos())
}

/// Point at `radius` from the origin in direction `angle_degrees`
pub fn point_on_circle(angle_degrees: f64, radius: f64) -> Point2D {
    unit_vector(angle_degrees).scale(radius)
}

//! Geometry rules for module placement.
//!
//! Modules are treated as circles whose diameter is the template's footprint
//! size. Both checks use strict inequalities: a module exactly touching the
//! boundary, or exactly tangent to a neighbour, is still a valid placement.

use serde::{Deserialize, Serialize};

use crate::constants::boundary;

/// A position in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// The circular habitat boundary modules must fit inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boundary {
    pub center: Point,
    pub radius: f32,
}

impl Default for Boundary {
    fn default() -> Self {
        Self {
            center: Point::new(boundary::CENTER_X, boundary::CENTER_Y),
            radius: boundary::RADIUS,
        }
    }
}

/// Circular footprint of a module: centre plus diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub center: Point,
    pub size: f32,
}

impl Footprint {
    pub const fn new(center: Point, size: f32) -> Self {
        Self { center, size }
    }

    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// True if the footprint lies entirely inside the boundary circle.
pub fn within_boundary(footprint: Footprint, boundary: &Boundary) -> bool {
    let distance = footprint.center.distance(boundary.center);
    distance + footprint.radius() <= boundary.radius
}

/// True if the two footprints intersect. Tangent footprints do not overlap.
pub fn overlaps(a: Footprint, b: Footprint) -> bool {
    let min_distance = (a.size + b.size) / 2.0;
    a.center.distance(b.center) < min_distance
}

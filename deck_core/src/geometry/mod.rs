//! # Footprint Geometry
//!
//! Planar geometry for deck footprints. Coordinates are millimetres; a
//! footprint is an ordered list of vertices with the closing edge implied
//! (edge `i` joins vertex `i` to vertex `(i + 1) % n`).
//!
//! - [`polygon`] - area, perimeter, point-in-polygon and footprint validation
//! - [`scanline`] - horizontal/vertical grid line intersections
//!
//! ## Example
//!
//! ```rust
//! use deck_core::geometry::{BoundingBox, Point};
//!
//! let pts = [Point::new(0.0, 0.0), Point::new(4000.0, 0.0), Point::new(4000.0, 3000.0)];
//! let bbox = BoundingBox::from_points(&pts).unwrap();
//! assert_eq!(bbox.width(), 4000.0);
//! assert_eq!(bbox.projection(), 3000.0);
//! ```

pub mod polygon;
pub mod scanline;

use serde::{Deserialize, Serialize};

pub use polygon::{
    perimeter_mm, point_in_polygon, polygon_area, validate_footprint, MAX_FOOTPRINT_EXTENT_MM,
};
pub use scanline::{horizontal_intersections, paired_spans, vertical_intersections};

/// A planar coordinate in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned bounding box of a footprint.
///
/// `width` is the x-extent (along the house wall) and `projection` the
/// y-extent (how far the deck projects out).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Compute the bounding box of a point set. Returns `None` when empty.
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points.iter().skip(1).fold(init, |b, p| BoundingBox {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// x-extent in mm
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// y-extent in mm
    pub fn projection(&self) -> f64 {
        self.max_y - self.min_y
    }
}

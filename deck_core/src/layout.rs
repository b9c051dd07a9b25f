//! # Grid Layout Optimizer
//!
//! Places bearer rows (along the projection) and pile columns (along the
//! width) on the footprint's bounding box.
//!
//! For each axis independently:
//!
//! 1. `effective = max(0, extent - 2 * offset)`
//! 2. `count = max(2, ceil(effective / max_span) + 1)`
//! 3. `spacing = effective / (count - 1)`
//!
//! The outermost lines land exactly `offset` inside each edge of the box and
//! every interior gap is equal and no larger than `max_span`.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::layout::optimize_axis;
//!
//! // 3000 mm projection, 250 mm offsets, 1200 mm max joist span
//! let rows = optimize_axis(3000.0, 250.0, 1200.0);
//! assert_eq!(rows.count, 4);
//! assert!((rows.spacing_mm - 2500.0 / 3.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::DeckConfig;
use crate::geometry::BoundingBox;

/// Evenly spaced grid lines along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    /// Number of grid lines (always >= 2)
    pub count: u32,
    /// Actual spacing between adjacent lines (mm)
    pub spacing_mm: f64,
    /// Inset of the first line from the bounding box minimum (mm)
    pub offset_mm: f64,
    /// Extent left between the two outer lines (mm)
    pub effective_extent_mm: f64,
}

impl AxisLayout {
    /// Coordinate of line `i` given the axis minimum
    pub fn position(&self, min: f64, i: u32) -> f64 {
        min + self.offset_mm + f64::from(i) * self.spacing_mm
    }

    /// Coordinates of every line, first to last
    pub fn positions(&self, min: f64) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.position(min, i))
    }

    /// Coordinate of the first line
    pub fn first(&self, min: f64) -> f64 {
        self.position(min, 0)
    }

    /// Coordinate of the last line
    pub fn last(&self, min: f64) -> f64 {
        self.position(min, self.count - 1)
    }
}

/// Optimize one axis.
///
/// Degenerate extents (<= 2 * offset) collapse to two coincident lines with
/// zero spacing rather than dividing by zero. The line count saturates at
/// `u32::MAX`; validated footprints and configs stay far below it.
pub fn optimize_axis(extent_mm: f64, offset_mm: f64, max_span_mm: f64) -> AxisLayout {
    let effective_extent_mm = (extent_mm - offset_mm * 2.0).max(0.0);
    let count = ((effective_extent_mm / max_span_mm).ceil() as u32)
        .saturating_add(1)
        .max(2);
    let spacing_mm = effective_extent_mm / f64::from(count - 1);

    AxisLayout {
        count,
        spacing_mm,
        offset_mm,
        effective_extent_mm,
    }
}

/// Bearer rows and pile columns for a footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    /// Footprint bounding box the grid was laid on
    pub bbox: BoundingBox,
    /// Bearer rows along the projection (y); spacing is the joist span
    pub bearer_rows: AxisLayout,
    /// Pile columns along the width (x); spacing is the bearer span
    pub pile_columns: AxisLayout,
}

impl GridLayout {
    /// y of the bearer row nearest the house side
    pub fn first_row_y(&self) -> f64 {
        self.bearer_rows.first(self.bbox.min_y)
    }

    /// y of the outermost bearer row
    pub fn last_row_y(&self) -> f64 {
        self.bearer_rows.last(self.bbox.min_y)
    }

    /// Every bearer row y
    pub fn row_positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.bearer_rows.positions(self.bbox.min_y)
    }

    /// Every pile column x
    pub fn column_positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.pile_columns.positions(self.bbox.min_x)
    }
}

/// Lay the bearer/pile grid over a bounding box.
pub fn optimize_grid(bbox: BoundingBox, config: &DeckConfig) -> GridLayout {
    GridLayout {
        bbox,
        bearer_rows: optimize_axis(bbox.projection(), config.edge_offset_mm, config.max_joist_span_mm),
        pile_columns: optimize_axis(bbox.width(), config.edge_offset_mm, config.max_pile_spacing_mm),
    }
}

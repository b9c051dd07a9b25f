//! # Structural Quantities
//!
//! Walks the optimized grid against the footprint to count piles, total up
//! bearer and joist runs, and find the governing joist cantilever.
//!
//! Joists are laid on their own fixed pitch across the full bounding-box
//! width, starting at the box's left edge. They are independent of the pile
//! columns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DeckConfig;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{
    horizontal_intersections, paired_spans, perimeter_mm, point_in_polygon, polygon_area,
    vertical_intersections, Point,
};
use crate::layout::GridLayout;
use crate::materials::DeckingSpec;

/// Raw quantities for one footprint. No waste is applied here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantities {
    /// Grid points that fall inside the footprint
    pub piles_inside: u32,
    /// Piles to install: `piles_inside` floored at the configured minimum
    pub total_piles: u32,
    /// Sum of bearer runs inside the footprint (mm)
    pub bearer_length_mm: f64,
    /// Number of joist lines laid across the width
    pub joist_lines: u32,
    /// Sum of joist runs inside the footprint (mm)
    pub joist_length_mm: f64,
    /// Largest joist overhang past the first or last bearer row (mm)
    pub max_joist_cantilever_mm: f64,
    /// Footprint perimeter, used for boundary joists (mm)
    pub perimeter_mm: f64,
    /// Joist material normalized by deck projection
    pub joist_count: u32,
    /// Rows of decking boards across the projection
    pub decking_board_rows: u32,
    /// 25 kg concrete bags for the pile footings
    pub concrete_bags: u32,
    /// Decking screw estimate
    pub screws: u32,
    /// Footprint area (m²)
    pub area_m2: f64,
}

/// Grid intersections that land inside the footprint.
pub fn count_piles(points: &[Point], grid: &GridLayout) -> u32 {
    let columns: Vec<f64> = grid.column_positions().collect();
    grid.row_positions()
        .map(|y| {
            columns
                .iter()
                .filter(|&&x| point_in_polygon(&Point::new(x, y), points))
                .count() as u32
        })
        .sum()
}

/// Total bearer length inside the footprint across all rows (mm).
pub fn bearer_length_mm(points: &[Point], grid: &GridLayout) -> f64 {
    grid.row_positions()
        .map(|y| {
            let hits = horizontal_intersections(y, points);
            paired_spans(&hits).map(|(start, end)| end - start).sum::<f64>()
        })
        .sum()
}

/// Joist lines across the width with their total length and worst cantilever
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoistRuns {
    pub lines: u32,
    pub length_mm: f64,
    pub max_cantilever_mm: f64,
}

/// Lay joists at `spacing_mm` from the left of the bounding box and measure them.
///
/// Each inside span overhangs the first bearer row by `first_row - start` and
/// the last by `end - last_row`. Negative overhangs (span starting past the
/// first row) never govern; the maximum starts at zero.
pub fn joist_runs(points: &[Point], grid: &GridLayout, spacing_mm: f64) -> JoistRuns {
    let bbox = grid.bbox;
    let lines = ((bbox.width() / spacing_mm).ceil() as u32).saturating_add(1);
    let first_row = grid.first_row_y();
    let last_row = grid.last_row_y();

    let mut length_mm = 0.0;
    let mut max_cantilever_mm: f64 = 0.0;
    for c in 0..lines {
        let x = bbox.min_x + f64::from(c) * spacing_mm;
        let hits = vertical_intersections(x, points);
        for (start, end) in paired_spans(&hits) {
            length_mm += end - start;
            max_cantilever_mm = max_cantilever_mm.max(first_row - start).max(end - last_row);
        }
    }

    JoistRuns {
        lines,
        length_mm,
        max_cantilever_mm,
    }
}

/// Round a measured quantity up to a whole count, rejecting values a `u32`
/// cannot hold.
fn whole_count(field: &str, value: f64) -> CalcResult<u32> {
    let rounded = value.ceil();
    if rounded.is_finite() && (0.0..=f64::from(u32::MAX)).contains(&rounded) {
        Ok(rounded as u32)
    } else {
        Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Quantity is out of range for this footprint",
        ))
    }
}

/// Rows of boards needed to cover the projection.
pub fn decking_board_rows(projection_mm: f64, spec: &DeckingSpec, gap_mm: f64) -> CalcResult<u32> {
    whole_count("decking_board_rows", projection_mm / (spec.width_mm + gap_mm))
}

/// Joist material (inside runs plus boundary joists) divided by the deck
/// projection.
///
/// This is linear material normalized by depth, not a piece count, and the
/// takeoff multiplies it back by the projection. A zero projection divides
/// by 1000 mm instead.
pub fn joist_count(joist_length_mm: f64, perimeter_mm: f64, projection_mm: f64) -> CalcResult<u32> {
    let depth = if projection_mm > 0.0 { projection_mm } else { 1000.0 };
    whole_count("joist_count", (joist_length_mm + perimeter_mm) / depth)
}

/// Measure everything the sizing rules and takeoff need.
///
/// Fails with [`CalcError::InvalidInput`] when a count does not fit a `u32`.
pub fn calculate_quantities(
    points: &[Point],
    grid: &GridLayout,
    decking: &DeckingSpec,
    config: &DeckConfig,
) -> CalcResult<Quantities> {
    let piles_inside = count_piles(points, grid);
    let total_piles = piles_inside.max(config.min_piles);
    let bearer_length_mm = bearer_length_mm(points, grid);
    let joists = joist_runs(points, grid, config.joist_spacing_mm);
    let perimeter_mm = perimeter_mm(points);
    let area_m2 = polygon_area(points).0;
    let projection = grid.bbox.projection();
    let concrete_bags = total_piles
        .checked_mul(config.concrete_bags_per_pile)
        .ok_or_else(|| {
            CalcError::invalid_input(
                "concrete_bags_per_pile",
                config.concrete_bags_per_pile.to_string(),
                format!("Too many bags for {} piles", total_piles),
            )
        })?;

    debug!(
        piles_inside,
        total_piles,
        bearer_length_mm,
        joist_lines = joists.lines,
        joist_length_mm = joists.length_mm,
        max_joist_cantilever_mm = joists.max_cantilever_mm,
        "measured footprint quantities"
    );

    Ok(Quantities {
        piles_inside,
        total_piles,
        bearer_length_mm,
        joist_lines: joists.lines,
        joist_length_mm: joists.length_mm,
        max_joist_cantilever_mm: joists.max_cantilever_mm,
        perimeter_mm,
        joist_count: joist_count(joists.length_mm, perimeter_mm, projection)?,
        decking_board_rows: decking_board_rows(projection, decking, config.decking_gap_mm)?,
        concrete_bags,
        screws: whole_count("screws", area_m2 * config.screws_per_m2)?,
        area_m2,
    })
}

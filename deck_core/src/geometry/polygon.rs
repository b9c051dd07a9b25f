//! Polygon measurement and validation.
//!
//! All routines take the vertex ring without a repeated closing point.

use crate::errors::{CalcError, CalcResult};
use crate::units::{SqM, SqMm};

use super::{BoundingBox, Point};

/// Largest footprint width or projection the engine accepts (100 m)
pub const MAX_FOOTPRINT_EXTENT_MM: f64 = 100_000.0;

/// Iterate the edges of a closed ring as `(start, end)` pairs.
pub(crate) fn edges(points: &[Point]) -> impl Iterator<Item = (&Point, &Point)> {
    let n = points.len();
    (0..n).map(move |i| (&points[i], &points[(i + 1) % n]))
}

/// Footprint area via the shoelace formula.
///
/// Orientation does not matter; the absolute value is taken before
/// converting mm² to m².
///
/// ```rust
/// use deck_core::geometry::{polygon_area, Point};
///
/// let rect = [
///     Point::new(0.0, 0.0),
///     Point::new(4000.0, 0.0),
///     Point::new(4000.0, 3000.0),
///     Point::new(0.0, 3000.0),
/// ];
/// assert_eq!(polygon_area(&rect).0, 12.0);
/// ```
pub fn polygon_area(points: &[Point]) -> SqM {
    SqMm(signed_area_mm2(points).abs()).into()
}

/// Shoelace signed area in mm². Positive for counter-clockwise rings.
fn signed_area_mm2(points: &[Point]) -> f64 {
    edges(points).map(|(a, b)| a.x * b.y - b.x * a.y).sum::<f64>() / 2.0
}

/// Sum of edge lengths in mm, closing edge included.
pub fn perimeter_mm(points: &[Point]) -> f64 {
    edges(points).map(|(a, b)| a.distance_to(b)).sum()
}

/// Even-odd ray casting toward +x.
///
/// Points lying exactly on an edge may land either way.
pub fn point_in_polygon(point: &Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (&polygon[i], &polygon[j]);
        if (pi.y > point.y) != (pj.y > point.y) {
            let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Reject footprints the layout engine cannot work with.
///
/// A valid footprint has at least three finite vertices, fits within
/// [`MAX_FOOTPRINT_EXTENT_MM`] on both axes, has no repeated consecutive
/// vertex, non-zero area, and no two edges crossing or overlapping each
/// other.
pub fn validate_footprint(points: &[Point]) -> CalcResult<()> {
    if points.len() < 3 {
        return Err(CalcError::invalid_footprint(format!(
            "Footprint needs at least 3 points, got {}",
            points.len()
        )));
    }

    if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
        return Err(CalcError::invalid_footprint(format!(
            "Vertex {} has a non-finite coordinate",
            idx
        )));
    }

    if let Some(bbox) = BoundingBox::from_points(points) {
        let extent = bbox.width().max(bbox.projection());
        if extent > MAX_FOOTPRINT_EXTENT_MM {
            return Err(CalcError::invalid_footprint(format!(
                "Footprint extends {:.0}mm; the limit is {:.0}mm",
                extent, MAX_FOOTPRINT_EXTENT_MM
            )));
        }
    }

    let n = points.len();
    for (i, (a, b)) in edges(points).enumerate() {
        if a == b {
            return Err(CalcError::invalid_footprint(format!(
                "Vertices {} and {} coincide",
                i,
                (i + 1) % n
            )));
        }
    }

    if polygon_area(points).0 == 0.0 {
        return Err(CalcError::invalid_footprint("Footprint has zero area"));
    }

    check_simple(points)
}

/// Pairwise edge test.
fn check_simple(points: &[Point]) -> CalcResult<()> {
    let n = points.len();
    for i in 0..n {
        let (a1, a2) = (&points[i], &points[(i + 1) % n]);

        // Adjacent edge folding straight back over this one
        let (b1, b2) = (&points[(i + 1) % n], &points[(i + 2) % n]);
        let cross = (a2.x - a1.x) * (b2.y - b1.y) - (a2.y - a1.y) * (b2.x - b1.x);
        let dot = (a2.x - a1.x) * (b2.x - b1.x) + (a2.y - a1.y) * (b2.y - b1.y);
        if cross == 0.0 && dot < 0.0 {
            return Err(CalcError::invalid_footprint(format!(
                "Edges {} and {} fold back over each other",
                i,
                (i + 1) % n
            )));
        }

        for j in (i + 2)..n {
            // First and last edges share vertex 0
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b1, b2) = (&points[j], &points[(j + 1) % n]);
            if segments_intersect(a1, a2, b1, b2) {
                return Err(CalcError::invalid_footprint(format!(
                    "Edges {} and {} intersect; footprint must be a simple polygon",
                    i, j
                )));
            }
        }
    }
    Ok(())
}

fn orientation(p: &Point, q: &Point, r: &Point) -> f64 {
    (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
}

/// `q` lies within the bounding box of segment `p`-`r` (used for collinear cases)
fn on_segment(p: &Point, q: &Point, r: &Point) -> bool {
    q.x >= p.x.min(r.x) && q.x <= p.x.max(r.x) && q.y >= p.y.min(r.y) && q.y <= p.y.max(r.y)
}

/// Closed segment intersection, touching endpoints included.
fn segments_intersect(p1: &Point, p2: &Point, q1: &Point, q2: &Point) -> bool {
    let d1 = orientation(q1, q2, p1);
    let d2 = orientation(q1, q2, p2);
    let d3 = orientation(p1, p2, q1);
    let d4 = orientation(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    (d1 == 0.0 && on_segment(q1, p1, q2))
        || (d2 == 0.0 && on_segment(q1, p2, q2))
        || (d3 == 0.0 && on_segment(p1, q1, p2))
        || (d4 == 0.0 && on_segment(p1, q2, p2))
}

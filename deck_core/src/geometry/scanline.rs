//! Scanline intersections.
//!
//! A grid line is tested against every footprint edge. An edge counts when
//! exactly one of its endpoints lies on the far side of the line: one end
//! `<=` the line value and the other `>`. Horizontal edges never count for a
//! horizontal scanline, and a vertex shared by two edges is counted once, so
//! a closed simple ring always yields an even number of crossings. Sorted,
//! those crossings pair up as (enter, exit) spans.

use super::polygon::edges;
use super::Point;

/// Sorted x-coordinates where the horizontal line `y` crosses the footprint.
///
/// ```rust
/// use deck_core::geometry::{horizontal_intersections, Point};
///
/// let rect = [
///     Point::new(0.0, 0.0),
///     Point::new(4000.0, 0.0),
///     Point::new(4000.0, 3000.0),
///     Point::new(0.0, 3000.0),
/// ];
/// assert_eq!(horizontal_intersections(1000.0, &rect), vec![0.0, 4000.0]);
/// ```
pub fn horizontal_intersections(y: f64, points: &[Point]) -> Vec<f64> {
    crossings(y, points, |p| (p.y, p.x))
}

/// Sorted y-coordinates where the vertical line `x` crosses the footprint.
pub fn vertical_intersections(x: f64, points: &[Point]) -> Vec<f64> {
    crossings(x, points, |p| (p.x, p.y))
}

/// Shared body of both scanlines. `axes` maps a point to
/// `(coordinate along the scan axis, coordinate reported)`.
fn crossings(line: f64, points: &[Point], axes: impl Fn(&Point) -> (f64, f64)) -> Vec<f64> {
    let mut hits: Vec<f64> = edges(points)
        .filter_map(|(p1, p2)| {
            let (s1, t1) = axes(p1);
            let (s2, t2) = axes(p2);
            let straddles = (s1 <= line && s2 > line) || (s2 <= line && s1 > line);
            straddles.then(|| t1 + (line - s1) * (t2 - t1) / (s2 - s1))
        })
        .collect();
    hits.sort_by(f64::total_cmp);
    hits
}

/// Pair sorted crossings into `(start, end)` inside spans.
///
/// A trailing unpaired crossing (only possible for a malformed ring) is dropped.
pub fn paired_spans(crossings: &[f64]) -> impl Iterator<Item = (f64, f64)> + '_ {
    crossings.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}

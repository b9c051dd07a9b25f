use std::f64::consts::TAU;

use deck_core::geometry::{
    horizontal_intersections, point_in_polygon, polygon_area, validate_footprint, vertical_intersections,
    Point,
};
use deck_core::layout::optimize_axis;
use deck_core::{calculate, DeckConfig, DeckFootprint, DeckInput, MaterialChoice};
use proptest::prelude::*;

/// Star-shaped polygon around (cx, cy). Every angular gap stays under half a
/// turn, so the ring is simple and contains its centre.
fn star_polygon() -> impl Strategy<Value = Vec<Point>> {
    (5usize..16)
        .prop_flat_map(|n| {
            (
                prop::collection::vec(0.0f64..0.8, n),
                prop::collection::vec(500.0f64..5000.0, n),
                -10_000.0f64..10_000.0,
                -10_000.0f64..10_000.0,
            )
        })
        .prop_map(|(jitter, radii, cx, cy)| {
            let n = jitter.len() as f64;
            jitter
                .iter()
                .zip(&radii)
                .enumerate()
                .map(|(i, (j, r))| {
                    let angle = (i as f64 + j) * TAU / n;
                    Point::new(cx + r * angle.cos(), cy + r * angle.sin())
                })
                .collect()
        })
}

fn is_sorted(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

proptest! {
    #[test]
    fn star_polygons_are_valid_footprints(poly in star_polygon()) {
        prop_assert!(validate_footprint(&poly).is_ok());
    }

    #[test]
    fn horizontal_crossings_pair_up(poly in star_polygon(), t in 0.0f64..1.0) {
        let min = poly.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max = poly.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let y = min - 100.0 + t * (max - min + 200.0);
        let hits = horizontal_intersections(y, &poly);
        prop_assert_eq!(hits.len() % 2, 0);
        prop_assert!(is_sorted(&hits));
    }

    #[test]
    fn vertical_crossings_pair_up(poly in star_polygon(), t in 0.0f64..1.0) {
        let min = poly.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max = poly.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let x = min - 100.0 + t * (max - min + 200.0);
        let hits = vertical_intersections(x, &poly);
        prop_assert_eq!(hits.len() % 2, 0);
        prop_assert!(is_sorted(&hits));
    }

    #[test]
    fn rectangle_area_ignores_vertex_order(
        w in 1u32..20_000,
        d in 1u32..20_000,
        start in 0usize..4,
        reverse in any::<bool>(),
    ) {
        let (w, d) = (f64::from(w), f64::from(d));
        let mut rect = vec![
            Point::new(0.0, 0.0),
            Point::new(w, 0.0),
            Point::new(w, d),
            Point::new(0.0, d),
        ];
        rect.rotate_left(start);
        if reverse {
            rect.reverse();
        }
        let expected = w * d / 1_000_000.0;
        prop_assert!((polygon_area(&rect).0 - expected).abs() <= 1e-9 * expected.max(1.0));
    }

    #[test]
    fn point_in_rectangle_is_translation_invariant(
        w in 100u32..10_000,
        d in 100u32..10_000,
        u in 0.05f64..0.95,
        v in 0.05f64..0.95,
        dx in -50_000i32..50_000,
        dy in -50_000i32..50_000,
    ) {
        let (w, d) = (f64::from(w), f64::from(d));
        let (dx, dy) = (f64::from(dx), f64::from(dy));
        let rect = |ox: f64, oy: f64| vec![
            Point::new(ox, oy),
            Point::new(ox + w, oy),
            Point::new(ox + w, oy + d),
            Point::new(ox, oy + d),
        ];
        let inside = Point::new(u * w, v * d);
        let outside = Point::new(w + 1000.0, d * v);

        prop_assert!(point_in_polygon(&inside, &rect(0.0, 0.0)));
        prop_assert!(point_in_polygon(&Point::new(inside.x + dx, inside.y + dy), &rect(dx, dy)));
        prop_assert!(!point_in_polygon(&outside, &rect(0.0, 0.0)));
        prop_assert!(!point_in_polygon(&Point::new(outside.x + dx, outside.y + dy), &rect(dx, dy)));
    }

    #[test]
    fn optimized_spacing_respects_max_span(
        extent in 0.0f64..100_000.0,
        offset in 0.0f64..1_000.0,
        max_span in 100.0f64..5_000.0,
    ) {
        let axis = optimize_axis(extent, offset, max_span);
        prop_assert!(axis.count >= 2);
        prop_assert!(axis.spacing_mm <= max_span * (1.0 + 1e-12));
        let covered = f64::from(axis.count - 1) * axis.spacing_mm;
        prop_assert!((covered - axis.effective_extent_mm).abs() <= 1e-9 * axis.effective_extent_mm.max(1.0));
    }

    #[test]
    fn any_deck_gets_minimum_piles_and_bounded_cantilever(poly in star_polygon(), height in 0.0f64..3000.0) {
        let config = DeckConfig::default();
        let input = DeckInput {
            label: String::new(),
            footprint: DeckFootprint { points: poly, height_mm: height },
            materials: MaterialChoice::default(),
        };
        let result = calculate(&input, &config).unwrap();
        prop_assert!(result.total_piles >= 4);
        prop_assert_eq!(result.concrete_bags, result.total_piles * 2);
        // Joist spans never leave the bounding box, so no overhang beats the edge offset
        prop_assert!(result.max_joist_cantilever_mm <= config.edge_offset_mm + 1e-6);
        prop_assert!(result.area_m2 > 0.0);
    }
}

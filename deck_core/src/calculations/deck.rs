//! # Deck Calculation
//!
//! The engine entry point: a footprint and material selection in, a complete
//! framing layout out.
//!
//! ## Pipeline
//!
//! 1. Validate the configuration, footprint and height
//! 2. Lay the bearer/pile grid on the bounding box ([`crate::layout`])
//! 3. Measure piles, bearers, joists and decking ([`super::quantities`])
//! 4. Pick member sizes and check cantilevers ([`super::sizing`])
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::deck::{calculate, DeckFootprint, DeckInput};
//! use deck_core::config::DeckConfig;
//! use deck_core::geometry::Point;
//! use deck_core::materials::{JoistSize, MaterialChoice};
//!
//! let input = DeckInput {
//!     label: "Back deck".to_string(),
//!     footprint: DeckFootprint {
//!         points: vec![
//!             Point::new(0.0, 0.0),
//!             Point::new(4000.0, 0.0),
//!             Point::new(4000.0, 3000.0),
//!             Point::new(0.0, 3000.0),
//!         ],
//!         height_mm: 600.0,
//!     },
//!     materials: MaterialChoice::default(),
//! };
//!
//! let result = calculate(&input, &DeckConfig::default()).expect("valid deck");
//! assert_eq!(result.bearer_rows, 4);
//! assert_eq!(result.piles_per_row, 4);
//! assert_eq!(result.joist_size, JoistSize::J140x45);
//! assert!(result.within_limits());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::quantities::calculate_quantities;
use super::sizing::{resolve_sizing, SizingInput};
use crate::config::DeckConfig;
use crate::errors::{CalcError, CalcResult};
use crate::geometry::{validate_footprint, BoundingBox, Point};
use crate::layout::optimize_grid;
use crate::materials::{BearerSize, JoistSize, MaterialChoice};

/// Deck outline and height.
///
/// ## JSON Example
///
/// ```json
/// {
///   "points": [
///     { "x": 0.0, "y": 0.0 },
///     { "x": 4000.0, "y": 0.0 },
///     { "x": 4000.0, "y": 3000.0 },
///     { "x": 0.0, "y": 3000.0 }
///   ],
///   "height_mm": 600.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckFootprint {
    /// Outline vertices in order (mm), closing edge implied
    pub points: Vec<Point>,

    /// Deck surface height above ground (mm)
    pub height_mm: f64,
}

impl DeckFootprint {
    /// Axis-aligned rectangle with its corner at the origin
    pub fn rectangle(width_mm: f64, projection_mm: f64, height_mm: f64) -> Self {
        DeckFootprint {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(width_mm, 0.0),
                Point::new(width_mm, projection_mm),
                Point::new(0.0, projection_mm),
            ],
            height_mm,
        }
    }

    /// Validate the outline and height.
    pub fn validate(&self) -> CalcResult<()> {
        validate_footprint(&self.points)?;
        if !self.height_mm.is_finite() || self.height_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "height_mm",
                self.height_mm.to_string(),
                "Height must be a non-negative number of millimetres",
            ));
        }
        Ok(())
    }

    /// Bounding box of the outline
    pub fn bounding_box(&self) -> CalcResult<BoundingBox> {
        BoundingBox::from_points(&self.points)
            .ok_or_else(|| CalcError::invalid_footprint("Footprint has no points"))
    }
}

/// Input parameters for a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckInput {
    /// User label for this deck (e.g., "Back deck")
    #[serde(default)]
    pub label: String,

    /// Outline and height
    pub footprint: DeckFootprint,

    /// Timber grade and decking profile
    #[serde(default)]
    pub materials: MaterialChoice,
}

impl DeckInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        self.footprint.validate()
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Results from a deck calculation.
///
/// Counts and spans are raw; waste allowances belong to the takeoff.
///
/// ## JSON Example
///
/// ```json
/// {
///   "piles_per_row": 4,
///   "bearer_rows": 4,
///   "total_piles": 16,
///   "bearer_size": "140x70mm H3.2",
///   "joist_size": "140x45mm H3.2",
///   "joist_count": 14,
///   "decking_board_count": 32,
///   "concrete_bags": 32,
///   "screws_count": 540,
///   "bearer_span_mm": 1166.67,
///   "joist_span_mm": 833.33,
///   "area_m2": 12.0,
///   "cantilever_warning": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckResult {
    /// Piles along each bearer row
    pub piles_per_row: u32,

    /// Number of bearer rows
    pub bearer_rows: u32,

    /// Piles to install (never fewer than the configured minimum)
    pub total_piles: u32,

    /// Bearer section
    pub bearer_size: BearerSize,

    /// Joist section, after the balustrade override
    pub joist_size: JoistSize,

    /// Joist material normalized by deck projection (not a piece count)
    pub joist_count: u32,

    /// Rows of decking boards
    pub decking_board_count: u32,

    /// 25 kg concrete bags
    pub concrete_bags: u32,

    /// Decking screw estimate
    pub screws_count: u32,

    /// Actual bearer span, i.e. pile spacing (mm)
    pub bearer_span_mm: f64,

    /// Actual joist span, i.e. bearer row spacing (mm)
    pub joist_span_mm: f64,

    /// Footprint area (m²)
    pub area_m2: f64,

    /// Advisory warning when a joist cantilever exceeds its section's limit
    pub cantilever_warning: Option<String>,

    /// Governing joist cantilever past the outer bearer rows (mm)
    pub max_joist_cantilever_mm: f64,

    /// True when a structural balustrade forced the joist size
    pub balustrade_required: bool,

    /// Bounding box x-extent (mm)
    pub width_mm: f64,

    /// Bounding box y-extent (mm)
    pub projection_mm: f64,

    /// Bearer runs inside the footprint (mm)
    pub bearer_length_mm: f64,

    /// Joist runs inside the footprint (mm)
    pub joist_length_mm: f64,

    /// Footprint perimeter (mm)
    pub perimeter_mm: f64,
}

impl DeckResult {
    /// No cantilever limit is exceeded
    pub fn within_limits(&self) -> bool {
        self.cantilever_warning.is_none()
    }
}

/// Calculate a deck framing layout.
///
/// # Arguments
///
/// * `input` - Footprint, height and materials
/// * `config` - Engine constants
///
/// # Returns
///
/// * `Ok(DeckResult)` - Layout and quantities
/// * `Err(CalcError)` - If the footprint, height or config is invalid
#[instrument(skip_all, fields(label = %input.label, vertices = input.footprint.points.len()))]
pub fn calculate(input: &DeckInput, config: &DeckConfig) -> CalcResult<DeckResult> {
    config.validate()?;
    input.validate()?;

    let points = &input.footprint.points;
    let bbox = input.footprint.bounding_box()?;
    let grid = optimize_grid(bbox, config);
    debug!(
        bearer_rows = grid.bearer_rows.count,
        joist_span_mm = grid.bearer_rows.spacing_mm,
        piles_per_row = grid.pile_columns.count,
        bearer_span_mm = grid.pile_columns.spacing_mm,
        "optimized grid"
    );

    let decking = input.materials.decking.spec();
    let q = calculate_quantities(points, &grid, &decking, config)?;

    let sizing = resolve_sizing(
        &SizingInput {
            joist_span_mm: grid.bearer_rows.spacing_mm,
            bearer_span_mm: grid.pile_columns.spacing_mm,
            max_joist_cantilever_mm: q.max_joist_cantilever_mm,
            height_mm: input.footprint.height_mm,
        },
        &config.rules,
    );
    if let Some(warning) = &sizing.cantilever_warning {
        warn!(%warning, "joist cantilever limit exceeded");
    }

    Ok(DeckResult {
        piles_per_row: grid.pile_columns.count,
        bearer_rows: grid.bearer_rows.count,
        total_piles: q.total_piles,
        bearer_size: sizing.bearer,
        joist_size: sizing.joist,
        joist_count: q.joist_count,
        decking_board_count: q.decking_board_rows,
        concrete_bags: q.concrete_bags,
        screws_count: q.screws,
        bearer_span_mm: grid.pile_columns.spacing_mm,
        joist_span_mm: grid.bearer_rows.spacing_mm,
        area_m2: q.area_m2,
        cantilever_warning: sizing.cantilever_warning,
        max_joist_cantilever_mm: q.max_joist_cantilever_mm,
        balustrade_required: sizing.balustrade_required,
        width_mm: bbox.width(),
        projection_mm: bbox.projection(),
        bearer_length_mm: q.bearer_length_mm,
        joist_length_mm: q.joist_length_mm,
        perimeter_mm: q.perimeter_mm,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::{DeckingType, TimberGrade};

    fn test_deck(height_mm: f64) -> DeckInput {
        DeckInput {
            label: "Test Deck".to_string(),
            footprint: DeckFootprint::rectangle(4000.0, 3000.0, height_mm),
            materials: MaterialChoice::new(TimberGrade::Sg8Wet, DeckingType::PremiumPine90),
        }
    }

    #[test]
    fn test_4m_by_3m_rectangle() {
        let result = calculate(&test_deck(600.0), &DeckConfig::default()).unwrap();

        assert_eq!(result.bearer_rows, 4);
        assert_eq!(result.piles_per_row, 4);
        assert_eq!(result.total_piles, 16);
        assert!((result.joist_span_mm - 2500.0 / 3.0).abs() < 1e-9);
        assert!((result.bearer_span_mm - 3500.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.joist_size, JoistSize::J140x45);
        assert_eq!(result.bearer_size, BearerSize::B140x70);
        assert!(result.cantilever_warning.is_none());
        assert!((result.area_m2 - 12.0).abs() < 1e-9);
        assert_eq!(result.joist_count, 14);
        assert_eq!(result.decking_board_count, 32);
        assert_eq!(result.concrete_bags, 32);
        assert_eq!(result.screws_count, 540);
        assert_eq!(result.width_mm, 4000.0);
        assert_eq!(result.projection_mm, 3000.0);
    }

    #[test]
    fn test_high_deck_short_cantilever_keeps_span_size() {
        // Rectangle cantilevers equal the 250 mm edge offset, below the 400 mm trigger
        let result = calculate(&test_deck(1600.0), &DeckConfig::default()).unwrap();
        assert!((result.max_joist_cantilever_mm - 250.0).abs() < 1e-6);
        assert!(!result.balustrade_required);
        assert_eq!(result.joist_size, JoistSize::J140x45);
    }

    #[test]
    fn test_high_deck_long_cantilever_needs_balustrade() {
        let config = DeckConfig {
            edge_offset_mm: 500.0,
            ..DeckConfig::default()
        };
        let result = calculate(&test_deck(1600.0), &config).unwrap();
        assert!(result.balustrade_required);
        assert_eq!(result.joist_size, JoistSize::J190x45Balustrade);
        assert!(result.within_limits());
    }

    #[test]
    fn test_cantilever_cap_breach_warns() {
        // Outer rows pulled 1200 mm in: 2 rows, 600 mm span (light joists),
        // every joist overhangs 1200 mm
        let config = DeckConfig {
            edge_offset_mm: 1200.0,
            ..DeckConfig::default()
        };
        let result = calculate(&test_deck(600.0), &config).unwrap();
        assert_eq!(result.bearer_rows, 2);
        assert_eq!(result.joist_size, JoistSize::J140x45);
        let warning = result.cantilever_warning.as_deref().expect("cap breached");
        assert!(!warning.is_empty());
        assert!(warning.contains("1100"));
        assert!(!result.within_limits());
        // Advisory only: quantities are still produced
        assert_eq!(result.total_piles, result.concrete_bags / 2);
    }

    #[test]
    fn test_deep_deck_gets_heavier_members() {
        let mut config = DeckConfig::default();
        config.max_joist_span_mm = 3000.0;
        config.max_pile_spacing_mm = 2400.0;
        let input = DeckInput {
            footprint: DeckFootprint::rectangle(5000.0, 6500.0, 600.0),
            ..test_deck(600.0)
        };
        let result = calculate(&input, &config).unwrap();
        // 6000 / 2 = 3000 mm joist span, 4500 / 2 = 2250 mm bearer span
        assert_eq!(result.joist_size, JoistSize::J190x45);
        assert_eq!(result.bearer_size, BearerSize::B240x70);
    }

    #[test]
    fn test_invalid_footprint_rejected() {
        let mut input = test_deck(600.0);
        input.footprint.points.truncate(2);
        let err = calculate(&input, &DeckConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FOOTPRINT");
    }

    #[test]
    fn test_oversized_footprint_rejected_before_counting() {
        let input = DeckInput {
            footprint: DeckFootprint::rectangle(1.0e7, 1.0e7, 600.0),
            ..test_deck(600.0)
        };
        let err = calculate(&input, &DeckConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FOOTPRINT");
    }

    #[test]
    fn test_screw_rate_overflow_is_an_error() {
        let config = DeckConfig {
            screws_per_m2: 1.0e9,
            ..DeckConfig::default()
        };
        let err = calculate(&test_deck(600.0), &config).unwrap_err();
        // 12 m² x 1e9 screws does not fit a u32
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_negative_height_rejected() {
        let err = calculate(&test_deck(-10.0), &DeckConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DeckConfig {
            joist_spacing_mm: 0.0,
            ..DeckConfig::default()
        };
        assert!(calculate(&test_deck(600.0), &config).is_err());
    }

    #[test]
    fn test_input_from_json_defaults_materials() {
        let json = r#"{
            "footprint": {
                "points": [{"x": 0, "y": 0}, {"x": 3000, "y": 0}, {"x": 3000, "y": 2000}],
                "height_mm": 450
            }
        }"#;
        let input = DeckInput::from_json(json).unwrap();
        assert_eq!(input.label, "");
        assert_eq!(input.materials, MaterialChoice::default());
        assert!(calculate(&input, &DeckConfig::default()).is_ok());
    }

    #[test]
    fn test_result_serializes_labels() {
        let result = calculate(&test_deck(600.0), &DeckConfig::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"joist_size\":\"140x45mm H3.2\""));
        assert!(json.contains("\"cantilever_warning\":null"));
    }
}

//! # Engine Configuration
//!
//! Every constant the layout engine uses lives in [`DeckConfig`]. The engine
//! never reads globals, so a calculation is a pure function of
//! `(input, config)` and alternate tables can be tested side by side.
//!
//! Defaults follow a simplified NZS 3604 deck table. Configs deserialize with
//! `#[serde(default)]`, so a TOML or JSON file only needs the keys it changes:
//!
//! ```rust
//! use deck_core::config::DeckConfig;
//!
//! let config: DeckConfig = serde_json::from_str(r#"{ "edge_offset_mm": 300.0 }"#).unwrap();
//! assert_eq!(config.edge_offset_mm, 300.0);
//! assert_eq!(config.max_joist_span_mm, 1200.0);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Smallest span or spacing a config may set (mm)
pub const MIN_SPACING_MM: f64 = 100.0;

/// Largest waste multiplier a config may set
pub const MAX_WASTE_FACTOR: f64 = 2.0;

/// Layout, quantity and takeoff constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Inset of the outer bearer rows and pile columns from the bounding box (mm)
    pub edge_offset_mm: f64,

    /// Maximum joist span, i.e. bearer row spacing (mm)
    pub max_joist_span_mm: f64,

    /// Maximum pile spacing along a bearer (mm)
    pub max_pile_spacing_mm: f64,

    /// Joist centres (mm)
    pub joist_spacing_mm: f64,

    /// Gap between decking boards (mm)
    pub decking_gap_mm: f64,

    /// A deck never gets fewer piles than this
    pub min_piles: u32,

    /// 25 kg concrete bags per pile footing
    pub concrete_bags_per_pile: u32,

    /// Decking screws per m² of deck
    pub screws_per_m2: f64,

    /// Pile embedment below ground (mm), added to deck height for pile length
    pub footing_depth_mm: f64,

    /// Order multiplier on linear-metre quantities (1.1 = 10% waste)
    pub waste_factor: f64,

    /// Member size breakpoints and cantilever limits
    pub rules: SizingRules,
}

impl Default for DeckConfig {
    fn default() -> Self {
        DeckConfig {
            edge_offset_mm: 250.0,
            max_joist_span_mm: 1200.0,
            max_pile_spacing_mm: 1300.0,
            joist_spacing_mm: 450.0,
            decking_gap_mm: 5.0,
            min_piles: 4,
            concrete_bags_per_pile: 2,
            screws_per_m2: 45.0,
            footing_depth_mm: 300.0,
            waste_factor: 1.1,
            rules: SizingRules::default(),
        }
    }
}

impl DeckConfig {
    /// Validate configuration values.
    ///
    /// Spans and joist centres must be at least [`MIN_SPACING_MM`], which
    /// keeps grid line counts bounded for any accepted footprint.
    pub fn validate(&self) -> CalcResult<()> {
        spacing("max_joist_span_mm", self.max_joist_span_mm)?;
        spacing("max_pile_spacing_mm", self.max_pile_spacing_mm)?;
        spacing("joist_spacing_mm", self.joist_spacing_mm)?;
        non_negative("edge_offset_mm", self.edge_offset_mm)?;
        non_negative("decking_gap_mm", self.decking_gap_mm)?;
        non_negative("screws_per_m2", self.screws_per_m2)?;
        non_negative("footing_depth_mm", self.footing_depth_mm)?;
        if !(1.0..=MAX_WASTE_FACTOR).contains(&self.waste_factor) {
            return Err(CalcError::invalid_input(
                "waste_factor",
                self.waste_factor.to_string(),
                format!("Waste factor must be between 1.0 and {}", MAX_WASTE_FACTOR),
            ));
        }
        self.rules.validate()
    }
}

/// Breakpoints for member sizing and the cantilever limits.
///
/// Spans at or below a breakpoint take that size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingRules {
    /// Largest joist span for 140x45 (mm)
    pub joist_light_max_span_mm: f64,
    /// Largest joist span for 190x45 (mm)
    pub joist_medium_max_span_mm: f64,
    /// Largest bearer span for 140x70 (mm)
    pub bearer_light_max_span_mm: f64,
    /// Largest bearer span for 190x70 (mm)
    pub bearer_medium_max_span_mm: f64,
    /// Decks higher than this need a structural balustrade (mm)
    pub balustrade_height_mm: f64,
    /// Cantilever beyond which a high deck's joists go to 190x45 (mm)
    pub balustrade_cantilever_mm: f64,
    /// Cantilever limit for 140x45 joists (mm)
    pub light_joist_cantilever_limit_mm: f64,
    /// Cantilever limit for 190x45 joists (mm)
    pub medium_joist_cantilever_limit_mm: f64,
}

impl Default for SizingRules {
    fn default() -> Self {
        SizingRules {
            joist_light_max_span_mm: 2500.0,
            joist_medium_max_span_mm: 3400.0,
            bearer_light_max_span_mm: 1600.0,
            bearer_medium_max_span_mm: 2000.0,
            balustrade_height_mm: 1000.0,
            balustrade_cantilever_mm: 400.0,
            light_joist_cantilever_limit_mm: 1100.0,
            medium_joist_cantilever_limit_mm: 1500.0,
        }
    }
}

impl SizingRules {
    /// Validate every limit, then breakpoint ordering.
    pub fn validate(&self) -> CalcResult<()> {
        positive("rules.joist_light_max_span_mm", self.joist_light_max_span_mm)?;
        positive("rules.joist_medium_max_span_mm", self.joist_medium_max_span_mm)?;
        positive("rules.bearer_light_max_span_mm", self.bearer_light_max_span_mm)?;
        positive("rules.bearer_medium_max_span_mm", self.bearer_medium_max_span_mm)?;
        non_negative("rules.balustrade_height_mm", self.balustrade_height_mm)?;
        non_negative("rules.balustrade_cantilever_mm", self.balustrade_cantilever_mm)?;
        non_negative("rules.light_joist_cantilever_limit_mm", self.light_joist_cantilever_limit_mm)?;
        non_negative("rules.medium_joist_cantilever_limit_mm", self.medium_joist_cantilever_limit_mm)?;

        if self.joist_light_max_span_mm > self.joist_medium_max_span_mm {
            return Err(CalcError::invalid_input(
                "rules.joist_light_max_span_mm",
                self.joist_light_max_span_mm.to_string(),
                "Light joist breakpoint exceeds medium breakpoint",
            ));
        }
        if self.bearer_light_max_span_mm > self.bearer_medium_max_span_mm {
            return Err(CalcError::invalid_input(
                "rules.bearer_light_max_span_mm",
                self.bearer_light_max_span_mm.to_string(),
                "Light bearer breakpoint exceeds medium breakpoint",
            ));
        }
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be positive"));
    }
    Ok(())
}

fn spacing(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < MIN_SPACING_MM {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Must be at least {}mm", MIN_SPACING_MM),
        ));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
    }
    Ok(())
}

//! # Member Sizing Rules
//!
//! Resolves joist and bearer sections from the optimized spans and checks
//! the governing joist cantilever. The rules run in a fixed order:
//!
//! 1. Joist size from the actual joist span (bearer row spacing).
//! 2. Balustrade override: a deck higher than the balustrade height whose
//!    joists cantilever past the balustrade limit gets 190x45 balustrade-rated
//!    joists, whatever step 1 picked.
//! 3. Cantilever caps: 140x45 joists past their limit, or either 190x45
//!    variant past its limit, raise an advisory warning. Quantities are not
//!    changed.
//! 4. Bearer size from the actual bearer span (pile spacing).
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::sizing::{resolve_sizing, SizingInput};
//! use deck_core::config::SizingRules;
//! use deck_core::materials::{BearerSize, JoistSize};
//!
//! let sizing = resolve_sizing(
//!     &SizingInput {
//!         joist_span_mm: 833.0,
//!         bearer_span_mm: 1167.0,
//!         max_joist_cantilever_mm: 250.0,
//!         height_mm: 600.0,
//!     },
//!     &SizingRules::default(),
//! );
//! assert_eq!(sizing.joist, JoistSize::J140x45);
//! assert_eq!(sizing.bearer, BearerSize::B140x70);
//! assert!(sizing.cantilever_warning.is_none());
//! ```

use serde::{Deserialize, Serialize};

use crate::config::SizingRules;
use crate::materials::{BearerSize, JoistSize};

/// Values the sizing rules look at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingInput {
    /// Actual joist span, i.e. bearer row spacing (mm)
    pub joist_span_mm: f64,
    /// Actual bearer span, i.e. pile spacing (mm)
    pub bearer_span_mm: f64,
    /// Largest joist overhang past the outer bearer rows (mm)
    pub max_joist_cantilever_mm: f64,
    /// Deck surface height above ground (mm)
    pub height_mm: f64,
}

/// Resolved sections plus any advisory warning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingDecision {
    pub joist: JoistSize,
    pub bearer: BearerSize,
    /// True when the balustrade override replaced the span-based joist size
    pub balustrade_required: bool,
    /// Set when the joist cantilever exceeds the limit for its section
    pub cantilever_warning: Option<String>,
}

/// Joist section from span alone.
pub fn joist_size_for_span(span_mm: f64, rules: &SizingRules) -> JoistSize {
    if span_mm <= rules.joist_light_max_span_mm {
        JoistSize::J140x45
    } else if span_mm <= rules.joist_medium_max_span_mm {
        JoistSize::J190x45
    } else {
        JoistSize::J240x45
    }
}

/// Bearer section from span alone.
pub fn bearer_size_for_span(span_mm: f64, rules: &SizingRules) -> BearerSize {
    if span_mm <= rules.bearer_light_max_span_mm {
        BearerSize::B140x70
    } else if span_mm <= rules.bearer_medium_max_span_mm {
        BearerSize::B190x70
    } else {
        BearerSize::B240x70
    }
}

/// Cantilever limit for a joist section, if it has one.
///
/// 240x45 joists carry no cap in the table.
pub fn cantilever_limit_mm(joist: JoistSize, rules: &SizingRules) -> Option<f64> {
    if joist.is_190() {
        Some(rules.medium_joist_cantilever_limit_mm)
    } else if joist == JoistSize::J140x45 {
        Some(rules.light_joist_cantilever_limit_mm)
    } else {
        None
    }
}

/// Run the sizing rules in order.
pub fn resolve_sizing(input: &SizingInput, rules: &SizingRules) -> SizingDecision {
    let cantilever = input.max_joist_cantilever_mm;

    let mut joist = joist_size_for_span(input.joist_span_mm, rules);

    let balustrade_required =
        input.height_mm > rules.balustrade_height_mm && cantilever > rules.balustrade_cantilever_mm;
    if balustrade_required {
        joist = JoistSize::J190x45Balustrade;
    }

    let cantilever_warning = cantilever_limit_mm(joist, rules)
        .filter(|&limit| cantilever > limit)
        .map(|limit| {
            format!(
                "CRITICAL: Joist cantilever of {:.0}mm exceeds {:.0}mm limit for {}.",
                cantilever, limit, joist
            )
        });

    SizingDecision {
        joist,
        bearer: bearer_size_for_span(input.bearer_span_mm, rules),
        balustrade_required,
        cantilever_warning,
    }
}

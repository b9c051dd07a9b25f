//! # deck_core - Deck Framing Layout Engine
//!
//! `deck_core` lays out the structure of a residential timber deck from its
//! outline: pile grid, bearer rows, joists and decking boards, with member
//! sizes from a simplified NZS 3604 style table and warnings when a joist
//! cantilevers further than its section allows.
//!
//! The rule table is illustrative. It is not a substitute for an engineer's
//! sign-off.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `calculate` is a pure function of `(input, config)`
//! - **JSON-First**: All inputs and outputs implement Serialize/Deserialize
//! - **Rich Errors**: Malformed footprints are rejected with structured errors
//!   instead of producing garbage quantities
//!
//! ## Quick Start
//!
//! ```rust
//! use deck_core::{calculate, DeckConfig, DeckFootprint, DeckInput, MaterialChoice};
//!
//! let input = DeckInput {
//!     label: "Back deck".to_string(),
//!     footprint: DeckFootprint::rectangle(4000.0, 3000.0, 600.0),
//!     materials: MaterialChoice::default(),
//! };
//!
//! let result = calculate(&input, &DeckConfig::default()).unwrap();
//! println!("{} piles, joists {}", result.total_piles, result.joist_size);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - Polygon area, point-in-polygon, scanline intersections
//! - [`layout`] - Bearer row and pile column optimizer
//! - [`calculations`] - Quantities, sizing rules and the `calculate` entry point
//! - [`materials`] - Timber grades, decking profiles, member sizes
//! - [`config`] - Engine constants
//! - [`takeoff`] - Waste-adjusted order list
//! - [`units`] - Metric unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod materials;
pub mod takeoff;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DeckFootprint, DeckInput, DeckResult};
pub use config::{DeckConfig, SizingRules};
pub use errors::{CalcError, CalcResult};
pub use geometry::Point;
pub use materials::{BearerSize, DeckingType, JoistSize, MaterialChoice, TimberGrade};
pub use takeoff::{bill_of_materials, BillOfMaterials};

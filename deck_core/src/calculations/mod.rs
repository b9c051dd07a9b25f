//! # Deck Calculations
//!
//! The calculation follows the same pattern as every other calculation type:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input, config) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Modules
//!
//! - [`deck`] - Entry point: footprint in, framing layout out
//! - [`quantities`] - Pile, bearer, joist and decking measurement
//! - [`sizing`] - Member size table and cantilever checks

pub mod deck;
pub mod quantities;
pub mod sizing;

// Re-export commonly used types
pub use deck::{calculate, DeckFootprint, DeckInput, DeckResult};
pub use quantities::Quantities;
pub use sizing::{SizingDecision, SizingInput};

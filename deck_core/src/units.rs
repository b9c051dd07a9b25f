//! # Unit Types
//!
//! Lightweight newtype wrappers for the metric units a deck layout deals in.
//! Geometry is always carried in millimetres; lengths of timber are ordered
//! in linear metres and areas are reported in square metres.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::units::{Meters, Millimeters, SqM, SqMm};
//!
//! let run = Millimeters(4500.0);
//! let lm: Meters = run.into();
//! assert_eq!(lm.0, 4.5);
//!
//! let area: SqM = SqMm(12_000_000.0).into();
//! assert_eq!(area.0, 12.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Mul;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres (linear metres when talking about timber)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqMm> for SqM {
    fn from(sqmm: SqMm) -> Self {
        SqM(sqmm.0 / 1_000_000.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);

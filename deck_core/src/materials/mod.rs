//! # Materials
//!
//! Reference data for the timber a deck is built from. Nothing here is
//! mutated at runtime; every lookup is a static table.
//!
//! - [`TimberGrade`] - framing grade (SG8/SG10, wet or dry)
//! - [`DeckingType`] - decking board profile, with its physical [`DeckingSpec`]
//! - [`member_sizes`] - bearer and joist section labels picked by the sizing rules
//!
//! ## Example
//!
//! ```rust
//! use deck_core::materials::{DeckingType, MaterialChoice, TimberGrade};
//!
//! let choice = MaterialChoice::new(TimberGrade::Sg8Wet, DeckingType::PremiumPine140);
//! assert_eq!(choice.decking.spec().width_mm, 140.0);
//!
//! let json = serde_json::to_string(&choice).unwrap();
//! assert!(json.contains("140x32mm Premium Pine"));
//! ```

pub mod member_sizes;

pub use member_sizes::{BearerSize, JoistSize};

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Structural timber grade for the framing members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimberGrade {
    /// SG8, wet in service
    #[default]
    #[serde(rename = "SG8 Wet")]
    Sg8Wet,
    /// SG8, dry in service
    #[serde(rename = "SG8 Dry")]
    Sg8Dry,
    /// SG10, wet in service
    #[serde(rename = "SG10 Wet")]
    Sg10Wet,
}

impl TimberGrade {
    /// All grades for selection lists
    pub const ALL: [TimberGrade; 3] = [TimberGrade::Sg8Wet, TimberGrade::Sg8Dry, TimberGrade::Sg10Wet];

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TimberGrade::Sg8Wet => "SG8 Wet",
            TimberGrade::Sg8Dry => "SG8 Dry",
            TimberGrade::Sg10Wet => "SG10 Wet",
        }
    }

    /// Parse from common string representations ("sg8-wet", "SG8 Wet", "sg10wet")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        match s.to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "SG8WET" | "SG8" => Ok(TimberGrade::Sg8Wet),
            "SG8DRY" => Ok(TimberGrade::Sg8Dry),
            "SG10WET" | "SG10" => Ok(TimberGrade::Sg10Wet),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for TimberGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Physical board dimensions for a decking profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeckingSpec {
    /// Cover width of one board (mm)
    pub width_mm: f64,
    /// Board thickness (mm)
    pub thickness_mm: f64,
}

/// Decking board profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DeckingType {
    /// 90x19 premium pine
    #[default]
    #[serde(rename = "90x19mm Premium Pine")]
    PremiumPine90,
    /// 140x32 premium pine
    #[serde(rename = "140x32mm Premium Pine")]
    PremiumPine140,
    /// 90x19 kwila hardwood
    #[serde(rename = "90x19mm Kwila")]
    Kwila90,
}

impl DeckingType {
    /// All decking profiles for selection lists
    pub const ALL: [DeckingType; 3] = [
        DeckingType::PremiumPine90,
        DeckingType::PremiumPine140,
        DeckingType::Kwila90,
    ];

    /// Board dimensions for this profile
    pub fn spec(&self) -> DeckingSpec {
        match self {
            DeckingType::PremiumPine90 => DeckingSpec {
                width_mm: 90.0,
                thickness_mm: 19.0,
            },
            DeckingType::PremiumPine140 => DeckingSpec {
                width_mm: 140.0,
                thickness_mm: 32.0,
            },
            DeckingType::Kwila90 => DeckingSpec {
                width_mm: 90.0,
                thickness_mm: 19.0,
            },
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DeckingType::PremiumPine90 => "90x19mm Premium Pine",
            DeckingType::PremiumPine140 => "140x32mm Premium Pine",
            DeckingType::Kwila90 => "90x19mm Kwila",
        }
    }

    /// Parse from common string representations ("pine-90", "kwila", "140x32mm Premium Pine")
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let key = s.to_uppercase().replace([' ', '_', '-'], "");
        match key.as_str() {
            "PINE90" | "PREMIUMPINE90" | "90X19MMPREMIUMPINE" => Ok(DeckingType::PremiumPine90),
            "PINE140" | "PREMIUMPINE140" | "140X32MMPREMIUMPINE" => Ok(DeckingType::PremiumPine140),
            "KWILA" | "KWILA90" | "90X19MMKWILA" => Ok(DeckingType::Kwila90),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

impl std::fmt::Display for DeckingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The caller's material selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialChoice {
    pub timber_grade: TimberGrade,
    pub decking: DeckingType,
}

impl MaterialChoice {
    pub fn new(timber_grade: TimberGrade, decking: DeckingType) -> Self {
        MaterialChoice {
            timber_grade,
            decking,
        }
    }
}

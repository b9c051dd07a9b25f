//! Framing Member Sizes
//!
//! Section labels for bearers and joists, as ordered from the merchant.
//! All framing is H3.2 treated radiata.
//!
//! The sizing rules pick one of these from the actual span; see
//! [`crate::calculations::sizing`].

use serde::{Deserialize, Serialize};

/// Joist section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JoistSize {
    /// 140x45 (light)
    #[serde(rename = "140x45mm H3.2")]
    J140x45,
    /// 190x45 (medium)
    #[serde(rename = "190x45mm H3.2")]
    J190x45,
    /// 240x45 (heavy)
    #[serde(rename = "240x45mm H3.2")]
    J240x45,
    /// 190x45 forced by a high deck with a long cantilever
    #[serde(rename = "190x45mm H3.2 (Structural Balustrade Required)")]
    J190x45Balustrade,
}

impl JoistSize {
    /// Merchant label
    pub fn label(&self) -> &'static str {
        match self {
            JoistSize::J140x45 => "140x45mm H3.2",
            JoistSize::J190x45 => "190x45mm H3.2",
            JoistSize::J240x45 => "240x45mm H3.2",
            JoistSize::J190x45Balustrade => "190x45mm H3.2 (Structural Balustrade Required)",
        }
    }

    /// True for either 190x45 variant
    pub fn is_190(&self) -> bool {
        matches!(self, JoistSize::J190x45 | JoistSize::J190x45Balustrade)
    }
}

impl std::fmt::Display for JoistSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bearer section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BearerSize {
    /// 140x70 (light)
    #[serde(rename = "140x70mm H3.2")]
    B140x70,
    /// 190x70 (medium)
    #[serde(rename = "190x70mm H3.2")]
    B190x70,
    /// 240x70 (heavy duty)
    #[serde(rename = "240x70mm H3.2 (Heavy Duty)")]
    B240x70,
}

impl BearerSize {
    /// Merchant label
    pub fn label(&self) -> &'static str {
        match self {
            BearerSize::B140x70 => "140x70mm H3.2",
            BearerSize::B190x70 => "190x70mm H3.2",
            BearerSize::B240x70 => "240x70mm H3.2 (Heavy Duty)",
        }
    }
}

impl std::fmt::Display for BearerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

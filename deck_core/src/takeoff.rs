//! # Material Takeoff
//!
//! Turns a [`DeckResult`] into an order list. This is where the waste
//! allowance is applied: the engine reports raw counts and spans, the
//! takeoff rounds linear-metre quantities up after multiplying by
//! [`DeckConfig::waste_factor`].
//!
//! ## Example
//!
//! ```rust
//! use deck_core::calculations::deck::{calculate, DeckFootprint, DeckInput};
//! use deck_core::config::DeckConfig;
//! use deck_core::materials::MaterialChoice;
//! use deck_core::takeoff::bill_of_materials;
//!
//! let input = DeckInput {
//!     label: "Back deck".to_string(),
//!     footprint: DeckFootprint::rectangle(4000.0, 3000.0, 600.0),
//!     materials: MaterialChoice::default(),
//! };
//! let config = DeckConfig::default();
//! let result = calculate(&input, &config).unwrap();
//! let bom = bill_of_materials(&input, &result, &config);
//! assert_eq!(bom.lines.len(), 7);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::deck::{DeckInput, DeckResult};
use crate::config::DeckConfig;
use crate::units::{Meters, Millimeters};

/// Grouping used when printing the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TakeoffCategory {
    Foundation,
    Framing,
    Finish,
    Hardware,
}

impl std::fmt::Display for TakeoffCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TakeoffCategory::Foundation => "Foundation",
            TakeoffCategory::Framing => "Framing",
            TakeoffCategory::Finish => "Finish",
            TakeoffCategory::Hardware => "Hardware",
        };
        write!(f, "{}", name)
    }
}

/// Order unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TakeoffUnit {
    #[serde(rename = "pcs")]
    Pieces,
    #[serde(rename = "bags")]
    Bags,
    #[serde(rename = "LM")]
    LinearMetres,
    #[serde(rename = "qty")]
    Quantity,
    #[serde(rename = "mixed")]
    Mixed,
}

impl TakeoffUnit {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            TakeoffUnit::Pieces => "pcs",
            TakeoffUnit::Bags => "bags",
            TakeoffUnit::LinearMetres => "LM",
            TakeoffUnit::Quantity => "qty",
            TakeoffUnit::Mixed => "mixed",
        }
    }
}

/// One line of the order list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffLine {
    pub category: TakeoffCategory,
    pub item: String,
    pub quantity: u64,
    pub unit: TakeoffUnit,
    /// How the quantity was arrived at
    pub detail: String,
}

/// Complete order list for a deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub lines: Vec<TakeoffLine>,
}

impl BillOfMaterials {
    /// Lines in one category
    pub fn category(&self, category: TakeoffCategory) -> impl Iterator<Item = &TakeoffLine> {
        self.lines.iter().filter(move |l| l.category == category)
    }
}

/// Linear metres to order: `ceil(run * count * waste)`
fn order_lm(run: Millimeters, count: u32, waste_factor: f64) -> u64 {
    let lm: Meters = run.into();
    (lm * f64::from(count) * waste_factor).value().ceil() as u64
}

/// Build the order list for a calculated deck.
pub fn bill_of_materials(input: &DeckInput, result: &DeckResult, config: &DeckConfig) -> BillOfMaterials {
    let width = Millimeters(result.width_mm);
    let projection = Millimeters(result.projection_mm);
    let grade = input.materials.timber_grade;
    let waste = config.waste_factor;

    let lines = vec![
        TakeoffLine {
            category: TakeoffCategory::Foundation,
            item: "125x125mm H5 Piles".to_string(),
            quantity: u64::from(result.total_piles),
            unit: TakeoffUnit::Pieces,
            detail: format!(
                "Length: {:.0}mm (including footing)",
                input.footprint.height_mm + config.footing_depth_mm
            ),
        },
        TakeoffLine {
            category: TakeoffCategory::Foundation,
            item: "Concrete (25kg bags)".to_string(),
            quantity: u64::from(result.concrete_bags),
            unit: TakeoffUnit::Bags,
            detail: format!("{}x 25kg bags per pile", config.concrete_bags_per_pile),
        },
        TakeoffLine {
            category: TakeoffCategory::Framing,
            item: format!("{} {} Bearers", result.bearer_size, grade),
            quantity: order_lm(width, result.bearer_rows, waste),
            unit: TakeoffUnit::LinearMetres,
            detail: format!(
                "Based on {} rows across {:.0}mm width",
                result.bearer_rows, result.width_mm
            ),
        },
        TakeoffLine {
            category: TakeoffCategory::Framing,
            item: format!("{} {} Joists", result.joist_size, grade),
            quantity: order_lm(projection, result.joist_count, waste),
            unit: TakeoffUnit::LinearMetres,
            detail: format!(
                "Based on {} joists at {:.0}mm centers",
                result.joist_count, config.joist_spacing_mm
            ),
        },
        TakeoffLine {
            category: TakeoffCategory::Finish,
            item: input.materials.decking.to_string(),
            quantity: order_lm(width, result.decking_board_count, waste),
            unit: TakeoffUnit::LinearMetres,
            detail: format!("{} boards total", result.decking_board_count),
        },
        TakeoffLine {
            category: TakeoffCategory::Hardware,
            item: "Decking Screws (Stainless)".to_string(),
            quantity: u64::from(result.screws_count).div_ceil(100) * 100,
            unit: TakeoffUnit::Quantity,
            detail: "Rounded up to boxes of 100".to_string(),
        },
        TakeoffLine {
            category: TakeoffCategory::Hardware,
            item: "Joist Hangers & Bolts".to_string(),
            quantity: u64::from(result.total_piles) + u64::from(result.joist_count) * 2,
            unit: TakeoffUnit::Mixed,
            detail: "M12 bolts for piles, 45mm hangers for joists".to_string(),
        },
    ];

    BillOfMaterials { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::deck::{calculate, DeckFootprint};
    use crate::materials::{DeckingType, MaterialChoice, TimberGrade};

    fn bom_for(height_mm: f64) -> BillOfMaterials {
        let input = DeckInput {
            label: "Test Deck".to_string(),
            footprint: DeckFootprint::rectangle(4000.0, 3000.0, height_mm),
            materials: MaterialChoice::new(TimberGrade::Sg10Wet, DeckingType::Kwila90),
        };
        let config = DeckConfig::default();
        let result = calculate(&input, &config).unwrap();
        bill_of_materials(&input, &result, &config)
    }

    fn quantity(bom: &BillOfMaterials, needle: &str) -> u64 {
        bom.lines
            .iter()
            .find(|l| l.item.contains(needle))
            .map(|l| l.quantity)
            .unwrap()
    }

    #[test]
    fn test_rectangle_order_quantities() {
        let bom = bom_for(600.0);
        assert_eq!(quantity(&bom, "Piles"), 16);
        assert_eq!(quantity(&bom, "Concrete"), 32);
        // 4.0 m x 4 rows x 1.1 = 17.6
        assert_eq!(quantity(&bom, "Bearers"), 18);
        // 3.0 m x 14 x 1.1 = 46.2
        assert_eq!(quantity(&bom, "Joists"), 47);
        // 4.0 m x 32 rows x 1.1 = 140.8
        assert_eq!(quantity(&bom, "Kwila"), 141);
        assert_eq!(quantity(&bom, "Screws"), 600);
        assert_eq!(quantity(&bom, "Hangers"), 16 + 28);
    }

    #[test]
    fn test_pile_length_includes_footing() {
        let bom = bom_for(750.0);
        let piles = bom.category(TakeoffCategory::Foundation).next().unwrap();
        assert_eq!(piles.detail, "Length: 1050mm (including footing)");
    }

    #[test]
    fn test_framing_lines_name_grade_and_size() {
        let bom = bom_for(600.0);
        let framing: Vec<_> = bom.category(TakeoffCategory::Framing).collect();
        assert_eq!(framing.len(), 2);
        assert_eq!(framing[0].item, "140x70mm H3.2 SG10 Wet Bearers");
        assert_eq!(framing[1].item, "140x45mm H3.2 SG10 Wet Joists");
    }

    #[test]
    fn test_largest_deck_orders_without_overflow() {
        let input = DeckInput {
            label: "Boardwalk".to_string(),
            footprint: DeckFootprint::rectangle(100_000.0, 100_000.0, 600.0),
            materials: MaterialChoice::default(),
        };
        let config = DeckConfig::default();
        let result = calculate(&input, &config).unwrap();
        let bom = bill_of_materials(&input, &result, &config);

        // 10 000 m² x 45
        assert_eq!(quantity(&bom, "Screws"), 450_000);
        assert_eq!(
            quantity(&bom, "Hangers"),
            u64::from(result.total_piles) + 2 * u64::from(result.joist_count)
        );
    }

    #[test]
    fn test_hanger_total_exceeds_u32() {
        let input = DeckInput {
            label: String::new(),
            footprint: DeckFootprint::rectangle(4000.0, 3000.0, 600.0),
            materials: MaterialChoice::default(),
        };
        let config = DeckConfig::default();
        let mut result = calculate(&input, &config).unwrap();
        result.joist_count = u32::MAX;
        result.screws_count = u32::MAX;

        let bom = bill_of_materials(&input, &result, &config);
        assert_eq!(quantity(&bom, "Hangers"), 16 + 2 * u64::from(u32::MAX));
        assert_eq!(quantity(&bom, "Screws"), 4_294_967_300);
    }

    #[test]
    fn test_no_waste_config() {
        assert_eq!(order_lm(Millimeters(4000.0), 4, 1.0), 16);
    }
}

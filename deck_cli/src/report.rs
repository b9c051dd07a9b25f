//! Plain-text report printing.

use deck_core::takeoff::{BillOfMaterials, TakeoffCategory};
use deck_core::{DeckInput, DeckResult};

const RULE: &str = "═══════════════════════════════════════";

pub fn print_summary(input: &DeckInput, result: &DeckResult) {
    println!("{}", RULE);
    if input.label.is_empty() {
        println!("  DECK FRAMING LAYOUT");
    } else {
        println!("  DECK FRAMING LAYOUT - {}", input.label);
    }
    println!("{}", RULE);
    println!();
    println!("Footprint:");
    println!("  Vertices:   {}", input.footprint.points.len());
    println!("  Extent:     {:.0} x {:.0} mm", result.width_mm, result.projection_mm);
    println!("  Area:       {:.2} m²", result.area_m2);
    println!("  Perimeter:  {:.2} m", result.perimeter_mm / 1000.0);
    println!("  Height:     {:.0} mm", input.footprint.height_mm);
    println!();
    println!("Foundation:");
    println!(
        "  Piles:      {} ({} rows x {} per row)",
        result.total_piles, result.bearer_rows, result.piles_per_row
    );
    println!("  Concrete:   {} bags", result.concrete_bags);
    println!();
    println!("Framing:");
    println!("  Bearers:    {} @ {:.0} mm span", result.bearer_size, result.bearer_span_mm);
    println!("  Joists:     {} @ {:.0} mm span", result.joist_size, result.joist_span_mm);
    println!("  Joist runs: {} (normalized count)", result.joist_count);
    println!("  Cantilever: {:.0} mm max", result.max_joist_cantilever_mm);
    println!();
    println!("Finish:");
    println!("  Decking:    {} rows of {}", result.decking_board_count, input.materials.decking);
    println!("  Screws:     {}", result.screws_count);
    println!();
    println!("{}", RULE);
    match &result.cantilever_warning {
        Some(warning) => println!("  RESULT: [REVIEW] {}", warning),
        None => println!("  RESULT: [OK] within cantilever limits"),
    }
    println!("{}", RULE);
}

pub fn print_bill_of_materials(bom: &BillOfMaterials) {
    println!();
    println!("Bill of Materials (includes waste allowance):");
    for category in [
        TakeoffCategory::Foundation,
        TakeoffCategory::Framing,
        TakeoffCategory::Finish,
        TakeoffCategory::Hardware,
    ] {
        println!("  {}", category);
        for line in bom.category(category) {
            println!(
                "    {:>5} {:<5} {:<50} {}",
                line.quantity,
                line.unit.abbreviation(),
                line.item,
                line.detail
            );
        }
    }
}

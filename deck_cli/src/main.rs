//! # Deck Framing CLI
//!
//! Command-line front end for `deck_core`.
//!
//! ```text
//! deck_cli calc footprint.json --bom
//! deck_cli rect --width 4000 --depth 3000 --height 600 --decking kwila
//! deck_cli --config deck.toml --json calc footprint.json
//! ```
//!
//! Footprint files are `DeckInput` JSON. Config files are TOML with any
//! subset of the `DeckConfig` keys. Logging goes to stderr and honours
//! `RUST_LOG`.

mod report;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deck_core::{
    bill_of_materials, calculate, CalcError, DeckConfig, DeckFootprint, DeckInput, DeckingType,
    MaterialChoice, TimberGrade,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "deck_cli", version, about = "Deck framing layout calculator")]
struct Cli {
    /// TOML file overriding engine constants
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of the text report
    #[arg(long, global = true)]
    json: bool,

    /// Include the bill of materials
    #[arg(long, global = true)]
    bom: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate a deck from a footprint JSON file
    Calc {
        /// Path to a DeckInput JSON file
        footprint: PathBuf,
    },
    /// Calculate a rectangular deck from its dimensions
    Rect {
        /// Width along the house (mm)
        #[arg(long)]
        width: f64,
        /// Projection out from the house (mm)
        #[arg(long)]
        depth: f64,
        /// Deck height above ground (mm)
        #[arg(long, default_value_t = 600.0)]
        height: f64,
        /// Decking profile (pine-90, pine-140, kwila)
        #[arg(long, default_value = "pine-90")]
        decking: String,
        /// Timber grade (sg8-wet, sg8-dry, sg10-wet)
        #[arg(long, default_value = "sg8-wet")]
        grade: String,
        /// Label printed on the report
        #[arg(long, default_value = "")]
        label: String,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load engine constants from TOML, or the defaults when no file is given.
fn load_config(path: Option<&Path>) -> Result<DeckConfig> {
    let Some(path) = path else {
        return Ok(DeckConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let config: DeckConfig =
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn load_input(path: &Path) -> Result<DeckInput> {
    let text = fs::read_to_string(path).with_context(|| format!("reading footprint {}", path.display()))?;
    let input = DeckInput::from_json(&text).with_context(|| format!("parsing footprint {}", path.display()))?;
    debug!(vertices = input.footprint.points.len(), "loaded footprint");
    Ok(input)
}

fn build_input(command: &Command) -> Result<DeckInput> {
    match command {
        Command::Calc { footprint } => load_input(footprint),
        Command::Rect {
            width,
            depth,
            height,
            decking,
            grade,
            label,
        } => Ok(DeckInput {
            label: label.clone(),
            footprint: DeckFootprint::rectangle(*width, *depth, *height),
            materials: MaterialChoice::new(
                TimberGrade::from_str_flexible(grade)?,
                DeckingType::from_str_flexible(decking)?,
            ),
        }),
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let input = build_input(&cli.command)?;
    let result = calculate(&input, &config)?;
    let bom = cli.bom.then(|| bill_of_materials(&input, &result, &config));

    if cli.json {
        let output = serde_json::json!({
            "input": input,
            "result": result,
            "bill_of_materials": bom,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        report::print_summary(&input, &result);
        if let Some(bom) = &bom {
            report::print_bill_of_materials(bom);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Write;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_rect() {
        let cli = Cli::parse_from([
            "deck_cli", "--bom", "rect", "--width", "4000", "--depth", "3000", "--decking", "kwila",
        ]);
        assert!(cli.bom);
        let input = build_input(&cli.command).unwrap();
        assert_eq!(input.footprint.height_mm, 600.0);
        assert_eq!(input.materials.decking, DeckingType::Kwila90);
        assert_eq!(input.footprint.points.len(), 4);
    }

    #[test]
    fn test_unknown_decking_is_material_error() {
        let cli = Cli::parse_from(["deck_cli", "rect", "--width", "4000", "--depth", "3000", "--decking", "oak"]);
        let err = build_input(&cli.command).unwrap_err();
        let calc = err.downcast_ref::<CalcError>().unwrap();
        assert_eq!(calc.error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_default_config_without_file() {
        assert_eq!(load_config(None).unwrap(), DeckConfig::default());
    }

    #[test]
    fn test_partial_toml_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "edge_offset_mm = 300.0").unwrap();
        writeln!(file, "[rules]").unwrap();
        writeln!(file, "balustrade_height_mm = 1500.0").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.edge_offset_mm, 300.0);
        assert_eq!(config.rules.balustrade_height_mm, 1500.0);
        assert_eq!(config.max_joist_span_mm, 1200.0);
    }

    #[test]
    fn test_invalid_toml_config_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "waste_factor = 0.5").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn test_nan_breakpoint_in_toml_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[rules]").unwrap();
        writeln!(file, "joist_light_max_span_mm = nan").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        let calc = err.downcast_ref::<CalcError>().unwrap();
        assert_eq!(calc.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_oversized_rect_rejected() {
        let cli = Cli::parse_from(["deck_cli", "rect", "--width", "10000000", "--depth", "10000000"]);
        let input = build_input(&cli.command).unwrap();
        let err = calculate(&input, &DeckConfig::default()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FOOTPRINT");
    }

    #[test]
    fn test_bundled_samples() {
        let samples = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples");
        let config = load_config(Some(&samples.join("deck.toml"))).unwrap();
        assert_eq!(config, DeckConfig::default());

        let input = load_input(&samples.join("l_deck.json")).unwrap();
        let result = calculate(&input, &config).unwrap();
        assert!(result.within_limits());
        // 5000 x 4000 bounding box: 4 rows, 5 piles per row, 6 grid points in the notch
        assert_eq!(result.bearer_rows, 4);
        assert_eq!(result.piles_per_row, 5);
        assert_eq!(result.total_piles, 14);
    }

    #[test]
    fn test_footprint_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "label": "L deck",
                "footprint": {{
                    "points": [
                        {{"x": 0, "y": 0}}, {{"x": 5000, "y": 0}}, {{"x": 5000, "y": 2000}},
                        {{"x": 2000, "y": 2000}}, {{"x": 2000, "y": 4000}}, {{"x": 0, "y": 4000}}
                    ],
                    "height_mm": 800
                }},
                "materials": {{ "timber_grade": "SG8 Dry", "decking": "90x19mm Kwila" }}
            }}"#
        )
        .unwrap();

        let input = load_input(file.path()).unwrap();
        assert_eq!(input.label, "L deck");
        assert_eq!(input.materials.timber_grade, TimberGrade::Sg8Dry);
        let result = calculate(&input, &DeckConfig::default()).unwrap();
        assert!((result.area_m2 - 14.0).abs() < 1e-9);
    }
}

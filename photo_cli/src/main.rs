//! # Photo Tools CLI
//!
//! Command-line front-end for the photo_core calculators. Prints a short
//! report by default, or the same JSON payload the HTTP API returns with
//! `--json`.

use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use photo_core::calculations::print_size::QualityLevel;
use photo_core::calculations::{
    CalculationOutput, CalculationRequest, DofInput, DofReport, InvestmentInput, InvestmentReport, QualityReport,
    Recommendation, RequiredResolutionReport, TierRecommendation,
};
use photo_core::catalog::{Catalog, Currency, DEFAULT_PRINT_MEDIUM, DEFAULT_QUALITY_TIER};
use photo_core::format::{format_distance, number_format};
use photo_core::{CalcResult, UnitSystem};

#[derive(Parser)]
#[command(name = "photo", about = "Photography calculators", version)]
struct Cli {
    /// Print the JSON payload instead of a report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Depth of field and hyperfocal distance
    Dof {
        /// Focal length in mm
        #[arg(short, long)]
        focal_length: f64,

        /// Aperture f-number (8 for f/8)
        #[arg(short, long)]
        aperture: f64,

        /// Subject distance in metres
        #[arg(short, long)]
        distance: f64,

        /// Circle of confusion in mm
        #[arg(long)]
        coc: Option<f64>,

        /// Sensor preset supplying the circle of confusion
        #[arg(long, default_value = "full_frame")]
        sensor: String,

        /// Unit system for the results
        #[arg(long, default_value = "metric", value_enum)]
        units: UnitArg,
    },

    /// Largest print for every quality tier
    PrintMax {
        /// Image width in pixels
        #[arg(long)]
        width: u32,

        /// Image height in pixels
        #[arg(long)]
        height: u32,

        /// Print medium key
        #[arg(long, default_value = DEFAULT_PRINT_MEDIUM)]
        medium: String,
    },

    /// Pixels needed for a print size
    PrintRequired {
        /// Print width in inches
        #[arg(long)]
        width: f64,

        /// Print height in inches
        #[arg(long)]
        height: f64,

        /// Quality tier key
        #[arg(long, default_value = DEFAULT_QUALITY_TIER)]
        tier: String,

        /// Print medium key
        #[arg(long, default_value = DEFAULT_PRINT_MEDIUM)]
        medium: String,
    },

    /// Quality of an image printed at a given size
    PrintAssess {
        /// Image width in pixels
        #[arg(long)]
        image_width: u32,

        /// Image height in pixels
        #[arg(long)]
        image_height: u32,

        /// Print width in inches
        #[arg(long)]
        print_width: f64,

        /// Print height in inches
        #[arg(long)]
        print_height: f64,

        /// Quality tier key
        #[arg(long, default_value = DEFAULT_QUALITY_TIER)]
        tier: String,

        /// Print medium key
        #[arg(long, default_value = DEFAULT_PRINT_MEDIUM)]
        medium: String,
    },

    /// Buy or rent a piece of equipment
    Invest {
        /// Purchase price
        #[arg(long)]
        price: f64,

        /// Daily rental rate
        #[arg(long)]
        rental_rate: f64,

        /// Days used per month
        #[arg(long)]
        uses_per_month: u32,

        /// Annual insurance premium
        #[arg(long, default_value = "0")]
        insurance: f64,

        /// Display currency
        #[arg(long, default_value = "usd", value_enum)]
        currency: CurrencyArg,
    },

    /// Dump the preset catalog as JSON
    Catalog,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Metric,
    Imperial,
    Centimeters,
    Inches,
}

#[derive(Clone, Copy, ValueEnum)]
enum CurrencyArg {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
    Jpy,
    Inr,
}

impl From<UnitArg> for UnitSystem {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Metric => Self::Metric,
            UnitArg::Imperial => Self::Imperial,
            UnitArg::Centimeters => Self::Centimeters,
            UnitArg::Inches => Self::Inches,
        }
    }
}

impl From<CurrencyArg> for Currency {
    fn from(arg: CurrencyArg) -> Self {
        match arg {
            CurrencyArg::Usd => Self::Usd,
            CurrencyArg::Eur => Self::Eur,
            CurrencyArg::Gbp => Self::Gbp,
            CurrencyArg::Cad => Self::Cad,
            CurrencyArg::Aud => Self::Aud,
            CurrencyArg::Jpy => Self::Jpy,
            CurrencyArg::Inr => Self::Inr,
        }
    }
}

/// Resolve command-line arguments into a typed request
fn build_request(command: Commands, catalog: &Catalog) -> CalcResult<CalculationRequest> {
    let request = match command {
        Commands::Dof {
            focal_length,
            aperture,
            distance,
            coc,
            sensor,
            units,
        } => {
            let coc = match coc {
                Some(c) => c,
                None => catalog.sensor_format(&sensor)?.coc_mm,
            };
            CalculationRequest::DepthOfField {
                input: DofInput::new(focal_length, aperture, distance, coc),
                unit: units.into(),
            }
        }
        Commands::PrintMax { width, height, medium } => CalculationRequest::MaxPrintSize {
            width_px: width,
            height_px: height,
            medium: *catalog.print_medium(&medium)?,
        },
        Commands::PrintRequired {
            width,
            height,
            tier,
            medium,
        } => CalculationRequest::RequiredResolution {
            width_in: width,
            height_in: height,
            tier: *catalog.quality_tier(&tier)?,
            medium: *catalog.print_medium(&medium)?,
        },
        Commands::PrintAssess {
            image_width,
            image_height,
            print_width,
            print_height,
            tier,
            medium,
        } => CalculationRequest::PrintQuality {
            image_width_px: image_width,
            image_height_px: image_height,
            print_width_in: print_width,
            print_height_in: print_height,
            tier: *catalog.quality_tier(&tier)?,
            medium: *catalog.print_medium(&medium)?,
        },
        Commands::Invest {
            price,
            rental_rate,
            uses_per_month,
            insurance,
            currency,
        } => CalculationRequest::EquipmentInvestment {
            input: InvestmentInput::new(price, rental_rate, uses_per_month, insurance),
            currency: currency.into(),
        },
        Commands::Catalog => {
            return Err(photo_core::CalcError::Internal {
                message: "catalog is not a calculation".to_string(),
            })
        }
    };
    Ok(request)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = photo_core::catalog();

    if let Commands::Catalog = cli.command {
        return match serde_json::to_string_pretty(catalog) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let result = build_request(cli.command, catalog).and_then(|req| req.execute(catalog));

    match result {
        Ok(output) if cli.json => match output.to_json().and_then(|v| Ok(serde_json::to_string_pretty(&v)?)) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Ok(output) => {
            print_report(&output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            if cli.json {
                if let Ok(json) = serde_json::to_string_pretty(&e) {
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn print_report(output: &CalculationOutput) {
    match output {
        CalculationOutput::DepthOfField(r) => print_dof(r),
        CalculationOutput::MaxPrintSize(tiers) => print_max_print(tiers),
        CalculationOutput::RequiredResolution(r) => print_required(r),
        CalculationOutput::PrintQuality(r) => print_quality(r),
        CalculationOutput::EquipmentInvestment(r) => print_investment(r),
    }
}

fn banner(title: &str) {
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
}

fn print_dof(r: &DofReport) {
    let f = &r.formatted;
    banner("DEPTH OF FIELD");
    println!();
    println!("  Subject:     {}", f.subject_distance);
    println!("  Near limit:  {}", f.near_distance);
    println!("  Far limit:   {}", f.far_distance);
    println!("  Hyperfocal:  {}", f.hyperfocal_distance);
    println!();
    println!("  In front:    {}", f.dof_front);
    println!("  Behind:      {}", f.dof_behind);
    println!("  Total:       {}", f.total_dof);
    println!();
    let ratio = format_distance(r.result.front_behind_ratio(), "", 2);
    println!("  Behind/front ratio: {}  (CoC {} mm)", ratio, r.coc);
    if r.result.reaches_infinity() {
        println!("  Sharp from the near limit to infinity.");
    }
}

fn print_max_print(tiers: &[TierRecommendation]) {
    banner("MAXIMUM PRINT SIZE");
    for t in tiers {
        println!();
        println!(
            "  {} ({:.0} PPI): {:.1}\" x {:.1}\"",
            t.tier_info.name, t.max_size.effective_ppi, t.max_size.max_width_in, t.max_size.max_height_in
        );
        let sizes: Vec<&str> = t.suitable_common_sizes.iter().map(|s| s.size_key.as_str()).collect();
        if sizes.is_empty() {
            println!("    No standard sizes fit");
        } else {
            println!("    Fits: {}", sizes.join(", "));
        }
    }
}

fn print_required(r: &RequiredResolutionReport) {
    let req = &r.required_resolution;
    banner("REQUIRED RESOLUTION");
    println!();
    println!(
        "  {}\" x {}\" at {:.0} PPI needs {} x {} px ({} MP)",
        req.target_width_in,
        req.target_height_in,
        req.effective_ppi,
        req.required_width_px,
        req.required_height_px,
        req.required_megapixels
    );
    println!();
    if r.camera_recommendations.is_empty() {
        println!("  No catalog camera reaches this resolution.");
    }
    for c in &r.camera_recommendations {
        println!(
            "  {:>5.1} MP  {:<24} (+{} MP)",
            c.megapixels, c.description, c.excess_resolution
        );
    }
}

fn print_quality(r: &QualityReport) {
    let q = &r.quality_assessment;
    let v = &r.viewing_distance;
    banner("PRINT QUALITY");
    println!();
    println!(
        "  {} PPI of {} target ({}%)  {}",
        q.actual_ppi,
        q.target_ppi,
        q.quality_percentage,
        status_icon(q.quality_level)
    );
    if q.upsampling_needed {
        println!("  Upsample by {}x to reach the target", q.upsampling_factor);
    }
    println!(
        "  View from about {}\" ({} ft)",
        v.recommended_distance_in, v.recommended_distance_ft
    );
}

fn print_investment(r: &InvestmentReport) {
    let f = &r.formatted;
    let res = &r.result;
    banner("EQUIPMENT INVESTMENT");
    println!();
    println!("  Ownership per year: {}", f.annual_ownership_cost);
    println!("  Rental per year:    {}", f.annual_rental_cost);
    println!(
        "  Break-even:         {} uses ({} months)",
        number_format(res.break_even_uses as f64, 0),
        res.break_even_months
    );
    let direction = if res.annual_savings < 0.0 { "renting" } else { "buying" };
    println!("  Savings by {}: {} per year", direction, f.annual_savings);
    println!();
    banner(&format!("RECOMMENDATION: {}", res.recommendation));
    println!("  {}", res.recommendation_reason);
    if res.recommendation == Recommendation::Rent {
        println!("  5-year rental total: {}", f.five_year_rental_cost);
    }
}

fn status_icon(level: QualityLevel) -> &'static str {
    match level {
        QualityLevel::Excellent => "[EXCELLENT]",
        QualityLevel::Good => "[GOOD]",
        QualityLevel::Acceptable => "[OK]",
        QualityLevel::Poor => "[POOR]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_core::Distance;

    #[test]
    fn test_cli_parses_dof() {
        let cli = Cli::try_parse_from([
            "photo", "dof", "-f", "50", "-a", "8", "-d", "2", "--units", "imperial",
        ])
        .unwrap();
        let req = build_request(cli.command, photo_core::catalog()).unwrap();
        match req {
            CalculationRequest::DepthOfField { input, unit } => {
                assert_eq!(input.coc_mm, 0.029);
                assert_eq!(unit, UnitSystem::Imperial);
            }
            _ => panic!("expected depth of field request"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_tier() {
        let cli = Cli::try_parse_from([
            "photo", "print-required", "--width", "8", "--height", "10", "--tier", "museum",
        ])
        .unwrap();
        let err = build_request(cli.command, photo_core::catalog()).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_OPTION");
    }

    #[test]
    fn test_cli_invest_json_flag() {
        let cli = Cli::try_parse_from([
            "photo", "--json", "invest", "--price", "3000", "--rental-rate", "75", "--uses-per-month", "2",
        ])
        .unwrap();
        assert!(cli.json);
        let out = build_request(cli.command, photo_core::catalog())
            .and_then(|r| r.execute(photo_core::catalog()))
            .unwrap();
        let json = out.to_json().unwrap();
        assert_eq!(json["recommendation"], "BUY");
        assert_eq!(json["formatted"]["annual_savings"], "$1,080.00");
    }

    #[test]
    fn test_cli_catalog_is_not_a_request() {
        assert!(build_request(Commands::Catalog, photo_core::catalog()).is_err());
    }

    #[test]
    fn test_infinite_ratio_formats_as_glyph() {
        assert_eq!(format_distance(Distance::Infinite, "", 2), "∞");
    }
}

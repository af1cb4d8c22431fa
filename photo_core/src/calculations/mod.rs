//! # Photography Calculations
//!
//! Each calculator follows the same pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Engines never look anything up themselves; callers resolve quality tiers,
//! print media and sensor presets from the [`Catalog`](crate::catalog::Catalog)
//! and pass the records in.
//!
//! ## Available Calculations
//!
//! - [`dof`] - Depth of field and hyperfocal distance
//! - [`print_size`] - Print size, required resolution and print quality
//! - [`investment`] - Buy-or-rent comparison for equipment

pub mod dof;
pub mod investment;
pub mod print_size;

use serde::Serialize;

use crate::catalog::{Catalog, Currency, PrintMedium, QualityTier};
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

// Re-export commonly used types
pub use dof::{DofInput, DofReport, DofResult};
pub use investment::{InvestmentInput, InvestmentReport, InvestmentResult, Recommendation};
pub use print_size::{
    PrintSizeResult, QualityAssessment, QualityLevel, QualityReport, RequiredResolution, RequiredResolutionReport,
    TierRecommendation, ViewingDistance,
};

/// Check that `value` is positive and within `range` (inclusive).
///
/// Non-positive and NaN values get "{label} must be a positive number";
/// out-of-range values get `range_msg`.
pub(crate) fn check_range(
    field: &str,
    label: &str,
    value: f64,
    range: (f64, f64),
    range_msg: &str,
) -> Option<CalcError> {
    if !(value > 0.0) {
        Some(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{} must be a positive number", label),
        ))
    } else if value < range.0 || value > range.1 {
        Some(CalcError::invalid_input(field, value.to_string(), range_msg))
    } else {
        None
    }
}

/// A fully-typed calculation request.
///
/// Preset keys have already been resolved against a catalog, so executing a
/// request can only fail on the numeric validation of its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    /// Depth of field, reported in `unit`
    DepthOfField { input: DofInput, unit: UnitSystem },

    /// Largest print for every quality tier
    MaxPrintSize {
        width_px: u32,
        height_px: u32,
        medium: PrintMedium,
    },

    /// Pixels needed for a target print, with camera suggestions
    RequiredResolution {
        width_in: f64,
        height_in: f64,
        tier: QualityTier,
        medium: PrintMedium,
    },

    /// Quality of an image printed at a given size
    PrintQuality {
        image_width_px: u32,
        image_height_px: u32,
        print_width_in: f64,
        print_height_in: f64,
        tier: QualityTier,
        medium: PrintMedium,
    },

    /// Buy-or-rent comparison, amounts shown in `currency`
    EquipmentInvestment { input: InvestmentInput, currency: Currency },
}

impl CalculationRequest {
    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationRequest::DepthOfField { .. } => "DepthOfField",
            CalculationRequest::MaxPrintSize { .. } => "MaxPrintSize",
            CalculationRequest::RequiredResolution { .. } => "RequiredResolution",
            CalculationRequest::PrintQuality { .. } => "PrintQuality",
            CalculationRequest::EquipmentInvestment { .. } => "EquipmentInvestment",
        }
    }

    /// Run the calculation.
    ///
    /// `catalog` supplies the tables that span several records (all tiers,
    /// common print sizes, camera resolutions).
    pub fn execute(&self, catalog: &Catalog) -> CalcResult<CalculationOutput> {
        tracing::debug!(calc_type = self.calc_type(), "executing calculation");

        let output = match self {
            CalculationRequest::DepthOfField { input, unit } => {
                CalculationOutput::DepthOfField(DofReport::build(input, *unit)?)
            }
            CalculationRequest::MaxPrintSize {
                width_px,
                height_px,
                medium,
            } => CalculationOutput::MaxPrintSize(print_size::all_quality_recommendations(
                *width_px, *height_px, medium, catalog,
            )?),
            CalculationRequest::RequiredResolution {
                width_in,
                height_in,
                tier,
                medium,
            } => CalculationOutput::RequiredResolution(RequiredResolutionReport::build(
                *width_in, *height_in, tier, medium, catalog,
            )?),
            CalculationRequest::PrintQuality {
                image_width_px,
                image_height_px,
                print_width_in,
                print_height_in,
                tier,
                medium,
            } => CalculationOutput::PrintQuality(QualityReport::build(
                *image_width_px,
                *image_height_px,
                *print_width_in,
                *print_height_in,
                tier,
                medium,
            )?),
            CalculationRequest::EquipmentInvestment { input, currency } => {
                CalculationOutput::EquipmentInvestment(InvestmentReport::new(investment::calculate(input)?, *currency))
            }
        };
        Ok(output)
    }
}

/// The payload produced by a [`CalculationRequest`].
///
/// Serializes to the bare payload (no tag); the request already says what
/// kind of result to expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CalculationOutput {
    DepthOfField(DofReport),
    MaxPrintSize(Vec<TierRecommendation>),
    RequiredResolution(RequiredResolutionReport),
    PrintQuality(QualityReport),
    EquipmentInvestment(InvestmentReport),
}

impl CalculationOutput {
    /// Serialize to a JSON value
    pub fn to_json(&self) -> CalcResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

//! # Request Boundary
//!
//! Turns raw form fields (as posted by the calculator pages) into typed
//! [`CalculationRequest`]s, runs them, and wraps the outcome in the JSON
//! envelope the front-ends expect:
//!
//! - success: `{"success": true, "data": {...}}`
//! - failure: `{"error": "message"}`
//!
//! Every calculator form carries an `action` field naming the operation.
//!
//! ## Example
//!
//! ```rust
//! use photo_core::api::{handle, form_fields, Calculator};
//! use photo_core::catalog::catalog;
//!
//! let fields = form_fields([
//!     ("action", "calculate"),
//!     ("focal_length", "50"),
//!     ("aperture", "8"),
//!     ("distance", "2"),
//!     ("coc", "0.029"),
//! ]);
//!
//! let data = handle(Calculator::DepthOfField, &fields, catalog()).unwrap();
//! assert_eq!(data["unit_label"], "m");
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::calculations::print_size::{check_pixels, check_print_inches};
use crate::calculations::{CalculationRequest, DofInput, InvestmentInput};
use crate::catalog::{Catalog, Currency, DEFAULT_PRINT_MEDIUM, DEFAULT_QUALITY_TIER};
use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Raw form fields, name → value
pub type FormFields = HashMap<String, String>;

/// Build [`FormFields`] from string pairs
pub fn form_fields<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> FormFields {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

/// The three calculator front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Calculator {
    DepthOfField,
    PrintSize,
    EquipmentInvestment,
}

impl Calculator {
    pub const ALL: [Calculator; 3] = [
        Calculator::DepthOfField,
        Calculator::PrintSize,
        Calculator::EquipmentInvestment,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Calculator::DepthOfField => "depth_of_field",
            Calculator::PrintSize => "print_size",
            Calculator::EquipmentInvestment => "equipment_investment",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Calculator::DepthOfField => "Depth of Field Calculator",
            Calculator::PrintSize => "Print Size Calculator",
            Calculator::EquipmentInvestment => "Equipment Investment Calculator",
        }
    }

    /// Values of the `action` field this calculator accepts
    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Calculator::DepthOfField => &["calculate"],
            Calculator::PrintSize => &[
                "calculate_max_print",
                "calculate_required_resolution",
                "assess_print_quality",
            ],
            Calculator::EquipmentInvestment => &["calculate"],
        }
    }
}

impl std::fmt::Display for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Reads typed values out of form fields.
///
/// Missing or non-numeric numbers come back as NaN (or 0 for counts) so the
/// engine's own validation reports them with the same message as a
/// non-positive value. Unknown preset keys are collected as errors, as are
/// print dimensions, which are range-checked on the raw value before any
/// truncation to whole pixels.
struct FormReader<'a> {
    fields: &'a FormFields,
    errors: Vec<CalcError>,
}

impl<'a> FormReader<'a> {
    fn new(fields: &'a FormFields) -> Self {
        FormReader {
            fields,
            errors: Vec::new(),
        }
    }

    fn text(&self, name: &str) -> Option<&'a str> {
        self.fields.get(name).map(|v| v.trim()).filter(|v| !v.is_empty())
    }

    fn number(&self, name: &str) -> f64 {
        self.text(name)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(f64::NAN)
    }

    /// Whole-number field; fractions are truncated, negatives become 0
    fn count(&mut self, name: &str, label: &str) -> u32 {
        let value = self.number(name);
        if value.is_nan() {
            0
        } else if value.trunc() > f64::from(u32::MAX) {
            self.errors.push(CalcError::invalid_input(
                name,
                value.to_string(),
                format!("{} must be at most {}", label, u32::MAX),
            ));
            0
        } else {
            value.trunc() as u32
        }
    }

    /// Image dimension, range-checked before truncating to whole pixels
    fn pixels(&mut self, name: &str, label: &str) -> u32 {
        let value = self.number(name);
        match check_pixels(name, label, value) {
            Some(err) => {
                self.errors.push(err);
                0
            }
            None => value.trunc() as u32,
        }
    }

    /// Print dimension in inches
    fn inches(&mut self, name: &str, label: &str) -> f64 {
        let value = self.number(name);
        if let Some(err) = check_print_inches(name, label, value) {
            self.errors.push(err);
        }
        value
    }

    fn preset<T>(&mut self, name: &str, default: &str, lookup: impl FnOnce(&str) -> CalcResult<T>) -> Option<T> {
        let key = self.text(name).unwrap_or(default);
        match lookup(key) {
            Ok(value) => Some(value),
            Err(err) => {
                self.errors.push(err);
                None
            }
        }
    }

    fn finish(self) -> CalcResult<()> {
        match CalcError::from_many(self.errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Resolve the action and fields of a form into a typed request.
pub fn parse_request(calculator: Calculator, fields: &FormFields, catalog: &Catalog) -> CalcResult<CalculationRequest> {
    let action = fields
        .get("action")
        .map(|a| a.trim())
        .filter(|a| !a.is_empty())
        .ok_or(CalcError::MissingAction)?;

    if !calculator.actions().contains(&action) {
        return Err(CalcError::unknown_operation(action));
    }

    let mut form = FormReader::new(fields);

    let request = match (calculator, action) {
        (Calculator::DepthOfField, _) => {
            let unit = form.preset("unit_system", UnitSystem::default().key(), UnitSystem::from_key);
            let coc = match form.text("coc") {
                Some(_) => form.number("coc"),
                None => match form.text("sensor") {
                    Some(key) => form
                        .preset("sensor", key, |k| catalog.sensor_format(k).map(|s| s.coc_mm))
                        .unwrap_or(f64::NAN),
                    None => f64::NAN,
                },
            };
            let input = DofInput::new(
                form.number("focal_length"),
                form.number("aperture"),
                form.number("distance"),
                coc,
            );
            form.finish()?;
            CalculationRequest::DepthOfField {
                input,
                unit: unit.unwrap_or_default(),
            }
        }

        (Calculator::PrintSize, "calculate_max_print") => {
            let medium = form.preset("print_medium", DEFAULT_PRINT_MEDIUM, |k| catalog.print_medium(k).copied());
            let width_px = form.pixels("width_pixels", "Image width");
            let height_px = form.pixels("height_pixels", "Image height");
            form.finish()?;
            CalculationRequest::MaxPrintSize {
                width_px,
                height_px,
                medium: medium.ok_or_else(internal_lookup)?,
            }
        }

        (Calculator::PrintSize, "calculate_required_resolution") => {
            let tier = form.preset("quality_tier", DEFAULT_QUALITY_TIER, |k| catalog.quality_tier(k).copied());
            let medium = form.preset("print_medium", DEFAULT_PRINT_MEDIUM, |k| catalog.print_medium(k).copied());
            let width_in = form.inches("print_width", "Print width");
            let height_in = form.inches("print_height", "Print height");
            form.finish()?;
            CalculationRequest::RequiredResolution {
                width_in,
                height_in,
                tier: tier.ok_or_else(internal_lookup)?,
                medium: medium.ok_or_else(internal_lookup)?,
            }
        }

        (Calculator::PrintSize, _) => {
            let tier = form.preset("quality_tier", DEFAULT_QUALITY_TIER, |k| catalog.quality_tier(k).copied());
            let medium = form.preset("print_medium", DEFAULT_PRINT_MEDIUM, |k| catalog.print_medium(k).copied());
            let image_width_px = form.pixels("image_width", "Image width");
            let image_height_px = form.pixels("image_height", "Image height");
            let print_width_in = form.inches("print_width", "Print width");
            let print_height_in = form.inches("print_height", "Print height");
            form.finish()?;
            CalculationRequest::PrintQuality {
                image_width_px,
                image_height_px,
                print_width_in,
                print_height_in,
                tier: tier.ok_or_else(internal_lookup)?,
                medium: medium.ok_or_else(internal_lookup)?,
            }
        }

        (Calculator::EquipmentInvestment, _) => {
            let currency = form.preset("currency", Currency::default().code(), Currency::from_code);
            let annual_insurance = match form.text("insurance_annual") {
                Some(_) => form.number("insurance_annual"),
                None => 0.0,
            };
            let input = InvestmentInput::new(
                form.number("purchase_price"),
                form.number("daily_rental_rate"),
                form.count("usage_per_month", "Usage per month"),
                annual_insurance,
            );
            form.finish()?;
            CalculationRequest::EquipmentInvestment {
                input,
                currency: currency.unwrap_or_default(),
            }
        }
    };

    tracing::debug!(
        calculator = calculator.key(),
        action,
        calc_type = request.calc_type(),
        "parsed calculator request"
    );
    Ok(request)
}

fn internal_lookup() -> CalcError {
    CalcError::Internal {
        message: "preset lookup failed without an error".to_string(),
    }
}

/// Parse, run and serialize one calculator request.
pub fn handle(calculator: Calculator, fields: &FormFields, catalog: &Catalog) -> CalcResult<serde_json::Value> {
    parse_request(calculator, fields, catalog)?.execute(catalog)?.to_json()
}

/// JSON envelope returned to the front-ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Success { success: bool, data: serde_json::Value },
    Failure { error: String },
}

impl ApiResponse {
    pub fn success(data: serde_json::Value) -> Self {
        ApiResponse::Success { success: true, data }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ApiResponse::Failure { error: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }
}

impl From<CalcResult<serde_json::Value>> for ApiResponse {
    fn from(result: CalcResult<serde_json::Value>) -> Self {
        match result {
            Ok(data) => ApiResponse::success(data),
            Err(err) => ApiResponse::failure(err.user_message()),
        }
    }
}

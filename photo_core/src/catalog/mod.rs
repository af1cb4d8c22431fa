//! # Catalog
//!
//! Read-only configuration tables shared by every calculator: unit systems,
//! sensor formats, print quality tiers and media, standard print sizes,
//! camera resolutions and currencies.
//!
//! The built-in catalog is constructed once per process and never mutated.
//! Engines receive the specific records they need (a tier, a medium), so a
//! caller may also build its own [`Catalog`] and inject it.
//!
//! ## Example
//!
//! ```rust
//! use photo_core::catalog;
//!
//! let tier = catalog::catalog().quality_tier("standard").unwrap();
//! assert_eq!(tier.base_ppi, 240.0);
//!
//! let medium = catalog::catalog().print_medium("canvas").unwrap();
//! assert_eq!(medium.ppi_multiplier, 0.7);
//! ```

pub mod camera;
pub mod currency;
pub mod print;

pub use camera::{SensorFormat, APERTURE_PRESETS, FOCAL_LENGTH_PRESETS, SENSOR_FORMATS};
pub use currency::{Currency, CurrencyInfo, UsageFrequency, USAGE_FREQUENCIES};
pub use print::{
    CameraResolution, CommonPrintSize, PrintMedium, QualityThresholds, QualityTier, UpsamplingGuideline,
    CAMERA_RESOLUTIONS, COMMON_PRINT_SIZES, PRINT_MEDIA, QUALITY_THRESHOLDS, QUALITY_TIERS,
    UPSAMPLING_GUIDELINES,
};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::units::UnitSystem;

/// Default quality tier key when a request names none
pub const DEFAULT_QUALITY_TIER: &str = "standard";

/// Default print medium key when a request names none
pub const DEFAULT_PRINT_MEDIUM: &str = "photo_paper";

static BUILTIN: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// The process-wide built-in catalog
pub fn catalog() -> &'static Catalog {
    &BUILTIN
}

/// Catalog entry describing a unit system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitSystemInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub scale_factor: f64,
    pub label: &'static str,
}

impl From<UnitSystem> for UnitSystemInfo {
    fn from(u: UnitSystem) -> Self {
        UnitSystemInfo {
            key: u.key(),
            name: u.display_name(),
            scale_factor: u.scale_factor(),
            label: u.label(),
        }
    }
}

/// All configuration tables. Serializes to the JSON the front-ends use to
/// populate their pickers.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub unit_systems: Vec<UnitSystemInfo>,
    pub sensor_formats: Vec<SensorFormat>,
    pub aperture_presets: Vec<f64>,
    pub focal_length_presets: Vec<f64>,
    pub quality_tiers: Vec<QualityTier>,
    pub print_media: Vec<PrintMedium>,
    pub common_print_sizes: Vec<CommonPrintSize>,
    pub camera_resolutions: Vec<CameraResolution>,
    pub upsampling_guidelines: Vec<UpsamplingGuideline>,
    pub quality_thresholds: QualityThresholds,
    pub currencies: Vec<CurrencyInfo>,
    pub usage_frequencies: Vec<UsageFrequency>,
}

impl Catalog {
    /// Build the catalog from the compiled-in tables
    pub fn builtin() -> Self {
        Catalog {
            unit_systems: UnitSystem::ALL.into_iter().map(UnitSystemInfo::from).collect(),
            sensor_formats: SENSOR_FORMATS.to_vec(),
            aperture_presets: APERTURE_PRESETS.to_vec(),
            focal_length_presets: FOCAL_LENGTH_PRESETS.to_vec(),
            quality_tiers: QUALITY_TIERS.to_vec(),
            print_media: PRINT_MEDIA.to_vec(),
            common_print_sizes: COMMON_PRINT_SIZES.to_vec(),
            camera_resolutions: CAMERA_RESOLUTIONS.to_vec(),
            upsampling_guidelines: UPSAMPLING_GUIDELINES.to_vec(),
            quality_thresholds: QUALITY_THRESHOLDS,
            currencies: Currency::ALL.into_iter().map(CurrencyInfo::from).collect(),
            usage_frequencies: USAGE_FREQUENCIES.to_vec(),
        }
    }

    /// Look up a quality tier by key.
    ///
    /// Keys are matched ignoring ASCII case and surrounding whitespace, like
    /// [`UnitSystem::from_key`] and [`Currency::from_code`].
    pub fn quality_tier(&self, key: &str) -> CalcResult<&QualityTier> {
        self.quality_tiers
            .iter()
            .find(|t| t.key.eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| CalcError::unknown_option("quality tier", key.trim()))
    }

    /// Look up a print medium by key
    pub fn print_medium(&self, key: &str) -> CalcResult<&PrintMedium> {
        self.print_media
            .iter()
            .find(|m| m.key.eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| CalcError::unknown_option("print medium", key.trim()))
    }

    /// Look up a sensor format by key
    pub fn sensor_format(&self, key: &str) -> CalcResult<&SensorFormat> {
        self.sensor_formats
            .iter()
            .find(|s| s.key.eq_ignore_ascii_case(key.trim()))
            .ok_or_else(|| CalcError::unknown_option("sensor format", key.trim()))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

//! # Print Size Calculation
//!
//! Relates image resolution to physical print size for a quality tier and
//! print medium.
//!
//! ## Formulas
//!
//! - Effective PPI: `tier.base_ppi × medium.ppi_multiplier`
//! - Largest print: `pixels / effective_ppi` (per dimension)
//! - Required resolution: `round(inches × effective_ppi)` (per dimension)
//! - Quality ratio: `min(w_px / w_in, h_px / h_in) / effective_ppi`; the
//!   limiting dimension governs
//! - Viewing distance: larger of `(300 / actual_ppi) × 24` and
//!   `1.5 × print diagonal`
//!
//! ## Example
//!
//! ```rust
//! use photo_core::calculations::print_size::compute_max_print_size;
//! use photo_core::catalog::catalog;
//!
//! let tier = catalog().quality_tier("standard").unwrap();
//! let medium = catalog().print_medium("photo_paper").unwrap();
//!
//! let result = compute_max_print_size(6000, 4000, tier, medium).unwrap();
//! assert_eq!(result.max_width_in, 25.0);
//! assert!((result.max_height_in - 16.67).abs() < 0.01);
//! assert_eq!(result.megapixels, 24.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::print::{BASELINE_PPI, BASELINE_VIEWING_DISTANCE_IN};
use crate::catalog::{CameraResolution, Catalog, PrintMedium, QualityThresholds, QualityTier, QUALITY_THRESHOLDS};
use crate::errors::{CalcError, CalcResult};
use crate::format::round_to;
use crate::units::{Feet, Inches};

/// Accepted image dimensions (pixels)
pub const PIXEL_RANGE: (f64, f64) = (100.0, 50_000.0);

/// Accepted print dimensions (inches)
pub const PRINT_INCH_RANGE: (f64, f64) = (1.0, 100.0);

/// Camera suggestions returned for a required resolution
pub const MAX_CAMERA_RECOMMENDATIONS: usize = 5;

/// Viewing distance multiple of the print diagonal
const DIAGONAL_VIEWING_FACTOR: f64 = 1.5;

/// Check an image dimension against [`PIXEL_RANGE`]
pub fn check_pixels(field: &str, label: &str, value: f64) -> Option<CalcError> {
    super::check_range(
        field,
        label,
        value,
        PIXEL_RANGE,
        &format!("{} must be between 100 and 50,000 pixels", label),
    )
}

/// Check a print dimension against [`PRINT_INCH_RANGE`]
pub fn check_print_inches(field: &str, label: &str, value: f64) -> Option<CalcError> {
    super::check_range(
        field,
        label,
        value,
        PRINT_INCH_RANGE,
        &format!("{} must be between 1 and 100 inches", label),
    )
}

fn validate_image(width_px: u32, height_px: u32) -> CalcResult<()> {
    let errors = [
        check_pixels("width_pixels", "Image width", f64::from(width_px)),
        check_pixels("height_pixels", "Image height", f64::from(height_px)),
    ];
    collect(errors)
}

fn validate_print(width_in: f64, height_in: f64) -> CalcResult<()> {
    let errors = [
        check_print_inches("print_width", "Print width", width_in),
        check_print_inches("print_height", "Print height", height_in),
    ];
    collect(errors)
}

fn collect<const N: usize>(errors: [Option<CalcError>; N]) -> CalcResult<()> {
    match CalcError::from_many(errors.into_iter().flatten().collect()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Megapixels rounded to one decimal, as printed on camera spec sheets
fn megapixels(width_px: u32, height_px: u32) -> f64 {
    round_to(f64::from(width_px) * f64::from(height_px) / 1_000_000.0, 1)
}

/// Target PPI for a tier printed on a medium
pub fn effective_ppi(tier: &QualityTier, medium: &PrintMedium) -> f64 {
    tier.base_ppi * medium.ppi_multiplier
}

// ============================================================================
// Maximum print size
// ============================================================================

/// Largest print an image supports at a tier and medium.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintSizeResult {
    pub max_width_in: f64,
    pub max_height_in: f64,
    pub effective_ppi: f64,
    /// Image size in megapixels (one decimal)
    pub megapixels: f64,
    pub quality_tier: String,
    pub print_medium: String,
}

/// Calculate the largest print an image supports.
pub fn compute_max_print_size(
    width_px: u32,
    height_px: u32,
    tier: &QualityTier,
    medium: &PrintMedium,
) -> CalcResult<PrintSizeResult> {
    validate_image(width_px, height_px)?;

    let ppi = effective_ppi(tier, medium);
    Ok(PrintSizeResult {
        max_width_in: f64::from(width_px) / ppi,
        max_height_in: f64::from(height_px) / ppi,
        effective_ppi: ppi,
        megapixels: megapixels(width_px, height_px),
        quality_tier: tier.key.to_string(),
        print_medium: medium.key.to_string(),
    })
}

// ============================================================================
// Required resolution
// ============================================================================

/// Pixels needed for a target print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredResolution {
    pub required_width_px: u32,
    pub required_height_px: u32,
    pub required_megapixels: f64,
    pub effective_ppi: f64,
    pub target_width_in: f64,
    pub target_height_in: f64,
    pub quality_tier: String,
    pub print_medium: String,
}

/// Calculate the resolution a print of the given size needs.
pub fn compute_required_resolution(
    target_width_in: f64,
    target_height_in: f64,
    tier: &QualityTier,
    medium: &PrintMedium,
) -> CalcResult<RequiredResolution> {
    validate_print(target_width_in, target_height_in)?;

    let ppi = effective_ppi(tier, medium);
    let required_width_px = (target_width_in * ppi).round() as u32;
    let required_height_px = (target_height_in * ppi).round() as u32;

    Ok(RequiredResolution {
        required_width_px,
        required_height_px,
        required_megapixels: megapixels(required_width_px, required_height_px),
        effective_ppi: ppi,
        target_width_in,
        target_height_in,
        quality_tier: tier.key.to_string(),
        print_medium: medium.key.to_string(),
    })
}

/// A camera that meets a resolution requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRecommendation {
    pub megapixels: f64,
    pub width_px: u32,
    pub height_px: u32,
    pub description: String,
    /// Megapixels to spare (one decimal)
    pub excess_resolution: f64,
}

/// The smallest cameras (up to five) that reach `required_megapixels`.
///
/// `cameras` must be sorted by ascending megapixels.
pub fn camera_recommendations(required_megapixels: f64, cameras: &[CameraResolution]) -> Vec<CameraRecommendation> {
    cameras
        .iter()
        .filter(|c| c.megapixels >= required_megapixels)
        .take(MAX_CAMERA_RECOMMENDATIONS)
        .map(|c| CameraRecommendation {
            megapixels: c.megapixels,
            width_px: c.width_px,
            height_px: c.height_px,
            description: c.description.to_string(),
            excess_resolution: round_to(c.megapixels - required_megapixels, 1),
        })
        .collect()
}

/// Required resolution together with cameras that deliver it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredResolutionReport {
    pub required_resolution: RequiredResolution,
    pub camera_recommendations: Vec<CameraRecommendation>,
}

impl RequiredResolutionReport {
    pub fn build(
        target_width_in: f64,
        target_height_in: f64,
        tier: &QualityTier,
        medium: &PrintMedium,
        catalog: &Catalog,
    ) -> CalcResult<Self> {
        let required_resolution = compute_required_resolution(target_width_in, target_height_in, tier, medium)?;
        let camera_recommendations =
            camera_recommendations(required_resolution.required_megapixels, &catalog.camera_resolutions);
        Ok(RequiredResolutionReport {
            required_resolution,
            camera_recommendations,
        })
    }
}

// ============================================================================
// Quality assessment
// ============================================================================

/// Quality bucket for an actual/target PPI ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl QualityLevel {
    /// Bucket a ratio; each threshold is inclusive at its lower bound.
    pub fn from_ratio(ratio: f64, thresholds: &QualityThresholds) -> Self {
        if ratio >= thresholds.excellent {
            QualityLevel::Excellent
        } else if ratio >= thresholds.good {
            QualityLevel::Good
        } else if ratio >= thresholds.acceptable {
            QualityLevel::Acceptable
        } else {
            QualityLevel::Poor
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Excellent",
            QualityLevel::Good => "Good",
            QualityLevel::Acceptable => "Acceptable",
            QualityLevel::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How an image holds up at a given print size.
///
/// ## JSON Example
///
/// ```json
/// {
///   "actual_ppi": 200.0,
///   "target_ppi": 240.0,
///   "quality_ratio": 0.8333,
///   "quality_level": "good",
///   "quality_percentage": 83.3,
///   "upsampling_needed": true,
///   "upsampling_factor": 1.2
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// PPI delivered by the limiting dimension (one decimal)
    pub actual_ppi: f64,
    /// PPI the tier and medium call for (one decimal)
    pub target_ppi: f64,
    pub quality_ratio: f64,
    pub quality_level: QualityLevel,
    pub quality_percentage: f64,
    pub upsampling_needed: bool,
    /// Enlargement needed to reach the target (two decimals), 1.0 if none
    pub upsampling_factor: f64,
}

/// Assess print quality for an image printed at a given size.
pub fn assess_quality(
    image_width_px: u32,
    image_height_px: u32,
    print_width_in: f64,
    print_height_in: f64,
    tier: &QualityTier,
    medium: &PrintMedium,
) -> CalcResult<QualityAssessment> {
    collect([
        check_pixels("image_width", "Image width", f64::from(image_width_px)),
        check_pixels("image_height", "Image height", f64::from(image_height_px)),
        check_print_inches("print_width", "Print width", print_width_in),
        check_print_inches("print_height", "Print height", print_height_in),
    ])?;
    Ok(assess_unchecked(
        image_width_px,
        image_height_px,
        print_width_in,
        print_height_in,
        effective_ppi(tier, medium),
    ))
}

fn assess_unchecked(
    image_width_px: u32,
    image_height_px: u32,
    print_width_in: f64,
    print_height_in: f64,
    target_ppi: f64,
) -> QualityAssessment {
    let ppi_w = f64::from(image_width_px) / print_width_in;
    let ppi_h = f64::from(image_height_px) / print_height_in;
    let actual_ppi = ppi_w.min(ppi_h);

    let quality_ratio = actual_ppi / target_ppi;
    let upsampling_needed = quality_ratio < 1.0;

    QualityAssessment {
        actual_ppi: round_to(actual_ppi, 1),
        target_ppi: round_to(target_ppi, 1),
        quality_ratio,
        quality_level: QualityLevel::from_ratio(quality_ratio, &QUALITY_THRESHOLDS),
        quality_percentage: round_to(quality_ratio * 100.0, 1),
        upsampling_needed,
        upsampling_factor: if upsampling_needed {
            round_to(1.0 / quality_ratio, 2)
        } else {
            1.0
        },
    }
}

/// Recommended viewing distances for a print.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewingDistance {
    pub optimal_distance_in: f64,
    pub optimal_distance_ft: f64,
    pub diagonal_based_distance_in: f64,
    pub diagonal_based_distance_ft: f64,
    pub recommended_distance_in: f64,
    pub recommended_distance_ft: f64,
}

/// Calculate how far from a print a viewer should stand.
///
/// `actual_ppi` must be positive.
pub fn viewing_distance(print_width_in: f64, print_height_in: f64, actual_ppi: f64) -> ViewingDistance {
    let optimal = Inches((BASELINE_PPI / actual_ppi) * BASELINE_VIEWING_DISTANCE_IN);
    let diagonal = Inches(print_width_in.hypot(print_height_in) * DIAGONAL_VIEWING_FACTOR);
    let recommended = if optimal.0 >= diagonal.0 { optimal } else { diagonal };

    let ft = |inches: Inches| round_to(Feet::from(inches).value(), 1);
    ViewingDistance {
        optimal_distance_in: round_to(optimal.value(), 1),
        optimal_distance_ft: ft(optimal),
        diagonal_based_distance_in: round_to(diagonal.value(), 1),
        diagonal_based_distance_ft: ft(diagonal),
        recommended_distance_in: round_to(recommended.value(), 1),
        recommended_distance_ft: ft(recommended),
    }
}

/// Quality assessment together with viewing distances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    pub quality_assessment: QualityAssessment,
    pub viewing_distance: ViewingDistance,
}

impl QualityReport {
    pub fn build(
        image_width_px: u32,
        image_height_px: u32,
        print_width_in: f64,
        print_height_in: f64,
        tier: &QualityTier,
        medium: &PrintMedium,
    ) -> CalcResult<Self> {
        let quality_assessment =
            assess_quality(image_width_px, image_height_px, print_width_in, print_height_in, tier, medium)?;
        let viewing_distance = viewing_distance(print_width_in, print_height_in, quality_assessment.actual_ppi);
        Ok(QualityReport {
            quality_assessment,
            viewing_distance,
        })
    }
}

// ============================================================================
// Recommendations across tiers
// ============================================================================

/// A standard print size that fits within an image's maximum print
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitableSize {
    pub size_key: String,
    pub width_in: f64,
    pub height_in: f64,
    pub description: String,
    pub quality: QualityAssessment,
}

/// Maximum size and fitting standard sizes for one quality tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierRecommendation {
    pub tier_info: QualityTier,
    pub max_size: PrintSizeResult,
    pub suitable_common_sizes: Vec<SuitableSize>,
}

/// Max print size and fitting standard sizes for every tier in the catalog.
///
/// Standard sizes are compared in their listed orientation (width against
/// width, height against height).
pub fn all_quality_recommendations(
    width_px: u32,
    height_px: u32,
    medium: &PrintMedium,
    catalog: &Catalog,
) -> CalcResult<Vec<TierRecommendation>> {
    validate_image(width_px, height_px)?;

    catalog
        .quality_tiers
        .iter()
        .map(|tier| -> CalcResult<TierRecommendation> {
            let max_size = compute_max_print_size(width_px, height_px, tier, medium)?;
            let target_ppi = effective_ppi(tier, medium);

            let suitable_common_sizes = catalog
                .common_print_sizes
                .iter()
                .filter(|s| s.width_in <= max_size.max_width_in && s.height_in <= max_size.max_height_in)
                .map(|s| SuitableSize {
                    size_key: s.key.to_string(),
                    width_in: s.width_in,
                    height_in: s.height_in,
                    description: s.description.to_string(),
                    quality: assess_unchecked(width_px, height_px, s.width_in, s.height_in, target_ppi),
                })
                .collect();

            Ok(TierRecommendation {
                tier_info: *tier,
                max_size,
                suitable_common_sizes,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    fn tier(key: &str) -> &'static QualityTier {
        catalog().quality_tier(key).unwrap()
    }

    fn medium(key: &str) -> &'static PrintMedium {
        catalog().print_medium(key).unwrap()
    }

    #[test]
    fn test_effective_ppi() {
        assert_eq!(effective_ppi(tier("standard"), medium("photo_paper")), 240.0);
        assert!((effective_ppi(tier("gallery"), medium("canvas")) - 210.0).abs() < 1e-9);
        assert!((effective_ppi(tier("casual"), medium("fine_art")) - 216.0).abs() < 1e-9);
    }

    #[test]
    fn test_max_print_size_24mp() {
        let r = compute_max_print_size(6000, 4000, tier("standard"), medium("photo_paper")).unwrap();
        assert_eq!(r.max_width_in, 25.0);
        assert!((r.max_height_in - 16.67).abs() < 0.01);
        assert_eq!(r.effective_ppi, 240.0);
        assert_eq!(r.megapixels, 24.0);
        assert_eq!(r.quality_tier, "standard");
        assert_eq!(r.print_medium, "photo_paper");
    }

    #[test]
    fn test_required_resolution_inverts_max_print() {
        let cases = [
            (6000, 4000, "standard", "photo_paper"),
            (4928, 3264, "gallery", "fine_art"),
            (5472, 3648, "casual", "canvas"),
            (8688, 5792, "large_format", "metal"),
        ];
        for (w, h, t, m) in cases {
            let max = compute_max_print_size(w, h, tier(t), medium(m)).unwrap();
            let req = compute_required_resolution(max.max_width_in, max.max_height_in, tier(t), medium(m)).unwrap();
            assert_eq!((req.required_width_px, req.required_height_px), (w, h), "{t}/{m}");
        }
    }

    #[test]
    fn test_required_resolution_8x10_gallery() {
        let r = compute_required_resolution(8.0, 10.0, tier("gallery"), medium("photo_paper")).unwrap();
        assert_eq!(r.required_width_px, 2400);
        assert_eq!(r.required_height_px, 3000);
        assert_eq!(r.required_megapixels, 7.2);
    }

    #[test]
    fn test_quality_levels_inclusive_lower_bound() {
        let t = &QUALITY_THRESHOLDS;
        assert_eq!(QualityLevel::from_ratio(1.0, t), QualityLevel::Excellent);
        assert_eq!(QualityLevel::from_ratio(0.8, t), QualityLevel::Good);
        assert_eq!(QualityLevel::from_ratio(0.6, t), QualityLevel::Acceptable);
        assert_eq!(QualityLevel::from_ratio(0.5999, t), QualityLevel::Poor);
        assert_eq!(QualityLevel::from_ratio(2.5, t), QualityLevel::Excellent);
    }

    #[test]
    fn test_assess_limiting_dimension() {
        // 6000/20 = 300 PPI across, 4000/20 = 200 PPI down: height limits
        let a = assess_quality(6000, 4000, 20.0, 20.0, tier("standard"), medium("photo_paper")).unwrap();
        assert_eq!(a.actual_ppi, 200.0);
        assert_eq!(a.target_ppi, 240.0);
        assert_eq!(a.quality_level, QualityLevel::Good);
        assert_eq!(a.quality_percentage, 83.3);
        assert!(a.upsampling_needed);
        assert_eq!(a.upsampling_factor, 1.2);
    }

    #[test]
    fn test_assess_excellent_needs_no_upsampling() {
        let a = assess_quality(6000, 4000, 8.0, 10.0, tier("standard"), medium("photo_paper")).unwrap();
        assert_eq!(a.quality_level, QualityLevel::Excellent);
        assert!(!a.upsampling_needed);
        assert_eq!(a.upsampling_factor, 1.0);
    }

    #[test]
    fn test_viewing_distance() {
        // 300 PPI → 24"; diagonal of 8x10 is 12.8" × 1.5 = 19.2"
        let v = viewing_distance(8.0, 10.0, 300.0);
        assert_eq!(v.optimal_distance_in, 24.0);
        assert_eq!(v.optimal_distance_ft, 2.0);
        assert_eq!(v.diagonal_based_distance_in, 19.2);
        assert_eq!(v.recommended_distance_in, 24.0);

        // Big print: diagonal governs. 30x40 → 50" × 1.5 = 75"
        let v = viewing_distance(30.0, 40.0, 200.0);
        assert_eq!(v.optimal_distance_in, 36.0);
        assert_eq!(v.recommended_distance_in, 75.0);
        assert_eq!(v.recommended_distance_ft, 6.3);
    }

    #[test]
    fn test_camera_recommendations() {
        let cams = &catalog().camera_resolutions;
        let recs = camera_recommendations(22.5, cams);
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0].megapixels, 24.0);
        assert_eq!(recs[0].excess_resolution, 1.5);
        assert_eq!(recs[4].megapixels, 50.0);

        assert_eq!(camera_recommendations(80.0, cams).len(), 1);
        assert!(camera_recommendations(150.0, cams).is_empty());
    }

    #[test]
    fn test_all_quality_recommendations() {
        let recs = all_quality_recommendations(6000, 4000, medium("photo_paper"), catalog()).unwrap();
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0].tier_info.key, "gallery");

        // Gallery: 20" x 13.3" max; 8x10 fits, 11x14 does not (height 14 > 13.3)
        let gallery: Vec<&str> = recs[0].suitable_common_sizes.iter().map(|s| s.size_key.as_str()).collect();
        assert!(gallery.contains(&"8x10"));
        assert!(!gallery.contains(&"11x14"));

        // Lower tiers allow at least as many sizes
        for pair in recs.windows(2) {
            assert!(pair[1].suitable_common_sizes.len() >= pair[0].suitable_common_sizes.len());
        }
        for size in &recs[1].suitable_common_sizes {
            assert!(size.quality.quality_ratio >= 1.0);
        }
    }

    #[test]
    fn test_validation_bounds() {
        let t = tier("standard");
        let m = medium("photo_paper");

        let err = compute_max_print_size(50, 4000, t, m).unwrap_err();
        assert_eq!(err.user_message(), "Image width must be between 100 and 50,000 pixels");

        let err = compute_max_print_size(0, 0, t, m).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Image width must be a positive number, Image height must be a positive number"
        );

        let err = compute_required_resolution(0.5, 10.0, t, m).unwrap_err();
        assert_eq!(err.user_message(), "Print width must be between 1 and 100 inches");

        assert!(assess_quality(6000, 4000, 8.0, 101.0, t, m).is_err());
        assert!(compute_max_print_size(50_000, 100, t, m).is_ok());
    }

    #[test]
    fn test_assess_reports_every_bad_dimension() {
        let err = assess_quality(60_000, 4000, 0.5, 101.0, tier("standard"), medium("photo_paper")).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_FAILED");
        assert_eq!(
            err.user_message(),
            "Image width must be between 100 and 50,000 pixels, Print width must be between 1 and 100 inches, \
             Print height must be between 1 and 100 inches"
        );
    }

    #[test]
    fn test_quality_level_serialization() {
        assert_eq!(serde_json::to_string(&QualityLevel::Acceptable).unwrap(), "\"acceptable\"");
    }
}

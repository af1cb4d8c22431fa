//! Print Quality Tables
//!
//! Quality tiers (target PPI by viewing scenario), print media adjustments,
//! standard print sizes and reference camera resolutions.
//!
//! Effective PPI for a job is `tier.base_ppi * medium.ppi_multiplier`:
//! textured media such as canvas hide detail and need fewer pixels, while
//! metal and fine-art papers reward extra resolution.

use serde::Serialize;

/// Baseline PPI that looks sharp at the baseline viewing distance
pub const BASELINE_PPI: f64 = 300.0;

/// Viewing distance (inches) at which [`BASELINE_PPI`] is required
pub const BASELINE_VIEWING_DISTANCE_IN: f64 = 24.0;

/// A print quality tier with its target resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityTier {
    pub key: &'static str,
    pub name: &'static str,
    /// Target resolution on photo paper (PPI)
    pub base_ppi: f64,
    /// Typical viewing distance (inches)
    pub viewing_distance_in: f64,
    pub description: &'static str,
    pub scenarios: &'static [&'static str],
    /// UI accent colour
    pub color: &'static str,
}

impl QualityTier {
    /// PPI needed to look sharp at this tier's viewing distance
    pub fn optimal_ppi(&self) -> f64 {
        optimal_ppi_for_viewing_distance(self.viewing_distance_in)
    }
}

/// PPI = 300 × (24 / viewing distance), rounded to a whole number
pub fn optimal_ppi_for_viewing_distance(viewing_distance_in: f64) -> f64 {
    (BASELINE_PPI * (BASELINE_VIEWING_DISTANCE_IN / viewing_distance_in)).round()
}

pub const QUALITY_TIERS: [QualityTier; 4] = [
    QualityTier {
        key: "gallery",
        name: "Gallery/Fine Art",
        base_ppi: 300.0,
        viewing_distance_in: 18.0,
        description: "Museum quality prints for close inspection and critical viewing",
        scenarios: &["Art galleries", "Exhibitions", "Fine art sales", "Portfolio prints"],
        color: "#2ecc71",
    },
    QualityTier {
        key: "standard",
        name: "Standard Photo",
        base_ppi: 240.0,
        viewing_distance_in: 24.0,
        description: "High quality prints for normal viewing distances",
        scenarios: &["Family photos", "Client portraits", "Photo books", "Home display"],
        color: "#3498db",
    },
    QualityTier {
        key: "casual",
        name: "Casual/Family",
        base_ppi: 180.0,
        viewing_distance_in: 36.0,
        description: "Good quality for everyday viewing and sharing",
        scenarios: &["Social sharing", "Gifts", "Everyday prints", "Photo albums"],
        color: "#f39c12",
    },
    QualityTier {
        key: "large_format",
        name: "Large Format",
        base_ppi: 120.0,
        viewing_distance_in: 72.0,
        description: "Wall displays and large format prints viewed from distance",
        scenarios: &["Wall art", "Large displays", "Trade shows", "Office decoration"],
        color: "#9b59b6",
    },
];

/// A print medium and how it scales the tier's target PPI
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrintMedium {
    pub key: &'static str,
    pub name: &'static str,
    pub ppi_multiplier: f64,
    pub description: &'static str,
    /// Sweet-spot PPI range (low, high)
    pub optimal_ppi: (f64, f64),
}

pub const PRINT_MEDIA: [PrintMedium; 5] = [
    PrintMedium {
        key: "photo_paper",
        name: "Photo Paper (Glossy/Matte)",
        ppi_multiplier: 1.0,
        description: "Standard photo paper - sharp detail reproduction",
        optimal_ppi: (240.0, 300.0),
    },
    PrintMedium {
        key: "canvas",
        name: "Canvas",
        ppi_multiplier: 0.7,
        description: "Textured surface masks lower resolution",
        optimal_ppi: (150.0, 200.0),
    },
    PrintMedium {
        key: "metal",
        name: "Metal Prints",
        ppi_multiplier: 1.1,
        description: "Ultra-sharp medium, benefits from higher resolution",
        optimal_ppi: (240.0, 320.0),
    },
    PrintMedium {
        key: "fine_art",
        name: "Fine Art Paper",
        ppi_multiplier: 1.2,
        description: "Premium papers for gallery-quality reproduction",
        optimal_ppi: (300.0, 360.0),
    },
    PrintMedium {
        key: "acrylic",
        name: "Acrylic/Plexiglass",
        ppi_multiplier: 1.0,
        description: "Sharp, vibrant prints behind acrylic",
        optimal_ppi: (240.0, 300.0),
    },
];

/// A standard print size (inches)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommonPrintSize {
    pub key: &'static str,
    pub width_in: f64,
    pub height_in: f64,
    pub description: &'static str,
}

const fn size(key: &'static str, width_in: f64, height_in: f64, description: &'static str) -> CommonPrintSize {
    CommonPrintSize {
        key,
        width_in,
        height_in,
        description,
    }
}

pub const COMMON_PRINT_SIZES: [CommonPrintSize; 23] = [
    // Standard photo sizes
    size("4x6", 4.0, 6.0, "Standard Photo"),
    size("5x7", 5.0, 7.0, "Standard Photo"),
    size("8x10", 8.0, 10.0, "Standard Photo"),
    size("8x12", 8.0, 12.0, "Standard Photo"),
    size("11x14", 11.0, 14.0, "Large Photo"),
    size("12x18", 12.0, 18.0, "Large Photo"),
    size("16x20", 16.0, 20.0, "Wall Display"),
    size("16x24", 16.0, 24.0, "Wall Display"),
    size("20x30", 20.0, 30.0, "Large Display"),
    size("24x36", 24.0, 36.0, "Poster Size"),
    // A-series (approximate inches)
    size("A6", 4.1, 5.8, "A6 (105×148mm)"),
    size("A5", 5.8, 8.3, "A5 (148×210mm)"),
    size("A4", 8.3, 11.7, "A4 (210×297mm)"),
    size("A3", 11.7, 16.5, "A3 (297×420mm)"),
    size("A2", 16.5, 23.4, "A2 (420×594mm)"),
    size("A1", 23.4, 33.1, "A1 (594×841mm)"),
    // Square
    size("8x8", 8.0, 8.0, "Square Photo"),
    size("12x12", 12.0, 12.0, "Square Display"),
    size("16x16", 16.0, 16.0, "Square Wall Art"),
    size("20x20", 20.0, 20.0, "Large Square"),
    // Panoramic
    size("10x30", 10.0, 30.0, "Panoramic"),
    size("12x36", 12.0, 36.0, "Wide Panoramic"),
    size("16x48", 16.0, 48.0, "Ultra Wide"),
];

/// A representative camera resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraResolution {
    pub megapixels: f64,
    pub width_px: u32,
    pub height_px: u32,
    pub description: &'static str,
}

/// Ascending by megapixels
pub const CAMERA_RESOLUTIONS: [CameraResolution; 10] = [
    CameraResolution { megapixels: 12.0, width_px: 4000, height_px: 3000, description: "Entry DSLR/Mirrorless" },
    CameraResolution { megapixels: 16.0, width_px: 4928, height_px: 3264, description: "Mid-range Camera" },
    CameraResolution { megapixels: 20.0, width_px: 5472, height_px: 3648, description: "Advanced Camera" },
    CameraResolution { megapixels: 24.0, width_px: 6000, height_px: 4000, description: "Full Frame Standard" },
    CameraResolution { megapixels: 30.0, width_px: 6720, height_px: 4480, description: "High Resolution" },
    CameraResolution { megapixels: 36.0, width_px: 7360, height_px: 4912, description: "High-end Full Frame" },
    CameraResolution { megapixels: 42.0, width_px: 7952, height_px: 5304, description: "Medium Format Entry" },
    CameraResolution { megapixels: 50.0, width_px: 8688, height_px: 5792, description: "High Resolution" },
    CameraResolution { megapixels: 61.0, width_px: 9504, height_px: 6336, description: "Ultra High Resolution" },
    CameraResolution { megapixels: 100.0, width_px: 12000, height_px: 8000, description: "Medium Format Pro" },
];

/// How far an image can be upsampled for a given use
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpsamplingGuideline {
    pub key: &'static str,
    pub max_percentage: u32,
    pub description: &'static str,
    pub recommended_for: &'static str,
}

pub const UPSAMPLING_GUIDELINES: [UpsamplingGuideline; 3] = [
    UpsamplingGuideline {
        key: "conservative",
        max_percentage: 150,
        description: "Safe upsampling with minimal quality loss",
        recommended_for: "Critical applications, gallery prints",
    },
    UpsamplingGuideline {
        key: "moderate",
        max_percentage: 200,
        description: "Good balance of size increase and quality",
        recommended_for: "Most photography applications",
    },
    UpsamplingGuideline {
        key: "aggressive",
        max_percentage: 300,
        description: "Maximum upsampling for specific scenarios",
        recommended_for: "Canvas prints, large viewing distances",
    },
];

/// Quality ratio (actual / target PPI) lower bounds for each level
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QualityThresholds {
    pub excellent: f64,
    pub good: f64,
    pub acceptable: f64,
}

pub const QUALITY_THRESHOLDS: QualityThresholds = QualityThresholds {
    excellent: 1.0,
    good: 0.8,
    acceptable: 0.6,
};

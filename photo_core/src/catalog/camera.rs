//! Camera presets for the depth-of-field calculator.
//!
//! Circle of confusion values follow the common d/1500 convention for each
//! sensor diagonal.

use serde::Serialize;

/// A sensor format with its conventional circle of confusion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorFormat {
    /// Form key (e.g., "full_frame")
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Sensor width (mm)
    pub width_mm: f64,
    /// Sensor height (mm)
    pub height_mm: f64,
    /// Circle of confusion (mm)
    pub coc_mm: f64,
}

pub const SENSOR_FORMATS: [SensorFormat; 8] = [
    SensorFormat {
        key: "full_frame",
        name: "Full Frame (35mm)",
        width_mm: 36.0,
        height_mm: 24.0,
        coc_mm: 0.029,
    },
    SensorFormat {
        key: "aps_c_canon",
        name: "APS-C Canon",
        width_mm: 22.3,
        height_mm: 14.9,
        coc_mm: 0.019,
    },
    SensorFormat {
        key: "aps_c_nikon",
        name: "APS-C Nikon/Sony",
        width_mm: 23.5,
        height_mm: 15.6,
        coc_mm: 0.020,
    },
    SensorFormat {
        key: "micro_43",
        name: "Micro Four Thirds",
        width_mm: 17.3,
        height_mm: 13.0,
        coc_mm: 0.015,
    },
    SensorFormat {
        key: "fuji_gfx",
        name: "Fujifilm GFX (Medium Format)",
        width_mm: 43.8,
        height_mm: 32.9,
        coc_mm: 0.037,
    },
    SensorFormat {
        key: "hasselblad_x",
        name: "Hasselblad X System",
        width_mm: 43.8,
        height_mm: 32.9,
        coc_mm: 0.037,
    },
    SensorFormat {
        key: "hasselblad_h",
        name: "Hasselblad H System",
        width_mm: 53.4,
        height_mm: 40.0,
        coc_mm: 0.045,
    },
    SensorFormat {
        key: "large_format_4x5",
        name: "4x5 Large Format",
        width_mm: 102.0,
        height_mm: 127.0,
        coc_mm: 0.146,
    },
];

/// Common full-stop apertures (f-numbers)
pub const APERTURE_PRESETS: [f64; 11] = [1.4, 1.8, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0, 32.0];

/// Common focal lengths (mm)
pub const FOCAL_LENGTH_PRESETS: [f64; 15] = [
    14.0, 16.0, 20.0, 24.0, 28.0, 35.0, 50.0, 85.0, 100.0, 135.0, 200.0, 300.0, 400.0, 500.0, 600.0,
];

impl SensorFormat {
    /// Sensor diagonal (mm)
    pub fn diagonal_mm(&self) -> f64 {
        self.width_mm.hypot(self.height_mm)
    }
}

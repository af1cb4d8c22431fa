//! # Depth of Field Calculation
//!
//! Computes the hyperfocal distance, the near and far limits of acceptable
//! sharpness, and the depth of field in front of, behind and around the
//! subject.
//!
//! ## Formulas
//!
//! All optics arithmetic is done in millimetres:
//!
//! - Hyperfocal: `H = f² / (N·c) + f`
//! - Near limit: `Dn = H·d / (H + d − f)`
//! - Far limit: `Df = H·d / (H − d + f)`, infinite once `d ≥ H − f`
//!
//! Results are returned in metres; use [`DofResult::in_units`] to present
//! them in another unit system. Infinite distances stay infinite through
//! any conversion.
//!
//! ## Example
//!
//! ```rust
//! use photo_core::calculations::dof::compute_dof;
//! use photo_core::units::{Distance, UnitSystem};
//!
//! // 50mm at f/8 focused at 2m on full frame
//! let result = compute_dof(50.0, 8.0, 2.0, 0.029).unwrap();
//! assert!((result.hyperfocal_distance - 10.83).abs() < 0.01);
//! assert!(!result.far_distance.is_infinite());
//!
//! // 50mm at f/16 focused at 10m: everything to infinity is sharp
//! let deep = compute_dof(50.0, 16.0, 10.0, 0.029).unwrap();
//! assert_eq!(deep.far_distance, Distance::Infinite);
//!
//! let feet = result.in_units(UnitSystem::Imperial);
//! assert_eq!(feet.unit, UnitSystem::Imperial);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::check_range;
use crate::errors::{CalcError, CalcResult};
use crate::format::format_distance;
use crate::units::{Distance, Meters, Millimeters, UnitSystem};

/// Accepted focal lengths (mm)
pub const FOCAL_LENGTH_RANGE_MM: (f64, f64) = (1.0, 2000.0);

/// Accepted f-numbers
pub const APERTURE_RANGE: (f64, f64) = (0.5, 64.0);

/// Accepted subject distances (m)
pub const SUBJECT_DISTANCE_RANGE_M: (f64, f64) = (0.01, 10000.0);

/// Accepted circles of confusion (mm)
pub const COC_RANGE_MM: (f64, f64) = (0.001, 1.0);

/// Lens and focus parameters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "focal_length_mm": 50.0,
///   "aperture": 8.0,
///   "subject_distance_m": 2.0,
///   "coc_mm": 0.029
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DofInput {
    /// Lens focal length (mm)
    pub focal_length_mm: f64,

    /// Aperture as an f-number (f/2.8 → 2.8)
    pub aperture: f64,

    /// Focus distance to the subject (m)
    pub subject_distance_m: f64,

    /// Circle of confusion (mm), see the sensor presets in the catalog
    pub coc_mm: f64,
}

impl DofInput {
    pub fn new(focal_length_mm: f64, aperture: f64, subject_distance_m: f64, coc_mm: f64) -> Self {
        DofInput {
            focal_length_mm,
            aperture,
            subject_distance_m,
            coc_mm,
        }
    }

    /// Validate input parameters.
    ///
    /// Every offending field is reported, not only the first.
    pub fn validate(&self) -> CalcResult<()> {
        let errors: Vec<CalcError> = [
            check_range(
                "focal_length",
                "Focal length",
                self.focal_length_mm,
                FOCAL_LENGTH_RANGE_MM,
                "Focal length must be between 1mm and 2000mm",
            ),
            check_range(
                "aperture",
                "Aperture",
                self.aperture,
                APERTURE_RANGE,
                "Aperture must be between f/0.5 and f/64",
            ),
            check_range(
                "distance",
                "Distance",
                self.subject_distance_m,
                SUBJECT_DISTANCE_RANGE_M,
                "Distance must be between 0.01m and 10000m",
            ),
            check_range(
                "coc",
                "Circle of confusion",
                self.coc_mm,
                COC_RANGE_MM,
                "Circle of confusion must be between 0.001mm and 1mm",
            ),
        ]
        .into_iter()
        .flatten()
        .collect();

        match CalcError::from_many(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Hyperfocal distance in millimetres
    pub fn hyperfocal_mm(&self) -> f64 {
        hyperfocal_mm(self.focal_length_mm, self.aperture, self.coc_mm)
    }
}

/// Depth of field results.
///
/// Every distance is expressed in `unit`. Far limit and the depth behind
/// the subject are [`Distance::Infinite`] when focused at or past the
/// hyperfocal distance.
///
/// ## JSON Example
///
/// ```json
/// {
///   "near_distance": 1.69,
///   "far_distance": "infinity",
///   "hyperfocal_distance": 1.75,
///   "dof_front": 0.31,
///   "dof_behind": "infinity",
///   "total_dof": "infinity",
///   "subject_distance": 2.0,
///   "unit": "metric"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DofResult {
    /// Nearest acceptably sharp distance
    pub near_distance: f64,

    /// Farthest acceptably sharp distance
    pub far_distance: Distance,

    /// Hyperfocal distance for this lens, aperture and CoC
    pub hyperfocal_distance: f64,

    /// Depth of field in front of the subject
    pub dof_front: f64,

    /// Depth of field behind the subject
    pub dof_behind: Distance,

    /// Total depth of field
    pub total_dof: Distance,

    /// Subject (focus) distance
    pub subject_distance: f64,

    /// Unit system the distances are expressed in
    pub unit: UnitSystem,
}

impl DofResult {
    /// Re-express every distance in another unit system.
    ///
    /// Finite fields are scaled uniformly; infinite fields stay infinite.
    pub fn in_units(&self, unit: UnitSystem) -> DofResult {
        let factor = unit.scale_factor() / self.unit.scale_factor();
        DofResult {
            near_distance: self.near_distance * factor,
            far_distance: self.far_distance.scale(factor),
            hyperfocal_distance: self.hyperfocal_distance * factor,
            dof_front: self.dof_front * factor,
            dof_behind: self.dof_behind.scale(factor),
            total_dof: self.total_dof.scale(factor),
            subject_distance: self.subject_distance * factor,
            unit,
        }
    }

    /// Unit suffix for display (e.g., "m")
    pub fn unit_label(&self) -> &'static str {
        self.unit.label()
    }

    /// True when everything from the near limit to infinity is sharp
    pub fn reaches_infinity(&self) -> bool {
        self.far_distance.is_infinite()
    }

    /// Ratio of sharp zone behind the subject to in front (∞ when unbounded)
    pub fn front_behind_ratio(&self) -> Distance {
        match self.dof_behind {
            Distance::Finite(behind) if self.dof_front > 0.0 => Distance::Finite(behind / self.dof_front),
            Distance::Finite(_) => Distance::Finite(0.0),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

fn hyperfocal_mm(focal_length_mm: f64, aperture: f64, coc_mm: f64) -> f64 {
    focal_length_mm.powi(2) / (aperture * coc_mm) + focal_length_mm
}

/// Hyperfocal distance in metres.
///
/// No validation is performed; callers pass positive values.
pub fn hyperfocal_distance_m(focal_length_mm: f64, aperture: f64, coc_mm: f64) -> f64 {
    Meters::from(Millimeters(hyperfocal_mm(focal_length_mm, aperture, coc_mm))).value()
}

/// Calculate depth of field.
///
/// Pure function, results in metres.
///
/// # Returns
///
/// * `Ok(DofResult)` - Near/far limits and depth of field
/// * `Err(CalcError)` - If any parameter is non-positive or out of range
pub fn calculate(input: &DofInput) -> CalcResult<DofResult> {
    input.validate()?;

    let f = input.focal_length_mm;
    let d = Millimeters::from(Meters(input.subject_distance_m)).value();
    let h = input.hyperfocal_mm();

    let mut near_mm = (h * d) / (h + d - f);
    if !(0.0..=d).contains(&near_mm) {
        tracing::warn!(
            near_mm,
            subject_mm = d,
            focal_length_mm = f,
            "near limit outside [0, subject]; clamping to zero"
        );
        near_mm = 0.0;
    }

    let near_m = Meters::from(Millimeters(near_mm)).value();
    let hyperfocal_m = Meters::from(Millimeters(h)).value();
    let subject_m = input.subject_distance_m;

    // Far denominator hits zero at d = H - f; unbounded from there on.
    let far_m = if d >= h - f {
        Distance::Infinite
    } else {
        let far_mm = (h * d) / (h - d + f);
        if far_mm < d {
            tracing::warn!(
                far_mm,
                subject_mm = d,
                focal_length_mm = f,
                "far limit in front of subject; clamping to subject distance"
            );
            Distance::Finite(subject_m)
        } else {
            Distance::Finite(Meters::from(Millimeters(far_mm)).value())
        }
    };

    let dof_front = subject_m - near_m;
    let dof_behind = far_m.minus(subject_m);
    let total_dof = dof_behind.plus(dof_front);

    Ok(DofResult {
        near_distance: near_m,
        far_distance: far_m,
        hyperfocal_distance: hyperfocal_m,
        dof_front,
        dof_behind,
        total_dof,
        subject_distance: subject_m,
        unit: UnitSystem::Metric,
    })
}

/// Calculate depth of field from loose parameters.
///
/// Equivalent to building a [`DofInput`] and calling [`calculate`].
pub fn compute_dof(focal_length_mm: f64, aperture: f64, distance_m: f64, coc_mm: f64) -> CalcResult<DofResult> {
    calculate(&DofInput::new(focal_length_mm, aperture, distance_m, coc_mm))
}

/// Distances rendered for display, two decimals with the unit suffix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDof {
    pub near_distance: String,
    pub far_distance: String,
    pub hyperfocal_distance: String,
    pub dof_front: String,
    pub dof_behind: String,
    pub total_dof: String,
    pub subject_distance: String,
}

impl FormattedDof {
    pub fn new(r: &DofResult) -> Self {
        let label = r.unit_label();
        let fmt = |d: Distance| format_distance(d, label, 2);
        FormattedDof {
            near_distance: fmt(Distance::Finite(r.near_distance)),
            far_distance: fmt(r.far_distance),
            hyperfocal_distance: fmt(Distance::Finite(r.hyperfocal_distance)),
            dof_front: fmt(Distance::Finite(r.dof_front)),
            dof_behind: fmt(r.dof_behind),
            total_dof: fmt(r.total_dof),
            subject_distance: fmt(Distance::Finite(r.subject_distance)),
        }
    }
}

/// Depth of field result in the requested units, with the CoC it used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DofReport {
    #[serde(flatten)]
    pub result: DofResult,
    pub unit_label: String,
    pub coc: f64,
    pub formatted: FormattedDof,
}

impl DofReport {
    /// Run the calculation and convert the result to `unit`
    pub fn build(input: &DofInput, unit: UnitSystem) -> CalcResult<Self> {
        let result = calculate(input)?.in_units(unit);
        tracing::debug!(unit = unit.key(), far_infinite = result.reaches_infinity(), "depth of field computed");
        Ok(DofReport {
            formatted: FormattedDof::new(&result),
            unit_label: unit.label().to_string(),
            coc: input.coc_mm,
            result,
        })
    }
}

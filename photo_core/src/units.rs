//! # Unit Types
//!
//! Type-safe wrappers for the lengths the calculators juggle, the `Distance`
//! sum type that stands in for an infinite focus distance, and the
//! `UnitSystem` table used to present depth-of-field results.
//!
//! ## Internal Units
//!
//! - Optics arithmetic happens in millimetres, results are produced in metres
//! - Print sizes are in inches, resolutions in pixels
//!
//! ## Example
//!
//! ```rust
//! use photo_core::units::{Distance, Meters, Millimeters, UnitSystem};
//!
//! let d = Meters(2.0);
//! let mm: Millimeters = d.into();
//! assert_eq!(mm.0, 2000.0);
//!
//! let far = Distance::Infinite;
//! assert_eq!(far.scale(UnitSystem::Imperial.scale_factor()), Distance::Infinite);
//! assert_eq!(serde_json::to_string(&far).unwrap(), "\"infinity\"");
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * 12.0)
    }
}

impl From<Inches> for Feet {
    fn from(inches: Inches) -> Self {
        Feet(inches.0 / 12.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Inches);
impl_arithmetic!(Feet);

// ============================================================================
// Distance (finite or infinite)
// ============================================================================

/// Wire form of [`Distance::Infinite`]
pub const INFINITY_SENTINEL: &str = "infinity";

/// Display glyph for [`Distance::Infinite`]
pub const INFINITY_GLYPH: &str = "∞";

/// A distance that may be unbounded.
///
/// Far focus limits and the depth of field behind the subject become
/// infinite once the subject sits at or beyond the hyperfocal distance.
/// Serializes as a plain number, or the string `"infinity"` when infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distance {
    Finite(f64),
    Infinite,
}

impl Distance {
    /// Build from a raw float, mapping ±∞ to [`Distance::Infinite`]
    pub fn from_f64(value: f64) -> Self {
        if value.is_infinite() {
            Distance::Infinite
        } else {
            Distance::Finite(value)
        }
    }

    /// The finite value, if any
    pub fn finite(self) -> Option<f64> {
        match self {
            Distance::Finite(v) => Some(v),
            Distance::Infinite => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Distance::Infinite)
    }

    /// Multiply a finite distance; infinity is left untouched.
    pub fn scale(self, factor: f64) -> Self {
        match self {
            Distance::Finite(v) => Distance::Finite(v * factor),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Subtract a finite amount; infinity is left untouched.
    pub fn minus(self, amount: f64) -> Self {
        match self {
            Distance::Finite(v) => Distance::Finite(v - amount),
            Distance::Infinite => Distance::Infinite,
        }
    }

    /// Add a finite amount; infinity is left untouched.
    pub fn plus(self, amount: f64) -> Self {
        match self {
            Distance::Finite(v) => Distance::Finite(v + amount),
            Distance::Infinite => Distance::Infinite,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(v) => write!(f, "{}", v),
            Distance::Infinite => write!(f, "{}", INFINITY_GLYPH),
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(v) => serializer.serialize_f64(*v),
            Distance::Infinite => serializer.serialize_str(INFINITY_SENTINEL),
        }
    }
}

impl<'de> Deserialize<'de> for Distance {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(Distance::from_f64(v)),
            Raw::Text(s) if s.eq_ignore_ascii_case(INFINITY_SENTINEL) => Ok(Distance::Infinite),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{}\", got \"{}\"",
                INFINITY_SENTINEL, s
            ))),
        }
    }
}

// ============================================================================
// Unit Systems
// ============================================================================

/// Unit system used to present depth-of-field distances.
///
/// Results are computed in metres; the scale factor converts metres into
/// the chosen unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
    Centimeters,
    Inches,
}

impl UnitSystem {
    /// All unit systems for UI selection
    pub const ALL: [UnitSystem; 4] = [
        UnitSystem::Metric,
        UnitSystem::Imperial,
        UnitSystem::Centimeters,
        UnitSystem::Inches,
    ];

    /// Key used in form fields (e.g., "metric")
    pub fn key(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
            UnitSystem::Centimeters => "centimeters",
            UnitSystem::Inches => "inches",
        }
    }

    /// Metres → this unit
    pub fn scale_factor(&self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::Imperial => 3.28084,
            UnitSystem::Centimeters => 100.0,
            UnitSystem::Inches => 39.3701,
        }
    }

    /// Unit suffix shown after values (e.g., "ft")
    pub fn label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::Imperial => "ft",
            UnitSystem::Centimeters => "cm",
            UnitSystem::Inches => "in",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (meters)",
            UnitSystem::Imperial => "Imperial (feet)",
            UnitSystem::Centimeters => "Centimeters",
            UnitSystem::Inches => "Inches",
        }
    }

    /// Parse a form key, case-insensitively
    pub fn from_key(key: &str) -> CalcResult<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|u| u.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| CalcError::unknown_option("unit system", key))
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meters_to_millimeters() {
        let mm: Millimeters = Meters(2.5).into();
        assert_eq!(mm.0, 2500.0);
        let m: Meters = Millimeters(750.0).into();
        assert_eq!(m.0, 0.75);
    }

    #[test]
    fn test_feet_to_inches() {
        let inches: Inches = Feet(2.0).into();
        assert_eq!(inches.0, 24.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(10.0);
        let b = Meters(4.0);
        assert_eq!((a + b).0, 14.0);
        assert_eq!((a - b).0, 6.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_infinite_distance_is_not_scaled() {
        assert_eq!(Distance::Infinite.scale(3.28084), Distance::Infinite);
        assert_eq!(Distance::Infinite.minus(2.0), Distance::Infinite);
        assert_eq!(Distance::Finite(2.0).scale(100.0), Distance::Finite(200.0));
        assert_eq!(Distance::from_f64(f64::INFINITY), Distance::Infinite);
    }

    #[test]
    fn test_distance_serialization() {
        assert_eq!(serde_json::to_string(&Distance::Finite(1.5)).unwrap(), "1.5");
        assert_eq!(serde_json::to_string(&Distance::Infinite).unwrap(), "\"infinity\"");

        let back: Distance = serde_json::from_str("\"infinity\"").unwrap();
        assert_eq!(back, Distance::Infinite);
        let back: Distance = serde_json::from_str("2.25").unwrap();
        assert_eq!(back, Distance::Finite(2.25));
        assert!(serde_json::from_str::<Distance>("\"far\"").is_err());
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::Infinite.to_string(), "∞");
        assert_eq!(Distance::Finite(3.5).to_string(), "3.5");
    }

    #[test]
    fn test_unit_system_lookup() {
        assert_eq!(UnitSystem::from_key("imperial").unwrap(), UnitSystem::Imperial);
        assert_eq!(UnitSystem::from_key(" Inches ").unwrap(), UnitSystem::Inches);
        assert!(UnitSystem::from_key("furlongs").is_err());
        assert_eq!(UnitSystem::Centimeters.label(), "cm");
        assert_eq!(UnitSystem::default(), UnitSystem::Metric);
    }

    #[test]
    fn test_unit_system_serialization() {
        let json = serde_json::to_string(&UnitSystem::Imperial).unwrap();
        assert_eq!(json, "\"imperial\"");
    }
}

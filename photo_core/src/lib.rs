//! # photo_core - Photography Calculation Engine
//!
//! `photo_core` holds the calculators behind the photo tools: depth of field,
//! print size and equipment buy-or-rent analysis. All inputs and outputs are
//! JSON-serializable so the same engines serve the CLI and the HTTP server.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Read-only catalog**: Presets are built once and shared
//!
//! ## Quick Start
//!
//! ```rust
//! use photo_core::calculations::dof::compute_dof;
//! use photo_core::units::UnitSystem;
//!
//! let result = compute_dof(85.0, 1.8, 3.0, 0.029).unwrap();
//! let feet = result.in_units(UnitSystem::Imperial);
//!
//! let json = serde_json::to_string_pretty(&feet).unwrap();
//! assert!(json.contains("\"unit\": \"imperial\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Depth of field, print size and investment engines
//! - [`catalog`] - Sensor, print and currency presets
//! - [`api`] - Form-field parsing and the JSON response envelope
//! - [`units`] - Type-safe unit wrappers and the finite/infinite distance type
//! - [`format`] - Number, distance and currency display helpers
//! - [`errors`] - Structured error types

pub mod api;
pub mod calculations;
pub mod catalog;
pub mod errors;
pub mod format;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use api::{handle, ApiResponse, Calculator, FormFields};
pub use calculations::{CalculationOutput, CalculationRequest};
pub use catalog::{catalog, Catalog};
pub use errors::{CalcError, CalcResult};
pub use units::{Distance, UnitSystem};

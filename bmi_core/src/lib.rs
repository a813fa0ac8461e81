//! # bmi_core - Body Mass Index Engine
//!
//! `bmi_core` is the computational heart of the BMI Calculator: unit
//! normalization, the BMI formula, band classification, recommendations and
//! the range chart description. All outputs are JSON-serializable so any
//! front end (terminal, web, scripts) can render them.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Never fails**: Invalid measurements yield an undefined BMI, not an error
//! - **Static tables**: Bands, recommendations and chart segments are constants
//! - **JSON-First**: Results implement Serialize
//!
//! ## Quick Start
//!
//! ```rust
//! use bmi_core::{assess, BmiInput};
//!
//! let result = assess(&BmiInput::imperial(67.0, 154.0));
//! assert_eq!(result.bmi, Some(24.1));
//! assert_eq!(result.label(), "Normal");
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("\"tone\": \"ok\""));
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Unit wrappers, measurements and unit systems
//! - [`calculations`] - BMI formula and the assessment pipeline
//! - [`classification`] - BMI bands, categories and tones
//! - [`guidance`] - Per-category recommendations
//! - [`chart`] - Range chart description
//! - [`settings`] - Session defaults loaded from JSON
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod chart;
pub mod classification;
pub mod errors;
pub mod guidance;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{assess, Assessment, BmiInput, INVALID_INPUT_PROMPT};
pub use chart::{build_range_spec, ChartRangeSpec};
pub use classification::{classify, Category, Classification, Tone};
pub use errors::{BmiError, BmiResult};
pub use guidance::recommendations_for;
pub use settings::{load_settings, Settings};
pub use units::{Measurement, Unit, UnitSystem};

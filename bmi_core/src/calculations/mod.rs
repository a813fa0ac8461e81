//! # Calculations
//!
//! The numeric core of the engine. Each calculation follows the pattern:
//!
//! - `*Input` - User entries (JSON-serializable)
//! - a result type (JSON-serializable)
//! - a pure function from one to the other that never panics
//!
//! ## Available Calculations
//!
//! - [`bmi`] - BMI formula and display rounding
//! - [`assessment`] - Full pipeline from raw entries to a rendered-ready result

pub mod assessment;
pub mod bmi;

// Re-export commonly used types
pub use assessment::{assess, evaluate, Assessment, BmiInput, INVALID_INPUT_PROMPT};
pub use bmi::{compute_bmi, round_bmi};

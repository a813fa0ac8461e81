//! # BMI Assessment Pipeline
//!
//! Runs the whole engine for one set of user entries:
//!
//! ```text
//! BmiInput (cm/kg or in/lb)
//!   -> normalize to meters / kilograms
//!   -> compute BMI, round to 0.1
//!   -> classify (rounded value)
//!   -> recommendations + range chart
//! ```
//!
//! Every step is a pure function; the pipeline never fails. Missing or
//! non-positive entries produce an undefined BMI, the placeholder category
//! and an empty recommendation list.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::calculations::assessment::{assess, BmiInput};
//! use bmi_core::classification::{Category, Tone};
//!
//! let result = assess(&BmiInput::metric(170.0, 70.0));
//! assert_eq!(result.bmi, Some(24.2));
//! assert_eq!(result.category, Category::Normal);
//! assert_eq!(result.tone, Tone::Ok);
//! assert_eq!(result.recommendations.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::bmi::{compute_bmi, round_bmi};
use crate::chart::{build_range_spec, ChartRangeSpec};
use crate::classification::{classify, Category, Tone, PLACEHOLDER_LABEL};
use crate::errors::{BmiError, BmiResult};
use crate::guidance::recommendations_for;
use crate::units::{Centimeters, Inches, Kilograms, Measurement, Meters, Pounds, UnitSystem};

/// Prompt shown by front ends when the BMI is undefined
pub const INVALID_INPUT_PROMPT: &str = "Enter valid height and weight to calculate BMI.";

/// One set of user entries, in the units of the selected system.
///
/// ## JSON Example
///
/// ```json
/// { "unit_system": "Imperial", "height": 67.0, "weight": 154.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiInput {
    pub unit_system: UnitSystem,

    /// Height in centimeters (metric) or inches (imperial)
    pub height: f64,

    /// Weight in kilograms (metric) or pounds (imperial)
    pub weight: f64,
}

impl BmiInput {
    pub fn new(unit_system: UnitSystem, height: f64, weight: f64) -> Self {
        BmiInput {
            unit_system,
            height,
            weight,
        }
    }

    pub fn metric(height_cm: f64, weight_kg: f64) -> Self {
        Self::new(UnitSystem::Metric, height_cm, weight_kg)
    }

    pub fn imperial(height_in: f64, weight_lb: f64) -> Self {
        Self::new(UnitSystem::Imperial, height_in, weight_lb)
    }

    /// Height as a validated measurement in the entry unit
    pub fn height_measurement(&self) -> BmiResult<Measurement> {
        Measurement::new(self.height, self.unit_system.height_unit())
    }

    /// Weight as a validated measurement in the entry unit
    pub fn weight_measurement(&self) -> BmiResult<Measurement> {
        Measurement::new(self.weight, self.unit_system.weight_unit())
    }

    /// Height converted to meters (no validation)
    pub fn height_m(&self) -> Meters {
        match self.unit_system {
            UnitSystem::Metric => Centimeters(self.height).into(),
            UnitSystem::Imperial => Inches(self.height).into(),
        }
    }

    /// Weight converted to kilograms (no validation)
    pub fn weight_kg(&self) -> Kilograms {
        match self.unit_system {
            UnitSystem::Metric => Kilograms(self.weight),
            UnitSystem::Imperial => Pounds(self.weight).into(),
        }
    }

    /// Check entries against the accepted entry ranges of the unit system.
    ///
    /// The pipeline does not require this; front ends call it to decide
    /// whether to accept an entry.
    pub fn validate(&self) -> BmiResult<()> {
        self.height_measurement()?;
        self.weight_measurement()?;

        let (min_h, max_h) = self.unit_system.height_bounds();
        if self.height < min_h || self.height > max_h {
            return Err(BmiError::invalid_input(
                "height",
                self.height.to_string(),
                format!(
                    "Height must be between {} and {} {}",
                    min_h,
                    max_h,
                    self.unit_system.height_unit()
                ),
            ));
        }

        let (min_w, max_w) = self.unit_system.weight_bounds();
        if self.weight < min_w || self.weight > max_w {
            return Err(BmiError::invalid_input(
                "weight",
                self.weight.to_string(),
                format!(
                    "Weight must be between {} and {} {}",
                    min_w,
                    max_w,
                    self.unit_system.weight_unit()
                ),
            ));
        }

        Ok(())
    }
}

/// Everything a front end needs to render one result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Normalized height in meters
    pub height_m: f64,

    /// Normalized weight in kilograms
    pub weight_kg: f64,

    /// BMI rounded to one decimal, `None` when undefined
    pub bmi: Option<f64>,

    pub category: Category,

    pub tone: Tone,

    pub recommendations: &'static [&'static str],

    pub chart: ChartRangeSpec,
}

impl Assessment {
    /// The result shown while entries are missing or rejected
    pub fn undefined() -> Self {
        evaluate(0.0, 0.0)
    }

    pub fn is_defined(&self) -> bool {
        self.bmi.is_some()
    }

    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    /// BMI formatted for display ("24.2", or "—" when undefined)
    pub fn bmi_display(&self) -> String {
        match self.bmi {
            Some(bmi) => format!("{:.1}", bmi),
            None => PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// Run the pipeline on canonical metric values.
///
/// BMI is rounded to one decimal before classification, so 18.449 is
/// Underweight while 18.451 is Normal.
pub fn evaluate(height_m: f64, weight_kg: f64) -> Assessment {
    let bmi = compute_bmi(weight_kg, height_m).map(round_bmi);
    let classification = classify(bmi);
    let recommendations = recommendations_for(classification.label());
    let chart = build_range_spec(bmi);

    tracing::debug!(
        height_m,
        weight_kg,
        bmi = ?bmi,
        category = classification.label(),
        "evaluated BMI"
    );

    Assessment {
        height_m,
        weight_kg,
        bmi,
        category: classification.category,
        tone: classification.tone,
        recommendations,
        chart,
    }
}

/// Normalize the entries and run the pipeline.
pub fn assess(input: &BmiInput) -> Assessment {
    evaluate(input.height_m().0, input.weight_kg().0)
}

//! # Unit Types
//!
//! Type-safe wrappers for body measurement units, plus the unit normalizer
//! that turns whatever the user typed into canonical metric values.
//!
//! ## Canonical Units
//!
//! All computation happens in kilograms and meters. Entry units are:
//! - Mass: kilograms (kg), pounds (lb)
//! - Length: centimeters (cm), inches (in), meters (m)
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::units::{Inches, Kilograms, Meters, Pounds};
//!
//! let height: Meters = Inches(67.0).into();
//! assert!((height.0 - 1.7018).abs() < 1e-9);
//!
//! let weight: Kilograms = Pounds(154.0).into();
//! assert!((weight.0 - 69.853_224_98).abs() < 1e-6);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{BmiError, BmiResult};

/// Kilograms per avoirdupois pound (exact by definition)
pub const KG_PER_LB: f64 = 0.45359237;

/// Meters per inch (exact by definition)
pub const M_PER_IN: f64 = 0.0254;

/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

// ============================================================================
// Raw Conversions
// ============================================================================

/// Convert pounds to kilograms. No bounds checking.
pub fn kilograms_from_pounds(pounds: f64) -> f64 {
    pounds * KG_PER_LB
}

/// Convert kilograms to pounds. Inverse of [`kilograms_from_pounds`].
pub fn pounds_from_kilograms(kilograms: f64) -> f64 {
    kilograms / KG_PER_LB
}

/// Convert inches to meters. No bounds checking.
pub fn meters_from_inches(inches: f64) -> f64 {
    inches * M_PER_IN
}

/// Convert meters to inches. Inverse of [`meters_from_inches`].
pub fn inches_from_meters(meters: f64) -> f64 {
    meters / M_PER_IN
}

/// Convert centimeters to meters.
pub fn meters_from_centimeters(centimeters: f64) -> f64 {
    centimeters / CM_PER_M
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(kilograms_from_pounds(lb.0))
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(pounds_from_kilograms(kg.0))
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Meters {
    fn from(inches: Inches) -> Self {
        Meters(meters_from_inches(inches.0))
    }
}

impl From<Meters> for Inches {
    fn from(m: Meters) -> Self {
        Inches(inches_from_meters(m.0))
    }
}

impl From<Centimeters> for Meters {
    fn from(cm: Centimeters) -> Self {
        Meters(meters_from_centimeters(cm.0))
    }
}

impl From<Meters> for Centimeters {
    fn from(m: Meters) -> Self {
        Centimeters(m.0 * CM_PER_M)
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Units a [`Measurement`] may be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "cm")]
    Centimeter,
}

impl Unit {
    /// Short symbol shown next to values (e.g., "kg", "in")
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Pound => "lb",
            Unit::Meter => "m",
            Unit::Inch => "in",
            Unit::Centimeter => "cm",
        }
    }

    /// True for mass units, false for length units
    pub fn is_mass(&self) -> bool {
        matches!(self, Unit::Kilogram | Unit::Pound)
    }

    /// The canonical metric unit of the same dimension
    pub fn canonical(&self) -> Unit {
        if self.is_mass() {
            Unit::Kilogram
        } else {
            Unit::Meter
        }
    }

    /// Express `value` (given in this unit) in the canonical unit
    fn normalize(self, value: f64) -> f64 {
        match self {
            Unit::Kilogram | Unit::Meter => value,
            Unit::Pound => kilograms_from_pounds(value),
            Unit::Inch => meters_from_inches(value),
            Unit::Centimeter => meters_from_centimeters(value),
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> BmiResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(Unit::Kilogram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(Unit::Pound),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Unit::Meter),
            "in" | "inch" | "inches" | "\"" => Ok(Unit::Inch),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(Unit::Centimeter),
            _ => Err(BmiError::unknown_unit(s)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A positive quantity paired with its unit.
///
/// Non-positive values are not representable: [`Measurement::new`] rejects
/// them, so every `Measurement` is safe to feed into the BMI calculator.
///
/// ```rust
/// use bmi_core::units::{Measurement, Unit};
///
/// let height = Measurement::new(170.0, Unit::Centimeter).unwrap();
/// let canonical = height.to_canonical();
/// assert_eq!(canonical.unit(), Unit::Meter);
/// assert!((canonical.value() - 1.7).abs() < 1e-12);
///
/// assert!(Measurement::new(0.0, Unit::Kilogram).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    value: f64,
    unit: Unit,
}

impl Measurement {
    /// Create a measurement, rejecting non-positive and non-finite values
    pub fn new(value: f64, unit: Unit) -> BmiResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            let field = if unit.is_mass() { "weight" } else { "height" };
            return Err(BmiError::invalid_input(
                field,
                value.to_string(),
                "Measurement must be a positive number",
            ));
        }
        Ok(Measurement { value, unit })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Equivalent measurement in kilograms (mass) or meters (length)
    pub fn to_canonical(&self) -> Measurement {
        Measurement {
            value: self.unit.normalize(self.value),
            unit: self.unit.canonical(),
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

// ============================================================================
// Unit Systems
// ============================================================================

/// Input unit system chosen by the user.
///
/// Metric entry uses centimeters and kilograms; imperial entry uses inches
/// and pounds. Calculations are always performed in metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// All unit systems, in selector order
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Metric, UnitSystem::Imperial];

    /// Selector label
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (cm, kg)",
            UnitSystem::Imperial => "Imperial (in, lbs)",
        }
    }

    /// Unit the height field is entered in
    pub fn height_unit(&self) -> Unit {
        match self {
            UnitSystem::Metric => Unit::Centimeter,
            UnitSystem::Imperial => Unit::Inch,
        }
    }

    /// Unit the weight field is entered in
    pub fn weight_unit(&self) -> Unit {
        match self {
            UnitSystem::Metric => Unit::Kilogram,
            UnitSystem::Imperial => Unit::Pound,
        }
    }

    /// Accepted height entry range (inclusive), in [`Self::height_unit`]
    pub fn height_bounds(&self) -> (f64, f64) {
        match self {
            UnitSystem::Metric => (50.0, 250.0),
            UnitSystem::Imperial => (20.0, 100.0),
        }
    }

    /// Accepted weight entry range (inclusive), in [`Self::weight_unit`]
    pub fn weight_bounds(&self) -> (f64, f64) {
        match self {
            UnitSystem::Metric => (20.0, 300.0),
            UnitSystem::Imperial => (44.0, 660.0),
        }
    }

    /// The other unit system
    pub fn toggled(&self) -> UnitSystem {
        match self {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> BmiResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "si" | "cm" | "kg" => Ok(UnitSystem::Metric),
            "imperial" | "us" | "in" | "lb" | "lbs" => Ok(UnitSystem::Imperial),
            _ => Err(BmiError::unknown_unit(s)),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnitSystem::from_str_flexible(s)
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

//! # Band Classifier
//!
//! Maps a BMI value onto one of four fixed bands. Bands are half-open
//! `[lower, upper)` intervals that partition `[0, +inf)`, so a value sitting
//! exactly on a boundary belongs to the upper band (18.5 is Normal).
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::classification::{classify, Category, Tone};
//!
//! let c = classify(Some(18.5));
//! assert_eq!(c.category, Category::Normal);
//! assert_eq!(c.tone, Tone::Ok);
//!
//! let undefined = classify(None);
//! assert_eq!(undefined.label(), "—");
//! assert_eq!(undefined.tone, Tone::Info);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{BmiError, BmiResult};

/// Label shown when BMI is undefined
pub const PLACEHOLDER_LABEL: &str = "—";

/// Severity tag used for presentation emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Info,
    Ok,
    Warn,
    Alert,
}

impl Tone {
    /// Badge colour as a hex string
    pub fn color_hex(&self) -> &'static str {
        match self {
            Tone::Info => "#1976D2",
            Tone::Ok => "#2E7D32",
            Tone::Warn => "#ED6C02",
            Tone::Alert => "#C62828",
        }
    }

    /// Badge colour as an RGB triple
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Tone::Info => (0x19, 0x76, 0xD2),
            Tone::Ok => (0x2E, 0x7D, 0x32),
            Tone::Warn => (0xED, 0x6C, 0x02),
            Tone::Alert => (0xC6, 0x28, 0x28),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Info => "info",
            Tone::Ok => "ok",
            Tone::Warn => "warn",
            Tone::Alert => "alert",
        }
    }
}

/// BMI category.
///
/// `Undetermined` is the placeholder produced for an undefined BMI; it is a
/// regular value, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Underweight,
    Normal,
    Overweight,
    Obese,
    #[serde(rename = "—")]
    Undetermined,
}

impl Category {
    /// The four real categories, in ascending BMI order
    pub const BANDED: [Category; 4] = [
        Category::Underweight,
        Category::Normal,
        Category::Overweight,
        Category::Obese,
    ];

    /// Display label ("Normal", "—", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Category::Underweight => "Underweight",
            Category::Normal => "Normal",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
            Category::Undetermined => PLACEHOLDER_LABEL,
        }
    }

    /// Fixed tone for this category
    pub fn tone(&self) -> Tone {
        match self {
            Category::Underweight => Tone::Info,
            Category::Normal => Tone::Ok,
            Category::Overweight => Tone::Warn,
            Category::Obese => Tone::Alert,
            Category::Undetermined => Tone::Info,
        }
    }

    /// Look up a category by its exact label
    pub fn from_label(label: &str) -> BmiResult<Self> {
        Category::BANDED
            .into_iter()
            .chain(std::iter::once(Category::Undetermined))
            .find(|c| c.label() == label)
            .ok_or_else(|| BmiError::invalid_input("category", label, "Unknown BMI category label"))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One classification band: `[lower_inclusive, upper_exclusive)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiBand {
    pub category: Category,
    pub lower_inclusive: f64,
    pub upper_exclusive: f64,
    pub tone: Tone,
}

impl BmiBand {
    pub fn contains(&self, bmi: f64) -> bool {
        bmi >= self.lower_inclusive && bmi < self.upper_exclusive
    }
}

/// Classification bands in ascending order
pub const BMI_BANDS: [BmiBand; 4] = [
    BmiBand {
        category: Category::Underweight,
        lower_inclusive: 0.0,
        upper_exclusive: 18.5,
        tone: Tone::Info,
    },
    BmiBand {
        category: Category::Normal,
        lower_inclusive: 18.5,
        upper_exclusive: 25.0,
        tone: Tone::Ok,
    },
    BmiBand {
        category: Category::Overweight,
        lower_inclusive: 25.0,
        upper_exclusive: 30.0,
        tone: Tone::Warn,
    },
    BmiBand {
        category: Category::Obese,
        lower_inclusive: 30.0,
        upper_exclusive: f64::INFINITY,
        tone: Tone::Alert,
    },
];

/// Result of classifying a BMI value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub tone: Tone,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }
}

impl From<Category> for Classification {
    fn from(category: Category) -> Self {
        Classification {
            category,
            tone: category.tone(),
        }
    }
}

/// Classify a BMI value.
///
/// `None` and NaN give the placeholder category. Bands are checked in
/// ascending order by upper bound only, so values below 0 fall into
/// Underweight and the function is total over all reals.
pub fn classify(bmi: Option<f64>) -> Classification {
    let category = match bmi {
        Some(value) if !value.is_nan() => BMI_BANDS
            .iter()
            .find(|band| value < band.upper_exclusive)
            .map_or(Category::Obese, |band| band.category),
        _ => Category::Undetermined,
    };
    Classification::from(category)
}

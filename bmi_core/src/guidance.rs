//! # Guidance Provider
//!
//! Fixed, educational recommendations for each BMI category. Four items per
//! banded category, always in the same order; the placeholder category and
//! unknown labels get nothing.
//!
//! Not medical advice.

use crate::classification::Category;

const UNDERWEIGHT: [&str; 4] = [
    "Discuss weight goals with a clinician or dietitian.",
    "Increase nutrient-dense calories; emphasize lean proteins and complex carbs.",
    "Screen for underlying causes (e.g., thyroid, malabsorption).",
    "Incorporate progressive resistance training.",
];

const NORMAL: [&str; 4] = [
    "Maintain balanced diet per evidence-based guidelines.",
    "Target ≥150 minutes/week of moderate activity.",
    "Prioritize sleep hygiene and stress management.",
    "Continue routine preventive care.",
];

const OVERWEIGHT: [&str; 4] = [
    "Adopt calorie-aware, whole-food eating patterns.",
    "Increase physical activity; combine aerobic and strength training.",
    "Set incremental goals (e.g., 5–7% weight reduction).",
    "Consider coaching or registered dietitian support.",
];

const OBESE: [&str; 4] = [
    "Partner with a clinician for a comprehensive plan.",
    "Combine nutrition therapy, activity, and behavior strategies.",
    "Discuss adjuncts when appropriate (pharmacotherapy, bariatric referral).",
    "Address comorbidities (HTN, T2DM, OSA) and monitor regularly.",
];

impl Category {
    /// Recommendations for this category
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            Category::Underweight => &UNDERWEIGHT,
            Category::Normal => &NORMAL,
            Category::Overweight => &OVERWEIGHT,
            Category::Obese => &OBESE,
            Category::Undetermined => &[],
        }
    }
}

/// Recommendations keyed by category label.
///
/// ```rust
/// use bmi_core::guidance::recommendations_for;
///
/// assert_eq!(recommendations_for("Normal").len(), 4);
/// assert!(recommendations_for("—").is_empty());
/// assert!(recommendations_for("Athletic").is_empty());
/// ```
pub fn recommendations_for(label: &str) -> &'static [&'static str] {
    Category::from_label(label)
        .map(|category| category.recommendations())
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_no_recommendations() {
        assert!(recommendations_for("—").is_empty());
        assert!(Category::Undetermined.recommendations().is_empty());
    }

    #[test]
    fn test_unknown_label_is_empty() {
        assert!(recommendations_for("").is_empty());
        assert!(recommendations_for("normal").is_empty());
    }

    #[test]
    fn test_four_items_per_band() {
        for category in Category::BANDED {
            assert_eq!(recommendations_for(category.label()).len(), 4, "{}", category);
        }
    }

    #[test]
    fn test_order_is_stable() {
        let first = recommendations_for("Normal");
        let second = recommendations_for("Normal");
        assert_eq!(first, second);
        assert_eq!(first[0], "Maintain balanced diet per evidence-based guidelines.");
        assert_eq!(first[3], "Continue routine preventive care.");
    }

    #[test]
    fn test_categories_do_not_share_text() {
        let obese = recommendations_for("Obese");
        let under = recommendations_for("Underweight");
        assert!(obese.iter().all(|r| !under.contains(r)));
    }
}

//! One-shot report output (plain text and JSON).

use bmi_core::{Assessment, BmiInput, Category, INVALID_INPUT_PROMPT};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::gauge;

pub const APP_TITLE: &str = "BMI Calculator";
pub const APP_SUBTITLE: &str = "Body Mass Index — Educational Tool";
pub const DISCLAIMER: &str = "Disclaimer: This tool is for educational purposes only and does not provide \
medical advice. Consult a qualified healthcare professional for personalized assessment, diagnosis, \
and treatment.";
pub const FOOTER: &str = "© 2025 Health Education Demo";

/// Width of the text-mode range chart, in characters
const CHART_WIDTH: usize = 40;

const RULE: &str = "═══════════════════════════════════════";

/// JSON report envelope
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub generated_at: DateTime<Utc>,
    pub version: &'static str,
    pub input: &'a BmiInput,
    pub assessment: &'a Assessment,
}

impl<'a> Report<'a> {
    pub fn new(input: &'a BmiInput, assessment: &'a Assessment) -> Self {
        Report {
            generated_at: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
            input,
            assessment,
        }
    }
}

pub fn render_json(input: &BmiInput, assessment: &Assessment) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report::new(input, assessment))
}

/// Plain-text report in the same order as the interactive view
pub fn render_text(input: &BmiInput, assessment: &Assessment) -> String {
    let system = input.unit_system;
    let mut lines = vec![
        format!("{} - {}", APP_TITLE, APP_SUBTITLE),
        RULE.to_string(),
        String::new(),
        format!("Input ({}):", system),
        format!(
            "  Height:   {:.1} {} ({:.3} m)",
            input.height,
            system.height_unit(),
            assessment.height_m
        ),
        format!(
            "  Weight:   {:.1} {} ({:.2} kg)",
            input.weight,
            system.weight_unit(),
            assessment.weight_kg
        ),
        String::new(),
    ];

    if assessment.is_defined() {
        lines.push("Results:".to_string());
        lines.push(format!(
            "  Your BMI: {} [{}]",
            assessment.bmi_display(),
            assessment.tone.as_str().to_uppercase()
        ));
        lines.push(format!("  Category: {}", assessment.label()));
        lines.push(String::new());
        lines.extend(chart_lines(assessment).into_iter().map(|l| format!("  {}", l)));
        lines.push(String::new());
        lines.push("Recommendations:".to_string());
        lines.extend(assessment.recommendations.iter().map(|r| format!("  - {}", r)));
    } else {
        lines.push(INVALID_INPUT_PROMPT.to_string());
    }

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push(DISCLAIMER.to_string());
    lines.push(FOOTER.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Three-line text chart: segment bar, marker, axis
fn chart_lines(assessment: &Assessment) -> [String; 3] {
    let spec = &assessment.chart;
    let bar: String = gauge::columns(spec, CHART_WIDTH)
        .into_iter()
        .map(|seg| segment_glyph(seg.category))
        .collect();
    let marker = format!("{}^ {:.1}", " ".repeat(gauge::marker_column(spec, CHART_WIDTH)), spec.marker);
    [bar, marker, gauge::axis_labels(spec, CHART_WIDTH)]
}

fn segment_glyph(category: Category) -> char {
    match category {
        Category::Underweight => '░',
        Category::Normal => '▒',
        Category::Overweight => '▓',
        Category::Obese | Category::Undetermined => '█',
    }
}

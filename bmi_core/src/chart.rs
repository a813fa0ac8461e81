//! # Chart Range Descriptor
//!
//! Describes the BMI range chart: four coloured segments over a fixed display
//! domain of 10 to 40, and a marker for the current value. The segments are a
//! visual truncation of the classification bands (which span `[0, +inf)`).
//!
//! Rendering is left to the caller; [`ChartRangeSpec::fraction_of`] and
//! [`ChartRangeSpec::segment_at`] are enough to draw the chart at any width.
//!
//! ## Example
//!
//! ```rust
//! use bmi_core::chart::build_range_spec;
//!
//! assert_eq!(build_range_spec(Some(24.2)).marker, 24.2);
//! assert_eq!(build_range_spec(Some(50.0)).marker, 40.0);
//! assert_eq!(build_range_spec(None).marker, 10.0);
//! ```

use serde::Serialize;

use crate::classification::{Category, Tone};

/// Lower end of the display domain
pub const DISPLAY_MIN: f64 = 10.0;

/// Upper end of the display domain
pub const DISPLAY_MAX: f64 = 40.0;

/// One coloured segment of the range chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartSegment {
    pub category: Category,
    pub start: f64,
    pub end: f64,
    /// Colour name ("blue", "green", ...)
    pub color: &'static str,
    /// Segments share the badge palette
    pub tone: Tone,
}

impl ChartSegment {
    pub fn color_hex(&self) -> &'static str {
        self.tone.color_hex()
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.tone.rgb()
    }
}

/// Display segments, ascending
pub const CHART_SEGMENTS: [ChartSegment; 4] = [
    ChartSegment {
        category: Category::Underweight,
        start: 10.0,
        end: 18.5,
        color: "blue",
        tone: Tone::Info,
    },
    ChartSegment {
        category: Category::Normal,
        start: 18.5,
        end: 25.0,
        color: "green",
        tone: Tone::Ok,
    },
    ChartSegment {
        category: Category::Overweight,
        start: 25.0,
        end: 30.0,
        color: "amber",
        tone: Tone::Warn,
    },
    ChartSegment {
        category: Category::Obese,
        start: 30.0,
        end: 40.0,
        color: "red",
        tone: Tone::Alert,
    },
];

/// Range chart description
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRangeSpec {
    pub domain_min: f64,
    pub domain_max: f64,
    pub segments: [ChartSegment; 4],
    /// Current BMI clamped into the domain
    pub marker: f64,
}

impl ChartRangeSpec {
    /// Relative position (0.0 to 1.0) of a value inside the domain, clamped
    pub fn fraction_of(&self, value: f64) -> f64 {
        let clamped = value.clamp(self.domain_min, self.domain_max);
        (clamped - self.domain_min) / (self.domain_max - self.domain_min)
    }

    /// Relative position of the marker
    pub fn marker_fraction(&self) -> f64 {
        self.fraction_of(self.marker)
    }

    /// Segment covering a display value.
    ///
    /// Segments are half-open except the last, which is closed at the domain
    /// maximum. Values outside the domain give `None`.
    pub fn segment_at(&self, value: f64) -> Option<&ChartSegment> {
        let last = self.segments.len() - 1;
        self.segments.iter().enumerate().find_map(|(i, seg)| {
            let inside = value >= seg.start && (value < seg.end || (i == last && value <= seg.end));
            inside.then_some(seg)
        })
    }
}

/// Build the range chart description for a BMI value.
///
/// An undefined BMI still gets a visible marker: it is treated as 0 and
/// clamped to the domain minimum.
pub fn build_range_spec(bmi: Option<f64>) -> ChartRangeSpec {
    let raw = bmi.filter(|v| !v.is_nan()).unwrap_or(0.0);
    ChartRangeSpec {
        domain_min: DISPLAY_MIN,
        domain_max: DISPLAY_MAX,
        segments: CHART_SEGMENTS,
        marker: raw.clamp(DISPLAY_MIN, DISPLAY_MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_clamps() {
        assert_eq!(build_range_spec(Some(5.0)).marker, 10.0);
        assert_eq!(build_range_spec(Some(50.0)).marker, 40.0);
        assert_eq!(build_range_spec(Some(22.3)).marker, 22.3);
    }

    #[test]
    fn test_undefined_marker_sits_at_domain_minimum() {
        assert_eq!(build_range_spec(None).marker, 10.0);
        assert_eq!(build_range_spec(Some(f64::NAN)).marker, 10.0);
    }

    #[test]
    fn test_segments_cover_domain() {
        let spec = build_range_spec(None);
        assert_eq!(spec.segments[0].start, spec.domain_min);
        assert_eq!(spec.segments[3].end, spec.domain_max);
        for pair in spec.segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_segment_lookup() {
        let spec = build_range_spec(Some(24.0));
        assert_eq!(spec.segment_at(10.0).unwrap().category, Category::Underweight);
        assert_eq!(spec.segment_at(18.5).unwrap().category, Category::Normal);
        assert_eq!(spec.segment_at(29.99).unwrap().category, Category::Overweight);
        assert_eq!(spec.segment_at(40.0).unwrap().category, Category::Obese);
        assert!(spec.segment_at(9.99).is_none());
        assert!(spec.segment_at(40.01).is_none());
    }

    #[test]
    fn test_fractions() {
        let spec = build_range_spec(Some(25.0));
        assert_eq!(spec.marker_fraction(), 0.5);
        assert_eq!(spec.fraction_of(0.0), 0.0);
        assert_eq!(spec.fraction_of(100.0), 1.0);
    }

    #[test]
    fn test_segment_colors() {
        assert_eq!(CHART_SEGMENTS[0].color, "blue");
        assert_eq!(CHART_SEGMENTS[1].rgb(), (0x2E, 0x7D, 0x32));
        assert_eq!(CHART_SEGMENTS[3].rgb(), (0xC6, 0x28, 0x28));
        assert_eq!(CHART_SEGMENTS[2].color_hex(), "#ED6C02");
    }

    #[test]
    fn test_segment_tones_match_category_tones() {
        for seg in CHART_SEGMENTS {
            assert_eq!(seg.tone, seg.category.tone());
        }
    }
}

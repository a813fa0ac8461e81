//! Character-cell layout of the BMI range chart.
//!
//! Maps a [`ChartRangeSpec`] onto a fixed number of terminal columns. Both
//! the interactive view and the plain-text report draw from these helpers.

use bmi_core::chart::{ChartRangeSpec, ChartSegment};

/// Boundary values that get an axis label
const AXIS_TICKS: [f64; 5] = [10.0, 18.5, 25.0, 30.0, 40.0];

/// Segment drawn in each column.
///
/// Each column samples the chart at its centre value.
pub fn columns(spec: &ChartRangeSpec, width: usize) -> Vec<&ChartSegment> {
    let span = spec.domain_max - spec.domain_min;
    let last = &spec.segments[spec.segments.len() - 1];
    (0..width)
        .map(|i| {
            let value = spec.domain_min + (i as f64 + 0.5) * span / width as f64;
            spec.segment_at(value).unwrap_or(last)
        })
        .collect()
}

/// Column the marker sits in
pub fn marker_column(spec: &ChartRangeSpec, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let col = (spec.marker_fraction() * (width - 1) as f64).round() as usize;
    col.min(width - 1)
}

/// Column a value maps to
fn column_of(spec: &ChartRangeSpec, value: f64, width: usize) -> usize {
    let col = (spec.fraction_of(value) * width as f64).floor() as usize;
    col.min(width.saturating_sub(1))
}

/// Axis line with tick labels at the band boundaries.
///
/// The outer labels are always drawn (the last one right-aligned); inner
/// labels that would collide with a neighbour are dropped.
pub fn axis_labels(spec: &ChartRangeSpec, width: usize) -> String {
    let mut cells = vec![' '; width];
    let (inner, last) = AXIS_TICKS.split_at(AXIS_TICKS.len() - 1);
    let last_label = format_tick(last[0]);
    let last_start = width.saturating_sub(last_label.len());
    let mut next_free = 0;

    for tick in inner {
        let label = format_tick(*tick);
        let start = column_of(spec, *tick, width);
        if start < next_free || start + label.len() >= last_start {
            continue;
        }
        write_label(&mut cells, start, &label);
        next_free = start + label.len() + 1;
    }

    if last_label.len() <= width && last_start >= next_free {
        write_label(&mut cells, last_start, &last_label);
    }

    cells.into_iter().collect()
}

fn write_label(cells: &mut [char], start: usize, label: &str) {
    for (offset, ch) in label.chars().enumerate() {
        cells[start + offset] = ch;
    }
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_core::build_range_spec;
    use bmi_core::Category;

    #[test]
    fn test_columns_follow_segments() {
        let spec = build_range_spec(Some(22.0));
        let cols = columns(&spec, 30);
        assert_eq!(cols.len(), 30);
        // one column per BMI unit; column 8 is centred on 18.5
        assert_eq!(cols[0].category, Category::Underweight);
        assert_eq!(cols[7].category, Category::Underweight);
        assert_eq!(cols[8].category, Category::Normal);
        assert_eq!(cols[15].category, Category::Overweight);
        assert_eq!(cols[20].category, Category::Obese);
        assert_eq!(cols[29].category, Category::Obese);
    }

    #[test]
    fn test_marker_column() {
        assert_eq!(marker_column(&build_range_spec(None), 31), 0);
        assert_eq!(marker_column(&build_range_spec(Some(25.0)), 31), 15);
        assert_eq!(marker_column(&build_range_spec(Some(99.0)), 31), 30);
        assert_eq!(marker_column(&build_range_spec(Some(25.0)), 0), 0);
    }

    #[test]
    fn test_axis_labels() {
        let spec = build_range_spec(None);
        let axis = axis_labels(&spec, 30);
        assert_eq!(axis.chars().count(), 30);
        assert!(axis.starts_with("10"));
        assert!(axis.ends_with("40"));
        assert!(axis.contains("18.5"));
        assert!(axis.contains("25"));
    }

    #[test]
    fn test_axis_labels_drop_overlaps() {
        let spec = build_range_spec(None);
        let axis = axis_labels(&spec, 8);
        assert_eq!(axis, "10    40");
    }
}

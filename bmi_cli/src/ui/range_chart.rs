//! Range chart: coloured BMI segments from 10 to 40 with a marker at the
//! current value.

use bmi_core::ChartRangeSpec;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::MUTED;
use crate::gauge;

pub fn view(frame: &mut Frame, area: Rect, spec: &ChartRangeSpec) {
    let width = area.width as usize;

    let bar: Vec<Span<'static>> = gauge::columns(spec, width)
        .into_iter()
        .map(|seg| {
            let (r, g, b) = seg.rgb();
            Span::styled("█", Style::default().fg(Color::Rgb(r, g, b)))
        })
        .collect();

    let marker = Line::from(vec![
        Span::raw(" ".repeat(gauge::marker_column(spec, width))),
        Span::raw("▲"),
    ]);

    let lines = vec![
        Line::from(Span::styled("BMI (kg/m²)", Style::default().fg(MUTED))),
        Line::from(bar),
        marker,
        Line::from(Span::styled(
            gauge::axis_labels(spec, width),
            Style::default().fg(MUTED),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

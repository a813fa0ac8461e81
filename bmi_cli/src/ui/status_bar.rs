//! Status Bar (Bottom)
//!
//! Displays:
//! - Why the current entries were rejected, if they were
//! - Key hints

use bmi_core::{BmiError, Tone};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::{tone_color, MUTED};

const KEY_HINTS: &str = "Tab field · u units · r reset · q quit";

/// Render the status bar
pub fn view(frame: &mut Frame, area: Rect, error: Option<&BmiError>) {
    let [message, hints] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(KEY_HINTS.chars().count() as u16),
    ])
    .areas(area);

    let status = match error {
        Some(error) => Span::styled(error.to_string(), Style::default().fg(tone_color(Tone::Alert))),
        None => Span::styled("Ready", Style::default().fg(MUTED)),
    };

    frame.render_widget(Paragraph::new(status), message);
    frame.render_widget(Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(MUTED))), hints);
}

//! Results Panel (Right Side)
//!
//! Shows the BMI and category badges, the range chart and the
//! recommendations. An undefined BMI shows the entry prompt instead.

use bmi_core::{Assessment, Tone, INVALID_INPUT_PROMPT};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::{badge, range_chart, tone_color};

/// Render the results panel for an assessment
pub fn view(frame: &mut Frame, area: Rect, assessment: &Assessment) {
    let block = Block::bordered().title(" Results ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !assessment.is_defined() {
        let prompt = Paragraph::new(Span::styled(
            INVALID_INPUT_PROMPT,
            Style::default().fg(tone_color(Tone::Info)),
        ))
        .wrap(Wrap { trim: true });
        frame.render_widget(prompt, inner);
        return;
    }

    let [summary, chart, recommendations] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(inner);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let summary_line = Line::from(vec![
        Span::styled("Your BMI ", bold),
        badge(assessment.bmi_display(), assessment.tone),
        Span::raw("   "),
        Span::styled("Category ", bold),
        badge(assessment.label(), assessment.tone),
    ]);
    frame.render_widget(Paragraph::new(summary_line), summary);

    range_chart::view(frame, chart, &assessment.chart);

    let mut lines = vec![Line::from(Span::styled("Recommendations", bold))];
    lines.extend(
        assessment
            .recommendations
            .iter()
            .map(|rec| Line::from(format!("• {}", rec))),
    );
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), recommendations);
}

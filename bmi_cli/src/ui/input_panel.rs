//! Input Panel (Left Side)
//!
//! Displays:
//! - Unit system selector (Metric / Imperial) with its help text
//! - Height and weight entry fields with their accepted ranges
//! - Entry tip

use bmi_core::UnitSystem;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use super::{MUTED, PRIMARY};
use crate::app::{App, Field};

/// Render the input panel
pub fn view(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        "Units",
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    for system in UnitSystem::ALL {
        let selected = system == app.unit_system;
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected {
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{} {}", marker, system.display_name()),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(
        "Calculations are performed in metric.",
        Style::default().fg(MUTED),
    )));

    lines.push(Line::default());
    lines.extend(field_lines(app, Field::Height));
    lines.push(Line::default());
    lines.extend(field_lines(app, Field::Weight));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Tip: Accurate height and weight improve BMI precision.",
        Style::default().fg(MUTED),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::bordered().title(" Inputs "))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Label line and value line for one entry field
fn field_lines(app: &App, field: Field) -> [Line<'static>; 2] {
    let system = app.unit_system;
    let (label, unit, (min, max)) = match field {
        Field::Height => ("Height", system.height_unit(), system.height_bounds()),
        Field::Weight => ("Weight", system.weight_unit(), system.weight_bounds()),
    };
    let focused = app.focus == field;

    let label_line = Line::from(vec![
        Span::styled(
            format!("{} ({})", label, unit),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}-{}", min, max), Style::default().fg(MUTED)),
    ]);

    let cursor = if focused { "_" } else { " " };
    let value_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    let value_line = Line::from(vec![
        Span::raw(if focused { "> " } else { "  " }),
        Span::styled(format!(" {:<8}{}", app.field_text(field), cursor), value_style),
    ]);

    [label_line, value_line]
}

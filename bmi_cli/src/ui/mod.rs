//! Terminal UI for the interactive session
//!
//! # Panel Structure
//! - title bar - App title and subtitle
//! - `input_panel` - Left: unit system selector, height and weight fields
//! - `results_panel` - Right: BMI and category badges, range chart, recommendations
//! - disclaimer - Educational-use notice
//! - `status_bar` - Bottom: input problems and key hints
//!
//! # Shared Components
//! - `range_chart` - Coloured BMI range bar with the current-value marker

pub mod input_panel;
pub mod range_chart;
pub mod results_panel;
pub mod status_bar;

use bmi_core::Tone;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::report::{APP_SUBTITLE, APP_TITLE, DISCLAIMER, FOOTER};

/// Title bar accent (#0B6E99)
pub const PRIMARY: Color = Color::Rgb(0x0B, 0x6E, 0x99);

/// Secondary text (#6B7280)
pub const MUTED: Color = Color::Rgb(0x6B, 0x72, 0x80);

/// Render one frame of the session
pub fn draw(frame: &mut Frame, app: &App) {
    let evaluation = app.evaluate();

    let [title, body, disclaimer, status] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(14),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let [inputs, results] =
        Layout::horizontal([Constraint::Length(34), Constraint::Min(30)]).areas(body);

    view_title(frame, title);
    input_panel::view(frame, inputs, app);
    results_panel::view(frame, results, &evaluation.assessment);
    view_disclaimer(frame, disclaimer);
    status_bar::view(frame, status, evaluation.error.as_ref());
}

fn view_title(frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(PRIMARY));
    let lines = vec![
        Line::from(Span::styled(
            APP_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(APP_SUBTITLE, Style::default().fg(MUTED))),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn view_disclaimer(frame: &mut Frame, area: Rect) {
    let muted = Style::default().fg(MUTED);
    let lines = vec![
        Line::from(Span::styled(DISCLAIMER, muted)),
        Line::from(Span::styled(FOOTER, muted)).centered(),
    ];
    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Terminal colour for a tone
pub fn tone_color(tone: Tone) -> Color {
    let (r, g, b) = tone.rgb();
    Color::Rgb(r, g, b)
}

/// White-on-colour badge
pub fn badge(text: impl Into<String>, tone: Tone) -> Span<'static> {
    Span::styled(
        format!(" {} ", text.into()),
        Style::default()
            .fg(Color::White)
            .bg(tone_color(tone))
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Field, Message};
    use bmi_core::Settings;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for row in buffer.content().chunks(buffer.area.width as usize) {
            for cell in row {
                text.push_str(cell.symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_default_result() {
        let screen = render(&App::new(Settings::default()));
        assert!(screen.contains("BMI Calculator"));
        assert!(screen.contains("Metric (cm, kg)"));
        assert!(screen.contains(" 24.2 "));
        assert!(screen.contains(" Normal "));
        assert!(screen.contains("Recommendations"));
        assert!(screen.contains("▲"));
        assert!(screen.contains("Calculations are performed"));
        assert!(screen.contains("© 2025 Health Education Demo"));
    }

    #[test]
    fn test_renders_prompt_when_undefined() {
        let mut app = App::new(Settings::default());
        app.update(Message::ClearField);
        assert_eq!(app.field_text(Field::Height), "");

        let screen = render(&app);
        assert!(screen.contains("Enter valid height and weight"));
        assert!(!screen.contains("Recommendations"));
        assert!(screen.contains("Missing required field: height"));
    }

    #[test]
    fn test_badge_style() {
        let span = badge("Obese", Tone::Alert);
        assert_eq!(span.content, " Obese ");
        assert_eq!(span.style.bg, Some(Color::Rgb(0xC6, 0x28, 0x28)));
    }
}

//! Interactive session state.
//!
//! The session only holds what the user typed. Every render turns that text
//! into a fresh [`BmiInput`] and runs the pure pipeline on it; nothing is
//! cached between frames.

use bmi_core::{assess, Assessment, BmiError, BmiInput, BmiResult, Settings, UnitSystem};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest text accepted in an entry field
const MAX_ENTRY_LEN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Height,
    Weight,
}

impl Field {
    fn other(self) -> Field {
        match self {
            Field::Height => Field::Weight,
            Field::Weight => Field::Height,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Height => "height",
            Field::Weight => "weight",
        }
    }
}

/// User actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Input(char),
    Backspace,
    ClearField,
    NextField,
    PrevField,
    ToggleUnits,
    Reset,
    Quit,
}

impl Message {
    /// Translate a key press into a message
    pub fn from_key(key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Message::Quit),
                KeyCode::Char('u') => Some(Message::ClearField),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => Some(Message::Input(c)),
            KeyCode::Char('u') | KeyCode::Char('U') => Some(Message::ToggleUnits),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Message::Reset),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Backspace => Some(Message::Backspace),
            KeyCode::Delete => Some(Message::ClearField),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => Some(Message::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(Message::PrevField),
            KeyCode::Left | KeyCode::Right => Some(Message::ToggleUnits),
            _ => None,
        }
    }
}

/// Text of the two entry fields for one unit system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries {
    pub height: String,
    pub weight: String,
}

impl Entries {
    fn from_settings(settings: &Settings, system: UnitSystem) -> Self {
        let entry = settings.entry_for(system);
        Entries {
            height: format!("{:.1}", entry.height),
            weight: format!("{:.1}", entry.weight),
        }
    }

    fn get(&self, field: Field) -> &str {
        match field {
            Field::Height => &self.height,
            Field::Weight => &self.weight,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Height => &mut self.height,
            Field::Weight => &mut self.weight,
        }
    }
}

/// What the view renders for the current entries
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub assessment: Assessment,
    /// Why the entries were rejected, if they were
    pub error: Option<BmiError>,
}

/// Interactive session state
#[derive(Debug, Clone)]
pub struct App {
    settings: Settings,
    pub unit_system: UnitSystem,
    pub focus: Field,
    pub should_quit: bool,
    metric: Entries,
    imperial: Entries,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App {
            unit_system: settings.unit_system,
            focus: Field::Height,
            should_quit: false,
            metric: Entries::from_settings(&settings, UnitSystem::Metric),
            imperial: Entries::from_settings(&settings, UnitSystem::Imperial),
            settings,
        }
    }

    /// Start in a specific unit system
    pub fn with_unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = unit_system;
        self
    }

    /// Entries of the selected unit system
    pub fn entries(&self) -> &Entries {
        match self.unit_system {
            UnitSystem::Metric => &self.metric,
            UnitSystem::Imperial => &self.imperial,
        }
    }

    fn entries_mut(&mut self) -> &mut Entries {
        match self.unit_system {
            UnitSystem::Metric => &mut self.metric,
            UnitSystem::Imperial => &mut self.imperial,
        }
    }

    pub fn field_text(&self, field: Field) -> &str {
        self.entries().get(field)
    }

    pub fn update(&mut self, message: Message) {
        tracing::debug!(?message, "session message");
        match message {
            Message::Input(c) => {
                let focus = self.focus;
                let text = self.entries_mut().get_mut(focus);
                if text.len() < MAX_ENTRY_LEN && !(c == '.' && text.contains('.')) {
                    text.push(c);
                }
            }
            Message::Backspace => {
                let focus = self.focus;
                self.entries_mut().get_mut(focus).pop();
            }
            Message::ClearField => {
                let focus = self.focus;
                self.entries_mut().get_mut(focus).clear();
            }
            Message::NextField | Message::PrevField => self.focus = self.focus.other(),
            Message::ToggleUnits => {
                self.unit_system = self.unit_system.toggled();
                tracing::info!(unit_system = %self.unit_system, "unit system changed");
            }
            Message::Reset => {
                let system = self.unit_system;
                *self.entries_mut() = Entries::from_settings(&self.settings, system);
            }
            Message::Quit => self.should_quit = true,
        }
    }

    /// Parse and bounds-check the current entries
    pub fn input(&self) -> BmiResult<BmiInput> {
        let height = parse_entry(Field::Height, self.field_text(Field::Height))?;
        let weight = parse_entry(Field::Weight, self.field_text(Field::Weight))?;
        let input = BmiInput::new(self.unit_system, height, weight);
        input.validate()?;
        Ok(input)
    }

    /// Run the pipeline on the current entries.
    ///
    /// Rejected entries show the undefined result together with the reason.
    pub fn evaluate(&self) -> Evaluation {
        match self.input() {
            Ok(input) => Evaluation {
                assessment: assess(&input),
                error: None,
            },
            Err(error) => {
                tracing::debug!(%error, "entries rejected");
                Evaluation {
                    assessment: Assessment::undefined(),
                    error: Some(error),
                }
            }
        }
    }
}

fn parse_entry(field: Field, text: &str) -> BmiResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BmiError::missing_field(field.name()));
    }
    text.parse::<f64>()
        .map_err(|_| BmiError::invalid_input(field.name(), text, "Not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmi_core::Category;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(Message::Input(c));
        }
    }

    #[test]
    fn test_starts_with_defaults() {
        let app = App::new(Settings::default());
        assert_eq!(app.unit_system, UnitSystem::Metric);
        assert_eq!(app.field_text(Field::Height), "170.0");
        assert_eq!(app.field_text(Field::Weight), "70.0");

        let eval = app.evaluate();
        assert_eq!(eval.error, None);
        assert_eq!(eval.assessment.bmi, Some(24.2));
        assert_eq!(eval.assessment.category, Category::Normal);
    }

    #[test]
    fn test_toggle_keeps_entries_per_system() {
        let mut app = App::new(Settings::default());
        app.update(Message::ClearField);
        type_text(&mut app, "180");

        app.update(Message::ToggleUnits);
        assert_eq!(app.unit_system, UnitSystem::Imperial);
        assert_eq!(app.field_text(Field::Height), "67.0");
        assert_eq!(app.evaluate().assessment.bmi, Some(24.1));

        app.update(Message::ToggleUnits);
        assert_eq!(app.field_text(Field::Height), "180");
    }

    #[test]
    fn test_editing_focused_field() {
        let mut app = App::new(Settings::default());
        app.update(Message::NextField);
        assert_eq!(app.focus, Field::Weight);

        app.update(Message::Backspace);
        app.update(Message::Backspace);
        assert_eq!(app.field_text(Field::Weight), "70");

        app.update(Message::Input('.'));
        app.update(Message::Input('.'));
        app.update(Message::Input('5'));
        assert_eq!(app.field_text(Field::Weight), "70.5");
        assert_eq!(app.field_text(Field::Height), "170.0");
    }

    #[test]
    fn test_entry_length_is_capped() {
        let mut app = App::new(Settings::default());
        app.update(Message::ClearField);
        type_text(&mut app, "1234567890");
        assert_eq!(app.field_text(Field::Height), "1234567");
    }

    #[test]
    fn test_empty_field_is_undefined() {
        let mut app = App::new(Settings::default());
        app.update(Message::NextField);
        app.update(Message::ClearField);

        let eval = app.evaluate();
        assert_eq!(eval.error, Some(BmiError::missing_field("weight")));
        assert!(!eval.assessment.is_defined());
        assert_eq!(eval.assessment.label(), "—");
        assert!(eval.assessment.recommendations.is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut app = App::new(Settings::default());
        app.update(Message::ClearField);
        type_text(&mut app, "300");

        let eval = app.evaluate();
        assert_eq!(eval.error.as_ref().and_then(|e| e.field()), Some("height"));
        assert!(!eval.assessment.is_defined());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = App::new(Settings::default());
        app.update(Message::ClearField);
        app.update(Message::Reset);
        assert_eq!(app.field_text(Field::Height), "170.0");
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(Message::from_key(key(KeyCode::Char('7'))), Some(Message::Input('7')));
        assert_eq!(Message::from_key(key(KeyCode::Char('.'))), Some(Message::Input('.')));
        assert_eq!(Message::from_key(key(KeyCode::Char('u'))), Some(Message::ToggleUnits));
        assert_eq!(Message::from_key(key(KeyCode::Esc)), Some(Message::Quit));
        assert_eq!(Message::from_key(key(KeyCode::Tab)), Some(Message::NextField));
        assert_eq!(Message::from_key(key(KeyCode::Char('x'))), None);
        assert_eq!(
            Message::from_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Message::Quit)
        );
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Settings::default());
        app.update(Message::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_start_in_imperial() {
        let app = App::new(Settings::default()).with_unit_system(UnitSystem::Imperial);
        assert_eq!(app.field_text(Field::Weight), "154.0");
    }
}

//! Command line arguments.

use std::path::PathBuf;

use bmi_core::{BmiError, BmiInput, BmiResult, Settings, UnitSystem};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "bmi_cli")]
#[command(version, about = "BMI Calculator - Body Mass Index educational tool")]
#[command(long_about = "Interactive BMI calculator. Pass --height and --weight for a one-shot report \
instead of the interactive session. For educational purposes only; not medical advice.")]
pub struct Cli {
    /// Unit system: metric (cm, kg) or imperial (in, lbs)
    #[arg(long, short)]
    pub units: Option<UnitSystem>,

    /// Height in cm (metric) or inches (imperial)
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Weight in kg (metric) or pounds (imperial)
    #[arg(long, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Print the one-shot report as JSON
    #[arg(long)]
    pub json: bool,

    /// Settings file (JSON) with session defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (the interactive session only logs when set)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, short, help = "Enable verbose output")]
    pub verbose: bool,
}

/// What the process should do
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Full-screen interactive session
    Interactive,
    /// Print one result and exit
    Report { input: BmiInput, json: bool },
}

impl Cli {
    /// Decide the mode from the flags.
    ///
    /// `--height` and `--weight` must be given together; `--json` needs both.
    pub fn mode(&self, settings: &Settings) -> BmiResult<Mode> {
        let unit_system = self.unit_system(settings);
        match (self.height, self.weight) {
            (Some(height), Some(weight)) => Ok(Mode::Report {
                input: BmiInput::new(unit_system, height, weight),
                json: self.json,
            }),
            (Some(_), None) => Err(BmiError::missing_field("weight")),
            (None, Some(_)) => Err(BmiError::missing_field("height")),
            (None, None) if self.json => Err(BmiError::missing_field("height")),
            (None, None) => Ok(Mode::Interactive),
        }
    }

    /// `--units` if given, otherwise the settings default
    pub fn unit_system(&self, settings: &Settings) -> UnitSystem {
        self.units.unwrap_or(settings.unit_system)
    }

    pub fn is_interactive(&self) -> bool {
        self.height.is_none() && self.weight.is_none() && !self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bmi_cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_args_is_interactive() {
        let cli = parse(&[]);
        assert!(cli.is_interactive());
        assert_eq!(cli.mode(&Settings::default()).unwrap(), Mode::Interactive);
    }

    #[test]
    fn test_report_mode() {
        let cli = parse(&["--units", "imperial", "--height", "67", "--weight", "154", "--json"]);
        let mode = cli.mode(&Settings::default()).unwrap();
        assert_eq!(
            mode,
            Mode::Report {
                input: BmiInput::imperial(67.0, 154.0),
                json: true
            }
        );
    }

    #[test]
    fn test_units_default_from_settings() {
        let cli = parse(&["--height", "67", "--weight", "154"]);
        let settings = Settings {
            unit_system: UnitSystem::Imperial,
            ..Settings::default()
        };
        assert_eq!(cli.unit_system(&settings), UnitSystem::Imperial);
        assert_eq!(cli.unit_system(&Settings::default()), UnitSystem::Metric);
    }

    #[test]
    fn test_half_specified_is_error() {
        let err = parse(&["--height", "170"]).mode(&Settings::default()).unwrap_err();
        assert_eq!(err.field(), Some("weight"));

        let err = parse(&["--json"]).mode(&Settings::default()).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_negative_values_parse() {
        let cli = parse(&["--height", "170", "--weight", "-5"]);
        assert_eq!(cli.weight, Some(-5.0));
    }

    #[test]
    fn test_bad_unit_system_rejected() {
        let result = Cli::try_parse_from(["bmi_cli", "--units", "cubits"]);
        assert!(result.is_err());
    }
}

//! # BMI Calculator CLI Application
//!
//! Terminal interface for the BMI engine. Built with Ratatui.
//!
//! - No height/weight arguments: full-screen interactive session
//! - `--height` and `--weight`: one-shot report (text, or JSON with `--json`)

mod app;
mod cli;
mod gauge;
mod logger;
mod report;
mod ui;

use std::io;
use std::process;

use bmi_core::{assess, load_settings, BmiError, BmiInput, Settings};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use crate::app::{App, Message};
use crate::cli::{Cli, Mode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    logger::init_logger(cli.verbose, cli.log_file.as_deref(), cli.is_interactive())?;
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let settings = match &cli.config {
        Some(path) => load_settings(path).unwrap_or_else(|e| exit_with_error(&e)),
        None => Settings::default(),
    };

    match cli.mode(&settings).unwrap_or_else(|e| exit_with_error(&e)) {
        Mode::Report { input, json } => print_report(&input, json)?,
        Mode::Interactive => {
            let unit_system = cli.unit_system(&settings);
            run_interactive(App::new(settings).with_unit_system(unit_system))?;
        }
    }

    Ok(())
}

/// One-shot mode: entries must be within the accepted ranges
fn print_report(input: &BmiInput, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = input.validate() {
        tracing::warn!(error = %e, "rejected command line entries");
        exit_with_error(&e);
    }

    let assessment = assess(input);
    tracing::info!(bmi = ?assessment.bmi, category = assessment.label(), "assessment complete");

    if json {
        println!("{}", report::render_json(input, &assessment)?);
    } else {
        print!("{}", report::render_text(input, &assessment));
    }
    Ok(())
}

fn run_interactive(mut app: App) -> io::Result<()> {
    tracing::info!(unit_system = %app.unit_system, "starting interactive session");
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    tracing::info!("session ended");
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(message) = Message::from_key(key) {
                app.update(message);
            }
        }
    }
    Ok(())
}

fn exit_with_error(error: &BmiError) -> ! {
    tracing::error!(code = error.error_code(), "{}", error);
    eprintln!("Error: {}", error);
    if let Ok(json) = serde_json::to_string_pretty(error) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
    process::exit(1);
}

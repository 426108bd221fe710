//! # Trigon CLI Application
//!
//! Terminal host for the triangle calculator. Side lengths come either from
//! the command line (one submission) or from interactive prompts (one
//! submission per three answers, until end of input).
//!
//! Exit codes: 0 when the last submission presented a triangle, 1 when it
//! was rejected, 2 when the form could not be set up.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tri_core::{load_settings, DisplaySettings, Message, Submission, TriangleError, TriangleForm};

mod cli;
mod terminal;

use cli::Cli;
use terminal::{argument_fields, render, Fill, PromptFields};

const EXIT_REJECTED: u8 = 1;
const EXIT_SETUP: u8 = 2;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve settings: flags > env (handled by clap) > settings file > defaults
fn resolve_settings(cli: &Cli) -> Result<DisplaySettings, TriangleError> {
    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => DisplaySettings::default(),
    };
    if let Some(locale) = cli.locale {
        settings.locale = locale;
    }
    if let Some(decimals) = cli.decimals {
        settings.decimals = decimals;
    }
    Ok(settings)
}

fn exit_code(submission: &Submission) -> ExitCode {
    match submission {
        Submission::Presented(_) => ExitCode::SUCCESS,
        Submission::Rejected(_) => ExitCode::from(EXIT_REJECTED),
    }
}

fn run_once(cli: &Cli, settings: DisplaySettings) -> anyhow::Result<ExitCode> {
    let form = match TriangleForm::bind(argument_fields(&cli.sides), settings) {
        Ok(form) => form,
        Err(e) => {
            error!("Required input missing ({}), expected exactly 3 sides", e);
            return Ok(ExitCode::from(EXIT_SETUP));
        }
    };

    let mut display: Vec<Message> = Vec::new();
    let submission = form.submit(&mut display);
    render(&mut io::stdout().lock(), cli.json, &submission, &display)?;
    Ok(exit_code(&submission))
}

fn run_interactive(cli: &Cli, settings: DisplaySettings) -> anyhow::Result<ExitCode> {
    let fields = PromptFields::new();
    let form = TriangleForm::bind(&fields, settings)?;
    info!("Interactive mode, end input (Ctrl-D) to quit");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut display: Vec<Message> = Vec::new();
    let mut last = None;

    loop {
        match fields.fill(&mut input, &mut io::stdout())? {
            Fill::Complete => {
                let submission = form.submit(&mut display);
                let mut out = io::stdout().lock();
                writeln!(out)?;
                render(&mut out, cli.json, &submission, &display)?;
                writeln!(out)?;
                last = Some(submission);
            }
            Fill::Ended { answered: 0 } => break,
            Fill::Ended { answered } => {
                writeln!(io::stdout())?;
                warn!(
                    "Input ended after {} of 3 sides, partial submission dropped",
                    answered
                );
                break;
            }
        }
    }

    Ok(last.as_ref().map_or(ExitCode::SUCCESS, exit_code))
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if cli.sides.len() > 3 {
        error!("Expected at most 3 sides, got {}", cli.sides.len());
        return Ok(ExitCode::from(EXIT_SETUP));
    }

    let settings = match resolve_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            error!("{}", e);
            return Ok(ExitCode::from(EXIT_SETUP));
        }
    };

    if cli.interactive() {
        run_interactive(&cli, settings)
    } else {
        run_once(&cli, settings)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::from(EXIT_SETUP)
        }
    }
}

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tri_core::settings::{Locale, MAX_DECIMALS};

#[derive(Parser, Debug)]
#[command(
    name = "trigon",
    version,
    about = "Check whether three sides make a triangle, classify it and compute its area"
)]
pub struct Cli {
    #[arg(
        value_name = "SIDE",
        allow_negative_numbers = true,
        help = "Three side lengths; omit them all for interactive mode"
    )]
    pub sides: Vec<String>,
    #[arg(long, env = "TRIGON_LOCALE", help = "Message language (en, pl)")]
    pub locale: Option<Locale>,
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(0..=MAX_DECIMALS as i64),
        help = "Decimal places for the area (0-17)"
    )]
    pub decimals: Option<u8>,
    #[arg(long, env = "TRIGON_SETTINGS", help = "JSON settings file")]
    pub settings: Option<PathBuf>,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, action = ArgAction::Count, help = "More log output (repeatable)")]
    pub verbose: u8,
}

impl Cli {
    pub fn interactive(&self) -> bool {
        self.sides.is_empty()
    }
}

use std::path::PathBuf;

use clap::Parser;

use crate::{
    badge::{generator::generate, BadgeOutcome},
    errors::BadgeError,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(
        long,
        default_value = "_tests/coverage.json",
        help = "Path to coverage.json file"
    )]
    coverage_json: PathBuf,

    #[arg(
        long,
        default_value = "_book/tests/coverage-badge.json",
        help = "Path to output badge JSON"
    )]
    output: PathBuf,
}

pub struct BadgeCommand {
    pub coverage_json: PathBuf,
    pub output: PathBuf,
}

impl BadgeCommand {
    pub fn run(&self) -> Result<BadgeOutcome, BadgeError> {
        generate(&self.coverage_json, &self.output)
    }
}

pub fn parse_cli() -> BadgeCommand {
    let cli = Cli::parse();
    BadgeCommand {
        coverage_json: cli.coverage_json,
        output: cli.output,
    }
}

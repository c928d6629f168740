use std::process::ExitCode;

use coverage_badge::{cli::cli_parser::parse_cli, utils::console};

fn main() -> ExitCode {
    match parse_cli().run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            console::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

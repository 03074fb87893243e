//! Swatch CLI — parse, convert and adjust colors from the command line.

mod commands;
mod config;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::config::{Cli, CliConfig};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = CliConfig::resolve(&cli).and_then(|config| {
        logging::init(&config.log_level)?;
        tracing::debug!(?config, "resolved configuration");

        let output = commands::run(&cli.command, &config)?;
        commands::render(&output, config.format)
    });

    match result {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("swatch: {e:#}");
            ExitCode::FAILURE
        }
    }
}

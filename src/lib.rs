use clap::Parser;
use std::process::ExitCode;

pub mod commands;
pub mod services;
pub mod types;
#[cfg(test)]
pub mod test_utils;

use commands::restructure::{restructure_cmds, Cli};

/// Entry point for the `subsort` binary.
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    services::app::log_service::init_logger(cli.verbose);

    match restructure_cmds::execute(&cli) {
        Ok(summary) => {
            if cli.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        log::error!("Failed to serialize summary: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

// Copyright (c) 2024-2025 WALS Explorer Contributors
// SPDX-License-Identifier: Apache-2.0
//
//! WALS Explorer CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // -v wins over --log-level; RUST_LOG still applies per module
    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    match cli.command {
        Commands::Version => {
            println!("{} {}", "WALS Explorer".bold().green(), wals_explorer::VERSION);
            println!("World Atlas of Language Structures browser");
            Ok(())
        }
        _ => {
            if let Err(e) = cli::run(cli) {
                eprintln!("{}", e.to_string().red());
                std::process::exit(1);
            }
            Ok(())
        }
    }
}

//! Spyglass CLI - console task reports for ClickUp spaces.

use std::process;

use clap::Parser;

use spyglass::cli::Cli;
use spyglass::config::Config;
use spyglass::{commands, render};

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  spy --api-key YOUR_API_KEY --space-id YOUR_SPACE_ID");
            eprintln!("  spy -k YOUR_API_KEY -s YOUR_SPACE_ID");
            eprintln!();
            eprintln!("You can also set environment variables:");
            eprintln!("  CLICKUP_API_KEY=YOUR_API_KEY");
            eprintln!("  CLICKUP_SPACE_ID=YOUR_SPACE_ID");
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli, config: &Config) -> spyglass::Result<()> {
    let report = commands::report(config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report, config.due_date_format);
    }

    Ok(())
}

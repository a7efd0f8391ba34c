//! `problemctl`: render Problem Details JSON bodies and look up HTTP reason phrases
//!
//! # Usage
//!
//! ```bash
//! # Minimal 404 problem, every member defaulted
//! problemctl render --status 404
//!
//! # Custom type with extension members
//! problemctl render --type urn:err:x --status 422 --detail "field missing" --ext field=name
//!
//! # Reason phrase lookup, or the whole table
//! problemctl status 429
//! problemctl status
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use problem_details::status::{STATUS_TEXTS, reason_phrase};

use crate::config::CliConfig;
use crate::render::RenderArgs;

/// Problem Details toolbox
#[derive(Parser, Debug)]
#[command(name = "problemctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a problem as JSON
    Render(RenderArgs),
    /// Print the reason phrase of a status code, or the whole table
    Status {
        #[arg(value_name = "CODE")]
        code: Option<u16>,
    },
    /// Print the effective configuration and exit
    Config,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Render(args) => {
            let problem = args.to_problem();
            tracing::info!(status = problem.status_code(), "rendering problem");
            let body = render::render(&problem, &config.defaults, args.pretty || config.pretty)
                .context("failed to encode problem")?;
            println!("{body}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Status { code: Some(code) } => Ok(print_status(code, &config)),
        Commands::Status { code: None } => {
            for (code, phrase) in STATUS_TEXTS {
                println!("{code} {phrase}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config => {
            let json =
                serde_json::to_string_pretty(&config).context("failed to encode configuration")?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_status(code: u16, config: &CliConfig) -> ExitCode {
    if let Some(phrase) = reason_phrase(code) {
        println!("{code} {phrase}");
        ExitCode::SUCCESS
    } else {
        tracing::warn!(code, "status code is not registered");
        println!("{code} {}", config.defaults.unknown_title);
        ExitCode::FAILURE
    }
}

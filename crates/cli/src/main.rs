// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rota - shift recurrence CLI

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod commands;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check, count, list, validate};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::Config;
use crate::error::RotaError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "rota",
    version,
    about = "Rota - recurring shift matching and counting"
)]
struct Cli {
    /// Config file (defaults to $ROTA_CONFIG, then ./rota.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a date is an occurrence of a shift
    Check(check::CheckArgs),
    /// Count the occurrences of a shift
    Count(count::CountArgs),
    /// List occurrence dates of a shift
    List(list::ListArgs),
    /// Validate a shift definition
    Validate(validate::ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<RotaError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    setup_logging(&config);

    let format = cli.format.unwrap_or(config.format);
    match cli.command {
        Commands::Check(args) => check::run(args, format),
        Commands::Count(args) => count::run(args, format),
        Commands::List(args) => list::run(args, format, config.list_limit),
        Commands::Validate(args) => validate::run(args, format),
    }
}

fn setup_logging(config: &Config) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

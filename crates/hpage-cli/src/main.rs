//! # hpage CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hpage_cli::check::{run_check, CheckArgs};
use hpage_cli::render::{run_render, RenderArgs};

/// Home-page content checker.
///
/// Validates the front matter of documentation home pages (hero and
/// feature list) and renders it to JSON for a template layer.
#[derive(Parser, Debug)]
#[command(name = "hpage", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse and validate content files.
    Check(CheckArgs),

    /// Print the render model of a content file as JSON.
    Render(RenderArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("hpage CLI starting");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args),
        Commands::Render(args) => run_render(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

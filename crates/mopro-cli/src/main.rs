//! # mopro CLI entry point
//!
//! Parses command-line arguments, loads the bridge configuration, and
//! dispatches to subcommand handlers. Logs go to stderr so stdout carries
//! only JSON or the verification verdict.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mopro_bridge::Dispatcher;
use mopro_cli::call::{run_call, CallArgs};
use mopro_cli::generate::{run_generate, GenerateArgs};
use mopro_cli::verify::{run_verify, VerifyArgs};
use mopro_engine::MockEngine;

/// mopro bridge CLI.
///
/// Generates and verifies Circom proofs through the same dispatcher a host
/// runtime uses, backed by the deterministic mock engine.
#[derive(Parser, Debug)]
#[command(name = "mopro", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML bridge configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a proof and print the encoded result.
    Generate(GenerateArgs),

    /// Verify an encoded proof result.
    Verify(VerifyArgs),

    /// Replay a JSON method-call envelope and print the reply envelope.
    Call(CallArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match mopro_cli::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(channel = %config.channel, policy = ?config.selector_policy, "bridge configured");

    let dispatcher = Dispatcher::with_config(MockEngine, config);
    let mut stdout = std::io::stdout().lock();

    let result = match &cli.command {
        Commands::Generate(args) => run_generate(args, &dispatcher, &mut stdout),
        Commands::Verify(args) => run_verify(args, &dispatcher, &mut stdout),
        Commands::Call(args) => run_call(args, &dispatcher, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

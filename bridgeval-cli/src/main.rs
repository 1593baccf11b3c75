//! Bridgeval CLI - validator record tooling
//!
//! - `validate`: run the admission gate on a JSON validator record
//! - `encode` / `decode`: translate between JSON and the hex wire encoding
//! - `random`: generate fixture validators (optionally with bridge material)

mod commands;
mod config;

use anyhow::Result;
use bridgeval_keys::KeyType;
use clap::{Parser, Subcommand};
use config::{Config, OutputFormat};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bridgeval", version, about = "Validator record admission and wire tooling")]
struct Cli {
    /// Config file (default: ~/.bridgeval/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the admission gate on a JSON validator record
    Validate {
        /// Path to the validator JSON file
        file: PathBuf,
    },

    /// Print the hex wire encoding of a JSON validator record
    Encode {
        /// Path to the validator JSON file
        file: PathBuf,
    },

    /// Decode a hex wire encoding and check the result
    Decode {
        /// Hex-encoded wire bytes (optional 0x prefix)
        hex: String,
    },

    /// Generate a random validator record
    Random {
        /// Voting power (minimum power with --rand-power)
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        power: i64,

        /// Add a random amount in [0, 1000) to the power
        #[arg(long)]
        rand_power: bool,

        /// Key algorithm (ed25519 or secp256k1)
        #[arg(long)]
        key_type: Option<KeyType>,

        /// Attach BLS key, relayer and challenger addresses
        #[arg(long)]
        with_bridge: bool,

        /// Write the generated private key to this file
        #[arg(long)]
        key_out: Option<PathBuf>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(output) = cli.output {
        config.output = output;
    }

    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::validator::handle(cli.command, &config)
}

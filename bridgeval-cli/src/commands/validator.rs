//! Validator command handlers

use crate::config::{Config, OutputFormat};
use crate::Command;
use anyhow::{Context, Result};
use bridgeval_keys::{save_priv_validator, PrivValidator};
use bridgeval_protocol::{decode_validator, encode_validator};
use bridgeval_types::test_utils::{attach_rand_bridge_material, rand_validator_with_key_type};
use bridgeval_types::Validator;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};

/// Result of running the admission gate, as printed to the operator
#[derive(Debug, PartialEq, Serialize)]
pub struct GateReport {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl GateReport {
    pub fn check(val: &Validator) -> Self {
        match val.validate_basic() {
            Ok(()) => Self {
                valid: true,
                error: None,
                field: None,
            },
            Err(e) => Self {
                valid: false,
                error: Some(e.to_string()),
                field: Some(e.field().to_string()),
            },
        }
    }

    fn exit_code(&self) -> ExitCode {
        if self.valid {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

pub fn handle(command: Command, config: &Config) -> Result<ExitCode> {
    match command {
        Command::Validate { file } => {
            let val = load_validator(&file)?;
            let report = GateReport::check(&val);
            info!(address = %val.address, valid = report.valid, "Validated record");
            print_report(&report, config.output)?;
            Ok(report.exit_code())
        }

        Command::Encode { file } => {
            let val = load_validator(&file)?;
            let bytes = encode_validator(&val).context("failed to encode validator")?;
            debug!(len = bytes.len(), "Encoded validator");
            println!("{}", hex::encode(bytes));
            Ok(ExitCode::SUCCESS)
        }

        Command::Decode { hex: hex_str } => {
            let hex_str = hex_str.trim();
            let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
            let bytes = hex::decode(hex_str).context("input is not valid hex")?;
            let val = decode_validator(&bytes).context("failed to decode validator")?;

            // Decoding does not validate, so run the gate explicitly
            let report = GateReport::check(&val);
            match config.output {
                OutputFormat::Json => {
                    let out = serde_json::json!({ "validator": val, "gate": report });
                    println!("{}", serde_json::to_string_pretty(&out)?);
                }
                OutputFormat::Text => {
                    println!("{}", serde_json::to_string_pretty(&val)?);
                    print_report(&report, config.output)?;
                }
            }
            Ok(report.exit_code())
        }

        Command::Random {
            power,
            rand_power,
            key_type,
            with_bridge,
            key_out,
        } => {
            let key_type = key_type.unwrap_or(config.default_key_type);
            let (mut val, pv) = rand_validator_with_key_type(key_type, rand_power, power);
            if with_bridge {
                attach_rand_bridge_material(&mut val);
            }
            info!(address = %val.address, key_type = %key_type, "Generated validator");

            if let Some(path) = key_out {
                save_priv_validator(&path, &pv)
                    .with_context(|| format!("failed to write key file {}", path.display()))?;
                eprintln!(
                    "{} Key for {} written to {}",
                    "✓".green().bold(),
                    pv.pub_key().address().to_string().cyan(),
                    path.display()
                );
            }

            println!("{}", serde_json::to_string_pretty(&val)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_validator(path: &Path) -> Result<Validator> {
    debug!(path = %path.display(), "Loading validator record");
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse validator record {}", path.display()))
}

fn print_report(report: &GateReport, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Text => match &report.error {
            None => println!("{} valid", "✓".green().bold()),
            Some(error) => println!(
                "{} invalid ({}): {}",
                "✗".red().bold(),
                report.field.as_deref().unwrap_or("-"),
                error.red()
            ),
        },
    }
    Ok(())
}

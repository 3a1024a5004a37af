//! CLI for ECDSA nonce-reuse private key recovery

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use renonce::provider::load_samples;
use renonce::recover::recover_private_key;
use renonce::signature::{
    parse_order, scalar_to_decimal_string, scalar_to_hex_string, SECP256K1_ORDER_HEX,
};
use serde::Serialize;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "renonce")]
#[command(about = "ECDSA private key recovery from nonce-reuse signature pairs")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    Recover {
        #[arg(default_value = "-")]
        input: String,

        #[arg(
            long,
            default_value = SECP256K1_ORDER_HEX,
            help = "Group order n, hex (0x-prefixed or bare) or decimal"
        )]
        order: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(recovered) => {
            if recovered {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Command::Recover { input, order } => {
            let n = parse_order(&order)?;
            let samples = load_samples(&input, &n)?;
            if samples.len() != 2 {
                bail!(
                    "Expected exactly 2 signature samples, got {}",
                    samples.len()
                );
            }

            let (first, second) = (&samples[0], &samples[1]);
            let report = match recover_private_key(
                &first.r, &first.s, &first.z, &second.r, &second.s, &second.z, &n,
            ) {
                Ok(key) => RecoveryReport {
                    recovered: true,
                    private_key_decimal: Some(scalar_to_decimal_string(&key)),
                    private_key_hex: Some(scalar_to_hex_string(&key, &n)),
                    reason: None,
                },
                Err(e) => RecoveryReport {
                    recovered: false,
                    private_key_decimal: None,
                    private_key_hex: None,
                    reason: Some(e.to_string()),
                },
            };

            let output = format_output(&report, cli.json)?;
            println!("{}", output);

            Ok(report.recovered)
        }
    }
}

#[derive(Serialize)]
struct RecoveryReport {
    recovered: bool,
    private_key_decimal: Option<String>,
    private_key_hex: Option<String>,
    reason: Option<String>,
}

fn format_output(report: &RecoveryReport, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut output = String::new();
    if report.recovered {
        output.push_str("Recovered private key:\n");
        output.push_str(&format!(
            "  Decimal: {}\n",
            report.private_key_decimal.as_deref().unwrap_or_default()
        ));
        output.push_str(&format!(
            "  Hex: {}\n",
            report.private_key_hex.as_deref().unwrap_or_default()
        ));
    } else {
        output.push_str("No key recovered.\n");
        if let Some(reason) = &report.reason {
            output.push_str(&format!("  Reason: {}\n", reason));
        }
    }
    Ok(output)
}

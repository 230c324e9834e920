//! # Generate Subcommand
//!
//! Builds a `generateCircomProof` call from flags and prints the encoded
//! proof result as JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mopro_bridge::call::{CIRCUIT_INPUTS, PROOF_LIB, ZKEY_PATH};
use mopro_bridge::request::GENERATE_CIRCOM_PROOF;
use mopro_bridge::{Dispatcher, MethodCall, MethodReply};
use mopro_core::ArgMap;
use mopro_engine::ProofEngine;

/// Arguments for the generate subcommand.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the zkey passed to the engine.
    #[arg(long)]
    pub zkey: String,

    /// Circuit inputs as a JSON object string.
    #[arg(long, conflicts_with = "inputs_file", required_unless_present = "inputs_file")]
    pub inputs: Option<String>,

    /// Read circuit inputs from a file instead.
    #[arg(long)]
    pub inputs_file: Option<PathBuf>,

    /// Proof library ordinal: 0 = arkworks, 1 = rapidsnark.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub proof_lib: i64,

    /// Write the proof to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// Execute the generate subcommand.
pub fn run_generate<E: ProofEngine, W: Write>(
    args: &GenerateArgs,
    dispatcher: &Dispatcher<E>,
    out: &mut W,
) -> Result<u8> {
    let inputs = match (&args.inputs, &args.inputs_file) {
        (Some(inline), _) => inline.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read circuit inputs {}", path.display()))?,
        (None, None) => anyhow::bail!("--inputs or --inputs-file is required"),
    };

    let call = MethodCall::new(GENERATE_CIRCOM_PROOF, ArgMap::new())
        .with_argument(ZKEY_PATH, args.zkey.as_str())
        .with_argument(CIRCUIT_INPUTS, inputs)
        .with_argument(PROOF_LIB, args.proof_lib);

    let reply = dispatcher.on_method_call(&call);
    let MethodReply::Success(value) = &reply else {
        return Err(crate::reply_error(&reply));
    };
    let rendered = serde_json::to_string_pretty(&serde_json::Value::from(value.clone()))?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "proof written");
        }
        None => writeln!(out, "{rendered}")?,
    }
    Ok(0)
}

//! # Verify Subcommand
//!
//! Reads an encoded proof result from a file (or stdin) and verifies it
//! through a `verifyCircomProof` call.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mopro_bridge::call::{PROOF_LIB, PROOF_RESULT, ZKEY_PATH};
use mopro_bridge::request::VERIFY_CIRCOM_PROOF;
use mopro_bridge::{Dispatcher, MethodCall, MethodReply};
use mopro_core::{ArgMap, ArgValue};
use mopro_engine::ProofEngine;

/// Exit code for a proof that was checked and rejected.
pub const EXIT_INVALID: u8 = 2;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to the zkey passed to the engine.
    #[arg(long)]
    pub zkey: String,

    /// Encoded proof result JSON (`-` for stdin).
    #[arg(long)]
    pub proof: PathBuf,

    /// Proof library ordinal: 0 = arkworks, 1 = rapidsnark.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub proof_lib: i64,
}

/// Execute the verify subcommand.
///
/// Prints `true` or `false`. Returns 0 for a valid proof and
/// [`EXIT_INVALID`] for an invalid one.
pub fn run_verify<E: ProofEngine, W: Write>(
    args: &VerifyArgs,
    dispatcher: &Dispatcher<E>,
    out: &mut W,
) -> Result<u8> {
    let payload = ArgValue::from(crate::read_json(&args.proof)?);

    let call = MethodCall::new(VERIFY_CIRCOM_PROOF, ArgMap::new())
        .with_argument(ZKEY_PATH, args.zkey.as_str())
        .with_argument(PROOF_RESULT, payload)
        .with_argument(PROOF_LIB, args.proof_lib);

    let reply = dispatcher.on_method_call(&call);
    match &reply {
        MethodReply::Success(ArgValue::Bool(valid)) => {
            writeln!(out, "{valid}")?;
            Ok(if *valid { 0 } else { EXIT_INVALID })
        }
        MethodReply::Success(other) => {
            anyhow::bail!("verify returned {} instead of bool", other.kind())
        }
        _ => Err(crate::reply_error(&reply)),
    }
}

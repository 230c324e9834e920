//! # Call Subcommand
//!
//! Replays a raw method-call envelope, `{"method": ..., "arguments": {...}}`,
//! and prints the reply envelope. Useful for reproducing exactly what a host
//! sent over the channel.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mopro_bridge::{Dispatcher, MethodCall};
use mopro_engine::ProofEngine;

/// Arguments for the call subcommand.
#[derive(Args, Debug)]
pub struct CallArgs {
    /// Envelope file; reads stdin when omitted or `-`.
    #[arg(default_value = "-")]
    pub envelope: PathBuf,
}

/// Execute the call subcommand. The exit code follows the reply status.
pub fn run_call<E: ProofEngine, W: Write>(
    args: &CallArgs,
    dispatcher: &Dispatcher<E>,
    out: &mut W,
) -> Result<u8> {
    let envelope = crate::read_json(&args.envelope)?;
    let reply = match MethodCall::from_json(envelope) {
        Ok(call) => dispatcher.on_method_call(&call),
        Err(err) => err.into_reply(),
    };
    writeln!(out, "{}", serde_json::to_string_pretty(&reply.to_json())?)?;
    Ok(crate::reply_exit_code(&reply))
}

//! # mopro-cli: Command-Line Front End
//!
//! Provides the `mopro` binary. Every subcommand goes through the same
//! [`Dispatcher`](mopro_bridge::Dispatcher) a host runtime would use, backed
//! by the mock engine.
//!
//! ## Subcommands
//!
//! - `mopro generate`: generate a proof and print the encoded result map.
//! - `mopro verify`: verify an encoded result map read from a file.
//! - `mopro call`: replay a JSON method-call envelope and print the reply.
//!
//! ```bash
//! mopro generate --zkey test.zkey --inputs '{"a":"3","b":"4"}' > proof.json
//! mopro verify --zkey test.zkey --proof proof.json
//! echo '{"method":"doSomethingElse"}' | mopro call
//! ```

pub mod call;
pub mod generate;
pub mod verify;

use std::path::Path;

use anyhow::{Context, Result};
use mopro_bridge::{BridgeConfig, MethodReply};

/// Load the bridge configuration.
///
/// With a path, the file is read as YAML. Without one, the environment is
/// consulted (`MOPRO_CHANNEL`, `MOPRO_SELECTOR_POLICY`).
pub fn load_config(path: Option<&Path>) -> Result<BridgeConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_yaml::from_str::<BridgeConfig>(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => BridgeConfig::from_env()?,
    };
    config.validate()?;
    Ok(config)
}

/// Read a JSON document from a file, or from stdin when the path is `-`.
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let raw = if path == Path::new("-") {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Process exit code for a reply: 0 on success, 1 otherwise.
pub fn reply_exit_code(reply: &MethodReply) -> u8 {
    if reply.is_success() {
        0
    } else {
        1
    }
}

/// Turn a non-success reply into an error carrying its code and message.
pub(crate) fn reply_error(reply: &MethodReply) -> anyhow::Error {
    match reply {
        MethodReply::Error { code, message, .. } => anyhow::anyhow!("{code}: {message}"),
        MethodReply::NotImplemented => anyhow::anyhow!("method not implemented"),
        MethodReply::Success(_) => anyhow::anyhow!("unexpected success reply"),
    }
}

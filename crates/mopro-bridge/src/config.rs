//! Bridge configuration.
//!
//! Defaults match what host callers expect today: the `mopro_flutter`
//! channel and the lenient selector. Override via environment variables or
//! a deserialized config file.

use mopro_core::{SelectorError, SelectorPolicy};
use serde::{Deserialize, Serialize};

/// Channel name registered by the host plugin.
pub const DEFAULT_CHANNEL: &str = "mopro_flutter";

/// Configuration for a [`crate::Dispatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    /// Method channel the dispatcher serves. Used for log context only.
    pub channel: String,
    /// Treatment of out-of-range `proofLib` ordinals.
    pub selector_policy: SelectorPolicy,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            selector_policy: SelectorPolicy::default(),
        }
    }
}

impl BridgeConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `MOPRO_CHANNEL` (default: `mopro_flutter`)
    /// - `MOPRO_SELECTOR_POLICY`: `lenient` or `strict` (default: `lenient`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(channel) = lookup("MOPRO_CHANNEL") {
            if channel.trim().is_empty() {
                return Err(ConfigError::EmptyChannel("MOPRO_CHANNEL".to_string()));
            }
            config.channel = channel;
        }
        if let Some(policy) = lookup("MOPRO_SELECTOR_POLICY") {
            config.selector_policy =
                policy
                    .parse()
                    .map_err(|source| ConfigError::InvalidPolicy {
                        var: "MOPRO_SELECTOR_POLICY".to_string(),
                        source,
                    })?;
        }
        Ok(config)
    }

    /// Check invariants that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel.trim().is_empty() {
            return Err(ConfigError::EmptyChannel("channel".to_string()));
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyChannel(String),
    #[error("invalid {var}: {source}")]
    InvalidPolicy {
        var: String,
        #[source]
        source: SelectorError,
    },
}

//! # Proof-Library Selector
//!
//! The two interchangeable native backends, and the policy that maps an
//! integer ordinal received at the boundary onto one of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectorError;

/// Native backend used to generate or verify a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofLib {
    /// Ordinal `0`.
    Arkworks,
    /// Ordinal `1`.
    Rapidsnark,
}

impl ProofLib {
    /// Boundary ordinal of this variant.
    pub const fn ordinal(self) -> i64 {
        match self {
            ProofLib::Arkworks => 0,
            ProofLib::Rapidsnark => 1,
        }
    }

    /// Lowercase name, as used in logs and serialized config.
    pub const fn as_str(self) -> &'static str {
        match self {
            ProofLib::Arkworks => "arkworks",
            ProofLib::Rapidsnark => "rapidsnark",
        }
    }

    /// Resolve a boundary ordinal.
    ///
    /// `0` is always `Arkworks` and `1` is always `Rapidsnark`. Any other
    /// value falls through to `Rapidsnark` under [`SelectorPolicy::Lenient`]
    /// and is rejected under [`SelectorPolicy::Strict`].
    ///
    /// # Errors
    ///
    /// Returns `SelectorError::UnknownOrdinal` for an out-of-range ordinal
    /// under the strict policy.
    pub fn from_ordinal(ordinal: i64, policy: SelectorPolicy) -> Result<Self, SelectorError> {
        match (ordinal, policy) {
            (0, _) => Ok(ProofLib::Arkworks),
            (1, _) | (_, SelectorPolicy::Lenient) => Ok(ProofLib::Rapidsnark),
            (other, SelectorPolicy::Strict) => Err(SelectorError::UnknownOrdinal(other)),
        }
    }
}

impl fmt::Display for ProofLib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How out-of-range selector ordinals are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorPolicy {
    /// Anything other than `0` selects `Rapidsnark`. Compatible with
    /// existing host callers.
    #[default]
    Lenient,
    /// Only `0` and `1` are accepted.
    Strict,
}

impl FromStr for SelectorPolicy {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(SelectorPolicy::Lenient),
            "strict" => Ok(SelectorPolicy::Strict),
            _ => Err(SelectorError::UnknownPolicy(s.to_string())),
        }
    }
}

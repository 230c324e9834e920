//! # Error Types
//!
//! Errors raised while moving values between the typed proof model and the
//! transport-neutral argument tree.

use thiserror::Error;

/// Error while decoding a transport-neutral value into a typed proof.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A required key is absent, or its value has the wrong shape.
    ///
    /// `path` is the dotted location inside the decoded tree
    /// (e.g. `proof.b.x[1]`); `found` is `"absent"` for a missing key.
    #[error("type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        /// Dotted path of the offending value.
        path: String,
        /// Shape the codec required at that path.
        expected: &'static str,
        /// Shape actually present.
        found: &'static str,
    },
}

impl CodecError {
    /// Dotted path of the value that failed to decode.
    pub fn path(&self) -> &str {
        match self {
            CodecError::TypeMismatch { path, .. } => path,
        }
    }
}

/// Error while resolving a proof-library selector or policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// Ordinal outside `{0, 1}` under [`crate::SelectorPolicy::Strict`].
    #[error("unknown proof library ordinal {0}; expected 0 (arkworks) or 1 (rapidsnark)")]
    UnknownOrdinal(i64),

    /// Unrecognized selector policy name.
    #[error("unknown selector policy '{0}'; expected 'lenient' or 'strict'")]
    UnknownPolicy(String),
}

//! # Proof Engine Trait
//!
//! The capability the dispatcher consumes: generate a Circom proof from a
//! zkey and circuit inputs, or verify one. Native backends, the mock, and
//! test doubles all implement this trait, so the dispatcher never knows
//! which one it is driving.
//!
//! ## Security Invariant
//!
//! The trait requires `Send + Sync`. A single engine may be shared by
//! concurrent dispatch calls; implementations hold no per-call state.

use std::sync::Arc;

use mopro_core::{CircomProofResult, ProofLib};
use thiserror::Error;

/// Failure reported by a proof engine.
///
/// The dispatcher forwards these verbatim; it never inspects or retries
/// them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Circuit inputs could not be turned into a witness.
    #[error("witness error: {0}")]
    Witness(String),
    /// Proof generation failed.
    #[error("prover error: {0}")]
    Prover(String),
    /// Verification could not be carried out (not the same as an invalid proof).
    #[error("verifier error: {0}")]
    Verifier(String),
    /// The zkey could not be located or loaded.
    #[error("key error: {0}")]
    Key(String),
    /// The selected backend is not available in this build.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

impl EngineError {
    /// The engine's own message, without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            EngineError::Witness(m)
            | EngineError::Prover(m)
            | EngineError::Verifier(m)
            | EngineError::Key(m)
            | EngineError::NotImplemented(m) => m,
        }
    }

    /// Stable category name, surfaced to callers alongside the message.
    pub const fn kind(&self) -> &'static str {
        match self {
            EngineError::Witness(_) => "witness",
            EngineError::Prover(_) => "prover",
            EngineError::Verifier(_) => "verifier",
            EngineError::Key(_) => "key",
            EngineError::NotImplemented(_) => "not_implemented",
        }
    }
}

/// A native Circom proof engine.
pub trait ProofEngine: Send + Sync {
    /// Generate a proof for `circuit_inputs` (a JSON object of signal
    /// values, opaque to the caller) using the key at `zkey_path`.
    fn generate(
        &self,
        zkey_path: &str,
        circuit_inputs: &str,
        proof_lib: ProofLib,
    ) -> Result<CircomProofResult, EngineError>;

    /// Verify `proof` against the key at `zkey_path`.
    ///
    /// `Ok(false)` means the proof was checked and rejected; `Err` means
    /// the check could not be performed.
    fn verify(
        &self,
        zkey_path: &str,
        proof: &CircomProofResult,
        proof_lib: ProofLib,
    ) -> Result<bool, EngineError>;
}

impl<E: ProofEngine + ?Sized> ProofEngine for &E {
    fn generate(
        &self,
        zkey_path: &str,
        circuit_inputs: &str,
        proof_lib: ProofLib,
    ) -> Result<CircomProofResult, EngineError> {
        (**self).generate(zkey_path, circuit_inputs, proof_lib)
    }

    fn verify(
        &self,
        zkey_path: &str,
        proof: &CircomProofResult,
        proof_lib: ProofLib,
    ) -> Result<bool, EngineError> {
        (**self).verify(zkey_path, proof, proof_lib)
    }
}

impl<E: ProofEngine + ?Sized> ProofEngine for Arc<E> {
    fn generate(
        &self,
        zkey_path: &str,
        circuit_inputs: &str,
        proof_lib: ProofLib,
    ) -> Result<CircomProofResult, EngineError> {
        (**self).generate(zkey_path, circuit_inputs, proof_lib)
    }

    fn verify(
        &self,
        zkey_path: &str,
        proof: &CircomProofResult,
        proof_lib: ProofLib,
    ) -> Result<bool, EngineError> {
        (**self).verify(zkey_path, proof, proof_lib)
    }
}

impl<E: ProofEngine + ?Sized> ProofEngine for Box<E> {
    fn generate(
        &self,
        zkey_path: &str,
        circuit_inputs: &str,
        proof_lib: ProofLib,
    ) -> Result<CircomProofResult, EngineError> {
        (**self).generate(zkey_path, circuit_inputs, proof_lib)
    }

    fn verify(
        &self,
        zkey_path: &str,
        proof: &CircomProofResult,
        proof_lib: ProofLib,
    ) -> Result<bool, EngineError> {
        (**self).verify(zkey_path, proof, proof_lib)
    }
}

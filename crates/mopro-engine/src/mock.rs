//! # Mock Proof Engine
//!
//! A deterministic, transparent stand-in for the native Circom backends.
//! It lets the bridge be exercised end to end without native code.
//!
//! ## How It Works
//!
//! - The witness is the JSON object of circuit inputs. Every signal must be
//!   a non-negative integer (JSON number or decimal string), or an array of
//!   them. The single public output is the product of all signals, as in
//!   the Circom `Multiplier` example: `{"a": "3", "b": "4"}` gives `["12"]`.
//! - Proof coordinates are decimal strings derived from
//!   `SHA256(tag || zkey_path || proof_lib || inputs)`, so a proof is bound
//!   to its key, backend, and public inputs.
//! - `verify()` recomputes the coordinates and compares.
//!
//! ## Security Warning
//!
//! **NOT A PROOF.** Anyone can recompute these coordinates. The mock exists
//! for development and testing only.

use mopro_core::{CircomProof, CircomProofResult, ProofLib, G1, G2};
use parking_lot::Mutex;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::traits::{EngineError, ProofEngine};

/// Protocol tag stamped on mock proofs.
pub const MOCK_PROTOCOL: &str = "groth16";
/// Curve tag stamped on mock proofs.
pub const MOCK_CURVE: &str = "bn128";

const DOMAIN_TAG: &[u8] = b"mopro-mock-engine/v1";

/// Deterministic mock engine. Both backends are simulated.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockEngine;

impl MockEngine {
    pub fn new() -> Self {
        Self
    }
}

impl ProofEngine for MockEngine {
    fn generate(
        &self,
        zkey_path: &str,
        circuit_inputs: &str,
        proof_lib: ProofLib,
    ) -> Result<CircomProofResult, EngineError> {
        check_zkey(zkey_path)?;
        let output = witness_product(circuit_inputs)?;
        let inputs = vec![output.to_string()];
        let proof = derive_proof(zkey_path, proof_lib, &inputs);
        tracing::debug!(zkey_path, %proof_lib, public_output = %output, "mock proof generated");
        Ok(CircomProofResult { proof, inputs })
    }

    fn verify(
        &self,
        zkey_path: &str,
        proof: &CircomProofResult,
        proof_lib: ProofLib,
    ) -> Result<bool, EngineError> {
        check_zkey(zkey_path)?;
        if proof.proof.protocol != MOCK_PROTOCOL {
            return Err(EngineError::Verifier(format!(
                "unsupported protocol '{}'",
                proof.proof.protocol
            )));
        }
        if proof.proof.curve != MOCK_CURVE {
            return Err(EngineError::Verifier(format!(
                "unsupported curve '{}'",
                proof.proof.curve
            )));
        }
        let expected = derive_proof(zkey_path, proof_lib, &proof.inputs);
        Ok(expected == proof.proof)
    }
}

fn check_zkey(zkey_path: &str) -> Result<(), EngineError> {
    if zkey_path.trim().is_empty() {
        return Err(EngineError::Key("zkey path is empty".to_string()));
    }
    Ok(())
}

/// Multiply every signal in the input object.
fn witness_product(circuit_inputs: &str) -> Result<u128, EngineError> {
    let parsed: Value = serde_json::from_str(circuit_inputs)
        .map_err(|e| EngineError::Witness(format!("circuit inputs are not valid JSON: {e}")))?;
    let Value::Object(signals) = parsed else {
        return Err(EngineError::Witness(
            "circuit inputs must be a JSON object".to_string(),
        ));
    };
    if signals.is_empty() {
        return Err(EngineError::Witness("no input signals".to_string()));
    }

    let mut product: u128 = 1;
    for (name, value) in &signals {
        for signal in flatten_signal(name, value)? {
            product = product.checked_mul(signal).ok_or_else(|| {
                EngineError::Witness(format!("signal '{name}' overflows the mock field"))
            })?;
        }
    }
    Ok(product)
}

fn flatten_signal(name: &str, value: &Value) -> Result<Vec<u128>, EngineError> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| flatten_signal(name, item))
            .collect::<Result<Vec<_>, _>>()
            .map(|nested| nested.into_iter().flatten().collect()),
        Value::Number(n) => n
            .as_u64()
            .map(|v| vec![u128::from(v)])
            .ok_or_else(|| bad_signal(name, value)),
        Value::String(s) => s
            .trim()
            .parse::<u128>()
            .map(|v| vec![v])
            .map_err(|_| bad_signal(name, value)),
        _ => Err(bad_signal(name, value)),
    }
}

fn bad_signal(name: &str, value: &Value) -> EngineError {
    EngineError::Witness(format!(
        "signal '{name}' is not a non-negative integer: {value}"
    ))
}

fn derive_proof(zkey_path: &str, proof_lib: ProofLib, inputs: &[String]) -> CircomProof {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    hasher.update((zkey_path.len() as u64).to_be_bytes());
    hasher.update(zkey_path.as_bytes());
    hasher.update([proof_lib.ordinal() as u8]);
    for input in inputs {
        hasher.update((input.len() as u64).to_be_bytes());
        hasher.update(input.as_bytes());
    }
    let seed = hasher.finalize();

    let mut counter = 0u8;
    let mut next = || {
        counter += 1;
        let mut h = Sha256::new();
        h.update(seed.as_slice());
        h.update([counter]);
        let block = h.finalize();
        let mut limb = [0u8; 16];
        limb.copy_from_slice(&block[..16]);
        u128::from_be_bytes(limb).to_string()
    };

    CircomProof {
        a: G1::new(next(), next(), "1"),
        b: G2::new(
            vec![next(), next()],
            vec![next(), next()],
            vec!["1".to_string(), "0".to_string()],
        ),
        c: G1::new(next(), next(), "1"),
        protocol: MOCK_PROTOCOL.to_string(),
        curve: MOCK_CURVE.to_string(),
    }
}

/// One call observed by a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Generate {
        zkey_path: String,
        circuit_inputs: String,
        proof_lib: ProofLib,
    },
    Verify {
        zkey_path: String,
        proof: CircomProofResult,
        proof_lib: ProofLib,
    },
}

/// Wraps an engine and records every call made to it.
#[derive(Debug, Default)]
pub struct RecordingEngine<E> {
    inner: E,
    calls: Mutex<Vec<EngineCall>>,
}

impl<E: ProofEngine> RecordingEngine<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls observed so far, oldest first.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl<E: ProofEngine> ProofEngine for RecordingEngine<E> {
    fn generate(
        &self,
        zkey_path: &str,
        circuit_inputs: &str,
        proof_lib: ProofLib,
    ) -> Result<CircomProofResult, EngineError> {
        self.calls.lock().push(EngineCall::Generate {
            zkey_path: zkey_path.to_string(),
            circuit_inputs: circuit_inputs.to_string(),
            proof_lib,
        });
        self.inner.generate(zkey_path, circuit_inputs, proof_lib)
    }

    fn verify(
        &self,
        zkey_path: &str,
        proof: &CircomProofResult,
        proof_lib: ProofLib,
    ) -> Result<bool, EngineError> {
        self.calls.lock().push(EngineCall::Verify {
            zkey_path: zkey_path.to_string(),
            proof: proof.clone(),
            proof_lib,
        });
        self.inner.verify(zkey_path, proof, proof_lib)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_inputs_produce_product() {
        let result = MockEngine
            .generate("test.zkey", r#"{"a":"3","b":"4"}"#, ProofLib::Arkworks)
            .unwrap();
        assert_eq!(result.inputs, vec!["12".to_string()]);
        assert_eq!(result.proof.protocol, "groth16");
        assert_eq!(result.proof.curve, "bn128");
        assert_eq!(result.proof.b.x.len(), 2);
    }

    #[test]
    fn numbers_and_arrays_are_accepted() {
        let result = MockEngine
            .generate("k.zkey", r#"{"a": 2, "b": ["3", 5]}"#, ProofLib::Rapidsnark)
            .unwrap();
        assert_eq!(result.inputs, vec!["30".to_string()]);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = MockEngine.generate("k.zkey", r#"{"a":"3","b":"4"}"#, ProofLib::Arkworks);
        let b = MockEngine.generate("k.zkey", r#"{"b":"4","a":"3"}"#, ProofLib::Arkworks);
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn proof_binds_key_and_backend() {
        let inputs = r#"{"a":"3","b":"4"}"#;
        let base = MockEngine.generate("k.zkey", inputs, ProofLib::Arkworks).unwrap();
        let other_key = MockEngine.generate("j.zkey", inputs, ProofLib::Arkworks).unwrap();
        let other_lib = MockEngine.generate("k.zkey", inputs, ProofLib::Rapidsnark).unwrap();
        assert_ne!(base.proof, other_key.proof);
        assert_ne!(base.proof, other_lib.proof);
    }

    #[test]
    fn verify_accepts_own_proof() {
        let result = MockEngine
            .generate("test.zkey", r#"{"a":"3","b":"4"}"#, ProofLib::Arkworks)
            .unwrap();
        assert!(MockEngine.verify("test.zkey", &result, ProofLib::Arkworks).unwrap());
    }

    #[test]
    fn verify_rejects_tampered_inputs_or_key() {
        let mut result = MockEngine
            .generate("test.zkey", r#"{"a":"3","b":"4"}"#, ProofLib::Arkworks)
            .unwrap();
        assert!(!MockEngine.verify("other.zkey", &result, ProofLib::Arkworks).unwrap());
        assert!(!MockEngine.verify("test.zkey", &result, ProofLib::Rapidsnark).unwrap());
        result.inputs = vec!["13".to_string()];
        assert!(!MockEngine.verify("test.zkey", &result, ProofLib::Arkworks).unwrap());
    }

    #[test]
    fn verify_rejects_unknown_curve_as_error() {
        let mut result = MockEngine
            .generate("test.zkey", r#"{"a":"1"}"#, ProofLib::Arkworks)
            .unwrap();
        result.proof.curve = "bls12381".to_string();
        let err = MockEngine
            .verify("test.zkey", &result, ProofLib::Arkworks)
            .unwrap_err();
        assert!(matches!(err, EngineError::Verifier(_)));
    }

    #[test]
    fn bad_circuit_inputs_are_witness_errors() {
        for inputs in [
            "not json",
            "[1, 2]",
            "{}",
            r#"{"a": -1}"#,
            r#"{"a": 1.5}"#,
            r#"{"a": "x"}"#,
            r#"{"a": true}"#,
        ] {
            let err = MockEngine
                .generate("test.zkey", inputs, ProofLib::Arkworks)
                .unwrap_err();
            assert!(matches!(err, EngineError::Witness(_)), "{inputs}: {err}");
        }
    }

    #[test]
    fn overflow_is_witness_error() {
        let big = u64::MAX;
        let inputs = format!(r#"{{"a": {big}, "b": {big}, "c": {big}}}"#);
        let err = MockEngine
            .generate("test.zkey", &inputs, ProofLib::Arkworks)
            .unwrap_err();
        assert!(err.message().contains("overflows"));
    }

    #[test]
    fn empty_zkey_is_key_error() {
        let err = MockEngine
            .generate("  ", r#"{"a":"1"}"#, ProofLib::Arkworks)
            .unwrap_err();
        assert_eq!(err, EngineError::Key("zkey path is empty".to_string()));
    }

    #[test]
    fn recording_engine_records_in_order() {
        let engine = RecordingEngine::new(MockEngine);
        let result = engine
            .generate("test.zkey", r#"{"a":"2"}"#, ProofLib::Rapidsnark)
            .unwrap();
        engine.verify("test.zkey", &result, ProofLib::Rapidsnark).unwrap();

        let calls = engine.calls();
        assert_eq!(calls.len(), 2);
        assert!(matches!(
            &calls[0],
            EngineCall::Generate { proof_lib: ProofLib::Rapidsnark, .. }
        ));
        assert!(matches!(&calls[1], EngineCall::Verify { proof, .. } if *proof == result));
    }
}

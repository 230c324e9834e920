//! # Requests
//!
//! The two operations the bridge serves, as a closed tagged union. Parsing
//! a [`MethodCall`] into a [`Request`] performs all argument validation and
//! proof decoding, so by the time an engine is involved every field is
//! typed.
//!
//! ## Validation Order
//!
//! - generate: `zkeyPath`, `circuitInputs`, `proofLib` presence, then the
//!   selector.
//! - verify: `zkeyPath`, `proofResult`, `proofLib` presence, then the proof
//!   decode, then the selector.

use mopro_core::{decode_proof_result, CircomProofResult, ProofLib, SelectorPolicy};

use crate::call::{MethodCall, CIRCUIT_INPUTS, PROOF_LIB, PROOF_RESULT, ZKEY_PATH};
use crate::error::BridgeError;

/// Wire name of the generate operation.
pub const GENERATE_CIRCOM_PROOF: &str = "generateCircomProof";
/// Wire name of the verify operation.
pub const VERIFY_CIRCOM_PROOF: &str = "verifyCircomProof";

/// Operations served by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Generate,
    Verify,
}

impl Operation {
    /// Resolve a method name. The short names `generate` and `verify` are
    /// accepted as aliases of the wire names.
    pub fn from_method(name: &str) -> Option<Self> {
        match name {
            GENERATE_CIRCOM_PROOF | "generate" => Some(Operation::Generate),
            VERIFY_CIRCOM_PROOF | "verify" => Some(Operation::Verify),
            _ => None,
        }
    }

    pub const fn method_name(self) -> &'static str {
        match self {
            Operation::Generate => GENERATE_CIRCOM_PROOF,
            Operation::Verify => VERIFY_CIRCOM_PROOF,
        }
    }
}

/// Fully validated generate request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub zkey_path: String,
    /// Serialized circuit inputs, passed to the engine untouched.
    pub circuit_inputs: String,
    pub proof_lib: ProofLib,
}

/// Fully validated verify request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    pub zkey_path: String,
    pub proof: CircomProofResult,
    pub proof_lib: ProofLib,
}

/// A parsed, typed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Generate(GenerateRequest),
    Verify(VerifyRequest),
}

impl Request {
    /// Validate a method call and build the typed request.
    ///
    /// # Errors
    ///
    /// - `UnsupportedOperation` for an unknown method name.
    /// - `Argument` for a missing argument, or an out-of-range selector
    ///   under [`SelectorPolicy::Strict`].
    /// - `TypeMismatch` for a present argument of the wrong shape, or a
    ///   proof payload that fails to decode.
    pub fn parse(call: &MethodCall, policy: SelectorPolicy) -> Result<Self, BridgeError> {
        match Operation::from_method(&call.method) {
            Some(Operation::Generate) => parse_generate(call, policy).map(Request::Generate),
            Some(Operation::Verify) => parse_verify(call, policy).map(Request::Verify),
            None => Err(BridgeError::UnsupportedOperation(call.method.clone())),
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            Request::Generate(_) => Operation::Generate,
            Request::Verify(_) => Operation::Verify,
        }
    }

    pub fn proof_lib(&self) -> ProofLib {
        match self {
            Request::Generate(r) => r.proof_lib,
            Request::Verify(r) => r.proof_lib,
        }
    }
}

fn parse_generate(call: &MethodCall, policy: SelectorPolicy) -> Result<GenerateRequest, BridgeError> {
    let zkey_path = call.required_str(ZKEY_PATH, "zkeyPath")?;
    let circuit_inputs = call.required_str(CIRCUIT_INPUTS, "inputs")?;
    let ordinal = call.required_int(PROOF_LIB, "proofLib")?;
    let proof_lib = resolve_proof_lib(ordinal, policy)?;

    Ok(GenerateRequest {
        zkey_path: zkey_path.to_string(),
        circuit_inputs: circuit_inputs.to_string(),
        proof_lib,
    })
}

fn parse_verify(call: &MethodCall, policy: SelectorPolicy) -> Result<VerifyRequest, BridgeError> {
    let zkey_path = call.required_str(ZKEY_PATH, "zkeyPath")?;
    let payload = call.required_map(PROOF_RESULT, "proof")?;
    let ordinal = call.required_int(PROOF_LIB, "proofLib")?;
    let proof = decode_proof_result(payload)?;
    let proof_lib = resolve_proof_lib(ordinal, policy)?;

    Ok(VerifyRequest {
        zkey_path: zkey_path.to_string(),
        proof,
        proof_lib,
    })
}

fn resolve_proof_lib(ordinal: i64, policy: SelectorPolicy) -> Result<ProofLib, BridgeError> {
    ProofLib::from_ordinal(ordinal, policy).map_err(|e| BridgeError::Argument {
        argument: PROOF_LIB,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mopro_core::{encode_proof_result, ArgMap, ArgValue, CircomProof, G1, G2};

    fn sample_proof() -> CircomProofResult {
        CircomProofResult {
            proof: CircomProof {
                a: G1::new("1", "2", "1"),
                b: G2::new(
                    vec!["3".into(), "4".into()],
                    vec!["5".into(), "6".into()],
                    vec!["1".into(), "0".into()],
                ),
                c: G1::new("7", "8", "1"),
                protocol: "groth16".into(),
                curve: "bn128".into(),
            },
            inputs: vec!["12".into()],
        }
    }

    fn generate_call() -> MethodCall {
        MethodCall::new(GENERATE_CIRCOM_PROOF, ArgMap::new())
            .with_argument(ZKEY_PATH, "test.zkey")
            .with_argument(CIRCUIT_INPUTS, r#"{"a":"3","b":"4"}"#)
            .with_argument(PROOF_LIB, 0i64)
    }

    fn verify_call() -> MethodCall {
        MethodCall::new(VERIFY_CIRCOM_PROOF, ArgMap::new())
            .with_argument(ZKEY_PATH, "test.zkey")
            .with_argument(PROOF_RESULT, encode_proof_result(&sample_proof()))
            .with_argument(PROOF_LIB, 1i64)
    }

    #[test]
    fn parses_generate() {
        let req = Request::parse(&generate_call(), SelectorPolicy::Lenient).unwrap();
        assert_eq!(
            req,
            Request::Generate(GenerateRequest {
                zkey_path: "test.zkey".into(),
                circuit_inputs: r#"{"a":"3","b":"4"}"#.into(),
                proof_lib: ProofLib::Arkworks,
            })
        );
        assert_eq!(req.operation(), Operation::Generate);
    }

    #[test]
    fn parses_verify() {
        let req = Request::parse(&verify_call(), SelectorPolicy::Lenient).unwrap();
        match req {
            Request::Verify(v) => {
                assert_eq!(v.proof, sample_proof());
                assert_eq!(v.proof_lib, ProofLib::Rapidsnark);
            }
            other => panic!("expected verify, got {other:?}"),
        }
    }

    #[test]
    fn missing_generate_arguments_use_host_labels() {
        for (key, message) in [
            (ZKEY_PATH, "Missing zkeyPath"),
            (CIRCUIT_INPUTS, "Missing inputs"),
            (PROOF_LIB, "Missing proofLib"),
        ] {
            let mut call = generate_call();
            call.arguments.remove(key);
            let err = Request::parse(&call, SelectorPolicy::Lenient).unwrap_err();
            assert_eq!(
                err,
                BridgeError::Argument {
                    argument: key,
                    message: message.into()
                }
            );
        }
    }

    #[test]
    fn missing_verify_proof_uses_host_label() {
        let mut call = verify_call();
        call.arguments.remove(PROOF_RESULT);
        let err = Request::parse(&call, SelectorPolicy::Lenient).unwrap_err();
        assert_eq!(err.to_string(), "Missing proof");
    }

    #[test]
    fn missing_argument_wins_over_malformed_proof() {
        let mut call = verify_call();
        call.arguments
            .insert(PROOF_RESULT.into(), ArgValue::Map(ArgMap::new()));
        call.arguments.remove(PROOF_LIB);
        let err = Request::parse(&call, SelectorPolicy::Lenient).unwrap_err();
        assert_eq!(err.code(), "ARGUMENT_ERROR");
    }

    #[test]
    fn malformed_proof_is_type_mismatch() {
        let mut call = verify_call();
        call.arguments
            .insert(PROOF_RESULT.into(), ArgValue::Map(ArgMap::new()));
        let err = Request::parse(&call, SelectorPolicy::Lenient).unwrap_err();
        assert_eq!(err.code(), "TYPE_MISMATCH");
        assert!(err.to_string().contains("`proof`"));
    }

    #[test]
    fn lenient_selector_falls_through() {
        for (ordinal, expected) in [
            (0, ProofLib::Arkworks),
            (1, ProofLib::Rapidsnark),
            (2, ProofLib::Rapidsnark),
        ] {
            let call = generate_call().with_argument(PROOF_LIB, ordinal as i64);
            let req = Request::parse(&call, SelectorPolicy::Lenient).unwrap();
            assert_eq!(req.proof_lib(), expected);
        }
    }

    #[test]
    fn strict_selector_rejects_out_of_range() {
        let call = generate_call().with_argument(PROOF_LIB, 2i64);
        let err = Request::parse(&call, SelectorPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Argument {
                argument: PROOF_LIB,
                ..
            }
        ));
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(Operation::from_method("generate"), Some(Operation::Generate));
        assert_eq!(Operation::from_method("verify"), Some(Operation::Verify));
        assert_eq!(Operation::from_method("doSomethingElse"), None);
        assert_eq!(Operation::Verify.method_name(), "verifyCircomProof");
    }

    #[test]
    fn unknown_method_is_unsupported() {
        let call = MethodCall::new("doSomethingElse", ArgMap::new());
        let err = Request::parse(&call, SelectorPolicy::Lenient).unwrap_err();
        assert_eq!(err, BridgeError::UnsupportedOperation("doSomethingElse".into()));
    }
}

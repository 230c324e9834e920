//! # Method Call
//!
//! An inbound call: a method name plus a map of named arguments, exactly as
//! the host hands it over. Typed extraction lives here so that the request
//! parser reads as a list of required fields.
//!
//! An argument that is absent or `null` counts as missing
//! (`ArgumentError`). An argument that is present with the wrong shape is a
//! `TypeMismatch`.

use mopro_core::{ArgMap, ArgValue, CodecError};
use serde_json::Value;

use crate::error::BridgeError;

/// Wire name of the zkey path argument.
pub const ZKEY_PATH: &str = "zkeyPath";
/// Wire name of the circuit inputs argument (generate).
pub const CIRCUIT_INPUTS: &str = "circuitInputs";
/// Wire name of the proof payload argument (verify).
pub const PROOF_RESULT: &str = "proofResult";
/// Wire name of the proof-library ordinal argument.
pub const PROOF_LIB: &str = "proofLib";

/// A named operation with its untyped arguments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodCall {
    pub method: String,
    pub arguments: ArgMap,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: ArgMap) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }

    /// Builder-style argument insertion.
    pub fn with_argument(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Look up an argument. `null` is reported as absent.
    pub fn argument(&self, key: &str) -> Option<&ArgValue> {
        self.arguments.get(key).filter(|v| !v.is_null())
    }

    /// Parse a JSON envelope: `{"method": str, "arguments": {...}}`.
    ///
    /// `arguments` may be omitted or `null` for a call without arguments.
    ///
    /// # Errors
    ///
    /// Returns `BridgeError::TypeMismatch` if the envelope is not an object,
    /// `method` is not a string, or `arguments` is not an object.
    pub fn from_json(envelope: Value) -> Result<Self, BridgeError> {
        let mut root = match ArgValue::from(envelope) {
            ArgValue::Map(m) => m,
            other => return Err(envelope_mismatch("envelope", "map", other.kind())),
        };
        let method = match root.remove("method") {
            Some(ArgValue::String(s)) => s,
            Some(other) => return Err(envelope_mismatch("method", "string", other.kind())),
            None => return Err(envelope_mismatch("method", "string", "absent")),
        };
        let arguments = match root.remove("arguments") {
            Some(ArgValue::Map(m)) => m,
            Some(ArgValue::Null) | None => ArgMap::new(),
            Some(other) => return Err(envelope_mismatch("arguments", "map", other.kind())),
        };
        Ok(Self { method, arguments })
    }

    pub(crate) fn required_str(&self, key: &'static str, label: &str) -> Result<&str, BridgeError> {
        match self.argument(key) {
            None => Err(BridgeError::missing(key, label)),
            Some(ArgValue::String(s)) => Ok(s),
            Some(other) => Err(argument_mismatch(key, "string", other)),
        }
    }

    pub(crate) fn required_int(&self, key: &'static str, label: &str) -> Result<i64, BridgeError> {
        match self.argument(key) {
            None => Err(BridgeError::missing(key, label)),
            Some(ArgValue::Int(n)) => Ok(*n),
            Some(other) => Err(argument_mismatch(key, "int", other)),
        }
    }

    pub(crate) fn required_map(
        &self,
        key: &'static str,
        label: &str,
    ) -> Result<&ArgMap, BridgeError> {
        match self.argument(key) {
            None => Err(BridgeError::missing(key, label)),
            Some(ArgValue::Map(m)) => Ok(m),
            Some(other) => Err(argument_mismatch(key, "map", other)),
        }
    }
}

fn argument_mismatch(key: &str, expected: &'static str, found: &ArgValue) -> BridgeError {
    BridgeError::TypeMismatch(CodecError::TypeMismatch {
        path: key.to_string(),
        expected,
        found: found.kind(),
    })
}

fn envelope_mismatch(path: &str, expected: &'static str, found: &'static str) -> BridgeError {
    BridgeError::TypeMismatch(CodecError::TypeMismatch {
        path: path.to_string(),
        expected,
        found,
    })
}

//! # Bridge Error
//!
//! The four failure kinds a method call can end in, and their mapping onto
//! the host result channel.

use mopro_core::{ArgMap, ArgValue, CodecError};
use mopro_engine::EngineError;
use thiserror::Error;

use crate::reply::MethodReply;

/// Reply code for a missing or out-of-range argument.
pub const ARGUMENT_ERROR: &str = "ARGUMENT_ERROR";
/// Reply code for a present argument with the wrong shape.
pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
/// Reply code for a failure inside the proof engine.
pub const ENGINE_ERROR: &str = "ENGINE_ERROR";
/// Code for an unknown method name. The reply itself is `notImplemented`.
pub const NOT_IMPLEMENTED: &str = "NOT_IMPLEMENTED";

/// Error produced while handling a method call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// A required argument is absent, or the selector ordinal is rejected.
    /// Always detected before the engine is called.
    #[error("{message}")]
    Argument {
        /// Wire name of the argument.
        argument: &'static str,
        /// Human-readable message, e.g. `Missing zkeyPath`.
        message: String,
    },

    /// An argument was present but structurally invalid.
    #[error(transparent)]
    TypeMismatch(#[from] CodecError),

    /// The engine rejected the request or failed internally.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The method name is not one the bridge serves.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl BridgeError {
    pub(crate) fn missing(argument: &'static str, label: &str) -> Self {
        BridgeError::Argument {
            argument,
            message: format!("Missing {label}"),
        }
    }

    /// Stable kind tag for this error.
    pub fn code(&self) -> &'static str {
        match self {
            BridgeError::Argument { .. } => ARGUMENT_ERROR,
            BridgeError::TypeMismatch(_) => TYPE_MISMATCH,
            BridgeError::Engine(_) => ENGINE_ERROR,
            BridgeError::UnsupportedOperation(_) => NOT_IMPLEMENTED,
        }
    }

    /// Map this error onto the host result channel.
    ///
    /// Unknown methods become `notImplemented`. Everything else becomes an
    /// error reply carrying the code, a message, and a details map
    /// locating the problem. Engine messages are forwarded verbatim.
    pub fn into_reply(self) -> MethodReply {
        let (message, details) = match &self {
            BridgeError::UnsupportedOperation(_) => return MethodReply::NotImplemented,
            BridgeError::Argument { argument, message } => {
                (message.clone(), detail("argument", argument))
            }
            BridgeError::TypeMismatch(e) => (e.to_string(), detail("path", e.path())),
            BridgeError::Engine(e) => (e.message().to_string(), detail("kind", e.kind())),
        };
        MethodReply::Error {
            code: self.code().to_string(),
            message,
            details: Some(details),
        }
    }
}

fn detail(key: &str, value: &str) -> ArgValue {
    let mut map = ArgMap::new();
    map.insert(key.to_string(), ArgValue::from(value));
    ArgValue::Map(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(BridgeError::missing("zkeyPath", "zkeyPath").code(), "ARGUMENT_ERROR");
        assert_eq!(
            BridgeError::from(CodecError::TypeMismatch {
                path: "inputs".into(),
                expected: "list of strings",
                found: "absent",
            })
            .code(),
            "TYPE_MISMATCH"
        );
        assert_eq!(
            BridgeError::from(EngineError::Prover("boom".into())).code(),
            "ENGINE_ERROR"
        );
        assert_eq!(
            BridgeError::UnsupportedOperation("x".into()).code(),
            "NOT_IMPLEMENTED"
        );
    }

    #[test]
    fn missing_argument_reply() {
        let reply = BridgeError::missing("circuitInputs", "inputs").into_reply();
        match reply {
            MethodReply::Error {
                code,
                message,
                details,
            } => {
                assert_eq!(code, ARGUMENT_ERROR);
                assert_eq!(message, "Missing inputs");
                assert_eq!(details, Some(detail("argument", "circuitInputs")));
            }
            other => panic!("expected error reply, got {other:?}"),
        }
    }

    #[test]
    fn engine_message_is_forwarded_verbatim() {
        let reply = BridgeError::from(EngineError::Key("cannot open x.zkey".into())).into_reply();
        match reply {
            MethodReply::Error { message, details, .. } => {
                assert_eq!(message, "cannot open x.zkey");
                assert_eq!(details, Some(detail("kind", "key")));
            }
            other => panic!("expected error reply, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_operation_is_not_implemented() {
        let reply = BridgeError::UnsupportedOperation("doSomethingElse".into()).into_reply();
        assert_eq!(reply, MethodReply::NotImplemented);
    }
}

//! # Method Reply
//!
//! The host result channel has three outcomes: a success value, a
//! structured error, or "not implemented".

use mopro_core::ArgValue;
use serde_json::{json, Value};

/// Outcome of one method call, as delivered to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodReply {
    Success(ArgValue),
    Error {
        code: String,
        message: String,
        details: Option<ArgValue>,
    },
    NotImplemented,
}

impl MethodReply {
    pub fn is_success(&self) -> bool {
        matches!(self, MethodReply::Success(_))
    }

    /// Success payload, if any.
    pub fn value(&self) -> Option<&ArgValue> {
        match self {
            MethodReply::Success(v) => Some(v),
            _ => None,
        }
    }

    /// Render as a JSON envelope.
    ///
    /// ```text
    /// {"status": "success", "result": ...}
    /// {"status": "error", "code": ..., "message": ..., "details": ...}
    /// {"status": "notImplemented"}
    /// ```
    pub fn to_json(&self) -> Value {
        match self {
            MethodReply::Success(v) => json!({
                "status": "success",
                "result": Value::from(v.clone()),
            }),
            MethodReply::Error {
                code,
                message,
                details,
            } => json!({
                "status": "error",
                "code": code,
                "message": message,
                "details": details.clone().map_or(Value::Null, Value::from),
            }),
            MethodReply::NotImplemented => json!({ "status": "notImplemented" }),
        }
    }
}

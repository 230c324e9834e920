//! # Dispatcher
//!
//! Single entry point for inbound method calls. Each call is handled
//! synchronously and independently: parse into a [`Request`], invoke the
//! engine, encode the outcome. The dispatcher holds no per-call state, so a
//! shared `&Dispatcher` may serve concurrent callers.

use mopro_core::{encode_proof_result, ArgValue};
use mopro_engine::ProofEngine;

use crate::call::MethodCall;
use crate::config::BridgeConfig;
use crate::error::BridgeError;
use crate::reply::MethodReply;
use crate::request::{GenerateRequest, Request, VerifyRequest};

/// Dispatches method calls to an injected proof engine.
#[derive(Debug)]
pub struct Dispatcher<E> {
    engine: E,
    config: BridgeConfig,
}

impl<E: ProofEngine> Dispatcher<E> {
    /// Create a dispatcher with the default configuration.
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, BridgeConfig::default())
    }

    pub fn with_config(engine: E, config: BridgeConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Handle one method call, returning the success payload or the error.
    ///
    /// - generate → the encoded proof result map.
    /// - verify → `ArgValue::Bool`, exactly as the engine reported it.
    ///
    /// # Errors
    ///
    /// See [`BridgeError`]. Argument and shape errors are raised before the
    /// engine is called.
    pub fn handle(&self, call: &MethodCall) -> Result<ArgValue, BridgeError> {
        tracing::debug!(channel = %self.config.channel, method = %call.method, "dispatching method call");
        match Request::parse(call, self.config.selector_policy)? {
            Request::Generate(req) => self.generate(req),
            Request::Verify(req) => self.verify(req),
        }
    }

    /// Handle one method call and map the outcome onto the result channel.
    pub fn on_method_call(&self, call: &MethodCall) -> MethodReply {
        match self.handle(call) {
            Ok(value) => MethodReply::Success(value),
            Err(err) => {
                tracing::warn!(
                    channel = %self.config.channel,
                    method = %call.method,
                    code = err.code(),
                    error = %err,
                    "method call failed"
                );
                err.into_reply()
            }
        }
    }

    fn generate(&self, req: GenerateRequest) -> Result<ArgValue, BridgeError> {
        let result = self
            .engine
            .generate(&req.zkey_path, &req.circuit_inputs, req.proof_lib)?;
        tracing::info!(
            zkey_path = %req.zkey_path,
            proof_lib = %req.proof_lib,
            public_inputs = result.inputs.len(),
            "proof generated"
        );
        Ok(ArgValue::Map(encode_proof_result(&result)))
    }

    fn verify(&self, req: VerifyRequest) -> Result<ArgValue, BridgeError> {
        let valid = self
            .engine
            .verify(&req.zkey_path, &req.proof, req.proof_lib)?;
        tracing::info!(
            zkey_path = %req.zkey_path,
            proof_lib = %req.proof_lib,
            valid,
            "proof verified"
        );
        Ok(ArgValue::Bool(valid))
    }
}

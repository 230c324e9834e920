//! # mopro-bridge: Method-Call Bridge
//!
//! Serves the two Circom proof operations over a host method channel:
//!
//! - `generateCircomProof(zkeyPath, circuitInputs, proofLib)` → proof map
//! - `verifyCircomProof(zkeyPath, proofResult, proofLib)` → bool
//!
//! Any other method name is answered with `notImplemented`.
//!
//! ## Flow
//!
//! `MethodCall` → `Request::parse` (argument checks, proof decode, selector)
//! → `ProofEngine` → codec encode → `MethodReply`.
//!
//! ## Error Kinds
//!
//! | Kind | Code | When |
//! |---|---|---|
//! | Argument | `ARGUMENT_ERROR` | required argument missing (engine not called) |
//! | TypeMismatch | `TYPE_MISMATCH` | argument present with wrong shape |
//! | Engine | `ENGINE_ERROR` | engine failed; message forwarded verbatim |
//! | UnsupportedOperation | `NOT_IMPLEMENTED` | unknown method name |
//!
//! ## Crate Policy
//!
//! - The typed proof model never leaves this crate as a reply; only
//!   `ArgValue` does.
//! - No business logic beyond validation and mapping; proving is the
//!   engine's job.

pub mod call;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod reply;
pub mod request;

pub use call::MethodCall;
pub use config::{BridgeConfig, ConfigError};
pub use dispatch::Dispatcher;
pub use error::BridgeError;
pub use reply::MethodReply;
pub use request::{Operation, Request};

//! # mopro-core: Foundational Types for the mopro Bridge
//!
//! Defines the strongly-typed model of a Circom (Groth16-family) proof and
//! the strict codec that moves it across a runtime boundary as a tree of
//! primitive values.
//!
//! ## Key Design Principles
//!
//! 1. **Typed inside, untyped outside.** `CircomProofResult` never crosses
//!    the boundary directly, and `ArgValue` never reaches an engine. The
//!    [`codec`] module is the only place the two meet.
//!
//! 2. **Strict decode.** A proof map with a missing key or a value of the
//!    wrong shape is rejected as a whole with [`CodecError::TypeMismatch`].
//!    No coercion, no defaults, no partial results.
//!
//! 3. **Closed selector.** [`ProofLib`] has exactly two variants. How an
//!    out-of-range ordinal is treated is decided by [`SelectorPolicy`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mopro-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod codec;
pub mod error;
pub mod proof;
pub mod proof_lib;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use codec::{decode_proof_result, encode_proof_result};
pub use error::{CodecError, SelectorError};
pub use proof::{CircomProof, CircomProofResult, G1, G2};
pub use proof_lib::{ProofLib, SelectorPolicy};
pub use value::{ArgMap, ArgValue};

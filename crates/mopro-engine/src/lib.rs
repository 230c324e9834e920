//! # mopro-engine: Proof Engine Capability
//!
//! Defines the interface between the bridge and a native Circom prover.
//!
//! ## Architecture
//!
//! - **Traits** (`traits.rs`): `ProofEngine` is the injected capability the
//!   dispatcher drives. Native Arkworks/Rapidsnark bindings, the mock, and
//!   test doubles all implement it.
//!
//! - **Mock** (`mock.rs`, `mock` feature): `MockEngine` produces
//!   deterministic, transparent proofs so the bridge can run without native
//!   code. `RecordingEngine` wraps any engine and records its calls.
//!
//! ## Crate Policy
//!
//! - Depends on `mopro-core` only.
//! - No `unsafe`.

#[cfg(feature = "mock")]
pub mod mock;
pub mod traits;

#[cfg(feature = "mock")]
pub use mock::{EngineCall, MockEngine, RecordingEngine};
pub use traits::{EngineError, ProofEngine};

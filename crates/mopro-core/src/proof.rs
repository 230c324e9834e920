//! # Circom Proof Model
//!
//! Plain value types for a Groth16 proof as produced by a Circom prover:
//! two G1 points, one G2 point, protocol/curve tags, and the ordered public
//! inputs.
//!
//! Coordinates are kept as strings (usually decimal big integers). Nothing
//! here parses or validates them; the engine is the only judge of whether a
//! coordinate is well-formed.

use serde::{Deserialize, Serialize};

/// A point in G1, in projective form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct G1 {
    pub x: String,
    pub y: String,
    pub z: String,
}

impl G1 {
    /// Construct a G1 point from its three coordinates.
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }
}

/// A point in G2, in projective form.
///
/// Each coordinate is an extension-field element written as an ordered
/// sequence of base-field strings. The arity (normally 2) is preserved as
/// given and never checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct G2 {
    pub x: Vec<String>,
    pub y: Vec<String>,
    pub z: Vec<String>,
}

impl G2 {
    /// Construct a G2 point from its three coordinate sequences.
    pub fn new(x: Vec<String>, y: Vec<String>, z: Vec<String>) -> Self {
        Self { x, y, z }
    }
}

/// A complete SNARK proof: points `a`, `b`, `c` plus descriptive tags.
///
/// `protocol` (e.g. `"groth16"`) and `curve` (e.g. `"bn128"`) are consumed
/// by the verifier and carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircomProof {
    pub a: G1,
    pub b: G2,
    pub c: G1,
    pub protocol: String,
    pub curve: String,
}

/// A proof together with the public inputs it attests to.
///
/// # Invariants
///
/// - `inputs` follows the circuit's public-signal order. Every conversion
///   preserves that order exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CircomProofResult {
    pub proof: CircomProof,
    pub inputs: Vec<String>,
}

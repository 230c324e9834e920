//! # Proof Codec
//!
//! Converts a [`CircomProofResult`] to and from the transport-neutral
//! [`ArgMap`] tree. This is the only module that knows both shapes.
//!
//! ## Wire Shape
//!
//! ```text
//! {
//!   "proof": {
//!     "a": { "x": str, "y": str, "z": str },
//!     "b": { "x": [str], "y": [str], "z": [str] },
//!     "c": { "x": str, "y": str, "z": str },
//!     "protocol": str,
//!     "curve": str
//!   },
//!   "inputs": [str]
//! }
//! ```
//!
//! Encoding reads already-typed fields and cannot fail. Decoding is strict:
//! every key above must be present with exactly the shape shown, otherwise
//! the whole decode fails with [`CodecError::TypeMismatch`]. Keys not listed
//! above are ignored.

use crate::error::CodecError;
use crate::proof::{CircomProof, CircomProofResult, G1, G2};
use crate::value::{ArgMap, ArgValue};

pub const PROOF: &str = "proof";
pub const INPUTS: &str = "inputs";
pub const PROTOCOL: &str = "protocol";
pub const CURVE: &str = "curve";

/// Encode a proof result into its transport-neutral map.
pub fn encode_proof_result(result: &CircomProofResult) -> ArgMap {
    let mut map = ArgMap::new();
    map.insert(PROOF.to_string(), ArgValue::Map(encode_proof(&result.proof)));
    map.insert(
        INPUTS.to_string(),
        ArgValue::string_list(result.inputs.iter().cloned()),
    );
    map
}

fn encode_proof(proof: &CircomProof) -> ArgMap {
    let mut map = ArgMap::new();
    map.insert("a".to_string(), encode_g1(&proof.a));
    map.insert("b".to_string(), encode_g2(&proof.b));
    map.insert("c".to_string(), encode_g1(&proof.c));
    map.insert(PROTOCOL.to_string(), ArgValue::from(proof.protocol.as_str()));
    map.insert(CURVE.to_string(), ArgValue::from(proof.curve.as_str()));
    map
}

fn encode_g1(point: &G1) -> ArgValue {
    let mut map = ArgMap::new();
    map.insert("x".to_string(), ArgValue::from(point.x.as_str()));
    map.insert("y".to_string(), ArgValue::from(point.y.as_str()));
    map.insert("z".to_string(), ArgValue::from(point.z.as_str()));
    ArgValue::Map(map)
}

fn encode_g2(point: &G2) -> ArgValue {
    let mut map = ArgMap::new();
    map.insert("x".to_string(), ArgValue::string_list(point.x.iter().cloned()));
    map.insert("y".to_string(), ArgValue::string_list(point.y.iter().cloned()));
    map.insert("z".to_string(), ArgValue::string_list(point.z.iter().cloned()));
    ArgValue::Map(map)
}

/// Decode a transport-neutral map into a proof result.
///
/// # Errors
///
/// Returns `CodecError::TypeMismatch` naming the first path that is absent
/// or has the wrong shape. Nothing is returned for a partially valid map.
pub fn decode_proof_result(map: &ArgMap) -> Result<CircomProofResult, CodecError> {
    let root = Cursor::root(map);
    let proof = root.map(PROOF)?;

    Ok(CircomProofResult {
        proof: CircomProof {
            a: decode_g1(&proof.map("a")?)?,
            b: decode_g2(&proof.map("b")?)?,
            c: decode_g1(&proof.map("c")?)?,
            protocol: proof.string(PROTOCOL)?,
            curve: proof.string(CURVE)?,
        },
        inputs: root.strings(INPUTS)?,
    })
}

fn decode_g1(point: &Cursor<'_>) -> Result<G1, CodecError> {
    Ok(G1 {
        x: point.string("x")?,
        y: point.string("y")?,
        z: point.string("z")?,
    })
}

fn decode_g2(point: &Cursor<'_>) -> Result<G2, CodecError> {
    Ok(G2 {
        x: point.strings("x")?,
        y: point.strings("y")?,
        z: point.strings("z")?,
    })
}

/// A map being decoded, together with its dotted path from the root.
struct Cursor<'a> {
    map: &'a ArgMap,
    path: String,
}

impl<'a> Cursor<'a> {
    fn root(map: &'a ArgMap) -> Self {
        Self {
            map,
            path: String::new(),
        }
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn get(&self, key: &str, expected: &'static str) -> Result<&'a ArgValue, CodecError> {
        self.map.get(key).ok_or_else(|| CodecError::TypeMismatch {
            path: self.child_path(key),
            expected,
            found: "absent",
        })
    }

    fn map(&self, key: &str) -> Result<Cursor<'a>, CodecError> {
        match self.get(key, "map")? {
            ArgValue::Map(map) => Ok(Cursor {
                map,
                path: self.child_path(key),
            }),
            other => Err(mismatch(self.child_path(key), "map", other)),
        }
    }

    fn string(&self, key: &str) -> Result<String, CodecError> {
        match self.get(key, "string")? {
            ArgValue::String(s) => Ok(s.clone()),
            other => Err(mismatch(self.child_path(key), "string", other)),
        }
    }

    fn strings(&self, key: &str) -> Result<Vec<String>, CodecError> {
        let items = match self.get(key, "list of strings")? {
            ArgValue::List(items) => items,
            other => return Err(mismatch(self.child_path(key), "list of strings", other)),
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                ArgValue::String(s) => Ok(s.clone()),
                other => Err(mismatch(
                    format!("{}[{i}]", self.child_path(key)),
                    "string",
                    other,
                )),
            })
            .collect()
    }
}

fn mismatch(path: String, expected: &'static str, found: &ArgValue) -> CodecError {
    CodecError::TypeMismatch {
        path,
        expected,
        found: found.kind(),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn coordinate() -> impl Strategy<Value = String> {
        prop_oneof!["[0-9]{1,77}", ".{0,12}"]
    }

    fn g1() -> impl Strategy<Value = G1> {
        (coordinate(), coordinate(), coordinate()).prop_map(|(x, y, z)| G1 { x, y, z })
    }

    fn g2() -> impl Strategy<Value = G2> {
        let ext = || prop::collection::vec(coordinate(), 0..4);
        (ext(), ext(), ext()).prop_map(|(x, y, z)| G2 { x, y, z })
    }

    fn proof_result() -> impl Strategy<Value = CircomProofResult> {
        (
            g1(),
            g2(),
            g1(),
            "[a-z0-9]{0,10}",
            "[a-z0-9]{0,10}",
            prop::collection::vec(coordinate(), 0..16),
        )
            .prop_map(|(a, b, c, protocol, curve, inputs)| CircomProofResult {
                proof: CircomProof {
                    a,
                    b,
                    c,
                    protocol,
                    curve,
                },
                inputs,
            })
    }

    proptest! {
        /// Decoding an encoded result yields the same result, field for field.
        #[test]
        fn decode_inverts_encode(result in proof_result()) {
            let decoded = decode_proof_result(&encode_proof_result(&result));
            prop_assert_eq!(decoded, Ok(result));
        }

        /// The encoded tree survives a trip through JSON unchanged.
        #[test]
        fn encoded_tree_survives_json(result in proof_result()) {
            let tree = ArgValue::Map(encode_proof_result(&result));
            let back = ArgValue::from(serde_json::Value::from(tree.clone()));
            prop_assert_eq!(back, tree);
        }
    }
}

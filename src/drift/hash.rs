// src/drift/hash.rs

//! Content fingerprinting.
//!
//! Digests are used purely as a fast equality oracle for "has this
//! document changed since the last accepted observation". blake3 gives a
//! 256-bit digest with negligible accidental-collision probability; no
//! security property is relied upon.

use std::fmt;

use blake3::Hasher;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::errors::Result;

/// Fixed-length hex fingerprint of a document or file.
///
/// Compared for equality, never decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fingerprint raw file bytes.
///
/// Used when the canonical representation of a configuration is the file
/// itself.
pub fn fingerprint_bytes(bytes: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    Digest(hasher.finalize().to_hex().to_string())
}

/// Fingerprint an in-memory [`Document`].
///
/// The document is serialized to its canonical YAML form first, so two
/// documents with identical key/value structure and ordering always yield
/// the same digest.
pub fn fingerprint_document(doc: &Document) -> Result<Digest> {
    let canonical = serde_yaml::to_string(doc)?;
    Ok(fingerprint_bytes(canonical.as_bytes()))
}

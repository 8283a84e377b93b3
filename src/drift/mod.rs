// src/drift/mod.rs

//! Configuration drift detection.
//!
//! - [`hash`] fingerprints documents and raw file contents.
//! - [`store`] persists the last accepted digest + snapshot pair.
//! - [`diff`] computes the top-level structural diff between two documents.
//! - [`detector`] ties the three together into a single drift check.

pub mod detector;
pub mod diff;
pub mod hash;
pub mod store;

pub use detector::{ChangeDetector, ChangeReport, ChangeStatus, DocumentSource};
pub use diff::{structural_diff, DiffEntry};
pub use hash::{fingerprint_bytes, fingerprint_document, Digest};
pub use store::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore};

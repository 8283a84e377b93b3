// src/drift/detector.rs

//! Drift check: hasher + store + diff engine in one operation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::document::{load_document, Document};
use crate::drift::diff::{structural_diff, DiffEntry};
use crate::drift::hash::fingerprint_document;
use crate::drift::store::SnapshotStore;
use crate::errors::Result;

/// Message reported when the digest matches the stored one.
pub const MSG_UNCHANGED: &str = "No changes detected";
/// Message reported when drift was detected and the snapshot replaced.
pub const MSG_CHANGED: &str = "YAML updated";

/// Where the document under check comes from.
///
/// Exactly one source per check, by construction.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Read and parse the document from a YAML file.
    Path(PathBuf),
    /// Use an already-parsed document.
    Inline(Document),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    Changed,
    Unchanged,
}

/// Result of one drift check.
#[derive(Debug, Clone, Serialize)]
pub struct ChangeReport {
    pub status: ChangeStatus,
    pub message: String,
    /// Per-key diff, present only when `status` is `Changed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<BTreeMap<String, DiffEntry>>,
}

impl ChangeReport {
    pub fn is_changed(&self) -> bool {
        self.status == ChangeStatus::Changed
    }
}

/// Orchestrates fingerprinting, snapshot storage and diffing.
#[derive(Debug)]
pub struct ChangeDetector<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> ChangeDetector<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Check the document from `source` against the stored baseline.
    ///
    /// Unchanged documents perform no writes. Changed documents replace
    /// the stored digest + snapshot in a single commit and report the
    /// structural diff against the prior snapshot. A first-ever check
    /// has an empty baseline, so every top-level key reports as added.
    pub fn check(&mut self, source: DocumentSource) -> Result<ChangeReport> {
        let old_digest = self.store.load_digest()?;

        let new_document = match source {
            DocumentSource::Path(path) => load_document(&path)?,
            DocumentSource::Inline(doc) => doc,
        };
        let new_digest = fingerprint_document(&new_document)?;

        if old_digest.as_ref() == Some(&new_digest) {
            debug!(digest = %new_digest, "document unchanged");
            return Ok(ChangeReport {
                status: ChangeStatus::Unchanged,
                message: MSG_UNCHANGED.to_string(),
                diff: None,
            });
        }

        let old_snapshot = self.store.load_snapshot()?;
        let diff = structural_diff(&old_snapshot, &new_document);
        self.store.commit(&new_digest, &new_document)?;

        info!(
            digest = %new_digest,
            changed_keys = diff.len(),
            "document drift detected"
        );

        Ok(ChangeReport {
            status: ChangeStatus::Changed,
            message: MSG_CHANGED.to_string(),
            diff: Some(diff),
        })
    }

    /// Consume the detector and return the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }
}

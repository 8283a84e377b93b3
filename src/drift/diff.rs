// src/drift/diff.rs

//! Structural diff between two document versions.
//!
//! The comparison is shallow by design: only top-level key presence and
//! deep value equality are inspected. A change anywhere inside a nested
//! value surfaces as a single `Modified` entry for its top-level key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use crate::document::{key_name, Document};

/// One top-level key's change classification.
///
/// Serializes to the wire shape
/// `{status: "added"|"removed"|"modified", old_value?, new_value?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DiffEntry {
    Added { new_value: Value },
    Removed { old_value: Value },
    Modified { old_value: Value, new_value: Value },
}

/// Compare two documents and return the per-key differences.
///
/// - key only in `new` → `Added`
/// - key in both with unequal values → `Modified`
/// - key only in `old` → `Removed`
///
/// Keys with structurally equal values are omitted entirely.
pub fn structural_diff(old: &Document, new: &Document) -> BTreeMap<String, DiffEntry> {
    let mut diff = BTreeMap::new();

    for (key, new_value) in new {
        match old.get(key) {
            None => {
                diff.insert(
                    key_name(key),
                    DiffEntry::Added {
                        new_value: new_value.clone(),
                    },
                );
            }
            Some(old_value) if old_value != new_value => {
                diff.insert(
                    key_name(key),
                    DiffEntry::Modified {
                        old_value: old_value.clone(),
                        new_value: new_value.clone(),
                    },
                );
            }
            Some(_) => {}
        }
    }

    for (key, old_value) in old {
        if !new.contains_key(key) {
            diff.insert(
                key_name(key),
                DiffEntry::Removed {
                    old_value: old_value.clone(),
                },
            );
        }
    }

    diff
}

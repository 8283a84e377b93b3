// src/document.rs

//! YAML document types and parsing helpers.
//!
//! A [`Document`] is the parsed form of a configuration file: a mapping
//! from string keys to arbitrarily nested YAML values. `serde_yaml`'s
//! `Mapping` preserves insertion order, which keeps re-serialized
//! snapshots close to their source files.

use std::path::Path;

use serde_yaml::Value;

use crate::errors::{DriftrunError, Result};

/// Parsed configuration document: top-level mapping of keys to values.
pub type Document = serde_yaml::Mapping;

/// Named values referenced by `{{ inputs.<name> }}` placeholders.
pub type InputSet = Document;

/// Parse YAML text into a [`Document`].
///
/// - An empty file (or explicit `null`) parses to an empty mapping, the
///   same default the snapshot loader uses for a missing snapshot.
/// - Any other non-mapping top level is a configuration error.
pub fn parse_document(text: &str) -> Result<Document> {
    match serde_yaml::from_str::<Value>(text)? {
        Value::Null => Ok(Document::new()),
        Value::Mapping(map) => Ok(map),
        other => Err(DriftrunError::Config(format!(
            "top-level YAML value must be a mapping, got {}",
            value_kind(&other)
        ))),
    }
}

/// Read and parse a YAML document from `path`.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.is_file() {
        return Err(DriftrunError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    parse_document(&text)
}

/// Render a top-level mapping key as the string used to key diff entries.
///
/// YAML permits non-string keys; those are rendered through the YAML
/// serializer so every key still gets a stable name.
pub fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

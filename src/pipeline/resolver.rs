// src/pipeline/resolver.rs

//! Placeholder resolution.
//!
//! Step parameters may reference named inputs with `{{ inputs.<name> }}`.
//! Resolution is total: every value resolves to something, and a missing
//! input substitutes an empty string rather than failing (the original
//! system's behaviour; a `warn` trace makes the miss visible).
//!
//! The whole string must be one placeholder token. Partial interpolation
//! inside a longer string (`"prefix {{ inputs.x }}"`) is not part of the
//! contract and such strings pass through unchanged.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;
use tracing::warn;

use crate::document::InputSet;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\{\{\s*inputs\.([^\s{}]+)\s*\}\}$").expect("placeholder pattern is valid")
});

/// Recursively resolve placeholders in `value` against `inputs`.
///
/// - Mappings resolve every value, keys and insertion order unchanged.
/// - Sequences resolve every element, order unchanged.
/// - A string that is exactly one `{{ inputs.<name> }}` token becomes the
///   named input value (so non-string inputs keep their YAML type), or an
///   empty string when the input is missing.
/// - Every other scalar is returned unchanged.
pub fn resolve_placeholders(value: &Value, inputs: &InputSet) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(k, v)| (k.clone(), resolve_placeholders(v, inputs)))
                .collect(),
        ),
        Value::Sequence(seq) => Value::Sequence(
            seq.iter()
                .map(|v| resolve_placeholders(v, inputs))
                .collect(),
        ),
        Value::String(s) => match placeholder_name(s) {
            Some(name) => lookup_input(name, inputs),
            None => value.clone(),
        },
        other => other.clone(),
    }
}

/// Extract `<name>` if `s` is exactly one placeholder token.
fn placeholder_name(s: &str) -> Option<&str> {
    if !s.contains("{{") {
        return None;
    }
    PLACEHOLDER
        .captures(s)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn lookup_input(name: &str, inputs: &InputSet) -> Value {
    match inputs.get(name) {
        Some(v) => v.clone(),
        None => {
            warn!(input = %name, "placeholder references missing input; substituting empty string");
            Value::String(String::new())
        }
    }
}

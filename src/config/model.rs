// src/config/model.rs

//! Serde models for pipeline definition files.
//!
//! A definition looks like:
//!
//! ```yaml
//! input_file: inputs.yaml
//! pipeline:
//!   - job: create_org
//!     enabled: true
//!     params:
//!       name: "{{ inputs.org_name }}"
//!   - job: create_proxy_cache
//! ```
//!
//! Step order in the file is the execution order.

use std::path::PathBuf;

use serde::Deserialize;

use crate::document::Document;

/// Pipeline file exactly as deserialized, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPipelineFile {
    /// Path to the YAML document supplying placeholder inputs. Relative
    /// paths are resolved against the pipeline file's directory.
    pub input_file: PathBuf,

    /// Declared steps, in execution order. Absent means "no steps".
    #[serde(default)]
    pub pipeline: Vec<RawStep>,
}

/// One declared step, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStep {
    /// Name of the job to dispatch via the registry.
    pub job: String,

    /// Keyword parameters for the job; placeholders are resolved before
    /// dispatch.
    #[serde(default)]
    pub params: Option<Document>,

    /// Steps are opt-in: absent means skipped, not an error.
    #[serde(default)]
    pub enabled: bool,
}

/// Validated pipeline definition.
#[derive(Debug, Clone)]
pub struct PipelineFile {
    pub input_file: PathBuf,
    pub pipeline: Vec<Step>,
}

impl PipelineFile {
    /// Construct without re-validating. Only `validate` and the test
    /// builders should call this.
    pub fn new_unchecked(input_file: PathBuf, pipeline: Vec<Step>) -> Self {
        Self {
            input_file,
            pipeline,
        }
    }
}

/// Validated step.
#[derive(Debug, Clone)]
pub struct Step {
    pub job: String,
    pub params: Option<Document>,
    pub enabled: bool,
}

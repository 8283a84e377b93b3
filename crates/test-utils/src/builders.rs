#![allow(dead_code)]

use std::path::PathBuf;

use driftrun::config::{PipelineFile, Step};
use driftrun::Document;
use serde_yaml::Value;

/// Builder for `PipelineFile` to simplify test setup.
pub struct PipelineFileBuilder {
    input_file: PathBuf,
    pipeline: Vec<Step>,
}

impl PipelineFileBuilder {
    pub fn new() -> Self {
        Self {
            input_file: PathBuf::from("inputs.yaml"),
            pipeline: Vec::new(),
        }
    }

    pub fn input_file(mut self, path: &str) -> Self {
        self.input_file = PathBuf::from(path);
        self
    }

    pub fn with_step(mut self, step: Step) -> Self {
        self.pipeline.push(step);
        self
    }

    pub fn build(self) -> PipelineFile {
        PipelineFile::new_unchecked(self.input_file, self.pipeline)
    }
}

impl Default for PipelineFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Step`.
pub struct StepBuilder {
    step: Step,
}

impl StepBuilder {
    pub fn new(job: &str) -> Self {
        Self {
            step: Step {
                job: job.to_string(),
                params: None,
                enabled: false,
            },
        }
    }

    pub fn enabled(mut self) -> Self {
        self.step.enabled = true;
        self
    }

    pub fn param(mut self, key: &str, value: impl Into<Value>) -> Self {
        let params = self.step.params.get_or_insert_with(Document::new);
        params.insert(Value::String(key.to_string()), value.into());
        self
    }

    pub fn build(self) -> Step {
        self.step
    }
}

/// Build an input set from `(name, value)` pairs.
pub fn input_set(pairs: &[(&str, Value)]) -> Document {
    pairs
        .iter()
        .map(|(k, v)| (Value::String((*k).to_string()), v.clone()))
        .collect()
}

// src/pipeline/registry.rs

//! Host-supplied job dispatch table.
//!
//! The registry is an explicit value owned by the host and passed into
//! the runner by reference. Jobs are plain closures keyed by name, so
//! binding is checked when the registry is built, not at dispatch time.
//! The engine treats every job as opaque: talking to external APIs,
//! creating resources, etc. is entirely the job's concern.

use std::collections::BTreeMap;
use std::fmt;

use crate::document::Document;
use crate::errors::{DriftrunError, Result};

/// Resolved keyword parameters handed to a job. Empty when the step
/// declared no `params`.
pub type JobArgs = Document;

/// An invocable action. Synchronous and blocking; a returned error
/// aborts the remaining pipeline.
pub type JobFn = Box<dyn Fn(&JobArgs) -> anyhow::Result<()> + Send + Sync>;

/// Read-only (to the engine) mapping from job name to action.
#[derive(Default)]
pub struct JobRegistry {
    jobs: BTreeMap<String, JobFn>,
}

impl JobRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job under `name`.
    ///
    /// Empty and duplicate names are rejected here so that a bad table
    /// never reaches dispatch.
    pub fn register<F>(&mut self, name: impl Into<String>, job: F) -> Result<()>
    where
        F: Fn(&JobArgs) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(DriftrunError::Usage(
                "job name must not be empty".to_string(),
            ));
        }
        if self.jobs.contains_key(&name) {
            return Err(DriftrunError::Usage(format!(
                "job '{name}' is already registered"
            )));
        }
        self.jobs.insert(name, Box::new(job));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&JobFn> {
        self.jobs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.jobs.contains_key(name)
    }

    /// Registered job names, sorted. Used for "unknown job" diagnostics.
    pub fn names(&self) -> Vec<&str> {
        self.jobs.keys().map(String::as_str).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}

impl fmt::Debug for JobRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobRegistry")
            .field("jobs", &self.names())
            .finish()
    }
}

// src/pipeline/runner.rs

//! Ordered pipeline execution.
//!
//! The runner walks the declared steps front to back, synchronously:
//!
//! - steps without `enabled: true` are skipped (a deliberate no-op, not
//!   a failure)
//! - step params are resolved against the input set before dispatch
//! - a step naming an unregistered job is recorded and skipped; the run
//!   continues
//! - a job returning an error aborts the run (side effects of earlier
//!   steps are not rolled back)
//!
//! There is no retry, no parallelism and no partial resume: a run always
//! starts at the first declared step.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::loader::{load_and_validate, pipeline_root_dir};
use crate::config::model::{PipelineFile, Step};
use crate::document::{load_document, InputSet};
use crate::errors::{DriftrunError, Result};
use crate::pipeline::registry::{JobArgs, JobRegistry};
use crate::pipeline::resolver::resolve_placeholders;

/// What happened to one declared step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// `enabled` was absent or false.
    Skipped,
    /// The step named a job the registry does not provide.
    UnknownJob,
    /// The job was invoked and returned success.
    Completed,
}

#[derive(Debug, Clone)]
pub struct StepReport {
    pub job: String,
    pub outcome: StepOutcome,
}

/// Accounting for one full run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
}

impl RunReport {
    fn record(&mut self, job: &str, outcome: StepOutcome) {
        self.steps.push(StepReport {
            job: job.to_string(),
            outcome,
        });
    }

    fn count(&self, outcome: StepOutcome) -> usize {
        self.steps.iter().filter(|s| s.outcome == outcome).count()
    }

    pub fn completed(&self) -> usize {
        self.count(StepOutcome::Completed)
    }

    pub fn skipped(&self) -> usize {
        self.count(StepOutcome::Skipped)
    }

    pub fn unknown_jobs(&self) -> usize {
        self.count(StepOutcome::UnknownJob)
    }
}

/// Executes pipeline definitions against a borrowed [`JobRegistry`].
#[derive(Debug)]
pub struct PipelineRunner<'a> {
    registry: &'a JobRegistry,
}

impl<'a> PipelineRunner<'a> {
    pub fn new(registry: &'a JobRegistry) -> Self {
        Self { registry }
    }

    /// Load a pipeline definition file and its input set, then run it.
    ///
    /// A relative `input_file` is resolved against the directory holding
    /// the pipeline file.
    pub fn run_file(&self, path: &Path) -> Result<RunReport> {
        let pipeline = load_and_validate(path)?;

        let input_path = if pipeline.input_file.is_relative() {
            pipeline_root_dir(path).join(&pipeline.input_file)
        } else {
            pipeline.input_file.clone()
        };
        let inputs = load_document(&input_path)?;

        self.run(&pipeline, &inputs)
    }

    /// Execute every declared step, in order.
    pub fn run(&self, pipeline: &PipelineFile, inputs: &InputSet) -> Result<RunReport> {
        let mut report = RunReport::default();

        for step in &pipeline.pipeline {
            self.run_step(step, inputs, &mut report)?;
        }

        info!(
            completed = report.completed(),
            skipped = report.skipped(),
            unknown = report.unknown_jobs(),
            "pipeline completed"
        );
        Ok(report)
    }

    fn run_step(&self, step: &Step, inputs: &InputSet, report: &mut RunReport) -> Result<()> {
        if !step.enabled {
            debug!(job = %step.job, "step disabled; skipping");
            report.record(&step.job, StepOutcome::Skipped);
            return Ok(());
        }

        let args = resolve_args(step, inputs);

        let Some(job) = self.registry.get(&step.job) else {
            warn!(
                job = %step.job,
                registered = ?self.registry.names(),
                "unknown job; skipping step"
            );
            report.record(&step.job, StepOutcome::UnknownJob);
            return Ok(());
        };

        info!(job = %step.job, "running job");
        job(&args).map_err(|source| DriftrunError::JobFailed {
            job: step.job.clone(),
            source,
        })?;

        report.record(&step.job, StepOutcome::Completed);
        Ok(())
    }
}

/// Resolve a step's params into job arguments. Absent params become an
/// empty argument mapping.
fn resolve_args(step: &Step, inputs: &InputSet) -> JobArgs {
    match &step.params {
        Some(params) => params
            .iter()
            .map(|(k, v)| (k.clone(), resolve_placeholders(v, inputs)))
            .collect(),
        None => JobArgs::new(),
    }
}

// src/pipeline/mod.rs

//! Declarative pipeline execution.
//!
//! - [`resolver`] substitutes `{{ inputs.<name> }}` placeholders inside
//!   step parameters.
//! - [`registry`] is the host-supplied dispatch table from job names to
//!   actions.
//! - [`runner`] walks the declared steps in order and dispatches them.

pub mod registry;
pub mod resolver;
pub mod runner;

pub use registry::{JobArgs, JobFn, JobRegistry};
pub use resolver::resolve_placeholders;
pub use runner::{PipelineRunner, RunReport, StepOutcome, StepReport};

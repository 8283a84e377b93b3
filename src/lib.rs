// src/lib.rs

pub mod cli;
pub mod config;
pub mod document;
pub mod drift;
pub mod errors;
pub mod logging;
pub mod pipeline;

use std::path::Path;

use tracing::debug;

use crate::cli::{CliArgs, Command};
use crate::config::loader::load_and_validate;
use crate::config::model::PipelineFile;
use crate::drift::{ChangeDetector, ChangeReport, DocumentSource, FileSnapshotStore};
use crate::errors::Result;
use crate::pipeline::{JobRegistry, PipelineRunner, RunReport};

pub use crate::document::{Document, InputSet};
pub use crate::drift::{ChangeStatus, DiffEntry, Digest};
pub use crate::pipeline::resolve_placeholders;

/// Check a configuration against the snapshot stored in `storage_dir`.
///
/// Convenience wrapper that wires a [`FileSnapshotStore`] into a
/// [`ChangeDetector`]; hosts that need a different store construct the
/// detector directly.
pub fn check_change(storage_dir: &Path, source: DocumentSource) -> Result<ChangeReport> {
    let store = FileSnapshotStore::new(storage_dir)?;
    let mut detector = ChangeDetector::new(store);
    detector.check(source)
}

/// High-level entry point used by `main.rs`.
///
/// The bundled binary is a thin host: `check` is fully functional, while
/// `run` executes against an empty job registry (every enabled step
/// reports unknown-job). Real hosts build their own [`JobRegistry`] and
/// call [`PipelineRunner`] directly.
pub fn run(args: CliArgs) -> Result<()> {
    match args.command {
        Command::Check { storage_dir, file } => {
            let report = check_change(&storage_dir, DocumentSource::Path(file))?;
            print!("{}", serde_yaml::to_string(&report)?);
            Ok(())
        }
        Command::Run { pipeline, dry_run } => {
            if dry_run {
                let cfg = load_and_validate(&pipeline)?;
                print_dry_run(&cfg);
                return Ok(());
            }

            let registry = JobRegistry::new();
            let runner = PipelineRunner::new(&registry);
            let report = runner.run_file(&pipeline)?;
            print_run_report(&report);
            Ok(())
        }
    }
}

/// Simple dry-run output: print steps, jobs and params.
fn print_dry_run(cfg: &PipelineFile) {
    println!("driftrun dry-run");
    println!("  input_file = {}", cfg.input_file.display());
    println!();

    println!("steps ({}):", cfg.pipeline.len());
    for step in &cfg.pipeline {
        println!("  - {}", step.job);
        println!("      enabled: {}", step.enabled);
        if let Some(ref params) = step.params {
            if !params.is_empty() {
                let keys: Vec<String> =
                    params.keys().map(crate::document::key_name).collect();
                println!("      params: {keys:?}");
            }
        }
    }

    debug!("dry-run complete (no execution)");
}

fn print_run_report(report: &RunReport) {
    println!(
        "pipeline completed: {} run, {} skipped, {} unknown",
        report.completed(),
        report.skipped(),
        report.unknown_jobs()
    );
}

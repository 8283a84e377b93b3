// tests/pipeline_run.rs

use std::error::Error;
use std::fs;

use driftrun::errors::DriftrunError;
use driftrun::pipeline::{JobRegistry, PipelineRunner, StepOutcome};
use driftrun_test_utils::builders::{input_set, PipelineFileBuilder, StepBuilder};
use driftrun_test_utils::init_tracing;
use driftrun_test_utils::recording::RecordingJobs;
use serde_yaml::Value;
use tempfile::tempdir;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn disabled_step_is_never_dispatched() -> TestResult {
    init_tracing();
    let recorder = RecordingJobs::new();
    let mut registry = JobRegistry::new();
    recorder.register(&mut registry, "create_org");

    // `enabled` left absent: defaults to false.
    let pipeline = PipelineFileBuilder::new()
        .with_step(StepBuilder::new("create_org").build())
        .build();

    let report = PipelineRunner::new(&registry).run(&pipeline, &input_set(&[]))?;

    assert_eq!(recorder.count(), 0);
    assert_eq!(report.skipped(), 1);
    assert_eq!(report.completed(), 0);
    Ok(())
}

#[test]
fn unknown_job_is_recorded_and_does_not_abort() -> TestResult {
    init_tracing();
    let recorder = RecordingJobs::new();
    let mut registry = JobRegistry::new();
    recorder.register(&mut registry, "known");

    let pipeline = PipelineFileBuilder::new()
        .with_step(StepBuilder::new("nonexistent").enabled().build())
        .with_step(StepBuilder::new("known").enabled().build())
        .build();

    let report = PipelineRunner::new(&registry).run(&pipeline, &input_set(&[]))?;

    // The second step still ran.
    assert_eq!(recorder.count_for("known"), 1);
    assert_eq!(report.unknown_jobs(), 1);
    assert_eq!(report.completed(), 1);
    assert_eq!(report.steps[0].outcome, StepOutcome::UnknownJob);
    assert_eq!(report.steps[1].outcome, StepOutcome::Completed);
    Ok(())
}

#[test]
fn params_are_resolved_before_dispatch() -> TestResult {
    init_tracing();
    let recorder = RecordingJobs::new();
    let mut registry = JobRegistry::new();
    recorder.register(&mut registry, "x");

    let pipeline = PipelineFileBuilder::new()
        .with_step(
            StepBuilder::new("x")
                .enabled()
                .param("n", "{{ inputs.name }}")
                .build(),
        )
        .build();
    let inputs = input_set(&[("name", Value::from("acme"))]);

    PipelineRunner::new(&registry).run(&pipeline, &inputs)?;

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    let (job, args) = &calls[0];
    assert_eq!(job, "x");
    assert_eq!(args.get("n"), Some(&Value::from("acme")));
    Ok(())
}

#[test]
fn absent_params_dispatch_with_empty_args() -> TestResult {
    init_tracing();
    let recorder = RecordingJobs::new();
    let mut registry = JobRegistry::new();
    recorder.register(&mut registry, "no_args");

    let pipeline = PipelineFileBuilder::new()
        .with_step(StepBuilder::new("no_args").enabled().build())
        .build();

    PipelineRunner::new(&registry).run(&pipeline, &input_set(&[]))?;

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].1.is_empty());
    Ok(())
}

#[test]
fn steps_execute_in_declared_order() -> TestResult {
    init_tracing();
    let recorder = RecordingJobs::new();
    let mut registry = JobRegistry::new();
    recorder.register(&mut registry, "first");
    recorder.register(&mut registry, "second");
    recorder.register(&mut registry, "third");

    let pipeline = PipelineFileBuilder::new()
        .with_step(StepBuilder::new("first").enabled().build())
        .with_step(StepBuilder::new("second").enabled().build())
        .with_step(StepBuilder::new("third").enabled().build())
        .build();

    PipelineRunner::new(&registry).run(&pipeline, &input_set(&[]))?;

    let order: Vec<String> = recorder.calls().into_iter().map(|(job, _)| job).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
    Ok(())
}

#[test]
fn job_failure_aborts_remaining_steps() -> TestResult {
    init_tracing();
    let recorder = RecordingJobs::new();
    let mut registry = JobRegistry::new();
    recorder.register_failing(&mut registry, "boom");
    recorder.register(&mut registry, "after");

    let pipeline = PipelineFileBuilder::new()
        .with_step(StepBuilder::new("boom").enabled().build())
        .with_step(StepBuilder::new("after").enabled().build())
        .build();

    let result = PipelineRunner::new(&registry).run(&pipeline, &input_set(&[]));

    match result {
        Err(DriftrunError::JobFailed { job, .. }) => assert_eq!(job, "boom"),
        other => panic!("expected JobFailed, got {other:?}"),
    }
    // Nothing after the failing step ran.
    assert_eq!(recorder.count_for("after"), 0);
    Ok(())
}

#[test]
fn empty_pipeline_completes_with_empty_report() -> TestResult {
    init_tracing();
    let registry = JobRegistry::new();

    let pipeline = PipelineFileBuilder::new().build();
    let report = PipelineRunner::new(&registry).run(&pipeline, &input_set(&[]))?;

    assert!(report.steps.is_empty());
    Ok(())
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut registry = JobRegistry::new();
    registry.register("dup", |_| Ok(())).unwrap();

    let result = registry.register("dup", |_| Ok(()));
    assert!(matches!(result, Err(DriftrunError::Usage(_))));
}

#[test]
fn empty_job_name_registration_is_rejected() {
    let mut registry = JobRegistry::new();
    let result = registry.register("", |_| Ok(()));
    assert!(matches!(result, Err(DriftrunError::Usage(_))));
}

#[test]
fn run_file_loads_pipeline_and_inputs() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    fs::write(dir.path().join("inputs.yaml"), "name: acme\n")?;
    fs::write(
        dir.path().join("pipeline.yaml"),
        r#"
input_file: inputs.yaml
pipeline:
  - job: x
    enabled: true
    params:
      n: "{{ inputs.name }}"
  - job: skipped_by_default
"#,
    )?;

    let recorder = RecordingJobs::new();
    let mut registry = JobRegistry::new();
    recorder.register(&mut registry, "x");

    let report = PipelineRunner::new(&registry).run_file(&dir.path().join("pipeline.yaml"))?;

    assert_eq!(report.completed(), 1);
    assert_eq!(report.skipped(), 1);
    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1.get("n"), Some(&Value::from("acme")));
    Ok(())
}

#[test]
fn run_file_with_missing_input_file_is_not_found() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    fs::write(
        dir.path().join("pipeline.yaml"),
        "input_file: missing.yaml\npipeline: []\n",
    )?;

    let registry = JobRegistry::new();
    let result = PipelineRunner::new(&registry).run_file(&dir.path().join("pipeline.yaml"));

    assert!(matches!(result, Err(DriftrunError::NotFound(_))));
    Ok(())
}

#[test]
fn pipeline_with_empty_job_name_fails_validation() -> TestResult {
    init_tracing();
    let dir = tempdir()?;
    fs::write(dir.path().join("inputs.yaml"), "{}\n")?;
    fs::write(
        dir.path().join("pipeline.yaml"),
        "input_file: inputs.yaml\npipeline:\n  - job: \"\"\n",
    )?;

    let registry = JobRegistry::new();
    let result = PipelineRunner::new(&registry).run_file(&dir.path().join("pipeline.yaml"));

    match result {
        Err(DriftrunError::Config(msg)) => assert!(msg.contains("empty `job` name")),
        other => panic!("expected Config error, got {other:?}"),
    }
    Ok(())
}

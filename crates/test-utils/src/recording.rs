use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use driftrun::pipeline::{JobArgs, JobRegistry};

/// Records job invocations so tests can assert on dispatch behaviour:
/// which jobs ran, in what order, with which resolved arguments.
#[derive(Clone, Default)]
pub struct RecordingJobs {
    calls: Arc<Mutex<Vec<(String, JobArgs)>>>,
}

impl RecordingJobs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job under `name` that records its invocation and
    /// succeeds.
    pub fn register(&self, registry: &mut JobRegistry, name: &str) {
        let calls = Arc::clone(&self.calls);
        let job_name = name.to_string();
        registry
            .register(name, move |args: &JobArgs| {
                let mut guard = calls.lock().unwrap();
                guard.push((job_name.clone(), args.clone()));
                Ok(())
            })
            .expect("registering recording job");
    }

    /// Register a job under `name` that records its invocation and then
    /// fails.
    pub fn register_failing(&self, registry: &mut JobRegistry, name: &str) {
        let calls = Arc::clone(&self.calls);
        let job_name = name.to_string();
        registry
            .register(name, move |args: &JobArgs| {
                let mut guard = calls.lock().unwrap();
                guard.push((job_name.clone(), args.clone()));
                Err(anyhow!("job '{job_name}' failed on purpose"))
            })
            .expect("registering failing job");
    }

    /// All recorded `(job, args)` invocations, in dispatch order.
    pub fn calls(&self) -> Vec<(String, JobArgs)> {
        self.calls.lock().unwrap().clone()
    }

    /// Total number of invocations across all jobs.
    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Number of invocations recorded for one job.
    pub fn count_for(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(job, _)| job == name)
            .count()
    }
}

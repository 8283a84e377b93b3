// src/config/validate.rs

use crate::config::model::{PipelineFile, RawPipelineFile, RawStep, Step};
use crate::errors::{DriftrunError, Result};

impl TryFrom<RawPipelineFile> for PipelineFile {
    type Error = DriftrunError;

    fn try_from(raw: RawPipelineFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_pipeline(&raw)?;
        let steps = raw
            .pipeline
            .into_iter()
            .map(|s| Step {
                job: s.job,
                params: s.params,
                enabled: s.enabled,
            })
            .collect();
        Ok(PipelineFile::new_unchecked(raw.input_file, steps))
    }
}

fn validate_raw_pipeline(raw: &RawPipelineFile) -> Result<()> {
    if raw.input_file.as_os_str().is_empty() {
        return Err(DriftrunError::Config(
            "pipeline definition must set a non-empty `input_file`".to_string(),
        ));
    }

    for (index, step) in raw.pipeline.iter().enumerate() {
        validate_step(index, step)?;
    }
    Ok(())
}

fn validate_step(index: usize, step: &RawStep) -> Result<()> {
    if step.job.trim().is_empty() {
        return Err(DriftrunError::Config(format!(
            "pipeline step {index} has an empty `job` name"
        )));
    }
    Ok(())
}

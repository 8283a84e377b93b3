// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::model::{PipelineFile, RawPipelineFile};
use crate::errors::{DriftrunError, Result};

/// Load a pipeline definition from `path` and return the raw
/// [`RawPipelineFile`].
///
/// This only performs YAML deserialization; it does **not** validate the
/// step declarations. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawPipelineFile> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DriftrunError::NotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path)?;

    let raw: RawPipelineFile = serde_yaml::from_str(&contents)?;

    Ok(raw)
}

/// Load a pipeline definition from `path` and run validation.
///
/// The recommended entry point for the rest of the application:
///
/// - Reads YAML.
/// - Applies defaults (`enabled` false, `pipeline` empty) via `serde`.
/// - Checks that `input_file` is set and every step names a job.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<PipelineFile> {
    let raw = load_from_path(&path)?;
    let pipeline = PipelineFile::try_from(raw)?;
    Ok(pipeline)
}

/// Directory a pipeline file's relative references resolve against.
///
/// - A path like `configs/pipeline.yaml` resolves against `configs/`.
/// - A bare filename (parent = "") resolves against the current working
///   directory.
pub fn pipeline_root_dir(pipeline_path: &Path) -> PathBuf {
    match pipeline_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

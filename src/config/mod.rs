// src/config/mod.rs

//! Pipeline definition files.
//!
//! - [`model`] holds the serde models (`RawPipelineFile` straight off the
//!   parser, `PipelineFile` after validation).
//! - [`loader`] reads definitions from disk.
//! - [`validate`] turns raw files into validated ones.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path, pipeline_root_dir};
pub use model::{PipelineFile, RawPipelineFile, RawStep, Step};

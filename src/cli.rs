// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `driftrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "driftrun",
    version,
    about = "Detect YAML configuration drift and run declarative pipelines.",
    long_about = None
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DRIFTRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Check a configuration file for drift against the stored snapshot.
    Check {
        /// Directory holding the snapshot state for this configuration.
        #[arg(long, value_name = "DIR")]
        storage_dir: PathBuf,

        /// Configuration file (YAML) to check.
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
    },

    /// Execute a pipeline definition.
    Run {
        /// Path to the pipeline definition file (YAML).
        ///
        /// Default: `pipeline.yaml` in the current working directory.
        #[arg(long, value_name = "PATH", default_value = "pipeline.yaml")]
        pipeline: PathBuf,

        /// Parse + validate, print the steps, but don't execute any jobs.
        #[arg(long)]
        dry_run: bool,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

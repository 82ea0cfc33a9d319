//! # driftwatch-cli
//!
//! The `driftwatch` command: generate a demo series, inspect its baseline,
//! scan for sustained drift, and render or email the alert.

pub mod args;
pub mod commands;
pub mod render;

use driftwatch_core::errors::{DriftwatchErrorCode, PipelineError};

pub use args::{Cli, Command};
pub use commands::{execute, Context};

/// One-line error report, prefixed with the error code when there is one.
pub fn describe_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<PipelineError>() {
        Some(inner) => inner.coded_string(),
        None => format!("{error:#}"),
    }
}

//! Error types for the `rnx-api` command.

use std::path::PathBuf;

use miette::Report;
use rnx_api::ApiDocsError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be assembled from its sources.
    #[error("Invalid configuration: {0}\n\nHint: Check rnx-api.json and RNX_API_* variables")]
    Config(String),

    /// The working directory does not exist.
    #[error("Working directory not found: {}", .0.display())]
    MissingCwd(PathBuf),

    /// Extraction or readme update failed.
    #[error(transparent)]
    Api(#[from] ApiDocsError),

    /// `--check` found a readme that needs regenerating.
    #[error("{} is out of date\n\nHint: Run rnx-api without --check to update it", .0.display())]
    OutOfDate(PathBuf),
}

/// Convert a CLI error into a miette report.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Api(ApiDocsError::Parse { path, message }) => miette::miette!(
            "Failed to parse {}:\n{}\n\nHint: Fix the syntax error before regenerating the API tables",
            path.display(),
            message
        ),
        CliError::Api(ApiDocsError::UnsupportedParameter {
            path,
            function,
            shape,
        }) => miette::miette!(
            "`{}` in {} takes a {} parameter, which cannot be rendered",
            function,
            path.display(),
            shape
        ),
        _ => miette::miette!("{}", err),
    }
}

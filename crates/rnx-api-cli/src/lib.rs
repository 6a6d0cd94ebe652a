//! Command-line front end for `rnx-api`.
//!
//! - [`cli`] - argument definitions
//! - [`config`] - layered configuration loading
//! - [`update`] - the readme update command
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod update;

pub use error::{CliError, Result};

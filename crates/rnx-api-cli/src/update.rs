//! The readme update command.

use std::path::PathBuf;

use rnx_api::{update_api_readme, ReadmeUpdater, TsConfigSources, UpdateReport};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::ApiConfig;
use crate::error::{CliError, Result};

/// Run the update described by `args`.
pub fn execute(args: &Cli) -> Result<UpdateReport> {
    let cwd = match &args.cwd {
        Some(cwd) => cwd.clone(),
        None => PathBuf::from("."),
    };
    if !cwd.is_dir() {
        return Err(CliError::MissingCwd(cwd));
    }

    let config = ApiConfig::load(args, &cwd)?;
    debug!(?config, "resolved configuration");

    let project = TsConfigSources::new(&config.project);
    let updater = ReadmeUpdater::new(&config.readme).dry_run(args.check);
    let report = update_api_readme(&project, config.extensions.clone(), &updater)?;

    info!(
        types = report.types,
        functions = report.functions,
        undocumented = report.diagnostics.len(),
        "collected API surface"
    );

    if args.check && report.changed {
        return Err(CliError::OutOfDate(config.readme));
    }
    Ok(report)
}

//! Layered configuration.
//!
//! Priority: command-line flags > `RNX_API_*` environment variables >
//! `rnx-api.json` in the working directory > defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format as _, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Name of the optional configuration file.
pub const CONFIG_FILE: &str = "rnx-api.json";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    /// Readme containing the generated region.
    pub readme: PathBuf,
    /// tsconfig.json supplying the include patterns.
    pub project: PathBuf,
    /// Extensions picked up when walking directories.
    pub extensions: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            readme: PathBuf::from("README.md"),
            project: PathBuf::from("tsconfig.json"),
            extensions: vec!["ts".to_string()],
        }
    }
}

/// Flags given on the command line; absent ones are not serialized.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    readme: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<PathBuf>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extensions: Vec<String>,
}

impl From<&Cli> for CliOverrides {
    fn from(args: &Cli) -> Self {
        Self {
            readme: args.readme.clone(),
            project: args.project.clone(),
            extensions: args.extensions.clone(),
        }
    }
}

impl ApiConfig {
    /// Load configuration for a run in `cwd`.
    pub fn load(args: &Cli, cwd: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        let config_file = cwd.join(CONFIG_FILE);
        if config_file.is_file() {
            figment = figment.merge(Json::file(config_file));
        }

        figment = figment
            .merge(Env::prefixed("RNX_API_"))
            .merge(Serialized::defaults(CliOverrides::from(args)));

        let config: Self = figment
            .extract()
            .map_err(|e| CliError::Config(e.to_string()))?;
        Ok(config.resolve(cwd))
    }

    /// Make relative paths relative to `cwd`.
    pub fn resolve(mut self, cwd: &Path) -> Self {
        self.readme = cwd.join(&self.readme);
        self.project = cwd.join(&self.project);
        self
    }
}

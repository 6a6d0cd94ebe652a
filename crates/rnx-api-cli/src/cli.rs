//! Command-line interface definition.

use std::path::PathBuf;

use clap::Parser;

/// Update the API tables in a package readme
#[derive(Parser, Debug, Default)]
#[command(
    name = "rnx-api",
    version,
    about = "Update the API tables in a package readme",
    long_about = "Scans the exported functions, interfaces and type aliases of a TypeScript\n\
                  package and rewrites the region between the `<!-- @rnx-kit/api start -->`\n\
                  and `<!-- @rnx-kit/api end -->` markers of its readme."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Readme to update (default: README.md)
    #[arg(long)]
    pub readme: Option<PathBuf>,

    /// tsconfig.json whose `include` lists the sources (default: tsconfig.json)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Source file extension to scan in directories; repeatable (default: ts)
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Working directory relative paths are resolved against
    #[arg(long)]
    pub cwd: Option<PathBuf>,

    /// Only report whether the readme is up to date; exits with an error if not
    #[arg(long)]
    pub check: bool,
}

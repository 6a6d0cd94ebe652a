//! rnx-api - keep a package readme's API tables in sync with its sources.

use clap::Parser;
use miette::Result;
use rnx_api_cli::{cli, error, logger, update};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(
        args.verbose,
        args.quiet,
        args.no_color || !logger::should_use_colors(),
    );

    update::execute(&args)
        .map(|_| ())
        .map_err(error::cli_error_to_miette)
}

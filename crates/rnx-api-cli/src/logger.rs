//! Logging setup built on `tracing`.
//!
//! Events go to stderr so that stdout stays free for command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// The level is chosen in this order:
/// 1. `verbose`: DEBUG for the rnx-api crates
/// 2. `quiet`: ERROR only
/// 3. `RUST_LOG`, when set
/// 4. INFO for the rnx-api crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("rnx_api=debug,rnx_api_cli=debug")
    } else if quiet {
        EnvFilter::new("rnx_api=error,rnx_api_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("rnx_api=info,rnx_api_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them, otherwise the
/// capabilities of stderr decide.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}

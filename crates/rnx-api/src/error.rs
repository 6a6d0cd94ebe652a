use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for readme API operations.
pub type Result<T> = std::result::Result<T, ApiDocsError>;

/// Error variants for API extraction and readme synchronization.
#[derive(Debug, Error)]
pub enum ApiDocsError {
    /// Failed to read or write a file.
    #[error("failed to access '{path}': {error}")]
    Io {
        /// Path to the file that caused the error.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Parsing the source file with OXC failed.
    #[error("failed to parse source '{path}': {message}")]
    Parse {
        /// Path to the source file.
        path: PathBuf,
        /// Aggregated parser error message.
        message: String,
    },

    /// A function parameter has no textual rendering.
    #[error("unsupported parameter in '{path}': `{function}` takes a {shape} parameter")]
    UnsupportedParameter {
        /// Path to the source file.
        path: PathBuf,
        /// Name of the exported function.
        function: String,
        /// Human-readable parameter shape.
        shape: &'static str,
    },
}

impl ApiDocsError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}

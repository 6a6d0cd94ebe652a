//! Synchronizes rendered tables into the delimited region of a readme.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::catalog::{Diagnostic, Extraction};
use crate::error::{ApiDocsError, Result};
use crate::generators::markdown::render_tables;

/// Line opening the generated region.
pub const TOKEN_START: &str = "<!-- @rnx-kit/api start -->";
/// Line closing the generated region.
pub const TOKEN_END: &str = "<!-- @rnx-kit/api end -->";

/// Replace everything between the markers with `content`.
///
/// Markers are kept and padded with one blank line each. A document without
/// a start marker followed by an end marker is returned unchanged.
pub fn replace_region(document: &str, content: &str) -> String {
    let Some(start) = document.find(TOKEN_START) else {
        return document.to_string();
    };
    let region_start = start + TOKEN_START.len();
    let Some(offset) = document[region_start..].find(TOKEN_END) else {
        return document.to_string();
    };
    let region_end = region_start + offset;

    let mut output = String::with_capacity(document.len() + content.len());
    output.push_str(&document[..region_start]);
    output.push_str("\n\n");
    output.push_str(content);
    output.push_str("\n\n");
    output.push_str(&document[region_end..]);
    output
}

/// Outcome of a readme synchronization.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Whether the regenerated text differs from the file on disk.
    pub changed: bool,
    /// Whether the file was rewritten.
    pub written: bool,
    /// Number of documented types.
    pub types: usize,
    /// Number of documented functions.
    pub functions: usize,
    /// Warnings collected during extraction.
    pub diagnostics: Vec<Diagnostic>,
}

/// Writes catalog tables into a readme file.
#[derive(Debug, Clone)]
pub struct ReadmeUpdater {
    path: PathBuf,
    dry_run: bool,
}

impl ReadmeUpdater {
    /// Creates an updater for the readme at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dry_run: false,
        }
    }

    /// Compute changes without touching the file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Render `extraction` and merge it into the readme.
    pub fn apply(&self, extraction: Extraction) -> Result<UpdateReport> {
        let content = render_tables(&extraction.catalog);
        let (changed, written) = self.write_region(&content)?;
        Ok(UpdateReport {
            changed,
            written,
            types: extraction.catalog.types.len(),
            functions: extraction.catalog.functions.len(),
            diagnostics: extraction.diagnostics,
        })
    }

    /// Merge `content` into the readme, writing only when the text differs.
    ///
    /// Returns `(changed, written)`.
    pub fn write_region(&self, content: &str) -> Result<(bool, bool)> {
        let original =
            fs::read_to_string(&self.path).map_err(|error| ApiDocsError::io(&self.path, error))?;
        let updated = replace_region(&original, content);

        if updated == original {
            info!(path = %self.path.display(), "readme is up to date");
            return Ok((false, false));
        }
        if self.dry_run {
            info!(path = %self.path.display(), "readme is out of date");
            return Ok((true, false));
        }

        fs::write(&self.path, updated).map_err(|error| ApiDocsError::io(&self.path, error))?;
        info!(path = %self.path.display(), "updated readme");
        Ok((true, true))
    }
}

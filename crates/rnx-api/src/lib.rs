#![deny(clippy::all)]

//! Readme API table synchronization for TypeScript packages.
//!
//! This crate provides:
//! - A source locator that expands include patterns into concrete files.
//! - A declaration extractor built on OXC that classifies named exports.
//! - A lightweight TSDoc parser used to derive one-line summaries.
//! - A Markdown table renderer and an idempotent readme region merge.

pub mod catalog;
pub mod error;
pub mod extractor;
pub mod generators;
pub mod locator;
pub mod model;
pub mod parser;
pub mod readme;
pub mod tsdoc;

pub use catalog::{Catalog, Diagnostic, Extraction};
pub use error::{ApiDocsError, Result};
pub use extractor::{ApiExtractor, render_params};
pub use generators::markdown::render_tables;
pub use locator::{ProjectSources, SourceLocator, TsConfigSources};
pub use model::{DeclarationKind, DocumentedEntry, ExportedDeclaration, ParamShape, SourceFile};
pub use readme::{ReadmeUpdater, UpdateReport, replace_region, TOKEN_END, TOKEN_START};

/// Locate sources, extract their documented exports and merge the tables
/// into the readme handled by `updater`.
///
/// Nothing is written unless every source file parses.
pub fn update_api_readme(
    project: &dyn ProjectSources,
    extensions: Vec<String>,
    updater: &ReadmeUpdater,
) -> Result<UpdateReport> {
    let locator = SourceLocator::for_project(project, extensions);
    let files = locator.locate_project(project);
    let extraction = ApiExtractor::new().extract_many(files)?;
    updater.apply(extraction)
}

//! Parser façade for reading TypeScript sources.
//!
//! Every module is parsed with TypeScript syntax enabled, whatever its
//! extension, so type annotations never cause spurious failures.

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{ApiDocsError, Result};

/// Resolve the source type for `path`, forcing TypeScript syntax on.
pub fn source_type_for(path: &Path) -> SourceType {
    let source_type = SourceType::from_path(path).unwrap_or_else(|_| SourceType::ts());
    if source_type.is_typescript() {
        source_type
    } else {
        source_type.with_module(true).with_typescript(true)
    }
}

/// Parse `source` into a program allocated in `allocator`.
///
/// Any parser diagnostic fails the whole file.
pub fn parse_program<'a>(
    allocator: &'a Allocator,
    path: &Path,
    source: &'a str,
) -> Result<Program<'a>> {
    let result = Parser::new(allocator, source, source_type_for(path)).parse();

    if result.panicked || !result.errors.is_empty() {
        let mut diagnostics: Vec<String> =
            result.errors.iter().map(|error| error.to_string()).collect();
        if diagnostics.is_empty() {
            diagnostics.push("parser aborted".to_string());
        }
        return Err(ApiDocsError::parse_error(path.to_path_buf(), &diagnostics));
    }

    Ok(result.program)
}

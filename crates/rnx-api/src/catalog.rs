use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::model::{DeclarationKind, DocumentedEntry, ExportedDeclaration};
use crate::tsdoc::{extract_brief, parse_doc_comment};

/// Documented exports split into the two rendered tables.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Interfaces and type aliases.
    pub types: Vec<DocumentedEntry>,
    /// Function declarations.
    pub functions: Vec<DocumentedEntry>,
}

impl Catalog {
    /// Appends an entry to the collection matching `kind`.
    pub fn push(&mut self, kind: DeclarationKind, entry: DocumentedEntry) {
        match kind {
            DeclarationKind::Function => self.functions.push(entry),
            DeclarationKind::TypeLike => self.types.push(entry),
        }
    }

    /// Returns `true` when neither table has entries.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.functions.is_empty()
    }

    /// Sorts both collections by category, then identifier.
    pub fn sort(&mut self) {
        self.types.sort_by(compare_entries);
        self.functions.sort_by(compare_entries);
    }
}

/// Ordering used for rendered tables.
pub fn compare_entries(lhs: &DocumentedEntry, rhs: &DocumentedEntry) -> Ordering {
    lhs.category
        .cmp(&rhs.category)
        .then_with(|| lhs.identifier.cmp(&rhs.identifier))
}

/// An advisory message produced during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Source file declaring the export.
    pub path: PathBuf,
    /// Display identifier of the export.
    pub identifier: String,
}

impl Diagnostic {
    /// Reports an export without a leading block comment.
    pub fn undocumented(path: impl Into<PathBuf>, identifier: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            identifier: identifier.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} is exported but undocumented",
            self.path.display(),
            self.identifier
        )
    }
}

/// Output of an extraction run: the catalog plus its warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub catalog: Catalog,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    /// Resolves the documentation of `declaration` and files it.
    ///
    /// Declarations without a leading block comment are reported and dropped.
    pub fn record(&mut self, path: &Path, declaration: ExportedDeclaration) {
        let identifier = declaration.identifier();
        let Some(comment) = declaration.leading_comment.as_deref() else {
            let diagnostic = Diagnostic::undocumented(path, identifier);
            warn!("{diagnostic}");
            self.diagnostics.push(diagnostic);
            return;
        };

        let description = describe(comment);
        debug!(
            category = %declaration.category,
            identifier = %identifier,
            "catalogued export"
        );
        self.catalog.push(
            declaration.kind,
            DocumentedEntry::new(declaration.category, identifier, description),
        );
    }
}

/// Brief description derived from a raw block comment.
pub fn describe(comment: &str) -> String {
    let parsed = parse_doc_comment(comment);
    if !parsed.well_formed {
        debug!("block comment is not a TSDoc comment; summary left empty");
    }
    extract_brief(&parsed.summary())
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A source file scheduled for extraction together with its category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File-system path of the module.
    pub path: PathBuf,
    /// Grouping label, the file's base name without extension.
    pub category: String,
}

impl SourceFile {
    /// Creates a source file, deriving the category from the path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let category = category_for(&path);
        Self { path, category }
    }
}

/// Returns the base name of `path` without its final extension.
pub fn category_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Exported declaration kinds that end up in one of the two tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Function,
    TypeLike,
}

/// Shape of a single function parameter binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamShape {
    /// `name`
    Identifier(String),
    /// `pattern = value`; only the pattern is shown.
    DefaultValued(Box<ParamShape>),
    /// `[a, b]`
    ArrayPattern,
    /// `{ a, b }`
    ObjectPattern,
    /// `...pattern`
    Rest(Box<ParamShape>),
    /// `private name` style constructor injection.
    PropertyInjection,
    /// `obj.prop` assignment target.
    MemberAccess,
}

impl ParamShape {
    /// Renders the parameter for a display signature.
    ///
    /// Shapes without a textual form yield their description as the error.
    pub fn render(&self) -> std::result::Result<String, &'static str> {
        match self {
            Self::Identifier(name) => Ok(name.clone()),
            Self::DefaultValued(inner) => inner.render(),
            Self::ArrayPattern => Ok("[]".to_string()),
            Self::ObjectPattern => Ok("{}".to_string()),
            Self::Rest(inner) => Ok(format!("...{}", inner.render()?)),
            Self::PropertyInjection => Err("property injection"),
            Self::MemberAccess => Err("member expression"),
        }
    }
}

/// A named, top-level export found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDeclaration {
    /// Exported identifier.
    pub name: String,
    /// Function or type-like declaration.
    pub kind: DeclarationKind,
    /// Category inherited from the owning source file.
    pub category: String,
    /// Rendered parameters, functions only.
    pub params: Vec<String>,
    /// Raw text of the nearest preceding block comment, delimiters included.
    pub leading_comment: Option<String>,
}

impl ExportedDeclaration {
    /// Display string used in tables and warnings, e.g. `` `f(a, [])` ``.
    pub fn identifier(&self) -> String {
        match self.kind {
            DeclarationKind::Function => format!("`{}({})`", self.name, self.params.join(", ")),
            DeclarationKind::TypeLike => format!("`{}`", self.name),
        }
    }
}

/// A catalogued export: `(category, identifier, description)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentedEntry {
    /// Grouping label.
    pub category: String,
    /// Display identifier, wrapped in backticks.
    pub identifier: String,
    /// Brief taken from the documentation comment summary.
    pub description: String,
}

impl DocumentedEntry {
    /// Creates a new documented entry.
    pub fn new(
        category: impl Into<String>,
        identifier: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            identifier: identifier.into(),
            description: description.into(),
        }
    }
}

use std::fs;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{
    BindingPattern, BindingPatternKind, Comment, Declaration, ExportNamedDeclaration,
    FormalParameter, Function, Statement, TSInterfaceDeclaration, TSTypeAliasDeclaration,
};
use oxc_span::{GetSpan, Span};
use tracing::debug;

use crate::catalog::Extraction;
use crate::error::{ApiDocsError, Result};
use crate::model::{category_for, DeclarationKind, ExportedDeclaration, ParamShape, SourceFile};
use crate::parser::parse_program;

/// Extracts exported functions and types from TypeScript modules using OXC.
#[derive(Debug, Clone, Default)]
pub struct ApiExtractor;

impl ApiExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Run the extraction pipeline over `files`, in order.
    ///
    /// The first unreadable or unparsable file aborts the run.
    pub fn extract_many<I>(&self, files: I) -> Result<Extraction>
    where
        I: IntoIterator<Item = SourceFile>,
    {
        let mut extraction = Extraction::default();
        for file in files {
            debug!(path = %file.path.display(), category = %file.category, "extracting");
            for declaration in self.extract_from_path(&file.path)? {
                extraction.record(&file.path, declaration);
            }
        }
        Ok(extraction)
    }

    /// Extract exported declarations from a file on disk.
    pub fn extract_from_path(&self, path: impl AsRef<Path>) -> Result<Vec<ExportedDeclaration>> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|error| ApiDocsError::io(path, error))?;
        self.extract_from_source(path, &source)
    }

    /// Extract exported declarations from an in-memory source string.
    pub fn extract_from_source(
        &self,
        path: impl AsRef<Path>,
        source: &str,
    ) -> Result<Vec<ExportedDeclaration>> {
        let path = path.as_ref();
        let category = category_for(path);

        let allocator = Allocator::default();
        let program = parse_program(&allocator, path, source)?;

        let mut declarations = Vec::new();
        let mut previous_end = 0;
        for statement in program.body.iter() {
            let statement_span = statement.span();
            let leading = Span::new(previous_end, statement_span.start);
            previous_end = statement_span.end;

            let Statement::ExportNamedDeclaration(export) = statement else {
                continue;
            };
            if let Some(declaration) = self.declaration_for_export(
                path,
                &category,
                export,
                nearest_block_comment(&program.comments, leading, source),
            )? {
                declarations.push(declaration);
            }
        }
        Ok(declarations)
    }

    fn declaration_for_export(
        &self,
        path: &Path,
        category: &str,
        export: &ExportNamedDeclaration,
        leading_comment: Option<String>,
    ) -> Result<Option<ExportedDeclaration>> {
        let Some(declaration) = &export.declaration else {
            return Ok(None);
        };

        let (name, kind, params) = match DeclarationShape::classify(declaration) {
            DeclarationShape::Function(function) => {
                let Some(id) = &function.id else {
                    return Ok(None);
                };
                let name = id.name.to_string();
                let params = render_params(&function_params(function)).map_err(|shape| {
                    ApiDocsError::UnsupportedParameter {
                        path: path.to_path_buf(),
                        function: name.clone(),
                        shape,
                    }
                })?;
                (name, DeclarationKind::Function, params)
            }
            DeclarationShape::Interface(interface) => (
                interface.id.name.to_string(),
                DeclarationKind::TypeLike,
                Vec::new(),
            ),
            DeclarationShape::TypeAlias(alias) => (
                alias.id.name.to_string(),
                DeclarationKind::TypeLike,
                Vec::new(),
            ),
            DeclarationShape::Other => return Ok(None),
        };

        Ok(Some(ExportedDeclaration {
            name,
            kind,
            category: category.to_string(),
            params,
            leading_comment,
        }))
    }
}

/// Declarations the extractor distinguishes.
enum DeclarationShape<'d, 'a> {
    Function(&'d Function<'a>),
    Interface(&'d TSInterfaceDeclaration<'a>),
    TypeAlias(&'d TSTypeAliasDeclaration<'a>),
    Other,
}

impl<'d, 'a> DeclarationShape<'d, 'a> {
    fn classify(declaration: &'d Declaration<'a>) -> Self {
        match declaration {
            // Overload heads and `declare function` have no body.
            Declaration::FunctionDeclaration(function) if function.body.is_some() => {
                Self::Function(function)
            }
            Declaration::TSInterfaceDeclaration(interface) => Self::Interface(interface),
            Declaration::TSTypeAliasDeclaration(alias) => Self::TypeAlias(alias),
            _ => Self::Other,
        }
    }
}

fn function_params(function: &Function) -> Vec<ParamShape> {
    let mut shapes = Vec::new();
    if function.this_param.is_some() {
        shapes.push(ParamShape::Identifier("this".to_string()));
    }
    shapes.extend(function.params.items.iter().map(param_shape));
    if let Some(rest) = &function.params.rest {
        shapes.push(ParamShape::Rest(Box::new(pattern_shape(&rest.argument))));
    }
    shapes
}

fn param_shape(param: &FormalParameter) -> ParamShape {
    if param.accessibility.is_some() || param.readonly || param.r#override {
        return ParamShape::PropertyInjection;
    }
    pattern_shape(&param.pattern)
}

fn pattern_shape(pattern: &BindingPattern) -> ParamShape {
    match &pattern.kind {
        BindingPatternKind::BindingIdentifier(ident) => ParamShape::Identifier(ident.name.to_string()),
        BindingPatternKind::AssignmentPattern(assignment) => {
            ParamShape::DefaultValued(Box::new(pattern_shape(&assignment.left)))
        }
        BindingPatternKind::ArrayPattern(_) => ParamShape::ArrayPattern,
        BindingPatternKind::ObjectPattern(_) => ParamShape::ObjectPattern,
    }
}

/// Render each parameter for a display signature.
///
/// Fails with the offending shape's description.
pub fn render_params(params: &[ParamShape]) -> std::result::Result<Vec<String>, &'static str> {
    params.iter().map(ParamShape::render).collect()
}

/// Raw text of the last block comment lying entirely inside `gap`.
///
/// `gap` runs from the end of the previous top-level statement to the start
/// of the export, so trailing comments of the previous statement count as
/// leading comments of the next one.
fn nearest_block_comment(comments: &[Comment], gap: Span, source: &str) -> Option<String> {
    comments
        .iter()
        .filter(|comment| comment.span.start >= gap.start && comment.span.end <= gap.end)
        .rev()
        .find(|comment| comment.is_block())
        .and_then(|comment| {
            source
                .get(comment.span.start as usize..comment.span.end as usize)
                .map(str::to_string)
        })
}

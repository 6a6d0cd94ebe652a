use std::collections::HashSet;
use std::fs;

use rnx_api::{ApiDocsError, ApiExtractor, DeclarationKind, SourceFile};
use tempfile::TempDir;

#[test]
fn classifies_functions_and_types() {
    let source = r#"
        /** Options for the loader. */
        export interface Options {
            verbose: boolean;
        }

        /** Supported platforms. */
        export type Platform = "ios" | "android";

        /** Loads things. */
        export function load(options: Options): void {}

        /** Not a table entry. */
        export class Loader {}

        /** Not a table entry either. */
        export const VERSION = "1.0";

        export default function main() {}
    "#;

    let declarations = ApiExtractor::new()
        .extract_from_source("src/loader.ts", source)
        .expect("extraction should succeed");

    let summary: Vec<_> = declarations
        .iter()
        .map(|d| (d.name.as_str(), d.kind, d.category.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Options", DeclarationKind::TypeLike, "loader"),
            ("Platform", DeclarationKind::TypeLike, "loader"),
            ("load", DeclarationKind::Function, "loader"),
        ]
    );
    assert_eq!(declarations[2].identifier(), "`load(options)`");
    assert_eq!(declarations[0].identifier(), "`Options`");
}

#[test]
fn renders_destructured_and_rest_parameters() {
    let source = r#"
        /** Doc. */
        export function f(a, [b, c] = [], ...rest) {}

        /** Doc. */
        export function g({ a }, b = 1, ...[x, y]) {}
    "#;

    let declarations = ApiExtractor::new()
        .extract_from_source("src/f.ts", source)
        .expect("extraction should succeed");

    assert_eq!(declarations[0].identifier(), "`f(a, [], ...rest)`");
    assert_eq!(declarations[1].identifier(), "`g({}, b, ...[])`");
}

#[test]
fn overload_signatures_are_ignored() {
    let source = r#"
        /** Overload. */
        export function parse(value: string): number;
        /** Parses a value. */
        export function parse(value: unknown): number {
            return 0;
        }
    "#;

    let declarations = ApiExtractor::new()
        .extract_from_source("src/parse.ts", source)
        .expect("extraction should succeed");

    assert_eq!(declarations.len(), 1);
    assert_eq!(
        declarations[0].leading_comment.as_deref(),
        Some("/** Parses a value. */")
    );
}

#[test]
fn this_parameter_is_listed_first() {
    let source = "/** Doc. */\nexport function p(this: Window, a) {}\n";
    let declarations = ApiExtractor::new()
        .extract_from_source("src/p.ts", source)
        .expect("extraction should succeed");
    assert_eq!(declarations[0].identifier(), "`p(this, a)`");
}

#[test]
fn trailing_comment_documents_the_next_export() {
    let source = "export type A = 1; /** B doc */\nexport type B = 2;\n";
    let declarations = ApiExtractor::new()
        .extract_from_source("src/x.ts", source)
        .expect("extraction should succeed");

    assert_eq!(declarations.len(), 2);
    assert_eq!(declarations[0].name, "A");
    assert_eq!(declarations[0].leading_comment, None);
    assert_eq!(declarations[1].name, "B");
    assert_eq!(declarations[1].leading_comment.as_deref(), Some("/** B doc */"));
}

#[test]
fn comment_before_an_unexported_statement_is_not_borrowed() {
    let source = "/** Internal. */\nconst internal = 1;\nexport function f() {}\n";
    let declarations = ApiExtractor::new()
        .extract_from_source("src/f.ts", source)
        .expect("extraction should succeed");
    assert_eq!(declarations[0].leading_comment, None);
}

#[test]
fn parameter_properties_outside_constructors_fail_the_file() {
    let error = ApiExtractor::new()
        .extract_from_source("src/f.ts", "/** Doc. */\nexport function f(private a) {}\n")
        .expect_err("parameter property must fail");

    match error {
        ApiDocsError::Parse { path, .. } => assert!(path.ends_with("f.ts")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn syntax_errors_abort_extraction() {
    let error = ApiExtractor::new()
        .extract_from_source("src/broken.ts", "export function broken( {")
        .expect_err("malformed source must fail");

    match error {
        ApiDocsError::Parse { path, .. } => assert!(path.ends_with("broken.ts")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_files_are_io_errors() {
    let temp = TempDir::new().unwrap();
    let error = ApiExtractor::new()
        .extract_from_path(temp.path().join("missing.ts"))
        .expect_err("missing file must fail");
    assert!(matches!(error, ApiDocsError::Io { .. }));
}

#[test]
fn undocumented_function_yields_a_single_warning() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("index.ts");
    fs::write(&path, "// just a line comment\nexport function f(a, b) {}\n").unwrap();

    let extraction = ApiExtractor::new()
        .extract_many(vec![SourceFile::new(&path)])
        .expect("extraction should succeed");

    assert!(extraction.catalog.is_empty());
    assert_eq!(extraction.diagnostics.len(), 1);
    assert_eq!(extraction.diagnostics[0].identifier, "`f(a, b)`");
    assert_eq!(extraction.diagnostics[0].path, path);
}

#[test]
fn description_is_the_first_paragraph() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("text.ts");
    fs::write(
        &path,
        "/**\n * Splits text\n * into words.\n *\n * Whitespace runs collapse.\n * @param text input\n */\nexport function split(text) {}\n",
    )
    .unwrap();

    let extraction = ApiExtractor::new()
        .extract_many(vec![SourceFile::new(&path)])
        .expect("extraction should succeed");

    let entry = &extraction.catalog.functions[0];
    assert_eq!(entry.category, "text");
    assert_eq!(entry.identifier, "`split(text)`");
    assert_eq!(entry.description, "Splits text into words.");
}

#[test]
fn duplicate_names_produce_duplicate_entries() {
    let temp = TempDir::new().unwrap();
    let a = temp.path().join("a.ts");
    let b = temp.path().join("b.ts");
    fs::write(&a, "/** A. */\nexport interface Id {}\n/** Again. */\nexport interface Id {}\n").unwrap();
    fs::write(&b, "/** B. */\nexport type Id = number;\n").unwrap();

    let extraction = ApiExtractor::new()
        .extract_many(vec![SourceFile::new(&a), SourceFile::new(&b)])
        .expect("extraction should succeed");

    let categories: Vec<_> = extraction
        .catalog
        .types
        .iter()
        .map(|e| e.category.as_str())
        .collect();
    assert_eq!(categories, vec!["a", "a", "b"]);
}

#[test]
fn repeated_runs_are_deterministic() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("index.ts");
    fs::write(
        &path,
        "/** One. */\nexport function one() {}\n/** Two. */\nexport type Two = 2;\nexport function three() {}\n",
    )
    .unwrap();

    let extractor = ApiExtractor::new();
    let first = extractor.extract_many(vec![SourceFile::new(&path)]).unwrap();
    let second = extractor.extract_many(vec![SourceFile::new(&path)]).unwrap();

    let as_set = |entries: &[rnx_api::DocumentedEntry]| entries.iter().cloned().collect::<HashSet<_>>();
    assert_eq!(as_set(&first.catalog.types), as_set(&second.catalog.types));
    assert_eq!(as_set(&first.catalog.functions), as_set(&second.catalog.functions));
    assert_eq!(first.diagnostics, second.diagnostics);
}

//! Source discovery.
//!
//! Include patterns come from the project configuration. Each one is either
//! an existing directory (walked recursively), an existing file, or a glob.

use std::fs;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::model::SourceFile;

/// Supplies the include patterns of a project.
pub trait ProjectSources {
    /// Directory relative patterns are resolved against.
    fn base_dir(&self) -> PathBuf {
        PathBuf::new()
    }

    /// Include patterns, in configuration order.
    fn patterns(&self) -> Vec<String>;
}

impl ProjectSources for Vec<String> {
    fn patterns(&self) -> Vec<String> {
        self.clone()
    }
}

/// Reads the `include` array of a `tsconfig.json`.
#[derive(Debug, Clone)]
pub struct TsConfigSources {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct TsConfig {
    #[serde(default)]
    include: Option<Vec<String>>,
}

impl TsConfigSources {
    /// Creates a reader for the tsconfig at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectSources for TsConfigSources {
    fn base_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
    }

    fn patterns(&self) -> Vec<String> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) => {
                debug!(path = %self.path.display(), %error, "no project configuration");
                return Vec::new();
            }
        };
        match serde_json::from_str::<TsConfig>(&strip_jsonc(&content)) {
            Ok(config) => config.include.unwrap_or_default(),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "ignoring malformed project configuration");
                Vec::new()
            }
        }
    }
}

/// Drop comments and trailing commas so tsconfig-flavoured JSON parses as JSON.
///
/// String literals are copied untouched. Removed comments become whitespace.
fn strip_jsonc(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    // Index in `output` of a comma that may still turn out to be trailing.
    let mut pending_comma: Option<usize> = None;

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                pending_comma = None;
                output.push(c);
                while let Some(c) = chars.next() {
                    output.push(c);
                    match c {
                        '\\' => {
                            if let Some(escaped) = chars.next() {
                                output.push(escaped);
                            }
                        }
                        '"' => break,
                        _ => {}
                    }
                }
            }
            '/' if chars.peek() == Some(&'/') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        output.push('\n');
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for c in chars.by_ref() {
                    if previous == '*' && c == '/' {
                        break;
                    }
                    previous = c;
                }
                output.push(' ');
            }
            ',' => {
                pending_comma = Some(output.len());
                output.push(c);
            }
            '}' | ']' => {
                if let Some(index) = pending_comma.take() {
                    output.replace_range(index..index + 1, " ");
                }
                output.push(c);
            }
            c if c.is_whitespace() => output.push(c),
            _ => {
                pending_comma = None;
                output.push(c);
            }
        }
    }
    output
}

/// Expands include patterns into an ordered list of source files.
#[derive(Debug, Clone)]
pub struct SourceLocator {
    base_dir: PathBuf,
    extensions: Vec<String>,
}

impl SourceLocator {
    /// Creates a locator resolving patterns against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
            extensions,
        }
    }

    /// Creates a locator for a project, using its base directory.
    pub fn for_project(project: &dyn ProjectSources, extensions: Vec<String>) -> Self {
        Self::new(project.base_dir(), extensions)
    }

    /// Resolve every pattern of `project`.
    pub fn locate_project(&self, project: &dyn ProjectSources) -> Vec<SourceFile> {
        self.locate(&project.patterns())
    }

    /// Resolve `patterns` in order. A file matched twice keeps its first position.
    pub fn locate(&self, patterns: &[String]) -> Vec<SourceFile> {
        let mut seen = FxHashSet::default();
        let mut files = Vec::new();

        for pattern in patterns {
            for path in self.resolve(pattern) {
                if seen.insert(path.clone()) {
                    debug!(path = %path.display(), "found source");
                    files.push(SourceFile::new(path));
                }
            }
        }
        files
    }

    fn resolve(&self, pattern: &str) -> Vec<PathBuf> {
        let candidate = self.base_dir.join(pattern);
        if candidate.is_dir() {
            return self.walk(&candidate);
        }
        if candidate.is_file() {
            return vec![candidate];
        }

        let expression = candidate.to_string_lossy();
        match glob::glob(&expression) {
            Ok(paths) => paths
                .filter_map(|entry| entry.ok())
                .filter(|path| path.is_file() && self.has_source_extension(path))
                .collect(),
            Err(error) => {
                debug!(%pattern, %error, "pattern matched nothing");
                Vec::new()
            }
        }
    }

    fn walk(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != "node_modules")
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.has_source_extension(path))
            .collect()
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

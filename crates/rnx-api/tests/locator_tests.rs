use std::fs;
use std::path::Path;

use rnx_api::{ProjectSources, SourceLocator, TsConfigSources};
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn names(root: &Path, patterns: &[&str]) -> Vec<String> {
    let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
    SourceLocator::new(root, vec!["ts".to_string()])
        .locate(&patterns)
        .into_iter()
        .map(|file| {
            file.path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

#[test]
fn directories_are_walked_recursively() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/b.ts");
    touch(temp.path(), "src/a.ts");
    touch(temp.path(), "src/nested/c.ts");
    touch(temp.path(), "src/readme.md");
    touch(temp.path(), "src/node_modules/dep/index.ts");

    assert_eq!(
        names(temp.path(), &["src"]),
        vec!["src/a.ts", "src/b.ts", "src/nested/c.ts"]
    );
}

#[test]
fn literal_files_are_kept_as_is() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "index.tsx");

    assert_eq!(names(temp.path(), &["index.tsx"]), vec!["index.tsx"]);
}

#[test]
fn globs_expand_and_duplicates_collapse() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "lib/one.ts");
    touch(temp.path(), "lib/two.ts");
    touch(temp.path(), "lib/notes.txt");

    assert_eq!(
        names(temp.path(), &["lib/two.ts", "lib/*", "missing/**/*.ts"]),
        vec!["lib/two.ts", "lib/one.ts"]
    );
}

#[test]
fn invalid_patterns_match_nothing() {
    let temp = TempDir::new().unwrap();
    assert!(names(temp.path(), &["src/[", "does-not-exist.ts"]).is_empty());
}

#[test]
fn category_comes_from_the_file_stem() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/platform.ts");

    let files = SourceLocator::new(temp.path(), vec!["ts".to_string()])
        .locate(&["src".to_string()]);
    assert_eq!(files[0].category, "platform");
}

#[test]
fn tsconfig_include_supplies_patterns() {
    let temp = TempDir::new().unwrap();
    let tsconfig = temp.path().join("tsconfig.json");
    fs::write(&tsconfig, r#"{ "compilerOptions": {}, "include": ["src", "index.ts"] }"#).unwrap();

    let project = TsConfigSources::new(&tsconfig);
    assert_eq!(project.patterns(), vec!["src", "index.ts"]);
    assert_eq!(project.base_dir(), temp.path());
}

#[test]
fn commented_tsconfig_is_accepted() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/a.ts");
    let tsconfig = temp.path().join("tsconfig.json");
    fs::write(
        &tsconfig,
        "{\n  // sources\n  \"include\": [\"src\"], /* emitted by tsc --init */\n}\n",
    )
    .unwrap();

    let project = TsConfigSources::new(&tsconfig);
    assert_eq!(project.patterns(), vec!["src"]);

    let files = SourceLocator::for_project(&project, vec!["ts".to_string()]).locate_project(&project);
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, temp.path().join("src/a.ts"));
}

#[test]
fn unusable_tsconfig_yields_no_patterns() {
    let temp = TempDir::new().unwrap();
    let missing = TsConfigSources::new(temp.path().join("tsconfig.json"));
    assert!(missing.patterns().is_empty());

    let malformed = temp.path().join("broken.json");
    fs::write(&malformed, "{ include: [").unwrap();
    assert!(TsConfigSources::new(&malformed).patterns().is_empty());

    let no_include = temp.path().join("bare.json");
    fs::write(&no_include, "{}").unwrap();
    assert!(TsConfigSources::new(&no_include).patterns().is_empty());
}

#[test]
fn plain_pattern_lists_act_as_a_project() {
    let temp = TempDir::new().unwrap();
    touch(temp.path(), "src/index.ts");

    let project = vec![temp.path().join("src").to_string_lossy().into_owned()];
    let locator = SourceLocator::for_project(&project, vec!["ts".to_string()]);
    let files = locator.locate_project(&project);

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, temp.path().join("src/index.ts"));
}

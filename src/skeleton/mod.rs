//! Skeleton Document Assembly
//!
//! The single pass behind the CLI: discover files, filter them through the
//! exclusion patterns, extract public symbols, group by folder, render, and
//! write the result. All data lives in local maps and is dropped once the
//! markdown is on disk.

pub mod markdown;

use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::parser::{Extraction, PythonOutline};
use crate::analyzer::scanner::{FileScanner, is_path_ignored, load_patterns};
use crate::types::{FolderDocs, Result};

/// Hidden tool directory at the project root. It must already exist; the
/// final write fails with an I/O error otherwise.
pub const OUTPUT_DIR: &str = ".skeldoc";
pub const OUTPUT_FILE: &str = "project_structure.md";

/// Run the full scan-and-generate cycle, returning the output path.
pub fn generate<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let root = root.as_ref();
    let patterns = load_patterns(root)?;
    let scanner = FileScanner::new(root);
    let mut outline = PythonOutline::new()?;

    let mut folders = FolderDocs::new();

    for path in scanner.scan()? {
        let Some(relative) = scanner.relative_path(&path) else {
            continue;
        };

        if is_path_ignored(&relative, &patterns) {
            tracing::debug!(path = %relative, "excluded by pattern");
            continue;
        }

        let contents = fs::read(&path)?;
        let doc = match outline.extract(&contents) {
            Extraction::Symbols(symbols) if !symbols.is_empty() => symbols,
            Extraction::Symbols(_) => continue,
            Extraction::Skipped(reason) => {
                tracing::debug!(path = %relative, %reason, "skipped unparseable file");
                continue;
            }
        };

        let folder = relative
            .rsplit_once('/')
            .map(|(dir, _)| dir.to_string())
            .unwrap_or_default();

        folders.entry(folder).or_default().insert(relative, doc);
    }

    let output = root.join(OUTPUT_DIR).join(OUTPUT_FILE);
    fs::write(&output, markdown::render(&folders))?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(OUTPUT_DIR)).unwrap();
        dir
    }

    fn write_file(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn generated(root: &Path) -> String {
        let output = generate(root).unwrap();
        fs::read_to_string(output).unwrap()
    }

    #[test]
    fn test_end_to_end_single_file() {
        let dir = project();
        write_file(
            dir.path(),
            "pkg/a.py",
            "def foo(): pass\n\nclass Bar:\n    def baz(self): pass\n",
        );

        let out = generated(dir.path());
        assert!(out.contains("## Folder: `pkg`"));
        assert!(out.contains("- **File:** `pkg/a.py`"));
        assert!(out.contains("- **`foo()`**"));
        assert!(out.contains("- **Class:** `Bar`"));
        assert!(out.contains("- **`baz()`**"));
    }

    #[test]
    fn test_files_without_public_symbols_omitted() {
        let dir = project();
        write_file(dir.path(), "empty.py", "x = 1\n");
        write_file(dir.path(), "private.py", "def _hidden(): pass\n");
        write_file(dir.path(), "broken.py", "def oops(:\n");

        assert_eq!(generated(dir.path()), "# Project Structure\n\n");
    }

    #[test]
    fn test_default_excluded_folders_yield_header_only() {
        let dir = project();
        write_file(dir.path(), ".venv/pkg.py", "def f(): pass\n");
        write_file(dir.path(), "tests/test_x.py", "def test(): pass\n");

        assert_eq!(generated(dir.path()), "# Project Structure\n\n");
    }

    #[test]
    fn test_gitignore_patterns_applied() {
        let dir = project();
        write_file(dir.path(), ".gitignore", "generated/\n*.gen.py\n");
        write_file(dir.path(), "generated/g.py", "def f(): pass\n");
        write_file(dir.path(), "pkg/a.gen.py", "def g(): pass\n");
        write_file(dir.path(), "pkg/keep.py", "def keep(): pass\n");

        let out = generated(dir.path());
        assert!(out.contains("`pkg/keep.py`"));
        assert!(!out.contains("g.py"));
        assert!(!out.contains("a.gen.py"));
    }

    #[test]
    fn test_root_level_files_group_under_empty_folder() {
        let dir = project();
        write_file(dir.path(), "top.py", "def f(): pass\n");

        let out = generated(dir.path());
        assert!(out.contains("## Folder: ``"));
        assert!(out.contains("- **File:** `top.py`"));
    }

    #[test]
    fn test_output_is_idempotent() {
        let dir = project();
        write_file(dir.path(), "pkg/a.py", "def foo(): pass\n");
        write_file(dir.path(), "pkg/b.py", "class C:\n    def m(self): pass\n");

        let first = generated(dir.path());
        let second = generated(dir.path());
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_output_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.py", "def f(): pass\n");

        assert!(generate(dir.path()).is_err());
    }

    #[test]
    fn test_overwrites_previous_output() {
        let dir = project();
        write_file(dir.path(), "a.py", "def f(): pass\n");
        generate(dir.path()).unwrap();

        fs::remove_file(dir.path().join("a.py")).unwrap();
        let out = generated(dir.path());
        assert_eq!(out, "# Project Structure\n\n");
    }
}

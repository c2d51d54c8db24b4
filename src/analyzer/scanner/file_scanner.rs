use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::types::Result;

/// The only extension the scanner considers.
const SOURCE_EXTENSION: &str = "py";

/// Recursive `.py` file discovery under a project root.
///
/// All gitignore handling in the walker is disabled: exclusion is decided by
/// [`super::exclude::is_path_ignored`] on relative paths, not by the walk.
/// Hidden entries are skipped, and results come back sorted so downstream
/// output is deterministic.
pub struct FileScanner {
    root: PathBuf,
}

impl FileScanner {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Enumerate source files, sorted lexicographically by full path.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(true)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .follow_links(false)
            .build();

        let mut files: Vec<PathBuf> = walker
            .filter_map(|e| e.ok())
            .filter(|entry| {
                let path = entry.path();
                path.is_file() && has_source_extension(path)
            })
            .map(|entry| entry.into_path())
            .collect();

        files.sort();

        tracing::debug!(count = files.len(), root = %self.root.display(), "scanned source files");
        Ok(files)
    }

    /// Path relative to the scan root, normalized to forward slashes.
    pub fn relative_path(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let components: Vec<&str> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(components.join("/"))
    }
}

fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == SOURCE_EXTENSION)
}

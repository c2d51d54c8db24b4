//! Exclusion Pattern Matching
//!
//! Simplified gitignore dialect: directory patterns (trailing `/`), root
//! anchoring (leading `/`), and shell globs for everything else. No negation,
//! no comment handling past the loader, no `**` special-casing beyond what the
//! glob engine provides.
//!
//! Paths are matched in relative, forward-slash form regardless of host
//! platform.

use std::fs;
use std::path::Path;

use crate::types::Result;

/// Built-in exclusions appended after any project `.gitignore` patterns:
/// virtualenv, test tree, and skeldoc's own output directory.
pub const DEFAULT_EXCLUDES: &[&str] = &[".venv/", "tests/", ".skeldoc/"];

/// A single exclusion pattern with its derived flags. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionPattern {
    /// Pattern text with anchor and directory markers stripped.
    text: String,
    /// Leading `/` was present: match only at the project root.
    anchored: bool,
    /// Trailing `/` was present: the pattern names a directory.
    directory: bool,
}

impl ExclusionPattern {
    pub fn parse(line: &str) -> Self {
        let anchored = line.starts_with('/');
        let stripped = line.trim_start_matches('/');
        let directory = stripped.ends_with('/');
        let text = if directory {
            stripped.trim_end_matches('/')
        } else {
            stripped
        };

        Self {
            text: text.to_string(),
            anchored,
            directory,
        }
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    pub fn is_directory(&self) -> bool {
        self.directory
    }

    /// Check `relative_path` (forward slashes) against this pattern.
    pub fn matches(&self, relative_path: &str) -> bool {
        if self.directory {
            return self.matches_directory(relative_path);
        }

        // An unparseable glob matches nothing.
        let Ok(glob) = glob::Pattern::new(&self.text) else {
            return false;
        };

        if glob.matches(relative_path) {
            return true;
        }

        // Unanchored patterns without a separator also match the basename at
        // any depth, e.g. `*.gen.py` against `sub/a.gen.py`.
        if !self.anchored && !self.text.contains('/') {
            let basename = relative_path.rsplit('/').next().unwrap_or(relative_path);
            return glob.matches(basename);
        }

        false
    }

    fn matches_directory(&self, relative_path: &str) -> bool {
        let mut components = relative_path.split('/');
        if self.anchored {
            components.next() == Some(self.text.as_str())
        } else {
            components.any(|c| c == self.text)
        }
    }
}

/// First-match short-circuit over the pattern list.
pub fn is_path_ignored(relative_path: &str, patterns: &[ExclusionPattern]) -> bool {
    patterns.iter().any(|p| p.matches(relative_path))
}

/// Read `.gitignore` at the project root (blank lines and `#` comments
/// skipped), then append the built-in exclusions. A missing file just means
/// no project-specific patterns.
pub fn load_patterns<P: AsRef<Path>>(root: P) -> Result<Vec<ExclusionPattern>> {
    let ignore_path = root.as_ref().join(".gitignore");
    let mut patterns = Vec::new();

    if ignore_path.exists() {
        let contents = fs::read_to_string(&ignore_path)?;
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            patterns.push(ExclusionPattern::parse(line));
        }
    }

    patterns.extend(DEFAULT_EXCLUDES.iter().map(|p| ExclusionPattern::parse(p)));

    tracing::debug!(count = patterns.len(), "loaded exclusion patterns");
    Ok(patterns)
}

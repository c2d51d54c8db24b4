//! SkelDoc - Markdown Skeleton Generator for Python Codebases
//!
//! Scans a project tree for Python source files, extracts public top-level
//! functions and classes (with their public methods) via tree-sitter, and
//! writes a deterministic markdown outline with placeholder summaries for
//! human-written prose.
//!
//! ## Pipeline
//!
//! 1. Discover `*.py` files under the project root, sorted for determinism
//! 2. Filter them against `.gitignore` patterns plus built-in exclusions
//! 3. Extract public symbols per file, silently skipping unparseable sources
//! 4. Group by containing folder and render the skeleton document
//!
//! ## Modules
//!
//! - [`analyzer`]: file scanning, exclusion matching, Python symbol extraction
//! - [`skeleton`]: document assembly and markdown rendering
//! - [`types`]: shared data model and error types

pub mod analyzer;
pub mod skeleton;
pub mod types;

// Error Types
pub use types::error::{Result, SkelError};

// Data Model
pub use types::{ClassSymbol, FolderDocs, ModuleSymbols};

// Analyzer Re-exports
pub use analyzer::{
    parser::{Extraction, PythonOutline},
    scanner::{ExclusionPattern, FileScanner, is_path_ignored, load_patterns},
};

// Generation
pub use skeleton::generate;

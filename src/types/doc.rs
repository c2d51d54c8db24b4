//! Document Data Model
//!
//! Owned, single-pass structures: built once while scanning, consumed by the
//! markdown renderer, then dropped. Folder and file maps are BTreeMaps so
//! iteration order is the lexicographic path order the output format requires.

use std::collections::BTreeMap;

/// A public class with its public methods, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSymbol {
    pub name: String,
    pub methods: Vec<String>,
}

/// Public symbols extracted from a single Python module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSymbols {
    /// Top-level function names, in source order.
    pub functions: Vec<String>,
    /// Top-level classes, in source order.
    pub classes: Vec<ClassSymbol>,
}

impl ModuleSymbols {
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }
}

/// Relative file path (forward slashes) to its extracted symbols.
pub type FileDocs = BTreeMap<String, ModuleSymbols>;

/// Containing folder (empty string for root-level files) to its file entries.
pub type FolderDocs = BTreeMap<String, FileDocs>;

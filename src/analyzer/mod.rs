//! Code Analyzer Module
//!
//! File discovery with exclusion-pattern filtering, plus tree-sitter based
//! extraction of the public symbols of Python modules.

pub mod parser;
pub mod scanner;

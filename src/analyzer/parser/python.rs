//! Python Symbol Extraction
//!
//! Tree-sitter based extraction of the public surface of a single module:
//! top-level functions and classes (with their immediate public methods).
//! Nothing below the module/class-body level is visited.

use tree_sitter::Node;

use crate::types::{ClassSymbol, ModuleSymbols, Result, SkelError};

/// Outcome of extracting one file. A file that cannot be parsed is skipped,
/// never an error: broken sources are simply absent from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Symbols(ModuleSymbols),
    Skipped(String),
}

pub struct PythonOutline {
    parser: tree_sitter::Parser,
}

impl PythonOutline {
    pub fn new() -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| SkelError::Parse {
                message: format!("Failed to set Python language: {e}"),
                path: String::new(),
            })?;
        Ok(Self { parser })
    }

    /// Extract public top-level symbols from raw file contents.
    pub fn extract(&mut self, source: &[u8]) -> Extraction {
        if std::str::from_utf8(source).is_err() {
            return Extraction::Skipped("not valid UTF-8".to_string());
        }

        let Some(tree) = self.parser.parse(source, None) else {
            return Extraction::Skipped("parser produced no tree".to_string());
        };

        let root = tree.root_node();
        if root.has_error() {
            return Extraction::Skipped("syntax error".to_string());
        }

        let mut symbols = ModuleSymbols::default();
        let mut cursor = root.walk();

        for child in root.named_children(&mut cursor) {
            let node = unwrap_decorated(child);
            match node.kind() {
                "function_definition" => {
                    if let Some(name) = definition_name(node, source) {
                        if is_public(name) {
                            symbols.functions.push(name.to_string());
                        }
                    }
                }
                "class_definition" => {
                    if let Some(name) = definition_name(node, source) {
                        if is_public(name) {
                            symbols.classes.push(ClassSymbol {
                                name: name.to_string(),
                                methods: class_methods(node, source),
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        Extraction::Symbols(symbols)
    }
}

/// Public (non-dunder, non-private) name: no leading underscore.
#[inline]
fn is_public(name: &str) -> bool {
    !name.starts_with('_')
}

/// Decorated definitions count as plain definitions, matching how Python's
/// own grammar treats the decorator list as part of the statement.
fn unwrap_decorated(node: Node) -> Node {
    if node.kind() == "decorated_definition" {
        node.child_by_field_name("definition").unwrap_or(node)
    } else {
        node
    }
}

fn definition_name<'a>(node: Node, source: &'a [u8]) -> Option<&'a str> {
    node.child_by_field_name("name")?.utf8_text(source).ok()
}

/// Public methods from the immediate class body, in source order. Nested
/// classes and anything inside method bodies are not visited.
fn class_methods(class_node: Node, source: &[u8]) -> Vec<String> {
    let Some(body) = class_node.child_by_field_name("body") else {
        return Vec::new();
    };

    let mut methods = Vec::new();
    let mut cursor = body.walk();

    for child in body.named_children(&mut cursor) {
        let node = unwrap_decorated(child);
        if node.kind() != "function_definition" {
            continue;
        }
        if let Some(name) = definition_name(node, source) {
            if is_public(name) {
                methods.push(name.to_string());
            }
        }
    }

    methods
}

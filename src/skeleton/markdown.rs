//! Markdown Rendering
//!
//! Deterministic rendering of grouped symbol docs into the skeleton document.
//! Placeholder tokens are left for humans to fill in; everything else is fixed
//! so repeated runs on an unchanged tree are byte-identical.

use crate::types::FolderDocs;

pub const FOLDER_PLACEHOLDER: &str = "[FOLDER PURPOSE]";
pub const FUNCTION_PLACEHOLDER: &str = "[FUNCTION SUMMARY]";
pub const CLASS_PLACEHOLDER: &str = "[CLASS PURPOSE]";

pub fn render(folders: &FolderDocs) -> String {
    let mut out = String::from("# Project Structure\n\n");

    for (folder, files) in folders {
        out.push_str(&format!("## Folder: `{folder}`\n\n"));
        out.push_str(&format!("**Purpose:** {FOLDER_PLACEHOLDER}\n\n"));

        for (path, doc) in files {
            out.push_str(&format!("- **File:** `{path}`\n\n"));

            if !doc.functions.is_empty() {
                out.push_str("  - **Standalone Functions**\n");
                for name in &doc.functions {
                    out.push_str(&format!("    - **`{name}()`**\n"));
                    out.push_str(&format!("      - **Summary:** {FUNCTION_PLACEHOLDER}\n"));
                }
            }

            if !doc.classes.is_empty() {
                out.push_str("  - **Classes**\n");
                for class in &doc.classes {
                    out.push_str(&format!("    - **Class:** `{}`\n", class.name));
                    out.push_str(&format!("      - **Purpose:** {CLASS_PLACEHOLDER}\n"));
                    if !class.methods.is_empty() {
                        out.push_str("      - **Methods**\n");
                        for method in &class.methods {
                            out.push_str(&format!("        - **`{method}()`**\n"));
                            out.push_str(&format!(
                                "          - **Summary:** {FUNCTION_PLACEHOLDER}\n"
                            ));
                        }
                    }
                }
            }

            out.push('\n');
        }

        out.push_str("---\n\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClassSymbol, FolderDocs, ModuleSymbols};

    fn single_file(folder: &str, path: &str, doc: ModuleSymbols) -> FolderDocs {
        let mut folders = FolderDocs::new();
        folders
            .entry(folder.to_string())
            .or_default()
            .insert(path.to_string(), doc);
        folders
    }

    #[test]
    fn test_render_empty_tree_is_header_only() {
        assert_eq!(render(&FolderDocs::new()), "# Project Structure\n\n");
    }

    #[test]
    fn test_render_full_entry() {
        let doc = ModuleSymbols {
            functions: vec!["foo".to_string()],
            classes: vec![ClassSymbol {
                name: "Bar".to_string(),
                methods: vec!["baz".to_string()],
            }],
        };
        let out = render(&single_file("pkg", "pkg/a.py", doc));

        assert_eq!(
            out,
            "# Project Structure\n\n\
             ## Folder: `pkg`\n\n\
             **Purpose:** [FOLDER PURPOSE]\n\n\
             - **File:** `pkg/a.py`\n\n\
             \x20 - **Standalone Functions**\n\
             \x20   - **`foo()`**\n\
             \x20     - **Summary:** [FUNCTION SUMMARY]\n\
             \x20 - **Classes**\n\
             \x20   - **Class:** `Bar`\n\
             \x20     - **Purpose:** [CLASS PURPOSE]\n\
             \x20     - **Methods**\n\
             \x20       - **`baz()`**\n\
             \x20         - **Summary:** [FUNCTION SUMMARY]\n\
             \n\
             ---\n\n"
        );
    }

    #[test]
    fn test_methods_header_omitted_for_private_only_classes() {
        let doc = ModuleSymbols {
            functions: vec![],
            classes: vec![ClassSymbol {
                name: "Quiet".to_string(),
                methods: vec![],
            }],
        };
        let out = render(&single_file("", "a.py", doc));

        assert!(out.contains("- **Class:** `Quiet`"));
        assert!(!out.contains("**Methods**"));
    }

    #[test]
    fn test_folders_render_in_lexicographic_order() {
        let mut folders = FolderDocs::new();
        for folder in ["zeta", "alpha"] {
            folders.entry(folder.to_string()).or_default().insert(
                format!("{folder}/m.py"),
                ModuleSymbols {
                    functions: vec!["f".to_string()],
                    classes: vec![],
                },
            );
        }
        let out = render(&folders);

        let alpha = out.find("## Folder: `alpha`").unwrap();
        let zeta = out.find("## Folder: `zeta`").unwrap();
        assert!(alpha < zeta);
    }
}

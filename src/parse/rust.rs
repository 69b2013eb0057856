use crate::parse::ImportInfo;
use once_cell::sync::Lazy;
use regex::Regex;

static USE_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"use\s+([a-zA-Z_][a-zA-Z0-9_:]*);").unwrap());
static MOD_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^mod\s+([a-zA-Z_][a-zA-Z0-9_]*);").unwrap());

/// Extract Rust imports, line by line.
///
/// Matches single-path `use foo::bar;` declarations (grouped and renamed
/// imports fall through unmatched) and `mod name;` declarations. Paths are
/// normalized from `::` to `/` for path-like comparison downstream.
pub fn parse_imports(content: &str) -> Vec<ImportInfo> {
    let mut imports = Vec::new();

    for (index, line) in content.split('\n').enumerate() {
        let clean = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();
        if clean.is_empty() {
            continue;
        }

        if let Some(caps) = USE_DECL.captures(clean) {
            let path = caps[1].to_string();
            let is_external = !path.starts_with("crate::")
                && !path.starts_with("self::")
                && !path.starts_with("super::");
            imports.push(ImportInfo {
                module: path.replace("::", "/"),
                is_external,
                line: index + 1,
            });
            continue;
        }

        if let Some(caps) = MOD_DECL.captures(clean) {
            imports.push(ImportInfo {
                module: caps[1].to_string(),
                is_external: false,
                line: index + 1,
            });
        }
    }

    imports
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn crate_use_is_internal_and_normalized() {
        let imports = parse_imports("use crate::graph::builder;\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "crate/graph/builder");
        assert!(!imports[0].is_external);
    }

    #[test]
    fn super_and_self_are_internal() {
        let imports = parse_imports("use super::helpers;\nuse self::inner;\n");
        assert!(imports.iter().all(|i| !i.is_external));
    }

    #[test]
    fn external_crate_use() {
        let imports = parse_imports("use serde::Serialize;\n");
        assert_eq!(imports[0].module, "serde/Serialize");
        assert!(imports[0].is_external);
    }

    #[test]
    fn mod_declaration_is_always_internal() {
        let imports = parse_imports("mod parser;\n");
        assert_eq!(imports[0].module, "parser");
        assert!(!imports[0].is_external);
        assert_eq!(imports[0].line, 1);
    }

    #[test]
    fn grouped_use_is_not_matched() {
        // Single-path form only; brace groups fall through.
        assert!(parse_imports("use std::{fs, io};\n").is_empty());
    }

    #[test]
    fn line_comments_are_stripped() {
        let imports = parse_imports("// use crate::a;\nuse crate::b; // ok\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "crate/b");
        assert_eq!(imports[0].line, 2);
    }

    #[test]
    fn pub_mod_is_not_matched() {
        // The mod pattern is anchored at line start.
        assert!(parse_imports("pub mod parser;\n").is_empty());
    }
}

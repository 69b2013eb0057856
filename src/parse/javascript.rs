use crate::parse::ImportInfo;
use once_cell::sync::Lazy;
use regex::Regex;

static ES_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s+.*?from\s+['"]([^'"]+)['"]"#).unwrap());
static REQUIRE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"require\(['"]([^'"]+)['"]\)"#).unwrap());
static DYNAMIC_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\(['"]([^'"]+)['"]\)"#).unwrap());

/// Extract JavaScript/TypeScript imports, line by line.
///
/// Tries ES module syntax, then `require(...)`, then dynamic `import(...)`;
/// first match wins per line. Only `//` line comments are stripped; block
/// comments are not (a known limitation carried deliberately).
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

        let matched = ES_IMPORT
            .captures(clean)
            .or_else(|| REQUIRE.captures(clean))
            .or_else(|| DYNAMIC_IMPORT.captures(clean));

        if let Some(caps) = matched {
            let module = caps[1].to_string();
            let is_external = !module.starts_with('.');
            imports.push(ImportInfo {
                module,
                is_external,
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
    fn es_import_relative_is_internal() {
        let imports = parse_imports("import { Button } from './components/Button';\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "./components/Button");
        assert!(!imports[0].is_external);
        assert_eq!(imports[0].line, 1);
    }

    #[test]
    fn es_import_bare_is_external() {
        let imports = parse_imports("import React from 'react';\n");
        assert_eq!(imports[0].module, "react");
        assert!(imports[0].is_external);
    }

    #[test]
    fn require_call() {
        let imports = parse_imports("const fs = require('fs');\nconst x = require('../lib/x');\n");
        assert_eq!(imports.len(), 2);
        assert!(imports[0].is_external);
        assert_eq!(imports[1].module, "../lib/x");
        assert!(!imports[1].is_external);
    }

    #[test]
    fn dynamic_import() {
        let imports = parse_imports("const mod = await import('./lazy');\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "./lazy");
    }

    #[test]
    fn first_match_wins_per_line() {
        // An ES import and a require on one line: only the ES match is taken.
        let imports = parse_imports("import a from './a'; const b = require('./b');\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "./a");
    }

    #[test]
    fn line_comments_are_stripped() {
        let imports = parse_imports("// import a from './a'\nimport b from './b' // yes\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "./b");
        assert_eq!(imports[0].line, 2);
    }

    #[test]
    fn block_comments_are_not_stripped() {
        // Documented limitation: imports inside /* */ still match.
        let imports = parse_imports("/* import a from './a' */\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, "./a");
    }

    #[test]
    fn double_quotes_accepted() {
        let imports = parse_imports("import x from \"./x\";\n");
        assert_eq!(imports[0].module, "./x");
    }
}

use crate::parse::ImportInfo;
use once_cell::sync::Lazy;
use regex::Regex;

static FROM_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"from\s+([.\w]+)\s+import").unwrap());
static PLAIN_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^import\s+([\w.]+)").unwrap());

/// Extract Python imports, line by line.
///
/// `from x import y` is internal iff `x` starts with a dot. A bare
/// `import x` is always classified external: absolute intra-project imports
/// are indistinguishable from library imports at this level, and the
/// resolver gets to attempt them anyway.
pub fn parse_imports(content: &str) -> Vec<ImportInfo> {
    let mut imports = Vec::new();

    for (index, line) in content.split('\n').enumerate() {
        let clean = line.split('#').next().unwrap_or("").trim();
        if clean.is_empty() {
            continue;
        }

        if let Some(caps) = FROM_IMPORT.captures(clean) {
            let module = caps[1].to_string();
            let is_external = !module.starts_with('.');
            imports.push(ImportInfo {
                module,
                is_external,
                line: index + 1,
            });
            continue;
        }

        if let Some(caps) = PLAIN_IMPORT.captures(clean) {
            imports.push(ImportInfo {
                module: caps[1].to_string(),
                is_external: true,
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
    fn from_import_relative_is_internal() {
        let imports = parse_imports("from .utils import helper\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, ".utils");
        assert!(!imports[0].is_external);
        assert_eq!(imports[0].line, 1);
    }

    #[test]
    fn from_import_multi_dot() {
        let imports = parse_imports("from ..config.settings import DB\n");
        assert_eq!(imports[0].module, "..config.settings");
        assert!(!imports[0].is_external);
    }

    #[test]
    fn from_import_absolute_is_external() {
        let imports = parse_imports("from collections import OrderedDict\n");
        assert_eq!(imports[0].module, "collections");
        assert!(imports[0].is_external);
    }

    #[test]
    fn plain_import_always_external() {
        // Known imprecision: absolute intra-project imports are flagged
        // external too; resolution decides whether an edge exists.
        let imports = parse_imports("import os\nimport mypackage.mymodule\n");
        assert_eq!(imports.len(), 2);
        assert!(imports.iter().all(|i| i.is_external));
        assert_eq!(imports[1].module, "mypackage.mymodule");
        assert_eq!(imports[1].line, 2);
    }

    #[test]
    fn comments_are_stripped() {
        let imports = parse_imports("# import os\nfrom .a import b  # trailing\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, ".a");
        assert_eq!(imports[0].line, 2);
    }

    #[test]
    fn indented_import_matches_after_trim() {
        // Lines are trimmed before matching, so the ^ anchor sees "import os".
        let imports = parse_imports("    import os\n");
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn from_import_only_once_per_line() {
        let imports = parse_imports("from . import a, b, c\n");
        assert_eq!(imports.len(), 1);
        assert_eq!(imports[0].module, ".");
    }

    #[test]
    fn unmatched_lines_are_skipped() {
        assert!(parse_imports("x = 1\nprint(x)\n").is_empty());
    }
}

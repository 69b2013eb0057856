pub mod javascript;
pub mod python;
pub mod rust;
pub mod vue;

use serde::Serialize;

/// One parsed import statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportInfo {
    /// The import specifier as written in source (Rust `::` normalized to `/`)
    pub module: String,
    /// True if the specifier refers to a third-party/library module
    pub is_external: bool,
    /// 1-indexed source line of the import statement
    pub line: usize,
}

/// Supported source language, selected by file extension.
///
/// A closed enum rather than trait objects: the supported set is fixed and
/// extension dispatch stays exhaustively checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    Vue,
    Rust,
}

/// Every extension the resolver may probe with, dot included.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs", ".vue", ".rs",
];

impl Language {
    /// Look up the parser for a file extension (dot included, case-insensitive).
    /// Returns `None` for unsupported extensions; callers skip such files.
    pub fn for_extension(extension: &str) -> Option<Language> {
        match extension.to_lowercase().as_str() {
            ".py" => Some(Language::Python),
            ".js" | ".jsx" | ".ts" | ".tsx" | ".mjs" | ".cjs" => Some(Language::JavaScript),
            ".vue" => Some(Language::Vue),
            ".rs" => Some(Language::Rust),
            _ => None,
        }
    }

    /// Look up the parser for a path based on its extension.
    pub fn for_path(path: &std::path::Path) -> Option<Language> {
        Language::for_extension(&extension_of(path))
    }

    /// Extract all import statements from raw source text.
    ///
    /// Never fails: unmatched or malformed lines are silently skipped.
    pub fn parse_imports(&self, content: &str) -> Vec<ImportInfo> {
        match self {
            Language::Python => python::parse_imports(content),
            Language::JavaScript => javascript::parse_imports(content),
            Language::Vue => vue::parse_imports(content),
            Language::Rust => rust::parse_imports(content),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Python => write!(f, "python"),
            Language::JavaScript => write!(f, "javascript"),
            Language::Vue => write!(f, "vue"),
            Language::Rust => write!(f, "rust"),
        }
    }
}

/// Extension of `path` with the leading dot, lowercased ("" if none).
pub fn extension_of(path: &std::path::Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

/// Number of `\n`-delimited lines, uniform across languages.
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

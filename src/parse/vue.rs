use crate::parse::{javascript, ImportInfo};
use once_cell::sync::Lazy;
use regex::Regex;

static SCRIPT_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script[^>]*>(.*?)</script>").unwrap());

/// Extract imports from a Vue single-file component.
///
/// Pulls out every `<script>` block with a regex (not a real HTML parser),
/// hands the block to the JavaScript parser, and shifts the reported line
/// numbers by the line on which the block starts.
pub fn parse_imports(content: &str) -> Vec<ImportInfo> {
    let mut imports = Vec::new();

    for caps in SCRIPT_BLOCK.captures_iter(content) {
        let script = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let block_start = caps.get(0).map(|m| m.start()).unwrap_or(0);
        let line_offset = content[..block_start].matches('\n').count();

        for mut import in javascript::parse_imports(script) {
            import.line += line_offset;
            imports.push(import);
        }
    }

    imports
}

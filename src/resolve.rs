use crate::parse::{extension_of, SUPPORTED_EXTENSIONS};
use std::path::{Path, PathBuf};

/// Resolve an import specifier to a concrete file on disk.
///
/// Relative specifiers walk directories by leading-dot count from the
/// importing file; bare specifiers are tried under `<root>/src/` first,
/// then `<root>/`. Candidate extensions come from the *importing* file's
/// language context, since the target's language is not yet known.
/// Returns `None` when no candidate exists (dead or truly external import).
pub fn resolve_module(specifier: &str, current_file: &Path, project_root: &Path) -> Option<PathBuf> {
    let current_ext = extension_of(current_file);

    let target = if specifier.starts_with('.') {
        let leading_dots = specifier.chars().take_while(|&c| c == '.').count();
        let rest = &specifier[leading_dots..];
        let mut dir = current_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .to_path_buf();
        // One dot stays in the current directory; each extra dot walks up.
        for _ in 1..leading_dots {
            if let Some(parent) = dir.parent() {
                dir = parent.to_path_buf();
            }
        }
        if rest.is_empty() {
            dir
        } else {
            let as_path = rest.replace('.', "/");
            dir.join(as_path.trim_start_matches('/'))
        }
    } else {
        let as_path = specifier.replace('.', "/").replace("::", "/");
        let under_src = project_root.join("src").join(&as_path);
        let src_exists = SUPPORTED_EXTENSIONS.iter().any(|ext| {
            with_suffix(&under_src, ext).exists() || under_src.join(format!("index{ext}")).exists()
        });
        if src_exists {
            under_src
        } else {
            project_root.join(&as_path)
        }
    };

    let mut candidates: Vec<PathBuf> = Vec::new();
    if current_ext == ".py" {
        candidates.push(with_suffix(&target, ".py"));
        candidates.push(target.join("__init__.py"));
    }
    if matches!(
        current_ext.as_str(),
        ".js" | ".jsx" | ".ts" | ".tsx" | ".mjs" | ".cjs" | ".vue"
    ) {
        for ext in [".ts", ".tsx", ".js", ".jsx", ".vue"] {
            candidates.push(with_suffix(&target, ext));
        }
        for index in ["index.ts", "index.js", "index.vue"] {
            candidates.push(target.join(index));
        }
    }
    if current_ext == ".vue" {
        candidates.push(with_suffix(&target, ".vue"));
    }
    if current_ext == ".rs" {
        candidates.push(with_suffix(&target, ".rs"));
        candidates.push(target.join("mod.rs"));
        candidates.push(target.join("lib.rs"));
    }
    // Unknown importing context: probe every supported extension.
    if candidates.is_empty() {
        for ext in SUPPORTED_EXTENSIONS {
            candidates.push(with_suffix(&target, ext));
        }
    }

    candidates.into_iter().find(|c| c.is_file())
}

/// Append a literal suffix to a path ("foo" + ".py" -> "foo.py").
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

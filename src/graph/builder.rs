use crate::graph::{cycles, orphans, DependencyGraph, GraphEdge, GraphNode};
use crate::parse::{self, Language};
use crate::resolve::resolve_module;
use crate::rules::{validate_edge, ArchRule};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Hard ceiling on recursive descent. `visited` already prevents loops;
/// this bounds pathological init-to-init re-export chains, which add one
/// recursion level per hop regardless of `max_depth`.
const RECURSION_CEILING: usize = 64;

/// Build the annotated dependency graph for `root_file`.
///
/// Depth-bounded pre-order traversal: each file's imports are resolved and
/// followed immediately. Best-effort throughout — unreadable files count as
/// zero imports, unresolvable specifiers produce no edge, unsupported
/// extensions stop the walk. Always returns a graph, possibly empty.
pub fn build_graph(
    root_file: &Path,
    project_root: &Path,
    max_depth: usize,
    rules: &[ArchRule],
) -> DependencyGraph {
    let project_root = realpath(project_root);
    let root_file = realpath(root_file);

    let mut traversal = Traversal {
        project_root,
        root_file: root_file.clone(),
        max_depth,
        rules,
        nodes: Vec::new(),
        edges: Vec::new(),
        visited: HashSet::new(),
    };
    traversal.process(&root_file, 0, RECURSION_CEILING);

    let root_id = relative_id(&root_file, &traversal.project_root);
    let mut graph = DependencyGraph {
        nodes: traversal.nodes,
        edges: traversal.edges,
    };
    cycles::annotate(&mut graph);
    orphans::annotate(&mut graph, &root_id);
    graph
}

/// Owned traversal state for one build; nothing is shared across calls.
struct Traversal<'r> {
    project_root: PathBuf,
    root_file: PathBuf,
    max_depth: usize,
    rules: &'r [ArchRule],
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    /// Keyed by real (symlink-resolved) path; a file is marked once its
    /// outgoing edges have been emitted, not when first discovered.
    visited: HashSet<PathBuf>,
}

impl Traversal<'_> {
    fn process(&mut self, file: &Path, depth: usize, budget: usize) {
        if budget == 0 {
            tracing::debug!(file = %file.display(), "recursion ceiling reached, stopping descent");
            return;
        }
        let file = realpath(file);

        let Some(parser) = Language::for_path(&file) else {
            // Unsupported file type: neither node nor edge.
            return;
        };

        let imports = match std::fs::read_to_string(&file) {
            Ok(content) => parser.parse_imports(&content),
            Err(e) => {
                tracing::debug!(file = %file.display(), error = %e, "unreadable, treating as empty");
                Vec::new()
            }
        };

        let external_libs: Vec<String> = imports
            .iter()
            .filter(|i| i.is_external)
            .map(|i| i.module.clone())
            .collect();

        // A package __init__ only becomes a node when it is the root itself.
        let is_init = is_init_file(&file);
        let source_id = if !is_init || file == self.root_file {
            Some(self.add_node(&file, imports.len(), depth, external_libs))
        } else {
            None
        };

        if depth >= self.max_depth || self.visited.contains(&file) {
            return;
        }
        self.visited.insert(file.clone());

        if is_init && file != self.root_file {
            return;
        }
        let Some(source_id) = source_id else { return };

        for import in &imports {
            // External-flagged imports still get a resolution attempt: bare
            // absolute project imports resolve through the src/root fallback.
            let Some(target) = resolve_module(&import.module, &file, &self.project_root) else {
                continue;
            };
            let target = realpath(&target);

            if is_init_file(&target) && Language::for_path(&target).is_some() {
                self.expand_package_index(&source_id, &import.module, &target, depth, budget);
            } else {
                let count = self.import_count(&target);
                let target_id = self.add_node(&target, count, depth + 1, Vec::new());
                if source_id != target_id {
                    self.push_edge(&source_id, &target_id, import.module.clone());
                    self.process(&target, depth + 1, budget - 1);
                }
            }
        }
    }

    /// Re-export through a package index: instead of an edge to the
    /// `__init__.py`, parse its own imports and connect the original source
    /// straight to each re-exported target, labeled `"outer -> inner"`.
    fn expand_package_index(
        &mut self,
        source_id: &str,
        outer_module: &str,
        init_file: &Path,
        depth: usize,
        budget: usize,
    ) {
        let Some(parser) = Language::for_path(init_file) else { return };
        let Ok(content) = std::fs::read_to_string(init_file) else { return };

        for sub in parser.parse_imports(&content) {
            let Some(sub_target) = resolve_module(&sub.module, init_file, &self.project_root) else {
                continue;
            };
            let sub_target = realpath(&sub_target);
            // Init re-exporting another init: skip rather than chase chains.
            if is_init_file(&sub_target) {
                continue;
            }
            let count = self.import_count(&sub_target);
            let sub_id = self.add_node(&sub_target, count, depth + 1, Vec::new());
            if source_id != sub_id {
                self.push_edge(source_id, &sub_id, format!("{} -> {}", outer_module, sub.module));
                self.process(&sub_target, depth + 1, budget - 1);
            }
        }
    }

    /// Insert a node unless its id is already taken (first insertion wins).
    fn add_node(
        &mut self,
        path: &Path,
        import_count: usize,
        depth: usize,
        external_libs: Vec<String>,
    ) -> String {
        let id = relative_id(path, &self.project_root);
        if !self.nodes.iter().any(|n| n.id == id) {
            let lines = std::fs::read_to_string(path)
                .map(|c| parse::line_count(&c))
                .unwrap_or(0);
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.nodes.push(GraphNode {
                id: id.clone(),
                name,
                imports: import_count,
                depth,
                lines,
                is_cyclic: false,
                is_orphan: false,
                external_libs: if external_libs.is_empty() {
                    None
                } else {
                    Some(external_libs)
                },
            });
        }
        id
    }

    fn push_edge(&mut self, source: &str, target: &str, module: String) {
        let violation = validate_edge(source, target, self.rules).map(String::from);
        self.edges.push(GraphEdge {
            source: source.to_string(),
            target: target.to_string(),
            module,
            violation,
        });
    }

    /// Import count for a node discovered as an edge target (0 when the
    /// file is unreadable or has no registered parser).
    fn import_count(&self, path: &Path) -> usize {
        match Language::for_path(path) {
            Some(parser) => std::fs::read_to_string(path)
                .map(|c| parser.parse_imports(&c).len())
                .unwrap_or(0),
            None => 0,
        }
    }
}

fn is_init_file(path: &Path) -> bool {
    path.file_name().and_then(|n| n.to_str()) == Some("__init__.py")
}

/// Symlink-resolved path; falls back to the path as given on failure.
fn realpath(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn relative_id(path: &Path, project_root: &Path) -> String {
    path.strip_prefix(project_root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

pub mod builder;
pub mod cycles;
pub mod orphans;

use serde::Serialize;

/// One file in the dependency graph.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    /// Path relative to the project root; the node's unique key
    pub id: String,
    /// File basename without extension
    pub name: String,
    /// Number of import statements found in this file
    pub imports: usize,
    /// Traversal depth from the root file (root = 0)
    pub depth: usize,
    /// Total line count (0 on read failure)
    pub lines: usize,
    /// Member of a strongly connected component of size > 1
    pub is_cyclic: bool,
    /// No edge targets this node and it is not the root
    pub is_orphan: bool,
    /// External module names imported by this file, in parse order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_libs: Option<Vec<String>>,
}

/// One directed import relationship.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    /// Id of the importing node
    pub source: String,
    /// Id of the imported node
    pub target: String,
    /// Raw specifier, or `"a -> b"` for re-exports through a package index
    pub module: String,
    /// Name of the architecture rule this edge breaks, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violation: Option<String>,
}

/// The annotated output of one `build_graph` call.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    pub fn cyclic_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_cyclic)
    }

    pub fn orphan_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| n.is_orphan)
    }

    pub fn violations(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.violation.is_some())
    }
}

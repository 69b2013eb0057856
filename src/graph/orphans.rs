use crate::graph::DependencyGraph;
use std::collections::HashSet;

/// Flag every node with no incoming edge, except the root itself.
pub fn annotate(graph: &mut DependencyGraph, root_id: &str) {
    let has_incoming: HashSet<String> = graph.edges.iter().map(|e| e.target.clone()).collect();
    for node in &mut graph.nodes {
        node.is_orphan = !has_incoming.contains(&node.id) && node.id != root_id;
    }
}

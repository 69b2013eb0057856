use crate::graph::DependencyGraph;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};

/// Flag every node that belongs to a strongly connected component of size
/// greater than one. Self-loops cannot occur (the builder suppresses
/// self-edges), so SCC size alone decides cyclicity.
pub fn annotate(graph: &mut DependencyGraph) {
    let mut pg: DiGraph<(), ()> = DiGraph::new();
    let mut index_of: HashMap<&str, NodeIndex> = HashMap::new();
    for node in &graph.nodes {
        index_of.insert(node.id.as_str(), pg.add_node(()));
    }
    for edge in &graph.edges {
        if let (Some(&s), Some(&t)) = (
            index_of.get(edge.source.as_str()),
            index_of.get(edge.target.as_str()),
        ) {
            pg.add_edge(s, t, ());
        }
    }

    let mut cyclic: HashSet<NodeIndex> = HashSet::new();
    for scc in tarjan_scc(&pg) {
        if scc.len() > 1 {
            cyclic.extend(scc);
        }
    }

    // Nodes were inserted in order, so indices line up positionally.
    for (i, node) in graph.nodes.iter_mut().enumerate() {
        node.is_cyclic = cyclic.contains(&NodeIndex::new(i));
    }
}

use depscope::graph::{cycles, orphans, DependencyGraph, GraphEdge, GraphNode};
use depscope::rules::{default_rules, validate_edge};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn make_graph(edges: &[(usize, usize)], node_count: usize) -> DependencyGraph {
    let nodes = (0..node_count)
        .map(|i| GraphNode {
            id: format!("mod_{i}.py"),
            name: format!("mod_{i}"),
            imports: 0,
            depth: 0,
            lines: 0,
            is_cyclic: false,
            is_orphan: false,
            external_libs: None,
        })
        .collect();
    let edges = edges
        .iter()
        .filter(|(s, t)| s != t) // the builder never emits self-loops
        .map(|&(s, t)| GraphEdge {
            source: format!("mod_{s}.py"),
            target: format!("mod_{t}.py"),
            module: format!("mod_{t}"),
            violation: None,
        })
        .collect();
    DependencyGraph { nodes, edges }
}

proptest! {
    #[test]
    fn cyclic_nodes_have_flagged_in_and_out_edges(
        edges in prop::collection::vec((0usize..12, 0usize..12), 0..40)
    ) {
        let mut graph = make_graph(&edges, 12);
        cycles::annotate(&mut graph);

        let flagged: HashSet<&str> = graph
            .nodes
            .iter()
            .filter(|n| n.is_cyclic)
            .map(|n| n.id.as_str())
            .collect();

        // A node in an SCC of size > 1 must have an outgoing and an
        // incoming edge whose other endpoint is also flagged.
        for id in &flagged {
            let has_out = graph
                .edges
                .iter()
                .any(|e| e.source == *id && flagged.contains(e.target.as_str()));
            let has_in = graph
                .edges
                .iter()
                .any(|e| e.target == *id && flagged.contains(e.source.as_str()));
            prop_assert!(has_out && has_in);
        }
    }

    #[test]
    fn cycle_annotation_is_idempotent(
        edges in prop::collection::vec((0usize..10, 0usize..10), 0..30)
    ) {
        let mut once = make_graph(&edges, 10);
        cycles::annotate(&mut once);
        let mut twice = once.clone();
        cycles::annotate(&mut twice);
        prop_assert_eq!(once.nodes, twice.nodes);
    }

    #[test]
    fn orphan_iff_no_incoming_edge_and_not_root(
        edges in prop::collection::vec((0usize..10, 0usize..10), 0..30)
    ) {
        let mut graph = make_graph(&edges, 10);
        orphans::annotate(&mut graph, "mod_0.py");

        let mut incoming: HashMap<&str, usize> = HashMap::new();
        for e in &graph.edges {
            *incoming.entry(e.target.as_str()).or_default() += 1;
        }
        for node in &graph.nodes {
            let expected = incoming.get(node.id.as_str()).is_none() && node.id != "mod_0.py";
            prop_assert_eq!(node.is_orphan, expected);
        }
    }

    #[test]
    fn validate_edge_is_deterministic(source in "[a-z/]{1,20}", target in "[a-z/]{1,20}") {
        let rules = default_rules();
        let first = validate_edge(&source, &target, &rules);
        let second = validate_edge(&source, &target, &rules);
        prop_assert_eq!(first, second);
    }
}

use crate::errors::Result;
use crate::graph::DependencyGraph;
use std::io::Write;

/// Write the dependency graph in Graphviz DOT format.
///
/// Pure serialization — node placement is left to the renderer. Annotation
/// state maps to fill colors, violations to red edges.
pub fn write_dot<W: Write>(writer: &mut W, graph: &DependencyGraph) -> Result<()> {
    writeln!(writer, "digraph dependencies {{")?;
    writeln!(writer, "    rankdir=LR;")?;
    writeln!(writer, "    node [shape=box, style=filled];")?;
    writeln!(writer)?;

    for node in &graph.nodes {
        let fill = if node.is_cyclic {
            "salmon"
        } else if node.is_orphan {
            "lightgray"
        } else {
            "lightblue"
        };
        writeln!(
            writer,
            "    \"{}\" [label=\"{}\", fillcolor={}];",
            node.id, node.name, fill
        )?;
    }
    writeln!(writer)?;

    for edge in &graph.edges {
        match &edge.violation {
            Some(rule) => writeln!(
                writer,
                "    \"{}\" -> \"{}\" [label=\"{} ({})\", color=red];",
                edge.source, edge.target, edge.module, rule
            )?,
            None => writeln!(
                writer,
                "    \"{}\" -> \"{}\" [label=\"{}\"];",
                edge.source, edge.target, edge.module
            )?,
        }
    }

    writeln!(writer, "}}")?;
    Ok(())
}

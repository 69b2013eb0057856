use crate::errors::Result;
use crate::graph::DependencyGraph;
use serde::Serialize;
use std::io::Write;

/// Summary report produced by `analyze`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReport {
    pub root: String,
    pub node_count: usize,
    pub edge_count: usize,
    pub cyclic: Vec<String>,
    pub orphans: Vec<String>,
    pub violations: Vec<ViolationEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationEntry {
    pub source: String,
    pub target: String,
    pub module: String,
    pub rule: String,
}

impl AnalyzeReport {
    pub fn from_graph(root: &str, graph: &DependencyGraph) -> Self {
        AnalyzeReport {
            root: root.to_string(),
            node_count: graph.nodes.len(),
            edge_count: graph.edges.len(),
            cyclic: graph.cyclic_nodes().map(|n| n.id.clone()).collect(),
            orphans: graph.orphan_nodes().map(|n| n.id.clone()).collect(),
            violations: graph
                .violations()
                .map(|e| ViolationEntry {
                    source: e.source.clone(),
                    target: e.target.clone(),
                    module: e.module.clone(),
                    rule: e.violation.clone().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Write the full graph as pretty JSON.
pub fn write_graph_json<W: Write>(writer: &mut W, graph: &DependencyGraph) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, graph)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the analyze report as pretty JSON.
pub fn write_report_json<W: Write>(writer: &mut W, report: &AnalyzeReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

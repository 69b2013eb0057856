use crate::errors::Result;
use crate::graph::DependencyGraph;
use crate::output::json::AnalyzeReport;
use std::io::Write;

/// Write the analyze report as human-readable text.
pub fn write_report_text<W: Write>(
    writer: &mut W,
    graph: &DependencyGraph,
    report: &AnalyzeReport,
) -> Result<()> {
    writeln!(writer, "Depscope Analysis Report")?;
    writeln!(writer, "========================")?;
    writeln!(writer)?;
    writeln!(writer, "Root:   {}", report.root)?;
    writeln!(writer, "Nodes:  {}", report.node_count)?;
    writeln!(writer, "Edges:  {}", report.edge_count)?;
    writeln!(writer)?;

    if report.cyclic.is_empty() {
        writeln!(writer, "No circular dependencies.")?;
    } else {
        writeln!(writer, "Circular Dependencies ({})", report.cyclic.len())?;
        writeln!(writer, "{:-<60}", "")?;
        for id in &report.cyclic {
            writeln!(writer, "  - {id}")?;
        }
    }
    writeln!(writer)?;

    if report.orphans.is_empty() {
        writeln!(writer, "No orphan files.")?;
    } else {
        writeln!(writer, "Orphan Files ({})", report.orphans.len())?;
        writeln!(writer, "{:-<60}", "")?;
        for id in &report.orphans {
            writeln!(writer, "  - {id}")?;
        }
    }
    writeln!(writer)?;

    if report.violations.is_empty() {
        writeln!(writer, "No architecture violations.")?;
    } else {
        writeln!(writer, "Architecture Violations ({})", report.violations.len())?;
        writeln!(writer, "{:-<60}", "")?;
        for v in &report.violations {
            writeln!(writer, "  {} -> {}  [{}]", v.source, v.target, v.rule)?;
        }
    }
    writeln!(writer)?;

    writeln!(writer, "Files")?;
    writeln!(writer, "{:-<60}", "")?;
    writeln!(
        writer,
        "{:<40} {:>6} {:>7} {:>5}",
        "File", "Depth", "Imports", "Lines"
    )?;
    for node in &graph.nodes {
        writeln!(
            writer,
            "{:<40} {:>6} {:>7} {:>5}",
            node.id, node.depth, node.imports, node.lines
        )?;
    }

    Ok(())
}

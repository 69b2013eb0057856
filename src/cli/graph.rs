use crate::cli::resolve_inputs;
use crate::errors::Result;
use crate::graph::builder::build_graph;
use crate::output::{self, OutputFormat};
use crate::rules::load_arch_rules;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GraphArgs {
    /// Root source file to build the graph from
    pub file: PathBuf,

    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Maximum traversal depth from the root file
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Output format (json or dot)
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,
}

pub fn run(args: &GraphArgs) -> Result<()> {
    let (file, root) = resolve_inputs(&args.file, args.root.as_deref())?;
    let rules = load_arch_rules(&root);

    let graph = build_graph(&file, &root, args.depth, &rules);
    if graph.nodes.is_empty() {
        tracing::warn!(file = %file.display(), "no parseable root file, graph is empty");
    }

    let mut stdout = std::io::stdout();
    match args.format {
        OutputFormat::Json | OutputFormat::Text => {
            output::json::write_graph_json(&mut stdout, &graph)?;
        }
        OutputFormat::Dot => {
            output::dot::write_dot(&mut stdout, &graph)?;
        }
    }
    Ok(())
}

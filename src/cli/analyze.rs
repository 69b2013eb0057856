use crate::cli::resolve_inputs;
use crate::errors::Result;
use crate::graph::builder::build_graph;
use crate::output::json::AnalyzeReport;
use crate::output::{self, OutputFormat};
use crate::rules::load_arch_rules;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Root source file to analyze from
    pub file: PathBuf,

    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Maximum traversal depth from the root file
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 2 if any of these findings are present
    #[arg(long, value_enum)]
    pub fail_on: Vec<FailOn>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    Cycles,
    Orphans,
    Violations,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let (file, root) = resolve_inputs(&args.file, args.root.as_deref())?;
    let rules = load_arch_rules(&root);

    let graph = build_graph(&file, &root, args.depth, &rules);
    let root_id = file
        .strip_prefix(&root)
        .unwrap_or(&file)
        .to_string_lossy()
        .into_owned();
    let report = AnalyzeReport::from_graph(&root_id, &graph);

    let mut stdout = std::io::stdout();
    match args.format {
        OutputFormat::Json => output::json::write_report_json(&mut stdout, &report)?,
        OutputFormat::Text | OutputFormat::Dot => {
            output::text::write_report_text(&mut stdout, &graph, &report)?
        }
    }

    let failed = args.fail_on.iter().any(|f| match f {
        FailOn::Cycles => !report.cyclic.is_empty(),
        FailOn::Orphans => !report.orphans.is_empty(),
        FailOn::Violations => !report.violations.is_empty(),
    });
    if failed {
        tracing::info!("fail-on condition met, exiting with code 2");
        std::process::exit(2);
    }
    Ok(())
}

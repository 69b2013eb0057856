pub mod analyze;
pub mod graph;
pub mod rules;

use crate::errors::{DepscopeError, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "depscope",
    version,
    about = "File-level import dependency graph analyzer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build and export the dependency graph from a root file
    Graph(graph::GraphArgs),
    /// Build the graph and report cycles, orphans, and rule violations
    Analyze(analyze::AnalyzeArgs),
    /// Show the effective architecture rules for a project
    Rules(rules::RulesArgs),
}

/// Dispatch to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Graph(args) => graph::run(&args),
        Commands::Analyze(args) => analyze::run(&args),
        Commands::Rules(args) => rules::run(&args),
    }
}

/// Canonicalize the root file and project root; the file must exist, the
/// root defaults to the current directory.
pub(crate) fn resolve_inputs(file: &Path, root: Option<&Path>) -> Result<(PathBuf, PathBuf)> {
    let file = file
        .canonicalize()
        .map_err(|_| DepscopeError::RootNotFound {
            path: file.to_path_buf(),
        })?;
    let root = root.unwrap_or_else(|| Path::new("."));
    let root = root
        .canonicalize()
        .map_err(|_| DepscopeError::BadProjectRoot {
            path: root.to_path_buf(),
        })?;
    Ok((file, root))
}

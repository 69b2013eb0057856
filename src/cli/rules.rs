use crate::errors::{DepscopeError, Result};
use crate::rules::load_arch_rules;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Project root (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Print the effective architecture rules (project file or built-ins).
pub fn run(args: &RulesArgs) -> Result<()> {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));
    let root = root
        .canonicalize()
        .map_err(|_| DepscopeError::BadProjectRoot { path: root.clone() })?;

    let rules = load_arch_rules(&root);
    let mut stdout = std::io::stdout();
    serde_json::to_writer_pretty(&mut stdout, &rules)?;
    writeln!(stdout)?;
    Ok(())
}

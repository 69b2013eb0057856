use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum DepscopeError {
    #[error("Root file not found: {path}")]
    #[diagnostic(code(depscope::root_not_found))]
    RootNotFound { path: PathBuf },

    #[error("Invalid project root: {path}")]
    #[diagnostic(code(depscope::bad_root))]
    BadProjectRoot { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(code(depscope::io))]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    #[diagnostic(code(depscope::json))]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DepscopeError>;

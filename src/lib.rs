//! File-level import dependency graph analysis.
//!
//! The core pipeline is parse → resolve → build → annotate: per-language
//! import extraction ([`parse`]), specifier-to-file resolution ([`resolve`]),
//! depth-bounded traversal into a [`graph::DependencyGraph`]
//! ([`graph::builder::build_graph`]), then cycle, orphan, and
//! architecture-rule annotation. The CLI in [`cli`] is a thin shell over it.

pub mod cli;
pub mod errors;
pub mod graph;
pub mod output;
pub mod parse;
pub mod resolve;
pub mod rules;

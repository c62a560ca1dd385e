//! # doclint - Batch prose linting for documentation trees
//!
//! doclint walks a directory of documentation, runs an external prose linter
//! (such as Vale) against every matched file, and folds the linter's
//! human-readable output into one aggregated error report grouped by rule
//! and severity.
//!
//! ## Quick Start
//!
//! ```bash
//! # List Markdown files under docs/
//! doclint docs -p '\.(md|mdx)$'
//!
//! # Lint them with Vale and aggregate the findings
//! doclint docs -p '\.(md|mdx)$' -c vale
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod parser;
pub mod report;
pub mod runner;

pub use cli::{Cli, Output};
pub use config::DoclintConfig;

/// Result type alias for doclint operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

//! Command-line interface for doclint
//!
//! This module provides the CLI structure and the top-level run flow: collect
//! files, show the tree, and when a command is configured, run it per file
//! and print the aggregated report.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use console::style;
use regex::Regex;
use std::path::{Path, PathBuf};

use crate::collector;
use crate::config::DoclintConfig;
use crate::parser;
use crate::report::IssueReport;
use crate::runner;

mod output;

pub use output::Output;

/// doclint - Batch prose linting for documentation trees
#[derive(Parser)]
#[command(name = "doclint", version, about, long_about = None)]
pub struct Cli {
    /// Directory to traverse
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Regex pattern to filter files by name (e.g. '\.md$' for Markdown files)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Command to run on each file; the file path is appended to it
    #[arg(short, long)]
    pub command: Option<String>,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Output format for the aggregated report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Report output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text tables
    Text,
    /// One JSON document
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        // JSON mode keeps stdout clean for the final document.
        let json_mode = self.format == ReportFormat::Json;
        let output = Output::new(self.verbose > 0, self.quiet || json_mode);

        let config = DoclintConfig::load(self.config.as_deref())?;
        output.verbose(&format!(
            "configuration: pattern={:?}, command={:?}",
            config.files.pattern, config.linter.command
        ));

        if !self.directory.is_dir() {
            output.error(&format!(
                "{} is not a valid directory",
                self.directory.display()
            ));
            return Ok(());
        }

        let pattern_source = self.pattern.clone().or_else(|| config.files.pattern.clone());
        let pattern = match &pattern_source {
            Some(p) => Some(
                Regex::new(p).with_context(|| format!("invalid file pattern: {p}"))?,
            ),
            None => None,
        };

        let collected = collector::collect(&self.directory, pattern.as_ref());
        tracing::debug!(
            "collected {} matching files, {} entries total",
            collected.files.len(),
            collected.total_entries
        );

        print_file_tree(
            &self.directory,
            pattern_source.as_deref(),
            &collected.files,
            &output,
        )?;
        if !output.is_quiet() {
            println!(
                "\n{}",
                style(format!(
                    "Files matching pattern: {} (out of {} total files)",
                    collected.files.len(),
                    collected.total_entries
                ))
                .cyan()
                .bold()
            );
        }

        let command = self
            .command
            .clone()
            .or_else(|| config.linter.command.clone())
            .filter(|c| !c.trim().is_empty());
        let Some(command) = command else {
            return Ok(());
        };

        if let Some(program) = command.split_whitespace().next() {
            if !runner::command_exists(program) {
                output.warning(&format!(
                    "'{}' was not found in PATH; invocations may fail",
                    program
                ));
            }
        }

        if !output.is_quiet() {
            println!(
                "\n{}",
                style(format!("Running command: {}", command)).yellow().bold()
            );
        }

        let results = runner::run_for_files(&collected.files, &command, &output);

        let mut report = IssueReport::new();
        for result in &results {
            if !output.is_quiet() {
                println!("\n{}", style(format!("File: {}", result.path)).green().bold());
                if !result.stdout.is_empty() {
                    println!("{}", result.stdout);
                }
            }
            // Coarse gate: only output that mentions a severity is parsed.
            if result.stdout.contains("warning") || result.stdout.contains("error") {
                let records = parser::parse_linter_output(
                    &result.stdout,
                    Some(&result.path),
                    &config.files.extensions,
                );
                tracing::debug!("{}: parsed {} records", result.path, records.len());
                report.extend(records);
            }
            if !result.stderr.is_empty() && !output.is_quiet() {
                println!("{}\n{}", style("Error:").red().bold(), result.stderr);
            }
        }

        if report.is_empty() {
            return Ok(());
        }

        match self.format {
            ReportFormat::Json => println!("{}", report.to_json()?),
            ReportFormat::Text => {
                output.section_header("All Parsed Results:");
                if !output.is_quiet() {
                    println!("{}", report.records_table());
                }
                output.section_header("Error Report Summary:");
                if !output.is_quiet() {
                    println!("{}", report.summary_table());
                    println!(
                        "\n{}",
                        style(format!("Total issues found: {}", report.len()))
                            .cyan()
                            .bold()
                    );
                }
            }
        }

        Ok(())
    }
}

/// Print the matched files as a tree rooted at the absolute directory path
fn print_file_tree(
    root: &Path,
    pattern: Option<&str>,
    files: &[PathBuf],
    output: &Output,
) -> Result<()> {
    if output.is_quiet() {
        return Ok(());
    }

    let abs_root = std::path::absolute(root)
        .with_context(|| format!("cannot resolve {}", root.display()))?;

    let mut header = format!("📁 {}", style(abs_root.display()).blue().bold());
    if let Some(pattern) = pattern {
        header.push(' ');
        header.push_str(&style(format!("(Filter: {})", pattern)).yellow().to_string());
    }
    println!("{}", header);

    for (idx, file) in files.iter().enumerate() {
        let abs_file = std::path::absolute(file)
            .with_context(|| format!("cannot resolve {}", file.display()))?;
        let rel_path = abs_file.strip_prefix(&abs_root).unwrap_or(&abs_file);
        let branch = if idx + 1 == files.len() { "└──" } else { "├──" };
        println!(
            "{} 📄 {} {}",
            branch,
            style(rel_path.display()).green(),
            style(format!("({})", abs_file.display())).dim()
        );
    }

    Ok(())
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

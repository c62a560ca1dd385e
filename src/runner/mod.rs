//! External command execution
//!
//! Runs a shell command template once per collected file. The file path is
//! appended to the template (no placeholder substitution) after escaping
//! parentheses, and the whole line goes through `sh -c` so the external
//! tool's own argument handling applies. Both streams are drained until the
//! process exits; a launch failure becomes that file's stderr and the batch
//! moves on.

use crate::cli::Output;
use std::path::PathBuf;
use std::process::Command;

/// Captured output of one command invocation
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// The escaped path as it appeared on the command line
    pub path: String,
    pub stdout: String,
    pub stderr: String,
}

/// Prefix each parenthesis with a backslash. This is the only escaping
/// applied before the path lands on a shell command line.
pub fn escape_parens(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '(' || ch == ')' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Check if a command exists in PATH
pub fn command_exists(command: &str) -> bool {
    which::which(command).is_ok()
}

/// Run `template` once per file, in input order, capturing trimmed stdout
/// and stderr. Every file produces exactly one result; a failure to launch
/// never stops the remaining files.
pub fn run_for_files(files: &[PathBuf], template: &str, output: &Output) -> Vec<CommandResult> {
    let mut results = Vec::with_capacity(files.len());

    for file in files {
        let path = escape_parens(&file.to_string_lossy());
        let command_line = format!("{} {}", template, path);
        output.step(&format!("Running command: `{}`", command_line));
        tracing::debug!("spawning: {}", command_line);

        match Command::new("sh").arg("-c").arg(&command_line).output() {
            Ok(out) => results.push(CommandResult {
                path,
                stdout: String::from_utf8_lossy(&out.stdout).trim().to_string(),
                stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
            }),
            Err(e) => results.push(CommandResult {
                path,
                stdout: String::new(),
                stderr: e.to_string(),
            }),
        }
    }

    results
}

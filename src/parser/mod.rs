//! Parser for the linter's human-readable output
//!
//! Converts the stdout of one linter invocation into structured
//! [`IssueRecord`]s. The format is line oriented: a finding starts with a
//! `line:col  severity  message  rule` header and may continue over
//! additional indented lines, which belong to the message. A single cursor
//! scans the lines top to bottom; anything that does not parse is skipped
//! without a diagnostic.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// CSI escape sequences: ESC, '[', digits/semicolons, terminator letter.
    static ref ANSI_ESCAPE: Regex = Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap();
    /// Finding header: line:col, severity token, and the rest of the line.
    static ref FINDING_HEADER: Regex = Regex::new(r"^\s*(\d+):(\d+)\s+(\w+)\s+(.+)$").unwrap();
    /// Location marker at column 0, used to end continuation runs.
    static ref LOCATION_MARKER: Regex = Regex::new(r"^\d+:\d+").unwrap();
    /// Column separator: runs of two or more spaces.
    static ref SEGMENT_GAP: Regex = Regex::new(r"\s{2,}").unwrap();
}

/// Glyph the linter uses to introduce its per-file summary line.
const SUMMARY_GLYPH: char = '✖';

/// One linter finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRecord {
    pub filename: String,
    pub line: usize,
    pub column: usize,
    pub error_type: String,
    pub message: String,
    pub check_name: String,
}

/// Remove ANSI escape codes from text
pub fn strip_ansi_codes(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Parse one invocation's stdout into issue records.
///
/// `filename` is the file the command ran against; when absent and the
/// output's first line is itself a path with a recognized documentation
/// suffix, that line supplies the filename and is skipped. Lines that do not
/// form a finding header produce no record.
pub fn parse_linter_output(
    stdout: &str,
    filename: Option<&str>,
    doc_extensions: &[String],
) -> Vec<IssueRecord> {
    let lines: Vec<String> = stdout
        .trim()
        .split('\n')
        .map(strip_ansi_codes)
        .collect();

    let mut filename = filename.map(str::to_string);
    if filename.is_none() {
        if let Some(first) = lines.first() {
            let candidate = first.trim();
            if doc_extensions.iter().any(|ext| candidate.ends_with(ext.as_str())) {
                filename = Some(candidate.to_string());
            }
        }
    }
    let filename = filename.unwrap_or_default();

    // Skip the leading line when it is just the linted file's path.
    let start_idx = usize::from(
        lines.len() > 1
            && doc_extensions
                .iter()
                .any(|ext| lines[0].ends_with(ext.as_str())),
    );

    let mut records = Vec::new();
    let mut i = start_idx;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() || line.starts_with(SUMMARY_GLYPH) {
            i += 1;
            continue;
        }

        if let Some(caps) = FINDING_HEADER.captures(line) {
            if let (Ok(line_num), Ok(col_num)) =
                (caps[1].parse::<usize>(), caps[2].parse::<usize>())
            {
                let parts: Vec<&str> = SEGMENT_GAP.split(&caps[4]).collect();
                if parts.len() >= 2 {
                    // Last segment is the rule name, everything before it
                    // seeds the message.
                    let check_name = parts[parts.len() - 1].trim().to_string();
                    let mut message = parts[..parts.len() - 1].join(" ").trim().to_string();

                    // Consume continuation lines into the message.
                    let mut next_idx = i + 1;
                    while next_idx < lines.len()
                        && !lines[next_idx].trim().is_empty()
                        && !LOCATION_MARKER.is_match(&lines[next_idx])
                        && !lines[next_idx].starts_with(SUMMARY_GLYPH)
                    {
                        let additional = lines[next_idx].trim();
                        if !additional.is_empty() {
                            message.push(' ');
                            message.push_str(additional);
                        }
                        next_idx += 1;
                    }

                    records.push(IssueRecord {
                        filename: filename.clone(),
                        line: line_num,
                        column: col_num,
                        error_type: caps[3].to_string(),
                        message,
                        check_name,
                    });

                    i = next_idx;
                    continue;
                }
            }
        }

        i += 1;
    }

    records
}

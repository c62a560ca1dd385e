//! Aggregated error reporting
//!
//! Collects the issue records parsed from every file into one report: a flat
//! listing in arrival order plus a count grouped by (error type, rule name),
//! sorted by count descending. Both render as padded text tables, or as a
//! single JSON document.

use crate::parser::IssueRecord;
use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

/// Count of records sharing an (error type, rule name) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub error_type: String,
    pub check_name: String,
    pub count: usize,
}

/// All issue records accumulated across one run
#[derive(Debug, Default)]
pub struct IssueReport {
    records: Vec<IssueRecord>,
}

impl IssueReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the records parsed from one file, preserving arrival order
    pub fn extend(&mut self, records: Vec<IssueRecord>) {
        self.records.extend(records);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[IssueRecord] {
        &self.records
    }

    /// Group records by (error type, rule name) and sort by count
    /// descending. The grouping is lexicographic underneath and the sort is
    /// stable, so ties keep that order.
    pub fn grouped(&self) -> Vec<GroupCount> {
        let mut counts: BTreeMap<(String, String), usize> = BTreeMap::new();
        for record in &self.records {
            *counts
                .entry((record.error_type.clone(), record.check_name.clone()))
                .or_insert(0) += 1;
        }

        let mut groups: Vec<GroupCount> = counts
            .into_iter()
            .map(|((error_type, check_name), count)| GroupCount {
                error_type,
                check_name,
                count,
            })
            .collect();
        groups.sort_by(|a, b| b.count.cmp(&a.count));
        groups
    }

    /// Render the flat listing of all records as a text table
    pub fn records_table(&self) -> String {
        let headers = ["filename", "line", "col", "error_type", "error_msg", "check_name"];
        let rows: Vec<Vec<String>> = self
            .records
            .iter()
            .map(|r| {
                vec![
                    r.filename.clone(),
                    r.line.to_string(),
                    r.column.to_string(),
                    r.error_type.clone(),
                    r.message.clone(),
                    r.check_name.clone(),
                ]
            })
            .collect();
        render_table(&headers, &rows)
    }

    /// Render the grouped summary as a text table
    pub fn summary_table(&self) -> String {
        let headers = ["error_type", "check_name", "count"];
        let rows: Vec<Vec<String>> = self
            .grouped()
            .into_iter()
            .map(|g| vec![g.error_type, g.check_name, g.count.to_string()])
            .collect();
        render_table(&headers, &rows)
    }

    /// Render the whole report as one JSON document
    pub fn to_json(&self) -> Result<String> {
        let document = json!({
            "records": self.records,
            "summary": self.grouped(),
            "total_issues": self.len(),
        });
        Ok(serde_json::to_string_pretty(&document)?)
    }
}

/// Pad every column to its widest cell and join rows with two spaces
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![format_row(&header_row)];
    for row in rows {
        lines.push(format_row(row));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(error_type: &str, check_name: &str) -> IssueRecord {
        IssueRecord {
            filename: "guide.md".to_string(),
            line: 1,
            column: 1,
            error_type: error_type.to_string(),
            message: "A message".to_string(),
            check_name: check_name.to_string(),
        }
    }

    #[test]
    fn test_grouping_counts_and_orders_by_count_descending() {
        let mut report = IssueReport::new();
        report.extend(vec![
            record("error", "R1"),
            record("warning", "R2"),
            record("error", "R1"),
        ]);

        let groups = report.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].error_type, "error");
        assert_eq!(groups[0].check_name, "R1");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[1].error_type, "warning");
        assert_eq!(groups[1].check_name, "R2");
        assert_eq!(groups[1].count, 1);
    }

    #[test]
    fn test_empty_report_is_not_an_error() {
        let report = IssueReport::new();

        assert!(report.is_empty());
        assert!(report.grouped().is_empty());
        assert_eq!(report.records_table(), "filename  line  col  error_type  error_msg  check_name");
    }

    #[test]
    fn test_records_table_lists_all_fields() {
        let mut report = IssueReport::new();
        report.extend(vec![IssueRecord {
            filename: "docs/guide.md".to_string(),
            line: 3,
            column: 10,
            error_type: "error".to_string(),
            message: "Some message".to_string(),
            check_name: "RuleName".to_string(),
        }]);

        let table = report.records_table();
        let mut lines = table.lines();
        assert!(lines.next().unwrap().starts_with("filename"));
        let row = lines.next().unwrap();
        assert!(row.contains("docs/guide.md"));
        assert!(row.contains("3"));
        assert!(row.contains("10"));
        assert!(row.contains("Some message"));
        assert!(row.contains("RuleName"));
    }

    #[test]
    fn test_summary_table_orders_largest_group_first() {
        let mut report = IssueReport::new();
        report.extend(vec![
            record("warning", "R2"),
            record("error", "R1"),
            record("error", "R1"),
        ]);

        let table = report.summary_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("R1"));
        assert!(lines[1].contains('2'));
        assert!(lines[2].contains("R2"));
        assert!(lines[2].contains('1'));
    }

    #[test]
    fn test_json_document_shape() {
        let mut report = IssueReport::new();
        report.extend(vec![record("error", "R1")]);

        let document: serde_json::Value =
            serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(document["total_issues"], 1);
        assert_eq!(document["records"][0]["check_name"], "R1");
        assert_eq!(document["summary"][0]["count"], 1);
    }

    #[test]
    fn test_column_widths_follow_widest_cell() {
        let table = render_table(
            &["a", "b"],
            &[vec!["wide-cell-value".to_string(), "x".to_string()]],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], format!("{:<15}  b", "a"));
        assert_eq!(lines[1], "wide-cell-value  x");
    }
}

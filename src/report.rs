//! Run summary reports.
//!
//! Results of headless comparison runs are collected as [`RunSummary`] rows
//! and rendered for the terminal, either as an aligned text table or as a
//! markdown table. Reports live in memory only.

use std::fmt::{self, Write};

/// Result of one algorithm on one input size.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Algorithm identifier (e.g. "merge").
    pub algorithm: String,
    /// Number of elements sorted.
    pub size: usize,
    /// Swaps and writes performed.
    pub mutations: usize,
    /// Steps emitted, including the initial frame.
    pub steps: usize,
    /// Whether the output was checked sorted and a permutation of the input.
    pub verified: bool,
}

/// A set of run summaries with a description.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryReport {
    pub description: String,
    pub results: Vec<RunSummary>,
}

impl SummaryReport {
    pub fn new(description: &str) -> Self {
        SummaryReport {
            description: description.to_string(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: RunSummary) {
        self.results.push(result);
    }

    /// Results ordered by size, keeping insertion order within a size.
    fn ordered(&self) -> Vec<&RunSummary> {
        let mut rows: Vec<&RunSummary> = self.results.iter().collect();
        rows.sort_by_key(|r| r.size);
        rows
    }

    /// Render the report as an aligned text table.
    pub fn to_table(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_table(&mut output);
        output
    }

    fn write_table(&self, output: &mut String) -> fmt::Result {
        writeln!(output, "{}", self.description)?;
        writeln!(output)?;
        writeln!(
            output,
            "{:>6} | {:>10} | {:>10} | {:>10} | {:>8}",
            "Size", "Algorithm", "Mutations", "Steps", "Verified"
        )?;
        writeln!(output, "{:-<6}-+-{:-<10}-+-{:-<10}-+-{:-<10}-+-{:-<8}", "", "", "", "", "")?;
        for result in self.ordered() {
            writeln!(
                output,
                "{:>6} | {:>10} | {:>10} | {:>10} | {:>8}",
                format_size(result.size),
                result.algorithm,
                result.mutations,
                result.steps,
                if result.verified { "OK" } else { "FAILED" }
            )?;
        }
        Ok(())
    }

    /// Render the report as a markdown table, one row per result.
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();
        let _ = self.write_markdown(&mut output);
        output
    }

    fn write_markdown(&self, output: &mut String) -> fmt::Result {
        writeln!(output, "# Sorting Run Summary")?;
        writeln!(output)?;
        writeln!(output, "**Description:** {}", self.description)?;
        writeln!(output)?;
        writeln!(output, "| Size | Algorithm | Mutations | Steps | Verified |")?;
        writeln!(output, "|------|-----------|-----------|-------|----------|")?;
        for result in self.ordered() {
            writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                format_size(result.size),
                result.algorithm,
                result.mutations,
                result.steps,
                if result.verified { "yes" } else { "NO" }
            )?;
        }
        Ok(())
    }
}

/// Format a size as a human-readable string (e.g. "1K", "1M").
fn format_size(size: usize) -> String {
    if size >= 1_000_000 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 {
        format!("{}K", size / 1_000)
    } else {
        size.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(algorithm: &str, size: usize, mutations: usize) -> RunSummary {
        RunSummary {
            algorithm: algorithm.to_string(),
            size,
            mutations,
            steps: mutations * 3,
            verified: true,
        }
    }

    fn rows(rendered: &str, prefix: &str, header: &str) -> Vec<String> {
        rendered
            .lines()
            .filter(|l| l.starts_with(prefix) && !l.contains(header))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_table_rows_ordered_by_size() {
        let mut report = SummaryReport::new("Seeded comparison");
        report.add_result(summary("merge", 2000, 21000));
        report.add_result(RunSummary {
            verified: false,
            ..summary("quick", 50, 300)
        });

        let table = report.to_table();
        assert!(table.starts_with("Seeded comparison\n"));
        let rows: Vec<String> = table
            .lines()
            .filter(|l| l.contains(" | ") && !l.contains("Algorithm"))
            .map(str::to_string)
            .collect();
        assert_eq!(
            rows,
            vec![
                "    50 |      quick |        300 |        900 |   FAILED",
                "    2K |      merge |      21000 |      63000 |       OK",
            ]
        );
    }

    #[test]
    fn test_markdown_table_rows() {
        let mut report = SummaryReport::new("Table");
        report.add_result(summary("heap", 2000, 19000));
        report.add_result(summary("heap", 50, 250));
        report.add_result(summary("merge", 50, 286));

        let md = report.to_markdown_table();
        assert!(md.contains("**Description:** Table"));
        assert_eq!(
            rows(&md, "| ", "| Size"),
            vec![
                "| 50 | heap | 250 | 750 | yes |",
                "| 50 | merge | 286 | 858 | yes |",
                "| 2K | heap | 19000 | 57000 | yes |",
            ]
        );
    }

    #[test]
    fn test_empty_report_renders_headers_only() {
        let report = SummaryReport::new("Nothing ran");
        assert!(rows(&report.to_markdown_table(), "| ", "| Size").is_empty());
        assert_eq!(report.to_table().lines().count(), 4);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500");
        assert_eq!(format_size(1000), "1K");
        assert_eq!(format_size(1024), "1K");
        assert_eq!(format_size(1_048_576), "1M");
    }
}

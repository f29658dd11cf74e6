//! Output formatters for lint diagnostics.

mod text;

pub use text::*;

use crate::linter::LintResult;
use serde::Serialize;

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rich terminal output with colors and code snippets
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Format lint results according to the specified format
pub fn format_results(
    results: &[LintResult],
    sources: &[(String, String)],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_text(results, sources),
        OutputFormat::Json => format_json(results, sources),
    }
}

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
pub struct JsonFileResult {
    pub file: String,
    pub messages: Vec<JsonMessage>,
    #[serde(rename = "errorCount")]
    pub error_count: usize,
    #[serde(rename = "warningCount")]
    pub warning_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
pub struct JsonMessage {
    #[serde(rename = "ruleId")]
    pub rule_id: &'static str,
    pub code: &'static str,
    pub severity: u8,
    pub message: String,
    pub line: u32,
    pub column: u32,
    #[serde(rename = "endLine")]
    pub end_line: u32,
    #[serde(rename = "endColumn")]
    pub end_column: u32,
}

/// Format results as JSON
fn format_json(results: &[LintResult], sources: &[(String, String)]) -> String {
    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| {
            let source = sources
                .iter()
                .find(|(f, _)| f == &r.filename)
                .map(|(_, s)| s.as_str())
                .unwrap_or("");

            JsonFileResult {
                file: r.filename.clone(),
                messages: r
                    .diagnostics
                    .iter()
                    .map(|d| {
                        let (line, column) = offset_to_line_col(source, d.start as usize);
                        let (end_line, end_column) = offset_to_line_col(source, d.end as usize);
                        JsonMessage {
                            rule_id: d.rule_name,
                            code: d.code,
                            severity: match d.severity {
                                crate::diagnostic::Severity::Error => 2,
                                crate::diagnostic::Severity::Warning => 1,
                            },
                            message: d.message.to_string(),
                            line,
                            column,
                            end_line,
                            end_column,
                        }
                    })
                    .collect(),
                error_count: r.error_count,
                warning_count: r.warning_count,
            }
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}

/// Convert byte offset to (line, column), both 1-indexed
fn offset_to_line_col(source: &str, offset: usize) -> (u32, u32) {
    let mut line = 1u32;
    let mut col = 1u32;
    let mut current_offset = 0;

    for ch in source.chars() {
        if current_offset >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
        current_offset += ch.len_utf8();
    }

    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_conversion_is_one_indexed() {
        let source = "abc\ndef\nghi";
        assert_eq!(offset_to_line_col(source, 0), (1, 1)); // 'a'
        assert_eq!(offset_to_line_col(source, 4), (2, 1)); // 'd'
        assert_eq!(offset_to_line_col(source, 9), (3, 2)); // 'h'
    }

    #[test]
    fn offset_past_the_end_clamps_to_the_last_position() {
        let source = "ab";
        assert_eq!(offset_to_line_col(source, 100), (1, 3));
    }
}

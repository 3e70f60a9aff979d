//! Common utilities for output formatters

use serde::Serialize;

use crate::cli::OutputFormat;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize records as returned by the server (JSON or YAML)
pub(crate) fn render_structured<T: Serialize>(
    records: &[T],
    format: OutputFormat,
) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yml::to_string(records).map_err(|e| e.to_string()),
        other => Err(format!("'{}' is not a structured format", other)),
    }
}

/// Print records as JSON or YAML
pub fn output_structured<T: Serialize>(records: &[T], format: OutputFormat) {
    match render_structured(records, format) {
        Ok(text) => println!("{}", text.trim_end()),
        Err(e) => eprintln!("Error serializing output: {}", e),
    }
}

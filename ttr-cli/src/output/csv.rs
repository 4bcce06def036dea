//! CSV output formatting for data export.
//!
//! Values containing separators, quotes or newlines are quoted.

use super::{Column, OutputConfig};
use serde::Serialize;

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format data as CSV string
    ///
    /// For single objects, outputs a two-row CSV (header + values).
    /// For arrays, outputs headers followed by one row per item.
    pub fn format<T: Serialize>(data: &T, _config: &OutputConfig) -> String {
        match serde_json::to_value(data) {
            Ok(serde_json::Value::Array(arr)) => Self::format_array_value(&arr),
            Ok(serde_json::Value::Object(obj)) => Self::format_object_value(&obj),
            Ok(json) => Self::value_to_csv(&json),
            Err(_) => String::new(),
        }
    }

    /// Format rows as CSV with the given columns
    pub fn format_with_columns<T: Serialize>(
        data: &[T],
        columns: &[Column],
        _config: &OutputConfig,
    ) -> String {
        let headers: Vec<String> = columns.iter().map(|c| Self::escape_value(&c.name)).collect();
        let mut output = headers.join(",");

        for item in data {
            let json = serde_json::to_value(item).unwrap_or_default();
            let row: Vec<String> = columns
                .iter()
                .map(|col| json.get(&col.key).map(Self::value_to_csv).unwrap_or_default())
                .collect();
            output.push('\n');
            output.push_str(&row.join(","));
        }

        output
    }

    fn format_array_value(arr: &[serde_json::Value]) -> String {
        let headers: Vec<String> = match arr.first() {
            Some(serde_json::Value::Object(first)) => first.keys().cloned().collect(),
            Some(_) => {
                return arr
                    .iter()
                    .map(Self::value_to_csv)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            None => return String::new(),
        };

        let mut output = headers.join(",");
        for item in arr {
            if let serde_json::Value::Object(obj) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| obj.get(h).map(Self::value_to_csv).unwrap_or_default())
                    .collect();
                output.push('\n');
                output.push_str(&row.join(","));
            }
        }
        output
    }

    fn format_object_value(obj: &serde_json::Map<String, serde_json::Value>) -> String {
        let headers: Vec<&str> = obj.keys().map(|s| s.as_str()).collect();
        let values: Vec<String> = obj.values().map(Self::value_to_csv).collect();

        format!("{}\n{}", headers.join(","), values.join(","))
    }

    /// Convert a JSON value to a CSV cell. Lists of strings are joined with
    /// " -> " so a path fits in one cell.
    fn value_to_csv(value: &serde_json::Value) -> String {
        match value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::String(s) => Self::escape_value(s),
            serde_json::Value::Array(arr) if arr.iter().all(|v| v.is_string()) => {
                let joined: Vec<&str> = arr.iter().filter_map(|v| v.as_str()).collect();
                Self::escape_value(&joined.join(" -> "))
            }
            serde_json::Value::Array(arr) => Self::escape_value(&format!("[{} items]", arr.len())),
            serde_json::Value::Object(obj) => {
                Self::escape_value(&format!("{{{} fields}}", obj.len()))
            }
        }
    }

    /// Wrap in quotes if the value contains comma, newline, or quote.
    /// Doubles any existing quotes.
    fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('\n') || s.contains('\r') || s.contains('"') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    #[derive(Serialize)]
    struct City {
        name: String,
        x: f64,
    }

    fn cities() -> Vec<City> {
        vec![
            City {
                name: "Denver".to_string(),
                x: 1.5,
            },
            City {
                name: "Washington, DC".to_string(),
                x: 9.0,
            },
        ]
    }

    #[test]
    fn test_format_array() {
        let config = OutputConfig::new(OutputFormat::Csv);
        let output = CsvOutput::format(&cities(), &config);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "name,x");
        assert_eq!(lines[1], "Denver,1.5");
        assert_eq!(lines[2], "\"Washington, DC\",9.0");
    }

    #[test]
    fn test_format_single_object_with_path() {
        #[derive(Serialize)]
        struct Trip {
            stops: Vec<&'static str>,
        }
        let config = OutputConfig::new(OutputFormat::Csv);
        let output = CsvOutput::format(
            &Trip {
                stops: vec!["A", "B"],
            },
            &config,
        );
        assert_eq!(output, "stops\nA -> B");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(CsvOutput::escape_value("hello"), "hello");
        assert_eq!(CsvOutput::escape_value("hello,world"), "\"hello,world\"");
        assert_eq!(CsvOutput::escape_value("hello\nworld"), "\"hello\nworld\"");
        assert_eq!(CsvOutput::escape_value("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_format_with_columns() {
        let columns = vec![Column::new("City", "name"), Column::new("X", "x")];
        let config = OutputConfig::new(OutputFormat::Csv);
        let output = CsvOutput::format_with_columns(&cities(), &columns, &config);

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "City,X");
        assert_eq!(lines[1], "Denver,1.5");
    }

    #[test]
    fn test_empty_rows_keep_header() {
        let data: Vec<City> = vec![];
        let columns = vec![Column::new("City", "name")];
        let config = OutputConfig::new(OutputFormat::Csv);
        assert_eq!(CsvOutput::format_with_columns(&data, &columns, &config), "City");
    }
}

use crate::domain::model::Record;
use crate::utils::error::{ReportError, Result};
use std::collections::HashMap;

/// Parses raw input text into records according to the declared format.
/// No numeric coercion happens here: CSV values stay strings and JSON
/// values keep whatever scalar type they arrived with.
pub fn parse_records(input: &str, format: &str) -> Result<Vec<Record>> {
    match format.to_lowercase().as_str() {
        "csv" => parse_csv(input),
        "json" => parse_json(input),
        other => Err(ReportError::UnsupportedFormat {
            format: other.to_string(),
        }),
    }
}

/// First line is the header row; its column names become the field keys.
fn parse_csv(input: &str) -> Result<Vec<Record>> {
    let mut reader = csv::Reader::from_reader(input.as_bytes());
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut data = HashMap::new();
        for (header, value) in headers.iter().zip(row.iter()) {
            data.insert(
                header.to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
        records.push(Record { data });
    }
    Ok(records)
}

/// A top-level object yields its `records` array (empty when the key is
/// absent); a bare top-level array is used directly.
fn parse_json(input: &str) -> Result<Vec<Record>> {
    let parsed: serde_json::Value = serde_json::from_str(input)?;

    let items = match parsed {
        serde_json::Value::Object(mut map) => match map.remove("records") {
            Some(serde_json::Value::Array(items)) => items,
            Some(_) => {
                return Err(ReportError::ProcessingError {
                    message: "'records' key must hold an array".to_string(),
                })
            }
            None => Vec::new(),
        },
        serde_json::Value::Array(items) => items,
        _ => {
            return Err(ReportError::ProcessingError {
                message: "top-level JSON must be an object or an array".to_string(),
            })
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        match item {
            serde_json::Value::Object(obj) => {
                let mut data = HashMap::new();
                for (key, value) in obj {
                    data.insert(key, value);
                }
                records.push(Record { data });
            }
            other => {
                return Err(ReportError::ProcessingError {
                    message: format!("record at index {} is not an object: {}", i, other),
                })
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_header() {
        let input = "month,revenue,currency,tax_rate\nJanuary,26000,USD,9\nFebruary,27500,EUR,11\n";
        let records = parse_records(input, "csv").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("month").unwrap(), "January");
        // CSV values arrive as strings, coercion happens later
        assert_eq!(
            records[0].get("revenue").unwrap(),
            &serde_json::Value::String("26000".to_string())
        );
        assert_eq!(records[1].text("currency").unwrap(), "EUR");
    }

    #[test]
    fn test_parse_json_records_key() {
        let input = r#"{"records": [{"month": "January", "revenue": 26000, "currency": "USD", "tax_rate": 9}]}"#;
        let records = parse_records(input, "json").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].numeric("revenue"), Some(26000.0));
    }

    #[test]
    fn test_parse_json_bare_array() {
        let input = r#"[{"month": "March", "revenue": "30000", "currency": "GBP", "tax_rate": 10, "conversion_rate": 1.4}]"#;
        let records = parse_records(input, "json").unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].numeric("conversion_rate"), Some(1.4));
    }

    #[test]
    fn test_parse_json_object_without_records_key_is_empty() {
        let records = parse_records(r#"{"rows": []}"#, "json").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_format_is_case_insensitive() {
        let input = "month,revenue\nJanuary,1\n";
        assert!(parse_records(input, "CSV").is_ok());
        assert!(parse_records("[]", "JSON").is_ok());
    }

    #[test]
    fn test_unsupported_format() {
        let err = parse_records("", "xml").unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        let err = parse_records(r#"[1, 2]"#, "json").unwrap_err();
        assert!(matches!(err, ReportError::ProcessingError { .. }));
    }
}

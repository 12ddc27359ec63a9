use crate::utils::error::ReportError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One parsed input row. Values keep whatever scalar type the source
/// format produced: CSV yields strings, JSON yields strings or numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.data.get(field)
    }

    /// Scalar rendered as text. Strings come back as-is, everything else
    /// through its JSON rendering.
    pub fn text(&self, field: &str) -> Option<String> {
        self.data.get(field).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Numeric coercion: JSON numbers directly, strings via parse.
    pub fn numeric(&self, field: &str) -> Option<f64> {
        match self.data.get(field)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Outcome of the validation pass. The diagnostic maps hold per-field
/// status strings ("present", "missing in rows [3]", "valid",
/// "invalid (negative)", ...) and are only rendered informationally when
/// the data is valid.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub num_records: usize,
    pub field_checks: HashMap<String, String>,
    pub data_type_checks: HashMap<String, String>,
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationReport {
    pub fn new(num_records: usize) -> Self {
        Self {
            num_records,
            field_checks: HashMap::new(),
            data_type_checks: HashMap::new(),
            is_valid: true,
            error_message: None,
        }
    }

    /// Marks the report failed with the given error's message. Validation
    /// is fail-fast, so this is called at most once per report.
    pub fn fail(mut self, error: ReportError) -> Self {
        self.is_valid = false;
        self.error_message = Some(error.to_string());
        self
    }
}

/// Inputs echoed back per record, with the conversion rate resolved
/// (1.0 for USD regardless of what the record carried).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputSnapshot {
    pub revenue: f64,
    pub currency: String,
    pub tax_rate: f64,
    pub conversion_rate: f64,
}

/// One analyzed record. Monetary values are rounded to 2 decimals;
/// growth is None for the first record in calendar order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedRecord {
    pub month: String,
    pub input: InputSnapshot,
    pub converted_revenue: f64,
    pub adjusted_revenue: f64,
    pub percentage_growth: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub total_records: usize,
    pub results: Vec<ProcessedRecord>,
}

/// What the transform stage hands to the load stage. No analysis when
/// validation failed.
#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    pub validation: ValidationReport,
    pub analysis: Option<Analysis>,
}

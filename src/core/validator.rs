use crate::domain::model::{Record, ValidationReport};
use crate::utils::error::ReportError;

/// Checked in this order; all records are scanned per field before any
/// type or range validation runs.
pub const REQUIRED_FIELDS: [&str; 4] = ["month", "revenue", "currency", "tax_rate"];

/// Field, type and range validation over the whole record set.
///
/// Fail-fast: the first violation found terminates the scan and becomes
/// the report's single error message. Required fields are checked first
/// across all records (collecting every row missing the field); only
/// then are values checked record by record in input order.
pub fn validate(records: &[Record]) -> ValidationReport {
    let mut report = ValidationReport::new(records.len());

    for field in REQUIRED_FIELDS {
        let missing_rows: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.get(field).is_none())
            .map(|(i, _)| i + 1)
            .collect();

        if missing_rows.is_empty() {
            report
                .field_checks
                .insert(field.to_string(), "present".to_string());
        } else {
            report.field_checks.insert(
                field.to_string(),
                format!("missing in rows {:?}", missing_rows),
            );
            return report.fail(ReportError::MissingField {
                field: field.to_string(),
                rows: missing_rows,
            });
        }
    }

    for (i, record) in records.iter().enumerate() {
        let row = i + 1;

        match record.numeric("revenue") {
            None => {
                report
                    .data_type_checks
                    .insert("revenue".to_string(), "invalid (non-numeric)".to_string());
                return report.fail(ReportError::InvalidType {
                    field: "revenue".to_string(),
                    row,
                });
            }
            Some(revenue) if revenue < 0.0 => {
                report
                    .data_type_checks
                    .insert("revenue".to_string(), "invalid (negative)".to_string());
                return report.fail(ReportError::InvalidRange {
                    field: "revenue".to_string(),
                    row,
                    constraint: "must be non-negative".to_string(),
                });
            }
            Some(_) => {}
        }

        match record.numeric("tax_rate") {
            None => {
                report
                    .data_type_checks
                    .insert("tax_rate".to_string(), "invalid (non-numeric)".to_string());
                return report.fail(ReportError::InvalidType {
                    field: "tax_rate".to_string(),
                    row,
                });
            }
            Some(tax_rate) if !(0.0..=100.0).contains(&tax_rate) => {
                report
                    .data_type_checks
                    .insert("tax_rate".to_string(), "invalid (out of range)".to_string());
                return report.fail(ReportError::InvalidRange {
                    field: "tax_rate".to_string(),
                    row,
                    constraint: "must be between 0 and 100".to_string(),
                });
            }
            Some(_) => {}
        }

        // conversion_rate only matters outside USD; a stray one on a USD
        // record is ignored, never rejected.
        let currency = record.text("currency").unwrap_or_default();
        if !currency.eq_ignore_ascii_case("usd") {
            if record.get("conversion_rate").is_none() {
                report.field_checks.insert(
                    "conversion_rate".to_string(),
                    format!("missing for non-USD currency at row {}", row),
                );
                return report.fail(ReportError::MissingField {
                    field: "conversion_rate".to_string(),
                    rows: vec![row],
                });
            }
            match record.numeric("conversion_rate") {
                None => {
                    report.data_type_checks.insert(
                        "conversion_rate".to_string(),
                        "invalid (non-numeric)".to_string(),
                    );
                    return report.fail(ReportError::InvalidType {
                        field: "conversion_rate".to_string(),
                        row,
                    });
                }
                Some(rate) if rate <= 0.0 => {
                    report.data_type_checks.insert(
                        "conversion_rate".to_string(),
                        "invalid (not positive)".to_string(),
                    );
                    return report.fail(ReportError::InvalidRange {
                        field: "conversion_rate".to_string(),
                        row,
                        constraint: "must be positive".to_string(),
                    });
                }
                Some(_) => {}
            }
        }
    }

    for field in ["revenue", "tax_rate", "conversion_rate"] {
        report
            .data_type_checks
            .insert(field.to_string(), "valid".to_string());
    }
    report
}

use crate::domain::model::{Analysis, InputSnapshot, ProcessedRecord, Record};
use crate::utils::error::{ReportError, Result};
use chrono::Month;

/// Rounds to 2 decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calendar position of a record's month (January=1 ... December=12).
/// Month names parse case-insensitively through `chrono::Month`.
fn month_number(record: &Record, row: usize) -> Result<u32> {
    let name = record
        .text("month")
        .ok_or_else(|| ReportError::MissingField {
            field: "month".to_string(),
            rows: vec![row],
        })?;
    name.trim()
        .parse::<Month>()
        .map(|month| month.number_from_month())
        .map_err(|_| ReportError::UnknownMonth { month: name, row })
}

fn numeric_field(record: &Record, field: &str, row: usize) -> Result<f64> {
    record
        .numeric(field)
        .ok_or_else(|| ReportError::InvalidType {
            field: field.to_string(),
            row,
        })
}

/// Calendar-ordered revenue analysis over records that already passed
/// validation. Input records are never mutated; the sort is stable, so
/// two records naming the same month keep their input order.
///
/// Per record: converted revenue (USD records force a conversion rate of
/// 1.0, ignoring any supplied value), tax-adjusted revenue, and growth
/// against the previous calendar month's unrounded adjusted revenue.
/// A previous adjusted revenue of exactly zero is a `DivisionByZero`
/// error rather than a numeric fallback.
pub fn transform(records: &[Record]) -> Result<Analysis> {
    let mut ordered: Vec<(u32, usize, &Record)> = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        ordered.push((month_number(record, i + 1)?, i + 1, record));
    }
    ordered.sort_by_key(|(number, _, _)| *number);

    let mut results = Vec::with_capacity(records.len());
    let mut prev_adjusted: Option<f64> = None;

    for (_, row, record) in ordered {
        let revenue = numeric_field(record, "revenue", row)?;
        let tax_rate = numeric_field(record, "tax_rate", row)?;
        let currency = record.text("currency").unwrap_or_default();

        let (conversion_rate, converted_revenue) = if currency.eq_ignore_ascii_case("usd") {
            (1.0, revenue)
        } else {
            let rate = numeric_field(record, "conversion_rate", row)?;
            (rate, revenue * rate)
        };

        let adjusted_revenue = converted_revenue * (1.0 - tax_rate / 100.0);

        let percentage_growth = match prev_adjusted {
            None => None,
            Some(prev) if prev == 0.0 => {
                return Err(ReportError::DivisionByZero {
                    month: record.text("month").unwrap_or_default(),
                })
            }
            Some(prev) => Some((adjusted_revenue - prev) / prev * 100.0),
        };

        results.push(ProcessedRecord {
            month: record.text("month").unwrap_or_default(),
            input: InputSnapshot {
                revenue,
                currency,
                tax_rate,
                conversion_rate,
            },
            converted_revenue: round2(converted_revenue),
            adjusted_revenue: round2(adjusted_revenue),
            percentage_growth: percentage_growth.map(round2),
        });

        // Growth chains against the unrounded value.
        prev_adjusted = Some(adjusted_revenue);
    }

    Ok(Analysis {
        total_records: results.len(),
        results,
    })
}

use crate::core::validator::REQUIRED_FIELDS;
use crate::domain::model::{Analysis, ProcessedRecord, ValidationReport};

/// Renders the markdown report: validation summary, the three formulas as
/// display math, then one section per analyzed record with the arithmetic
/// written out. When validation failed, the output is the error message
/// alone.
pub fn render_report(
    format_label: &str,
    validation: &ValidationReport,
    analysis: Option<&Analysis>,
) -> String {
    if !validation.is_valid {
        return validation.error_message.clone().unwrap_or_default();
    }

    let mut report = vec![
        "# Data Validation Report".to_string(),
        "## 1. Data Structure Check:".to_string(),
        format!("- Data format: {}", format_label),
        format!("- Number of records: {}", validation.num_records),
        String::new(),
        "## 2. Required Fields Check:".to_string(),
    ];

    for field in REQUIRED_FIELDS {
        if let Some(status) = validation.field_checks.get(field) {
            report.push(format!("- {}: {}", field, status));
        }
    }

    report.extend([
        String::new(),
        "## 3. Data Type & Value Validation:".to_string(),
        format!("- revenue (non-negative): {}", type_check(validation, "revenue")),
        format!("- tax_rate (0 to 100): {}", type_check(validation, "tax_rate")),
        format!(
            "- conversion_rate (if required, positive): {}",
            type_check(validation, "conversion_rate")
        ),
        String::new(),
        "## Validation Summary:".to_string(),
        "Data validation is successful! Proceeding with analysis...".to_string(),
        String::new(),
        "# Formulas Used:".to_string(),
        "1. **Currency Conversion:**  ".to_string(),
        "   $\\text{Converted Revenue} = \\text{revenue} \\times \\text{conversion_rate}$".to_string(),
        "2. **Tax Adjustment:**  ".to_string(),
        "   $\\text{Adjusted Revenue} = \\text{Converted Revenue} \\times \\left(1 - \\frac{\\text{tax_rate}}{100}\\right)$".to_string(),
        "3. **Percentage Growth:**  ".to_string(),
        "   $\\text{Percentage Growth} = \\left(\\frac{\\text{Adjusted Revenue}_{\\text{current}} - \\text{Adjusted Revenue}_{\\text{previous}}}{\\text{Adjusted Revenue}_{\\text{previous}}}\\right) \\times 100$".to_string(),
    ]);

    if let Some(analysis) = analysis {
        report.push(String::new());
        report.push("# Revenue Dataset Transformation Report".to_string());
        report.push(format!("Total Records Evaluated: {}", analysis.total_records));

        for result in &analysis.results {
            render_record(&mut report, result);
        }
    }

    report.join("\n")
}

fn type_check<'a>(validation: &'a ValidationReport, field: &str) -> &'a str {
    validation
        .data_type_checks
        .get(field)
        .map(String::as_str)
        .unwrap_or("not checked")
}

fn growth_label(growth: Option<f64>) -> String {
    match growth {
        Some(value) => format!("{:.2}", value),
        None => "N/A".to_string(),
    }
}

fn render_record(report: &mut Vec<String>, result: &ProcessedRecord) {
    report.extend([
        String::new(),
        format!("## Record for Month: {}", result.month),
        "### Input Data:".to_string(),
        format!("- Revenue: {}", result.input.revenue),
        format!("- Currency: {}", result.input.currency),
        format!("- Tax Rate: {}%", result.input.tax_rate),
        format!("- Conversion Rate: {}", result.input.conversion_rate),
        String::new(),
        "### Step-by-Step Calculations:".to_string(),
        "1. **Currency Conversion:**".to_string(),
        format!(
            "   ${:.2} = {} \\times {}$",
            result.converted_revenue, result.input.revenue, result.input.conversion_rate
        ),
        String::new(),
        "2. **Tax Adjustment:**".to_string(),
        format!(
            "   ${:.2} = {:.2} \\times (1 - {}/100)$",
            result.adjusted_revenue, result.converted_revenue, result.input.tax_rate
        ),
        String::new(),
        "3. **Percentage Growth:**".to_string(),
        format!("   {}%", growth_label(result.percentage_growth)),
        String::new(),
        format!("### Final Transformed Data for {}:", result.month),
        format!("- Converted Revenue: ${:.2}$", result.converted_revenue),
        format!("- Adjusted Revenue: ${:.2}$", result.adjusted_revenue),
        format!(
            "- Percentage Growth: {}",
            growth_label(result.percentage_growth)
        ),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{transformer, validator};
    use crate::domain::model::Record;
    use std::collections::HashMap;

    fn sample_records() -> Vec<Record> {
        let raw = serde_json::json!([
            { "month": "January", "revenue": 26000, "currency": "USD", "tax_rate": 9 },
            { "month": "February", "revenue": 27500, "currency": "EUR", "tax_rate": 11, "conversion_rate": 1.2 }
        ]);
        raw.as_array()
            .unwrap()
            .iter()
            .map(|item| {
                let mut data = HashMap::new();
                for (key, value) in item.as_object().unwrap() {
                    data.insert(key.clone(), value.clone());
                }
                Record { data }
            })
            .collect()
    }

    #[test]
    fn test_valid_report_sections() {
        let records = sample_records();
        let validation = validator::validate(&records);
        let analysis = transformer::transform(&records).unwrap();

        let report = render_report("JSON", &validation, Some(&analysis));

        assert!(report.contains("# Data Validation Report"));
        assert!(report.contains("- Data format: JSON"));
        assert!(report.contains("- Number of records: 2"));
        assert!(report.contains("- month: present"));
        assert!(report.contains("- revenue (non-negative): valid"));
        assert!(report.contains("# Formulas Used:"));
        assert!(report.contains("Total Records Evaluated: 2"));
        assert!(report.contains("## Record for Month: January"));
        assert!(report.contains("## Record for Month: February"));
        // Arithmetic is written out literally
        assert!(report.contains("$26000.00 = 26000 \\times 1$"));
        assert!(report.contains("$23660.00 = 26000.00 \\times (1 - 9/100)$"));
        assert!(report.contains("- Percentage Growth: 24.13"));
    }

    #[test]
    fn test_first_month_growth_renders_as_na() {
        let records = sample_records();
        let validation = validator::validate(&records);
        let analysis = transformer::transform(&records).unwrap();

        let report = render_report("JSON", &validation, Some(&analysis));

        let january = report
            .split("## Record for Month: ")
            .find(|section| section.starts_with("January"))
            .unwrap();
        assert!(january.contains("- Percentage Growth: N/A"));
    }

    #[test]
    fn test_invalid_report_is_only_the_error_message() {
        let mut records = sample_records();
        records[1].data.remove("tax_rate");

        let validation = validator::validate(&records);
        let report = render_report("JSON", &validation, None);

        assert_eq!(report, validation.error_message.unwrap());
        assert!(!report.contains("# Data Validation Report"));
    }
}

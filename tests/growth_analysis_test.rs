use revenue_report::core::{parser, transformer, validator};
use revenue_report::ReportError;

#[test]
fn test_worked_example_through_parse_validate_transform() {
    let input = r#"{
        "records": [
            { "month": "January", "revenue": 26000, "currency": "USD", "tax_rate": 9 },
            { "month": "February", "revenue": 27500, "currency": "EUR", "tax_rate": 11, "conversion_rate": 1.2 }
        ]
    }"#;

    let records = parser::parse_records(input, "json").unwrap();
    assert!(validator::validate(&records).is_valid);

    let analysis = transformer::transform(&records).unwrap();
    assert_eq!(analysis.total_records, records.len());

    let january = &analysis.results[0];
    assert_eq!(january.converted_revenue, 26000.0);
    assert_eq!(january.adjusted_revenue, 23660.0);
    assert_eq!(january.percentage_growth, None);

    let february = &analysis.results[1];
    assert_eq!(february.converted_revenue, 33000.0);
    assert_eq!(february.adjusted_revenue, 29370.0);
    assert_eq!(february.percentage_growth, Some(24.13));
}

#[test]
fn test_csv_input_is_sorted_into_calendar_order() {
    let input = "month,revenue,currency,tax_rate,conversion_rate\n\
                 March,300,USD,0,1\n\
                 January,100,USD,0,1\n\
                 February,200,USD,0,1\n";

    let records = parser::parse_records(input, "csv").unwrap();
    let analysis = transformer::transform(&records).unwrap();

    let months: Vec<&str> = analysis.results.iter().map(|r| r.month.as_str()).collect();
    assert_eq!(months, ["January", "February", "March"]);
    assert_eq!(analysis.results[0].percentage_growth, None);
    assert_eq!(analysis.results[1].percentage_growth, Some(100.0));
    assert_eq!(analysis.results[2].percentage_growth, Some(50.0));
}

#[test]
fn test_usd_conversion_rate_is_forced_to_one() {
    let input = r#"[{ "month": "January", "revenue": 100, "currency": "USD", "tax_rate": 10, "conversion_rate": 99 }]"#;

    let records = parser::parse_records(input, "json").unwrap();
    let analysis = transformer::transform(&records).unwrap();

    assert_eq!(analysis.results[0].converted_revenue, 100.0);
    assert_eq!(analysis.results[0].input.conversion_rate, 1.0);
}

#[test]
fn test_month_and_currency_case_insensitivity() {
    let upper = r#"[{ "month": "JANUARY", "revenue": 100, "currency": "usd", "tax_rate": 10 }]"#;
    let lower = r#"[{ "month": "january", "revenue": 100, "currency": "USD", "tax_rate": 10 }]"#;

    let upper_analysis =
        transformer::transform(&parser::parse_records(upper, "json").unwrap()).unwrap();
    let lower_analysis =
        transformer::transform(&parser::parse_records(lower, "json").unwrap()).unwrap();

    assert_eq!(
        upper_analysis.results[0].adjusted_revenue,
        lower_analysis.results[0].adjusted_revenue
    );
}

#[test]
fn test_transform_twice_yields_identical_results() {
    let input = r#"{
        "records": [
            { "month": "April", "revenue": 32000, "currency": "USD", "tax_rate": 8 },
            { "month": "March", "revenue": 30000, "currency": "GBP", "tax_rate": 10, "conversion_rate": 1.4 }
        ]
    }"#;

    let records = parser::parse_records(input, "json").unwrap();
    assert_eq!(
        transformer::transform(&records).unwrap(),
        transformer::transform(&records).unwrap()
    );
}

#[test]
fn test_unrecognized_month_is_reported_with_its_row() {
    let input = r#"[
        { "month": "January", "revenue": 100, "currency": "USD", "tax_rate": 10 },
        { "month": "Smarch", "revenue": 100, "currency": "USD", "tax_rate": 10 }
    ]"#;

    let records = parser::parse_records(input, "json").unwrap();
    let err = transformer::transform(&records).unwrap_err();
    match err {
        ReportError::UnknownMonth { month, row } => {
            assert_eq!(month, "Smarch");
            assert_eq!(row, 2);
        }
        other => panic!("expected UnknownMonth, got {other}"),
    }
}

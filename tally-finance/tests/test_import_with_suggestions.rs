use chrono::{TimeZone, Utc};
use tally_core::{Transaction, format_currency};
use tally_finance::{backfill_suggestions, suggest_category};
use tally_ingest::{MemorySink, export_to_csv_default, parse_csv_at, to_csv_string};

const STATEMENT: &str = "\
date,description,amount,category
2024-05-01,STARBUCKS STORE 0042,-5.40,
2024-05-02,ACME CORP SALARY,3200,
2024-05-03,Whole Foods Market,-87.12,Groceries
2024-05-04,LOCAL BAKERY,-9.00,
";

/// Bank statement import: parse, backfill suggestions, then materialize transactions.
#[test]
fn test_statement_import_pipeline() {
    let at = Utc.with_ymd_and_hms(2024, 5, 5, 9, 30, 0).unwrap();
    let mut rows = parse_csv_at(STATEMENT, at);
    assert_eq!(rows.len(), 4);

    let filled = backfill_suggestions(&mut rows);
    assert_eq!(filled, 2);

    let txns: Vec<Transaction> = rows
        .iter()
        .map(|r| Transaction::from_record(r).unwrap())
        .collect();

    assert_eq!(txns[0].category.as_deref(), Some("Coffee"));
    assert!(txns[0].is_category_suggested());
    assert_eq!(txns[1].category.as_deref(), Some("Income"));
    assert!(txns[1].is_income());
    // user-provided category wins and is not flagged
    assert_eq!(txns[2].category.as_deref(), Some("Groceries"));
    assert!(!txns[2].is_category_suggested());
    assert_eq!(txns[3].category, None);

    let millis = at.timestamp_millis();
    assert_eq!(txns[3].id, format!("imported_{millis}_4"));
    assert_eq!(format_currency(txns[2].amount), "-$87.12");
}

/// Re-exporting imported rows keeps the suggested flag so a later import can tell them apart.
#[test]
fn test_reexport_keeps_suggestion_flag() {
    let at = Utc.with_ymd_and_hms(2024, 5, 5, 9, 30, 0).unwrap();
    let mut rows = parse_csv_at(STATEMENT, at);
    backfill_suggestions(&mut rows);

    // the first row gained categorySuggested, so it becomes part of the header
    let csv = to_csv_string(&rows).unwrap();
    assert!(csv.starts_with("date,description,amount,category,id,categorySuggested\n"));

    let mut sink = MemorySink::default();
    export_to_csv_default(&rows, &mut sink).unwrap();
    assert_eq!(sink.artifacts[0].content, csv);

    let back = parse_csv_at(&csv, at);
    let confirmed = Transaction::from_record(&back[2]).unwrap();
    assert_eq!(confirmed.category_suggested, None);
    assert_eq!(Transaction::from_record(&back[0]).unwrap().category_suggested, Some(true));
}

#[test]
fn test_suggestion_is_case_insensitive() {
    assert_eq!(suggest_category("costco wholesale #12"), Some("Groceries"));
    assert_eq!(suggest_category("COSTCO WHOLESALE #12"), Some("Groceries"));
}

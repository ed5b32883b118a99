use std::fs;

use bizmerge_validate::{ValidateError, ValidateOptions, validate_file, validate_reader};

fn options() -> ValidateOptions {
    ValidateOptions::new("google_name", "google_address")
}

#[test]
fn counts_rows_keys_and_missing_addresses() {
    let input = "google_name,google_address,facebook_name\n\
                 acme,1 main st,acme\n\
                 beta,,\n\
                 acme,2 main st,\n\
                 ,,gamma\n";
    let report = validate_reader(input.as_bytes(), &options()).expect("validate");
    insta::assert_json_snapshot!(report, @r#"
    {
      "total_rows": 4,
      "unique_keys": 3,
      "missing_address_rows": [
        2,
        4
      ]
    }
    "#);
}

#[test]
fn whitespace_address_is_not_missing() {
    let input = "google_name,google_address\nacme,\" \"\n";
    let report = validate_reader(input.as_bytes(), &options()).expect("validate");
    assert!(report.missing_address_rows.is_empty());
}

#[test]
fn short_rows_are_missing_the_address() {
    let input = "google_name,google_address\nacme\n";
    let report = validate_reader(input.as_bytes(), &options()).expect("validate");
    assert_eq!(report.missing_address_rows, vec![1]);
}

#[test]
fn absent_address_column_flags_every_row() {
    let input = "company_name\na\nb\n";
    let report =
        validate_reader(input.as_bytes(), &ValidateOptions::default()).expect("validate");
    assert_eq!(report.total_rows, 2);
    assert_eq!(report.unique_keys, 2);
    assert_eq!(report.missing_address_rows, vec![1, 2]);
}

#[test]
fn header_only_file_reports_zero() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("merged_dataset.csv");
    fs::write(&path, "google_name,google_address\n").expect("write csv");
    let report = validate_file(&path, &options()).expect("validate");
    assert_eq!(
        report.lines(),
        vec!["Total rows: 0", "Unique companies: 0"]
    );
}

#[test]
fn missing_file_produces_no_counts() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = validate_file(&dir.path().join("absent.csv"), &options()).expect_err("missing");
    assert!(matches!(err, ValidateError::Open { .. }));
}

#[test]
fn malformed_row_is_an_error() {
    let input = b"google_name,google_address\nacme,\xff\n";
    let err = validate_reader(&input[..], &options()).expect_err("invalid utf8");
    assert!(matches!(err, ValidateError::Record { line: 2, .. }));
}

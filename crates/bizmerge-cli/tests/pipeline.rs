//! End-to-end tests for the merge and check pipelines.

use std::fs;
use std::path::Path;

use bizmerge_cli::pipeline::{check_options, run_check, run_merge};
use bizmerge_model::{LoadStats, MergeStats, PipelineConfig, Source};

const GOOGLE_CSV: &str = "\
name,domain,category,address,employee_count,employees
Acme Inc.,acme.com,Food|Cafe,1 Main St.,11-50,Jane Doe
Beta LLC,,Retail,2 Side St,5,Bob
Gamma Co,gamma.io,Retail,,1,
";

const FACEBOOK_CSV: &str = "\
name,domain,phone,categories
ACME,acme.com,555-0100,Coffee
Delta Ltd,delta.org,555-0200,Bar|Grill
,nodomain.com,,
";

fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        primary: Source::new("google", dir.join("google_dataset.csv")).with_employee_info(true),
        secondary: Source::new("facebook", dir.join("facebook_dataset.csv")),
        output: dir.join("merged_dataset.csv"),
        ..PipelineConfig::default()
    }
}

fn seed(dir: &Path) {
    fs::write(dir.join("google_dataset.csv"), GOOGLE_CSV).expect("write google");
    fs::write(dir.join("facebook_dataset.csv"), FACEBOOK_CSV).expect("write facebook");
}

#[test]
fn merges_sources_into_prefixed_csv() {
    let dir = tempfile::tempdir().expect("temp dir");
    seed(dir.path());
    let config = config_in(dir.path());

    let outcome = run_merge(&config).expect("merge");

    assert_eq!(
        outcome.primary.stats,
        LoadStats {
            rows_read: 3,
            rows_kept: 2,
            rows_discarded: 1,
        }
    );
    assert_eq!(outcome.secondary.stats.rows_kept, 3);
    assert_eq!(
        outcome.merge,
        MergeStats {
            primary: 2,
            secondary: 3,
            matched: 1,
            unmatched_secondary: 2,
        }
    );
    assert_eq!(outcome.rows_written, 4);

    let merged = fs::read_to_string(&config.output).expect("read merged");
    insta::assert_snapshot!(merged, @r#"
    google_name,google_domain,google_category,google_address,google_employee_count,google_employees,google_employee_info,facebook_name,facebook_domain,facebook_phone,facebook_categories
    acme,acmecom,"[""food"",""cafe""]",1 main st,1150,jane doe,11-50 Jane Doe,acme,acmecom,5550100,coffee
    gamma,gammaio,"[""retail""]",,1,,1,,,,
    ,,,,,,,delta,deltaorg,5550200,bargrill
    ,,,,,,,,nodomaincom,,
    "#);
}

#[test]
fn check_reports_merged_output() {
    let dir = tempfile::tempdir().expect("temp dir");
    seed(dir.path());
    let config = config_in(dir.path());
    run_merge(&config).expect("merge");

    let options = check_options(&config);
    assert_eq!(options.key_column, "google_name");
    assert_eq!(options.address_column, "google_address");

    let report = run_check(&config).expect("check");
    assert_eq!(
        report.lines(),
        vec![
            "Missing address in row 2",
            "Missing address in row 3",
            "Missing address in row 4",
            "Total rows: 4",
            "Unique companies: 3",
        ]
    );
    assert!(report.has_missing_addresses());
}

#[test]
fn check_of_complete_file_has_no_missing_addresses() {
    let dir = tempfile::tempdir().expect("temp dir");
    let merged = dir.path().join("complete.csv");
    fs::write(&merged, "google_name,google_address\nacme,1 main st\nbeta,2 side st\n")
        .expect("write merged");
    let mut config = config_in(dir.path());
    config.check.input = Some(merged);

    let report = run_check(&config).expect("check");
    assert!(!report.has_missing_addresses());
    assert_eq!(report.lines(), vec!["Total rows: 2", "Unique companies: 2"]);
}

#[test]
fn missing_secondary_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("google_dataset.csv"), GOOGLE_CSV).expect("write google");
    let config = config_in(dir.path());

    let err = run_merge(&config).expect_err("secondary missing");

    assert!(format!("{err:#}").contains("load facebook dataset"));
    assert!(!config.output.exists());
}

#[test]
fn check_without_output_fails() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = config_in(dir.path());
    let err = run_check(&config).expect_err("no merged file");
    assert!(format!("{err:#}").contains("merged_dataset.csv"));
}

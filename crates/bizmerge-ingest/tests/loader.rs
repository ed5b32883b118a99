use std::fs;
use std::path::PathBuf;

use bizmerge_ingest::{IngestError, load_dataset};
use bizmerge_model::{LoadStats, Source};

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn loads_and_filters_rows_without_domain() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_csv(
        &dir,
        "google_dataset.csv",
        b"name,domain,category,employee_count\n\
          Acme Inc.,acme.com,Food|Cafe,10\n\
          No Domain LLC,,Retail,5\n\
          Blank Corp,   ,Retail,7\n\
          Beta Ltd,beta.io,,3\n",
    );
    let source = Source::new("google", &path).with_employee_info(true);
    let dataset = load_dataset(&source).expect("load dataset");

    assert_eq!(dataset.prefix, "google");
    assert_eq!(
        dataset.stats,
        LoadStats {
            rows_read: 4,
            rows_kept: 2,
            rows_discarded: 2,
        }
    );
    let names: Vec<_> = dataset
        .records
        .iter()
        .map(|record| record.get("google_name"))
        .collect();
    assert_eq!(names, vec![Some("acme"), Some("beta")]);

    let first = &dataset.records[0];
    assert_eq!(first.get("google_category"), Some(r#"["food","cafe"]"#));
    assert_eq!(first.get("google_employee_info"), Some("10"));
    assert_eq!(dataset.records[1].get("google_category"), Some(r#"[""]"#));
}

#[test]
fn short_rows_are_padded() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_csv(&dir, "short.csv", b"domain,name,phone\nacme.com,Acme\n");
    let dataset = load_dataset(&Source::new("fb", &path)).expect("load dataset");
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records[0].get("fb_phone"), Some(""));
}

#[test]
fn column_names_are_lowercased() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_csv(&dir, "upper.csv", b"Domain,Company Name\nA.com,Foo Co\n");
    let dataset = load_dataset(&Source::new("facebook", &path)).expect("load dataset");
    let keys: Vec<&str> = dataset.records[0].keys().collect();
    assert_eq!(keys, vec!["facebook_domain", "facebook_company name"]);
    assert_eq!(dataset.records[0].get("facebook_company name"), Some("foo"));
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let source = Source::new("google", dir.path().join("absent.csv"));
    let err = load_dataset(&source).expect_err("missing file");
    assert!(matches!(err, IngestError::Open { .. }));
    assert!(err.to_string().contains("absent.csv"));
}

#[test]
fn invalid_utf8_is_a_record_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_csv(&dir, "bad.csv", b"domain,name\nacme.com,ok\nbeta.com,\xff\xfe\n");
    let err = load_dataset(&Source::new("google", &path)).expect_err("bad utf8");
    match err {
        IngestError::Record { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
}

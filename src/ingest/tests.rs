//! Tests for the ingestion orchestrator
//!
//! Runs the full pipeline against an in-memory DuckDB store with archives
//! written into a temp directory.

use super::*;
use crate::progress::{CollectingSink, NullSink};
use crate::store::DuckdbStore;
use bzip2::write::BzEncoder;
use bzip2::Compression;
use pretty_assertions::assert_eq;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;
use test_case::test_case;

/// Write `contents` as a bzip2 archive named `name` into `dir`
fn write_archive(dir: &TempDir, name: &str, contents: &str) {
    let file = File::create(dir.path().join(name)).unwrap();
    let mut encoder = BzEncoder::new(file, Compression::default());
    encoder.write_all(contents.as_bytes()).unwrap();
    encoder.finish().unwrap();
}

fn test_config(dir: &TempDir) -> IngestConfig {
    IngestConfig::new().with_output_dir(dir.path().join("unzipped"))
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(ToString::to_string).collect()
}

#[test_case("orders.csv.bz2", Some("orders"))]
#[test_case("a-b.csv.bz2", Some("a-b"))]
#[test_case("orders.csv", None; "not compressed")]
#[test_case("orders.bz2", None; "not tabular")]
#[test_case("orders.txt", None; "unrelated")]
#[test_case(".csv.bz2", None; "empty stem")]
fn test_table_name_derivation(file_name: &str, expected: Option<&str>) {
    assert_eq!(table_name(file_name), expected.map(ToString::to_string));
}

#[test]
fn test_run_orders_scenario() {
    let dir = TempDir::new().unwrap();
    write_archive(
        &dir,
        "orders.csv.bz2",
        "id,order-date,cust:id\n1,2024-01-01,42\n2,2024-01-02,7\n",
    );

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    let summary = ingestor.run(dir.path()).unwrap();

    assert_eq!(summary.files_processed(), 1);
    assert_eq!(summary.rows_loaded(), 2);
    assert!(!summary.has_failures());
    assert_eq!(summary.reports[0].table, "orders");

    let store = ingestor.into_store();
    let columns = strings(&["id", "order_date", "cust_id"]);
    assert_eq!(
        store.select_all("orders", &columns).unwrap(),
        vec![
            strings(&["1", "2024-01-01", "42"]),
            strings(&["2", "2024-01-02", "7"]),
        ]
    );
}

#[test]
fn test_run_continues_past_corrupt_archive() {
    let dir = TempDir::new().unwrap();
    // Sorted order puts the corrupt archive first
    std::fs::write(dir.path().join("bad.csv.bz2"), b"not a bzip2 stream").unwrap();
    write_archive(&dir, "good.csv.bz2", "id\n1\n2\n3\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    let summary = ingestor.run(dir.path()).unwrap();

    assert_eq!(summary.files_processed(), 2);
    assert!(summary.has_failures());
    assert!(matches!(
        summary.reports[0].outcome,
        FileOutcome::Failed { .. }
    ));
    assert!(matches!(
        summary.reports[1].outcome,
        FileOutcome::Loaded { rows: 3 }
    ));

    let store = ingestor.into_store();
    assert_eq!(store.count_rows("good").unwrap(), 3);
    assert!(!store.table_exists("bad").unwrap());
}

#[test]
fn test_run_header_only_archive_creates_empty_table() {
    let dir = TempDir::new().unwrap();
    write_archive(&dir, "empty.csv.bz2", "id,name\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    let summary = ingestor.run(dir.path()).unwrap();

    assert!(matches!(
        summary.reports[0].outcome,
        FileOutcome::Loaded { rows: 0 }
    ));

    let store = ingestor.into_store();
    assert!(store.table_exists("empty").unwrap());
    assert_eq!(store.count_rows("empty").unwrap(), 0);
}

#[test]
fn test_run_short_row_yields_partial_load() {
    let dir = TempDir::new().unwrap();
    // Batch size 2: rows 1-2 commit, row 4 is short, so the file is rejected
    // with the first batch already durable
    write_archive(&dir, "ragged.csv.bz2", "a,b\n1,2\n3,4\n5,6\nonly-one\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let config = test_config(&dir).with_batch_size(2);
    let mut ingestor = Ingestor::new(store, config, &sink).unwrap();
    let summary = ingestor.run(dir.path()).unwrap();

    match &summary.reports[0].outcome {
        FileOutcome::PartiallyLoaded { rows, error } => {
            assert_eq!(*rows, 2);
            assert!(error.contains("fields"));
        }
        other => panic!("expected partial load, got {other:?}"),
    }
    assert_eq!(summary.rows_loaded(), 2);
    assert!(summary.has_failures());

    let store = ingestor.into_store();
    assert_eq!(store.count_rows("ragged").unwrap(), 2);
}

#[test]
fn test_run_duplicate_normalized_columns_fails_file() {
    let dir = TempDir::new().unwrap();
    // "a-b" and "a:b" both normalize to "a_b"
    write_archive(&dir, "dup.csv.bz2", "a-b,a:b\n1,2\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    let summary = ingestor.run(dir.path()).unwrap();

    match &summary.reports[0].outcome {
        FileOutcome::Failed { error } => assert!(error.contains("duplicate column")),
        other => panic!("expected failure, got {other:?}"),
    }

    let store = ingestor.into_store();
    assert!(!store.table_exists("dup").unwrap());
}

#[test]
fn test_run_ignores_unrecognized_files() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("readme.txt"), b"hello").unwrap();
    std::fs::write(dir.path().join("plain.csv"), b"a\n1\n").unwrap();
    write_archive(&dir, "real.csv.bz2", "a\n1\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    let summary = ingestor.run(dir.path()).unwrap();

    assert_eq!(summary.files_processed(), 1);
    assert_eq!(summary.reports[0].table, "real");
}

#[test]
fn test_run_empty_directory() {
    let dir = TempDir::new().unwrap();
    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    let summary = ingestor.run(dir.path()).unwrap();

    assert_eq!(summary.files_processed(), 0);
    assert_eq!(summary.rows_loaded(), 0);
    assert!(!summary.has_failures());
}

#[test]
fn test_run_missing_directory_is_fatal() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    assert!(ingestor.run(&missing).is_err());
}

#[test]
fn test_run_removes_decompressed_files_when_configured() {
    let dir = TempDir::new().unwrap();
    write_archive(&dir, "orders.csv.bz2", "id\n1\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let config = test_config(&dir).with_keep_decompressed(false);
    let mut ingestor = Ingestor::new(store, config, &sink).unwrap();
    ingestor.run(dir.path()).unwrap();

    assert!(!dir.path().join("unzipped/orders.csv").exists());
}

#[test]
fn test_run_keeps_decompressed_files_by_default() {
    let dir = TempDir::new().unwrap();
    write_archive(&dir, "orders.csv.bz2", "id\n1\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = NullSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    ingestor.run(dir.path()).unwrap();

    assert!(dir.path().join("unzipped/orders.csv").exists());
}

#[test]
fn test_run_reports_progress_per_stage() {
    let dir = TempDir::new().unwrap();
    write_archive(&dir, "orders.csv.bz2", "id\n1\n2\n");

    let store = DuckdbStore::open_in_memory().unwrap();
    let sink = CollectingSink::new();
    let mut ingestor = Ingestor::new(store, test_config(&dir), &sink).unwrap();
    ingestor.run(dir.path()).unwrap();

    let messages = sink.messages();
    assert!(messages.iter().any(|m| m.starts_with("Loading ")));
    assert!(messages.iter().any(|m| m.contains("Decompressed:")));
    assert!(messages.iter().any(|m| m.contains("Loaded 2 rows")));
    assert!(messages
        .iter()
        .any(|m| m.contains("Finished table 'orders': 2 rows loaded")));
}

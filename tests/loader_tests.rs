use click_fraud_dashboard::data::{
    ClickStore, CsvClickSource, DataProcessor, LoaderError, SampleKey,
};
use click_fraud_dashboard::stats::StatsCalculator;
use polars::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURE_ROWS: usize = 100_000;
const FIXTURE_POSITIVES: usize = 227;

/// Row `i` is clicked on Nov (6 + i % 4) 2017 at hour i % 24; Nov 6 was a
/// Monday. Every 440th row among the first 227 multiples is attributed.
fn write_fixture(dir: &Path, rows: usize) -> PathBuf {
    let path = dir.join("train_sample.csv");
    let file = std::fs::File::create(&path).unwrap();
    let mut out = std::io::BufWriter::new(file);
    writeln!(
        out,
        "ip,app,device,os,channel,click_time,attributed_time,is_attributed,row"
    )
    .unwrap();

    for i in 0..rows {
        let click_time = format!(
            "2017-11-{:02} {:02}:{:02}:00",
            6 + i % 4,
            i % 24,
            i % 60
        );
        let positive = i % 440 == 0 && i / 440 < FIXTURE_POSITIVES;
        let (attributed_time, label) = if positive {
            (click_time.clone(), 1)
        } else {
            (String::new(), 0)
        };
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{}",
            i % 5000,
            i % 37,
            i % 3,
            i % 19,
            i % 101,
            click_time,
            attributed_time,
            label,
            i
        )
        .unwrap();
    }
    out.flush().unwrap();
    path
}

fn fixture_store(rows: usize) -> (TempDir, ClickStore<CsvClickSource>) {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(dir.path(), rows);
    (dir, ClickStore::new(CsvClickSource::new(path)))
}

#[test]
fn full_table_keeps_every_row_and_the_attribution_rate() {
    let (_dir, store) = fixture_store(FIXTURE_ROWS);

    let df = store.load(None).unwrap();
    assert_eq!(df.height(), FIXTURE_ROWS);

    let summary = StatsCalculator::summary(&df).unwrap();
    assert!((summary.attribution_rate - 0.00227).abs() < 1e-12);
    assert_eq!(summary.first_date.as_deref(), Some("2017-11-06"));
    assert_eq!(summary.last_date.as_deref(), Some("2017-11-09"));
}

#[test]
fn sample_has_requested_size_and_consistent_calendar_fields() {
    let (_dir, store) = fixture_store(FIXTURE_ROWS);

    let df = store.load(Some(10_000)).unwrap();
    assert_eq!(df.height(), 10_000);

    let rows = df.column("row").unwrap().i64().unwrap();
    let hours = df.column("hour").unwrap().i32().unwrap();
    let days = df.column("day").unwrap().i32().unwrap();
    let weekdays = df.column("dayofweek").unwrap().i32().unwrap();

    for i in 0..df.height() {
        let row = rows.get(i).unwrap();
        let hour = hours.get(i).unwrap();
        assert!((0..=23).contains(&hour));
        assert_eq!(hour as i64, row % 24);
        assert_eq!(days.get(i).unwrap() as i64, 6 + row % 4);
        assert_eq!(weekdays.get(i).unwrap() as i64, row % 4);
    }
}

#[test]
fn repeated_sample_requests_are_identical_and_cached() {
    let (_dir, store) = fixture_store(20_000);

    let first = store.load(Some(5_000)).unwrap();
    let second = store.load(Some(5_000)).unwrap();
    assert!(first.equals_missing(&second));
    assert_eq!(store.source_reads(), 1);

    // A fresh store over the same file draws the same rows.
    let other = ClickStore::new(CsvClickSource::new(store.source().path()));
    let third = other.load(Some(5_000)).unwrap();
    assert!(first.equals_missing(&third));
}

#[test]
fn full_and_oversized_requests_are_cached_separately() {
    let (_dir, store) = fixture_store(3_000);

    let full = store.load(None).unwrap();
    let oversized = store.load(Some(50_000)).unwrap();
    assert_eq!(full.height(), 3_000);
    assert_eq!(oversized.height(), 3_000);
    assert_eq!(store.source_reads(), 2);

    let mut keys = store.cached_keys();
    keys.sort_by_key(|k| k.to_string());
    assert_eq!(keys, vec![SampleKey::Full, SampleKey::Rows(50_000)]);
}

#[test]
fn attribution_time_present_only_for_positive_labels() {
    let (_dir, store) = fixture_store(FIXTURE_ROWS);
    let df = store.load(Some(50_000)).unwrap();

    let labels = df.column("is_attributed").unwrap().i64().unwrap();
    let attributed = df.column("attributed_time").unwrap();
    for i in 0..df.height() {
        let has_time = !matches!(attributed.get(i).unwrap(), AnyValue::Null);
        assert_eq!(labels.get(i).unwrap() == 1, has_time);
    }
}

#[test]
fn visualization_sample_is_capped() {
    let (_dir, store) = fixture_store(12_000);
    let df = store.load(None).unwrap();

    let viz = DataProcessor::visualization_sample(&df, 5_000).unwrap();
    assert_eq!(viz.height(), 5_000);

    let small = store.load(Some(4_000)).unwrap();
    let unchanged = DataProcessor::visualization_sample(&small, 5_000).unwrap();
    assert!(small.equals_missing(&unchanged));
}

#[test]
fn missing_file_is_unavailable_and_not_cached() {
    let dir = tempfile::tempdir().unwrap();
    let store = ClickStore::new(CsvClickSource::new(dir.path().join("absent.csv")));

    let err = store.load(Some(1_000)).unwrap_err();
    assert!(matches!(err, LoaderError::DataUnavailable { .. }));
    assert!(store.cached_keys().is_empty());

    // The next request retries the source.
    let written = write_fixture(dir.path(), 10);
    std::fs::rename(written, dir.path().join("absent.csv")).unwrap();
    assert_eq!(store.load(Some(1_000)).unwrap().height(), 10);
    assert_eq!(store.source_reads(), 2);
}

#[test]
fn missing_column_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clicks.csv");
    std::fs::write(
        &path,
        "ip,app,device,os,click_time,attributed_time,is_attributed\n\
         1,2,3,4,2017-11-06 14:32:21,,0\n",
    )
    .unwrap();

    let store = ClickStore::new(CsvClickSource::new(path));
    match store.load(None) {
        Err(LoaderError::DataMalformed(message)) => assert!(message.contains("channel")),
        other => panic!("expected DataMalformed, got {:?}", other.map(|df| df.height())),
    }
}

#[test]
fn empty_click_time_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clicks.csv");
    std::fs::write(
        &path,
        "ip,app,device,os,channel,click_time,attributed_time,is_attributed\n\
         1,2,3,4,5,2017-11-06 14:32:21,,0\n\
         1,2,3,4,5,,,0\n",
    )
    .unwrap();

    let store = ClickStore::new(CsvClickSource::new(path));
    match store.load(None) {
        Err(LoaderError::DataMalformed(message)) => assert!(message.contains("click_time")),
        other => panic!("expected DataMalformed, got {:?}", other.map(|df| df.height())),
    }
    assert!(store.cached_keys().is_empty());
}

#[test]
fn non_integer_id_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clicks.csv");
    std::fs::write(
        &path,
        "ip,app,device,os,channel,click_time,attributed_time,is_attributed\n\
         abc,2,3,4,5,2017-11-06 14:32:21,,0\n",
    )
    .unwrap();

    let store = ClickStore::new(CsvClickSource::new(path));
    assert!(matches!(
        store.load(Some(1_000)),
        Err(LoaderError::DataMalformed(_))
    ));
}

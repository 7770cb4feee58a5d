// tests/fetch.rs
//
// Pagination: cursor handling, the page cap, and abort-on-error.
mod common;

use std::time::{Duration, Instant};

use common::*;
use member_lookup::bitable::{ApiError, SearchResponse};
use member_lookup::config::options::FetchOptions;
use member_lookup::fetch::fetch_all;
use member_lookup::progress::{NullProgress, Progress};
use member_lookup::TruncationWarning;

fn records(prefix: &str, n: usize) -> Vec<member_lookup::bitable::RawRecord> {
    (0..n).map(|i| plain_record(&format!("{prefix}{i}"))).collect()
}

#[derive(Default)]
struct Recorder {
    pages: Vec<(usize, usize)>,
    warnings: Vec<String>,
}

impl Progress for Recorder {
    fn page_done(&mut self, page: usize, total: usize) {
        self.pages.push((page, total));
    }
    fn warn(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }
}

#[test]
fn three_pages_are_concatenated_in_order() {
    let api = FakeApi::with_pages(vec![records("a", 500), records("b", 500), records("c", 200)]);

    let out = fetch_all(&api, &token(), &table(), &opts(), &mut NullProgress).unwrap();

    assert_eq!(out.records.len(), 1200);
    assert_eq!(out.pages, 3);
    assert_eq!(out.truncated, None);
    assert_eq!(api.search_calls.get(), 3);
    assert_eq!(out.records[0].record_id, "a0");
    assert_eq!(out.records[500].record_id, "b0");
    assert_eq!(out.records[1199].record_id, "c199");
}

#[test]
fn cursor_from_each_page_is_sent_with_the_next() {
    let api = FakeApi::with_pages(vec![records("a", 2), records("b", 2), records("c", 1)]);

    fetch_all(&api, &token(), &table(), &opts(), &mut NullProgress).unwrap();

    let cursors = api.cursors.borrow().clone();
    assert_eq!(cursors, vec![None, Some("cursor-1".to_string()), Some("cursor-2".to_string())]);
    assert!(api.page_sizes.borrow().iter().all(|&s| s == 500));
}

#[test]
fn page_cap_truncates_instead_of_failing() {
    let api = FakeApi::endless(500);
    let mut progress = Recorder::default();

    let out = fetch_all(&api, &token(), &table(), &opts(), &mut progress).unwrap();

    assert_eq!(api.search_calls.get(), 25);
    assert_eq!(out.pages, 25);
    assert_eq!(out.records.len(), 12_500);
    assert_eq!(out.truncated, Some(TruncationWarning { pages: 25, records: 12_500 }));
    assert_eq!(progress.pages.len(), 25);
    assert_eq!(progress.warnings.len(), 1);
    assert!(progress.warnings[0].contains("已达到最大页数限制（25页）"), "{}", progress.warnings[0]);
}

#[test]
fn configured_cap_is_honoured() {
    let api = FakeApi::endless(10);
    let opts = FetchOptions { max_pages: 3, ..opts() };

    let out = fetch_all(&api, &token(), &table(), &opts, &mut NullProgress).unwrap();

    assert_eq!(api.search_calls.get(), 3);
    assert_eq!(out.records.len(), 30);
    assert!(out.truncated.is_some());
}

#[test]
fn last_page_at_the_cap_is_not_a_truncation() {
    // Exactly max_pages pages, the last one says "no more".
    let api = FakeApi::with_pages(vec![records("a", 5), records("b", 5)]);
    let opts = FetchOptions { max_pages: 2, ..opts() };

    let out = fetch_all(&api, &token(), &table(), &opts, &mut NullProgress).unwrap();

    assert_eq!(out.records.len(), 10);
    assert_eq!(out.truncated, None);
}

#[test]
fn rejected_page_aborts_with_its_page_number() {
    let api = FakeApi::new(|i| match i {
        0 => Ok(SearchResponse::page(vec![plain_record("r0")], true, Some("c1".into()))),
        _ => Ok(SearchResponse::failure(1254045, "TableIdNotFound")),
    });

    let err = fetch_all(&api, &token(), &table(), &opts(), &mut NullProgress).unwrap_err();

    assert_eq!(err.page, 2);
    assert!(err.message.contains("TableIdNotFound"), "{}", err.message);
    assert!(err.message.contains("1254045"));
    assert_eq!(api.search_calls.get(), 2);
}

#[test]
fn transport_failure_is_a_fetch_error() {
    let api = FakeApi::new(|_| Err(ApiError::Unavailable("connection reset".into())));

    let err = fetch_all(&api, &token(), &table(), &opts(), &mut NullProgress).unwrap_err();

    assert_eq!(err.page, 1);
    assert!(err.message.contains("connection reset"));
    assert_eq!(api.search_calls.get(), 1);
}

#[test]
fn missing_data_block_counts_as_an_empty_last_page() {
    let api = FakeApi::new(|_| {
        Ok(SearchResponse { code: 0, msg: None, data: None })
    });

    let out = fetch_all(&api, &token(), &table(), &opts(), &mut NullProgress).unwrap();

    assert!(out.records.is_empty());
    assert_eq!(out.pages, 1);
    assert_eq!(out.truncated, None);
}

#[test]
fn pause_separates_consecutive_requests() {
    let api = FakeApi::with_pages(vec![records("a", 1), records("b", 1), records("c", 1)]);
    let opts = FetchOptions { pause_ms: 30, ..FetchOptions::default() };

    let started = Instant::now();
    let out = fetch_all(&api, &token(), &table(), &opts, &mut NullProgress).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(out.pages, 3);
    // Two gaps between three requests, none before the first.
    assert!(elapsed >= Duration::from_millis(60), "elapsed {elapsed:?}");
}

#[test]
fn single_page_does_not_pause() {
    let api = FakeApi::with_pages(vec![records("a", 3)]);
    let opts = FetchOptions { pause_ms: 1_000, ..FetchOptions::default() };

    let started = Instant::now();
    fetch_all(&api, &token(), &table(), &opts, &mut NullProgress).unwrap();

    assert!(started.elapsed() < Duration::from_millis(500));
}

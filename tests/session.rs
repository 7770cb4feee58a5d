// tests/session.rs
//
// Load-once caching, reset, and how load failures surface through lookup.
mod common;

use common::*;
use serde_json::json;

use member_lookup::bitable::{ApiError, AuthResponse, SearchResponse};
use member_lookup::progress::{NullProgress, Progress};
use member_lookup::session::load_members;
use member_lookup::{AuthError, LoadError, LookupError, Session};

fn two_page_api() -> FakeApi {
    FakeApi::with_pages(vec![
        vec![
            member("r1", "张三", json!("2023001"), &["迎新晚会", "义卖"]),
            member("r2", "李四", json!(7), &[]),
        ],
        vec![member("r3", "王五", json!("2023003"), &["支教"])],
    ])
}

#[test]
fn first_lookup_loads_everything() {
    let api = two_page_api();
    let mut session = Session::new(&api, source());
    assert!(!session.is_loaded());

    let hit = session.lookup("王五", "2023003", &mut NullProgress).unwrap().unwrap();
    assert_eq!(hit.activities, ["支教"]);

    assert_eq!(api.auth_calls.get(), 1);
    assert_eq!(api.search_calls.get(), 2);
    assert!(session.is_loaded());

    let summary = session.last_load().unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.truncated, None);
}

#[test]
fn later_lookups_use_the_cache() {
    let api = two_page_api();
    let mut session = Session::new(&api, source());

    session.lookup("张三", "2023001", &mut NullProgress).unwrap();
    let miss = session.lookup("nobody", "0", &mut NullProgress).unwrap();
    assert!(miss.is_none());
    let hit = session.lookup("李四", "7", &mut NullProgress).unwrap();
    assert_eq!(hit.unwrap().activity_count(), 0);

    assert_eq!(api.auth_calls.get(), 1);
    assert_eq!(api.search_calls.get(), 2);
}

#[test]
fn reset_forces_a_fresh_load() {
    let api = two_page_api();
    let mut session = Session::new(&api, source());

    session.lookup("张三", "2023001", &mut NullProgress).unwrap();
    session.reset();
    assert!(!session.is_loaded());
    assert!(session.last_load().is_none());

    session.lookup("张三", "2023001", &mut NullProgress).unwrap();
    assert_eq!(api.auth_calls.get(), 2);
    assert_eq!(api.search_calls.get(), 4);
}

#[test]
fn reset_before_any_load_is_harmless() {
    let api = two_page_api();
    let mut session = Session::new(&api, source());
    session.reset();
    session.reset();
    assert_eq!(api.auth_calls.get(), 0);
}

#[test]
fn missing_input_touches_nothing() {
    let api = two_page_api();
    let mut session = Session::new(&api, source());

    let err = session.lookup("", "2023001", &mut NullProgress).unwrap_err();
    assert!(matches!(err, LookupError::MissingInput));
    let err = session.lookup("张三", "", &mut NullProgress).unwrap_err();
    assert!(matches!(err, LookupError::MissingInput));

    assert_eq!(api.auth_calls.get(), 0);
    assert_eq!(api.search_calls.get(), 0);
    assert!(!session.is_loaded());
}

#[test]
fn rejected_credentials_stop_before_fetching() {
    let api = two_page_api().with_auth(AuthResponse {
        code: 10003,
        msg: Some("invalid app_secret".into()),
        ..AuthResponse::default()
    });
    let mut session = Session::new(&api, source());

    let err = session.lookup("张三", "2023001", &mut NullProgress).unwrap_err();

    match err {
        LookupError::Load(LoadError::Auth(AuthError::Rejected { code, msg })) => {
            assert_eq!(code, 10003);
            assert_eq!(msg, "invalid app_secret");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(api.search_calls.get(), 0);
    assert!(!session.is_loaded());
}

#[test]
fn success_without_token_is_an_auth_error() {
    let api = two_page_api().with_auth(AuthResponse { code: 0, ..AuthResponse::default() });

    let err = load_members(&api, &source(), &mut NullProgress).unwrap_err();

    assert!(matches!(err, LoadError::Auth(AuthError::MissingToken)));
}

#[test]
fn fetch_failure_leaves_the_cache_empty_and_retries_next_time() {
    let failing = std::rc::Rc::new(std::cell::Cell::new(true));
    let flag = failing.clone();
    let api = FakeApi::new(move |_| {
        if flag.get() {
            Err(ApiError::Unavailable("HTTP 503: upstream".into()))
        } else {
            Ok(SearchResponse::page(
                vec![member("r1", "张三", json!("2023001"), &["义卖"])],
                false,
                None,
            ))
        }
    });
    let mut session = Session::new(&api, source());

    let err = session.lookup("张三", "2023001", &mut NullProgress).unwrap_err();
    assert!(matches!(err, LookupError::Load(LoadError::Fetch(ref e)) if e.page == 1));
    assert!(!session.is_loaded());

    failing.set(false);
    let hit = session.lookup("张三", "2023001", &mut NullProgress).unwrap();
    assert!(hit.is_some());
    assert_eq!(api.auth_calls.get(), 2);
}

#[test]
fn truncation_is_reported_but_data_is_usable() {
    let api = FakeApi::endless(2);
    let mut session = Session::new(&api, source());

    let hit = session.lookup("x", "y", &mut NullProgress).unwrap();
    assert!(hit.is_none());

    let summary = session.last_load().unwrap();
    assert_eq!(summary.pages, 25);
    assert_eq!(summary.records, 50);
    assert!(summary.truncated.is_some());
}

#[derive(Default)]
struct Log {
    lines: Vec<String>,
    finished: usize,
}

impl Progress for Log {
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn finish(&mut self) {
        self.finished += 1;
    }
}

#[test]
fn load_reports_progress_and_finishes_once() {
    let api = two_page_api();
    let mut log = Log::default();

    let report = load_members(&api, &source(), &mut log).unwrap();

    assert_eq!(report.members.len(), 3);
    assert_eq!(log.finished, 1);
    assert!(log.lines.iter().any(|l| l.contains("成功加载 3 条")));
}

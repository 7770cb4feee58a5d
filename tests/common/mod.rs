// tests/common/mod.rs
//
// In-memory stand-in for the Feishu API plus record builders.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use serde_json::{Value, json};

use member_lookup::bitable::{
    AccessToken, ApiError, AuthResponse, BitableApi, Credential, PageRequest, RawRecord,
    SearchResponse, TableRef,
};
use member_lookup::config::options::FetchOptions;
use member_lookup::members::Normalizer;
use member_lookup::session::Source;

type PageFn = Box<dyn Fn(usize) -> Result<SearchResponse, ApiError>>;

pub struct FakeApi {
    auth: AuthResponse,
    page: PageFn,
    pub auth_calls: Cell<usize>,
    pub search_calls: Cell<usize>,
    /// Cursor sent with each search request, in order.
    pub cursors: RefCell<Vec<Option<String>>>,
    pub page_sizes: RefCell<Vec<u32>>,
}

impl FakeApi {
    /// `page(i)` answers the i-th (0-based) search request.
    pub fn new(page: impl Fn(usize) -> Result<SearchResponse, ApiError> + 'static) -> Self {
        Self {
            auth: ok_auth(),
            page: Box::new(page),
            auth_calls: Cell::new(0),
            search_calls: Cell::new(0),
            cursors: RefCell::new(Vec::new()),
            page_sizes: RefCell::new(Vec::new()),
        }
    }

    /// Serve `pages` in order; has_more is true on all but the last.
    pub fn with_pages(pages: Vec<Vec<RawRecord>>) -> Self {
        let last = pages.len().saturating_sub(1);
        Self::new(move |i| {
            let items = pages.get(i).cloned().unwrap_or_default();
            let more = i < last;
            Ok(SearchResponse::page(items, more, more.then(|| format!("cursor-{}", i + 1))))
        })
    }

    /// Every page is full and claims there is more.
    pub fn endless(page_size: usize) -> Self {
        Self::new(move |i| {
            let items = (0..page_size).map(|j| plain_record(&format!("rec{i}-{j}"))).collect();
            Ok(SearchResponse::page(items, true, Some(format!("cursor-{}", i + 1))))
        })
    }

    pub fn with_auth(mut self, auth: AuthResponse) -> Self {
        self.auth = auth;
        self
    }
}

impl BitableApi for FakeApi {
    fn request_token(&self, _credential: &Credential) -> Result<AuthResponse, ApiError> {
        self.auth_calls.set(self.auth_calls.get() + 1);
        Ok(self.auth.clone())
    }

    fn search_records(
        &self,
        token: &AccessToken,
        _table: &TableRef,
        page: PageRequest<'_>,
    ) -> Result<SearchResponse, ApiError> {
        assert_eq!(token.as_str(), "t-123", "search must use the issued token");
        let i = self.search_calls.get();
        self.search_calls.set(i + 1);
        self.cursors.borrow_mut().push(page.page_token.map(str::to_string));
        self.page_sizes.borrow_mut().push(page.page_size);
        (self.page)(i)
    }
}

pub fn ok_auth() -> AuthResponse {
    AuthResponse {
        code: 0,
        msg: Some("ok".into()),
        tenant_access_token: Some("t-123".into()),
        expire: Some(7200),
    }
}

pub fn token() -> AccessToken {
    AccessToken::new("t-123", Some(7200))
}

pub fn table() -> TableRef {
    TableRef::new("app-token", "tbl-test")
}

pub fn opts() -> FetchOptions {
    FetchOptions::default().unthrottled()
}

pub fn source() -> Source {
    Source {
        credential: Credential::new("cli_test", "secret"),
        table: table(),
        fetch: opts(),
        normalizer: Normalizer::default(),
    }
}

/// Build a record from a JSON object literal; keeps key order.
pub fn record(id: &str, fields: Value) -> RawRecord {
    let Value::Object(map) = fields else { panic!("fields must be a JSON object") };
    RawRecord::new(id, map)
}

pub fn plain_record(id: &str) -> RawRecord {
    record(id, json!({}))
}

/// A member row the way the table sends it: rich-text name, plain student ID.
pub fn member(id: &str, name: &str, student_id: Value, activities: &[&str]) -> RawRecord {
    let mut fields = json!({
        "姓名": [{ "type": "text", "text": name }],
        "学号": student_id,
    });
    if let Value::Object(map) = &mut fields {
        for a in activities {
            map.insert((*a).to_string(), json!("参加"));
        }
    }
    record(id, fields)
}

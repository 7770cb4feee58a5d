// src/bitable/mod.rs
//! Access to the Feishu Bitable record source.
//!
//! `BitableApi` is the seam between the pipeline and the network: it returns
//! decoded responses and leaves judging their `code` to the callers
//! (`token::get_token`, `fetch::fetch_all`). `FeishuClient` is the HTTP
//! implementation; tests plug in fakes.

mod client;
pub mod token;
pub mod types;

use thiserror::Error;

pub use client::FeishuClient;
pub use token::get_token;
pub use types::{
    AccessToken, AuthResponse, Credential, RawRecord, SearchData, SearchResponse, TableRef,
};

/// Transport/decoding failure below the API's own status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Unavailable(String),
}

/// One record-search request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest<'a> {
    /// Cursor from the previous page; `None` for the first.
    pub page_token: Option<&'a str>,
    pub page_size: u32,
}

pub trait BitableApi {
    /// Exchange the credential for a tenant token.
    fn request_token(&self, credential: &Credential) -> Result<AuthResponse, ApiError>;

    /// Fetch one page of records from `table`.
    fn search_records(
        &self,
        token: &AccessToken,
        table: &TableRef,
        page: PageRequest<'_>,
    ) -> Result<SearchResponse, ApiError>;
}

impl<A: BitableApi + ?Sized> BitableApi for &A {
    fn request_token(&self, credential: &Credential) -> Result<AuthResponse, ApiError> {
        (**self).request_token(credential)
    }

    fn search_records(
        &self,
        token: &AccessToken,
        table: &TableRef,
        page: PageRequest<'_>,
    ) -> Result<SearchResponse, ApiError> {
        (**self).search_records(token, table, page)
    }
}

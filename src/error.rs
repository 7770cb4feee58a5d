// src/error.rs
//
// Error taxonomy. Only `AuthError` and `FetchError` abort a load;
// `TruncationWarning` rides along with a successful fetch.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::bitable::ApiError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("auth rejected (code {code}): {msg}")]
    Rejected { code: i64, msg: String },

    #[error("auth response had code 0 but no tenant_access_token")]
    MissingToken,

    #[error("auth request failed: {0}")]
    Transport(#[from] ApiError),
}

/// A page of the record search failed. Nothing fetched so far is kept.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("fetching records failed (page {page}): {message}")]
pub struct FetchError {
    /// 1-based number of the page that failed.
    pub page: usize,
    pub message: String,
}

/// The page cap was reached while the source still reported more data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncationWarning {
    pub pages: usize,
    pub records: usize,
}

impl fmt::Display for TruncationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "已达到最大页数限制（{}页），停止获取更多数据（已获取 {} 条记录）",
            self.pages, self.records
        )
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("both name and student ID are required")]
    MissingInput,

    #[error(transparent)]
    Load(#[from] LoadError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing setting `{0}` (config file or environment)")]
    Missing(&'static str),

    #[error("utc_offset_hours out of range: {0}")]
    Offset(i32),

    #[error("fetch.page_size must be 1..={max}, got {got}")]
    PageSize { got: u32, max: u32 },

    #[error("fetch.max_pages must be at least 1")]
    NoPages,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("export failed: {0}")]
    Io(#[from] io::Error),
}

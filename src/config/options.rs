// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchOptions {
    pub page_size: u32,
    /// Hard stop for runaway pagination; hitting it truncates, it does not fail.
    pub max_pages: usize,
    pub pause_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_pages: MAX_PAGES,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl FetchOptions {
    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    /// Same limits, no pause between requests.
    pub fn unthrottled(mut self) -> Self {
        self.pause_ms = 0;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Fixed offset used to turn join timestamps into calendar dates.
    pub utc_offset_hours: i32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self { utc_offset_hours: DEFAULT_UTC_OFFSET_HOURS }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    out_dir: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { out_dir: PathBuf::from(DEFAULT_OUT_DIR) }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Parse GUI/CLI text into the output directory. Empty text keeps the default.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        self.out_dir = if s.is_empty() {
            PathBuf::from(DEFAULT_OUT_DIR)
        } else {
            PathBuf::from(s)
        };
    }
}

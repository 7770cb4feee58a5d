// src/log.rs
//
// File logging for both binaries. Everything goes through `tracing`;
// the short macros below keep call sites terse.

use std::sync::OnceLock;

use tracing::Level;
use tracing_appender::rolling;

use crate::config::consts::{LOG_FILE, STORE_DIR};

#[doc(hidden)]
pub use tracing;

static INIT: OnceLock<()> = OnceLock::new();

/// Install the global subscriber writing to `.store/debug.log`.
/// Safe to call more than once; only the first call does anything.
pub fn init() {
    INIT.get_or_init(|| {
        if std::fs::create_dir_all(STORE_DIR).is_err() {
            return;
        }
        let appender = rolling::never(STORE_DIR, LOG_FILE);
        let _ = tracing_subscriber::fmt()
            .with_writer(appender)
            .with_ansi(false)
            .with_target(false)
            .with_max_level(Level::DEBUG)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}

// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod bitable;
pub mod fetch;
pub mod members;
pub mod lookup;
pub mod session;

pub mod csv;
pub mod file;
pub mod progress;

pub mod gui;
#[cfg(feature = "cli")]
pub mod cli;

pub use error::{AuthError, ExportError, FetchError, LoadError, LookupError, TruncationWarning};
pub use session::{Session, Source};

// src/config/settings.rs
//
// Startup configuration: TOML file first, then environment overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use super::options::{ExportOptions, FetchOptions, NormalizeOptions};
use crate::bitable::{Credential, TableRef};
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub credential: Credential,
    pub table: TableRef,
    pub fetch: FetchOptions,
    pub normalize: NormalizeOptions,
    pub export: ExportOptions,
}

/* ---------------- On-disk shape (everything optional) ---------------- */

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    credential: CredentialFile,
    table: TableFile,
    fetch: FetchOptions,
    normalize: NormalizeOptions,
    export: ExportOptions,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CredentialFile {
    app_id: Option<String>,
    app_secret: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TableFile {
    app_token: Option<String>,
    table_id: Option<String>,
}

impl Settings {
    /// Load from `path` (or `member_lookup.toml` when `None`) plus the process environment.
    ///
    /// A missing default file is fine as long as the environment fills the gaps;
    /// a missing explicit `path` is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        let text = match fs::read_to_string(&path) {
            Ok(t) => Some(t),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                logd!("Config: {} not found, using environment only", path.display());
                None
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let settings = Self::resolve(text.as_deref(), |key| std::env::var(key).ok())?;
        logf!(
            "Config: app_id={} table={} page_size={} max_pages={}",
            settings.credential.app_id,
            settings.table.table_id,
            settings.fetch.page_size,
            settings.fetch.max_pages
        );
        Ok(settings)
    }

    /// Parse TOML only, no environment.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::resolve(Some(text), |_| None)
    }

    /// Merge optional TOML text with an environment lookup (env wins).
    pub fn resolve<F>(text: Option<&str>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file: SettingsFile = match text {
            Some(t) => toml::from_str(t)?,
            None => SettingsFile::default(),
        };

        let pick = |env_key: &str, from_file: Option<String>, name: &'static str| {
            env(env_key)
                .filter(|v| !v.is_empty())
                .or(from_file.filter(|v| !v.is_empty()))
                .ok_or(ConfigError::Missing(name))
        };

        let credential = Credential::new(
            pick(ENV_APP_ID, file.credential.app_id, "credential.app_id")?,
            pick(ENV_APP_SECRET, file.credential.app_secret, "credential.app_secret")?,
        );
        let table = TableRef::new(
            pick(ENV_APP_TOKEN, file.table.app_token, "table.app_token")?,
            pick(ENV_TABLE_ID, file.table.table_id, "table.table_id")?,
        );

        let hours = file.normalize.utc_offset_hours;
        if !(-23..=23).contains(&hours) {
            return Err(ConfigError::Offset(hours));
        }
        // The search endpoint caps page_size at 500.
        if !(1..=PAGE_SIZE).contains(&file.fetch.page_size) {
            return Err(ConfigError::PageSize { got: file.fetch.page_size, max: PAGE_SIZE });
        }
        if file.fetch.max_pages == 0 {
            return Err(ConfigError::NoPages);
        }

        Ok(Self {
            credential,
            table,
            fetch: file.fetch,
            normalize: file.normalize,
            export: file.export,
        })
    }
}

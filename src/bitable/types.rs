// src/bitable/types.rs
//
// Wire shapes for the Feishu auth and Bitable record-search endpoints,
// plus the credential/table identifiers that address them.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Application credential pair. Read-only for the life of the process.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub app_id: String,
    pub app_secret: String,
}

impl Credential {
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self { app_id: app_id.into(), app_secret: app_secret.into() }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("app_id", &self.app_id)
            .field("app_secret", &"<redacted>")
            .finish()
    }
}

/// Which Bitable table to read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TableRef {
    pub app_token: String,
    pub table_id: String,
}

impl TableRef {
    pub fn new(app_token: impl Into<String>, table_id: impl Into<String>) -> Self {
        Self { app_token: app_token.into(), table_id: table_id.into() }
    }
}

/// Tenant bearer token. Never refreshed within a session.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    /// Lifetime the server advertised, in seconds. Informational only.
    pub expires_in: Option<u64>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, expires_in: Option<u64>) -> Self {
        Self { value: value.into(), expires_in }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub tenant_access_token: Option<String>,
    #[serde(default)]
    pub expire: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub data: Option<SearchData>,
}

impl SearchResponse {
    /// A successful page.
    pub fn page(items: Vec<RawRecord>, has_more: bool, page_token: Option<String>) -> Self {
        Self {
            code: 0,
            msg: Some(s!("success")),
            data: Some(SearchData { items, has_more, page_token, total: None }),
        }
    }

    /// A rejected request.
    pub fn failure(code: i64, msg: impl Into<String>) -> Self {
        Self { code, msg: Some(msg.into()), data: None }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchData {
    // Feishu sends `"items": null` on an empty table.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<RawRecord>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub page_token: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// One table row exactly as the source sent it. Field order is the source's.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub record_id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

impl RawRecord {
    pub fn new(record_id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self { record_id: record_id.into(), fields }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

fn null_as_empty<'de, D>(de: D) -> Result<Vec<RawRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<RawRecord>>::deserialize(de)?.unwrap_or_default())
}

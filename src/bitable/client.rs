// src/bitable/client.rs

use reqwest::blocking::Client;
use serde_json::json;

use super::{
    AccessToken, ApiError, AuthResponse, BitableApi, Credential, PageRequest, SearchResponse,
    TableRef,
};
use crate::config::consts::{API_BASE, AUTH_URL};
use crate::core::net;

/// HTTP implementation of [`BitableApi`] against open.feishu.cn.
pub struct FeishuClient {
    http: Client,
    auth_url: String,
    api_base: String,
}

impl FeishuClient {
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self {
            http: net::build_client()?,
            auth_url: s!(AUTH_URL),
            api_base: s!(API_BASE),
        })
    }

    /// Point at another deployment (e.g. the Lark international domain).
    pub fn with_endpoints(auth_url: impl Into<String>, api_base: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            http: net::build_client()?,
            auth_url: auth_url.into(),
            api_base: api_base.into(),
        })
    }

    fn search_url(&self, table: &TableRef) -> String {
        format!(
            "{}/bitable/v1/apps/{}/tables/{}/records/search",
            self.api_base.trim_end_matches('/'),
            table.app_token,
            table.table_id
        )
    }
}

impl BitableApi for FeishuClient {
    fn request_token(&self, credential: &Credential) -> Result<AuthResponse, ApiError> {
        net::post_json(&self.http, &self.auth_url, None, &[], credential)
    }

    fn search_records(
        &self,
        token: &AccessToken,
        table: &TableRef,
        page: PageRequest<'_>,
    ) -> Result<SearchResponse, ApiError> {
        let page_size = page.page_size.to_string();
        let mut query: Vec<(&str, &str)> = vec![("page_size", page_size.as_str())];
        if let Some(cursor) = page.page_token.filter(|t| !t.is_empty()) {
            query.push(("page_token", cursor));
        }
        query.push(("user_id_type", "user_id"));

        net::post_json(
            &self.http,
            &self.search_url(table),
            Some(token.as_str()),
            &query,
            &json!({}),
        )
    }
}

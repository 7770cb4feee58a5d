// src/core/net.rs
//
// Blocking JSON-over-HTTPS helpers. One request in flight at a time.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Serialize, de::DeserializeOwned};

use crate::bitable::ApiError;
use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub fn build_client() -> Result<Client, ApiError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// POST `body` as JSON and decode the JSON reply.
///
/// The HTTP status is not treated as failure on its own: Feishu reports
/// errors in the body's `code`, often alongside a 4xx status, and the
/// caller needs that body.
pub fn post_json<B, T>(
    client: &Client,
    url: &str,
    bearer: Option<&str>,
    query: &[(&str, &str)],
    body: &B,
) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let mut req = client.post(url).query(query).json(body);
    if let Some(token) = bearer {
        req = req.bearer_auth(token);
    }

    let resp = req.send()?;
    let status = resp.status();
    let text = resp.text()?;
    logd!("HTTP: POST {} -> {} ({} bytes)", url, status, text.len());

    serde_json::from_str(&text).map_err(|e| {
        if status.is_success() {
            ApiError::Decode(e)
        } else {
            ApiError::Unavailable(format!("HTTP {status}: {}", snippet(&text)))
        }
    })
}

fn snippet(text: &str) -> String {
    text.chars().take(200).collect()
}

// src/bitable/token.rs

use super::{AccessToken, BitableApi, Credential};
use crate::error::AuthError;

/// Obtain a tenant access token. No retry; the caller decides what to do.
pub fn get_token<A: BitableApi + ?Sized>(
    api: &A,
    credential: &Credential,
) -> Result<AccessToken, AuthError> {
    logd!("Auth: requesting tenant token for app_id={}", credential.app_id);

    let resp = api.request_token(credential)?;
    if resp.code != 0 {
        let msg = resp.msg.unwrap_or_else(|| s!("unknown error"));
        loge!("Auth: rejected code={} msg={}", resp.code, msg);
        return Err(AuthError::Rejected { code: resp.code, msg });
    }

    match resp.tenant_access_token {
        Some(value) if !value.is_empty() => {
            logf!("Auth: OK (expires_in={:?}s)", resp.expire);
            Ok(AccessToken::new(value, resp.expire))
        }
        _ => Err(AuthError::MissingToken),
    }
}

//! HTTP header helpers for Google API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

/// Headers sent on every upstream request.
pub fn json_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// JSON headers plus `Authorization: Bearer <token>`.
pub fn bearer_headers(token: &str) -> Result<HeaderMap> {
    let mut h = json_headers();
    h.insert(AUTHORIZATION, HeaderValue::from_str(&format!("Bearer {}", token))?);
    Ok(h)
}

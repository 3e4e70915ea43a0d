//! HTTP utilities for PUBG API communication

use std::time::Duration;

use crate::Result;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client,
};

/// Media type the PUBG API serves its JSON:API documents under.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

const USER_AGENT: &str = concat!("pubg-stats/", env!("CARGO_PKG_VERSION"));

/// Build the headers every upstream call carries: JSON:API accept and the bearer credential.
pub fn auth_header_map(api_key: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE));
    let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.trim()))?;
    bearer.set_sensitive(true);
    h.insert(AUTHORIZATION, bearer);
    Ok(h)
}

/// Shared reqwest client with the crate user agent and a request timeout.
pub fn build_http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

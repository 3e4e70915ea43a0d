//! Upstream client configuration.

use std::time::Duration;

use crate::core::rate_limit::DEFAULT_MAX_CALLS_PER_MINUTE;

/// Public PUBG API host.
pub const PUBG_BASE_URL: &str = "https://api.pubg.com";

/// Platform shard used when none is configured.
pub const DEFAULT_SHARD: &str = "steam";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything needed to talk to the upstream stats API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub shard: String,
    pub max_calls_per_minute: usize,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config with the public defaults and the given credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: PUBG_BASE_URL.to_string(),
            shard: DEFAULT_SHARD.to_string(),
            max_calls_per_minute: DEFAULT_MAX_CALLS_PER_MINUTE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_shard(mut self, shard: impl Into<String>) -> Self {
        self.shard = shard.into();
        self
    }

    pub fn with_max_calls_per_minute(mut self, max_calls: usize) -> Self {
        self.max_calls_per_minute = max_calls;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `{base_url}/shards/{shard}`
    pub fn shard_url(&self) -> String {
        format!("{}/shards/{}", self.base_url.trim_end_matches('/'), self.shard)
    }
}

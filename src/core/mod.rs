//! Core utilities shared by the upstream client and commands
//!
//! - `config`: upstream client configuration
//! - `http`: header and client construction
//! - `rate_limit`: sliding-window limiter every upstream call goes through

pub mod config;
pub mod http;
pub mod rate_limit;

// Re-export commonly used items for convenience
pub use config::{ClientConfig, DEFAULT_SHARD, PUBG_BASE_URL};
pub use http::{auth_header_map, build_http_client, JSON_API_MEDIA_TYPE};
pub use rate_limit::{RateLimiter, DEFAULT_MAX_CALLS_PER_MINUTE};

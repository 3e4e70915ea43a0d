//! PUBG API access, payload types, season resolution and stat aggregation.

pub mod compute;
pub mod http;
pub mod season;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use compute::summarize;
pub use http::{PubgClient, SeasonStatsLookup, UpstreamApi};
pub use season::SeasonResolver;

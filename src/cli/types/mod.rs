//! Type-safe wrappers for PUBG identifiers and request input.

pub mod ids;
pub mod names;

pub use ids::{PlayerId, SeasonId, OFFICIAL_SEASON_PREFIX};
pub use names::{PlayerNames, MAX_PLAYERS};

//! Validated player name batches.

use std::fmt;
use std::ops::Deref;

use crate::error::{Result, StatsError};

/// Largest number of players the upstream batch lookup accepts per request.
pub const MAX_PLAYERS: usize = 6;

/// An ordered, deduplicated batch of player names.
///
/// Names are trimmed, blanks are dropped and repeats keep their first
/// position. An empty batch is valid here; the request surface treats it
/// as "nothing to do" while the aggregation engine rejects it.
///
/// ```rust
/// use pubg_stats::PlayerNames;
///
/// let names = PlayerNames::parse(["alice", " bob ", "alice", ""]).unwrap();
/// assert_eq!(names.as_slice(), ["alice", "bob"]);
/// assert_eq!(names.to_filter_value(), "alice,bob");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerNames(Vec<String>);

impl PlayerNames {
    pub fn parse<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for raw in names {
            // Accept "a,b" as well as separate entries
            for part in raw.as_ref().split(',') {
                let name = part.trim();
                if name.is_empty() || out.iter().any(|n| n == name) {
                    continue;
                }
                out.push(name.to_string());
            }
        }

        if out.len() > MAX_PLAYERS {
            return Err(StatsError::invalid_input(format!(
                "at most {MAX_PLAYERS} player names are allowed, got {}",
                out.len()
            )));
        }

        Ok(Self(out))
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined form used by the upstream `filter[playerNames]` parameter.
    pub fn to_filter_value(&self) -> String {
        self.0.join(",")
    }

    /// Position of `name` in the request. Matching is exact, like the upstream lookup.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }
}

impl Deref for PlayerNames {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for PlayerNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

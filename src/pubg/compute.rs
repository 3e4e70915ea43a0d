use crate::pubg::types::{GameModeStats, ModeStats, SummaryStats};

#[cfg(test)]
mod tests;

/// Modes shown in the breakdown view, in display order.
pub const PREFERRED_MODE_ORDER: [&str; 6] =
    ["squad-fpp", "squad", "duo-fpp", "duo", "solo-fpp", "solo"];

impl ModeStats {
    /// Field-wise combination: counters add (saturating at `u64::MAX`),
    /// `max_kill_streaks` and `longest_kill` keep the larger value.
    pub fn combine(&self, other: &ModeStats) -> ModeStats {
        ModeStats {
            kills: self.kills.saturating_add(other.kills),
            deaths: self.deaths.saturating_add(other.deaths),
            wins: self.wins.saturating_add(other.wins),
            losses: self.losses.saturating_add(other.losses),
            damage_dealt: self.damage_dealt + other.damage_dealt,
            rounds_played: self.rounds_played.saturating_add(other.rounds_played),
            assists: self.assists.saturating_add(other.assists),
            max_kill_streaks: self.max_kill_streaks.max(other.max_kill_streaks),
            longest_kill: self.longest_kill.max(other.longest_kill),
        }
    }
}

/// Kills per death; with no deaths the raw kill count is the ratio.
pub fn kill_death_ratio(kills: u64, deaths: u64) -> f64 {
    if deaths > 0 {
        kills as f64 / deaths as f64
    } else {
        kills as f64
    }
}

/// Average damage per round, zero when no rounds were played.
pub fn average_damage_per_round(damage_dealt: f64, rounds_played: u64) -> f64 {
    if rounds_played > 0 {
        damage_dealt / rounds_played as f64
    } else {
        0.0
    }
}

/// Kills per round, zero when no rounds were played.
pub fn kills_per_round(kills: u64, rounds_played: u64) -> f64 {
    if rounds_played > 0 {
        kills as f64 / rounds_played as f64
    } else {
        0.0
    }
}

impl From<ModeStats> for SummaryStats {
    fn from(totals: ModeStats) -> Self {
        SummaryStats {
            kills: totals.kills,
            deaths: totals.deaths,
            wins: totals.wins,
            losses: totals.losses,
            damage_dealt: totals.damage_dealt,
            rounds_played: totals.rounds_played,
            assists: totals.assists,
            max_kill_streaks: totals.max_kill_streaks,
            longest_kill: totals.longest_kill,
            kd: kill_death_ratio(totals.kills, totals.deaths),
            adr: average_damage_per_round(totals.damage_dealt, totals.rounds_played),
            kpr: kills_per_round(totals.kills, totals.rounds_played),
        }
    }
}

/// Totals across every mode present, whatever its name.
pub fn mode_totals(stats: &GameModeStats) -> ModeStats {
    stats
        .values()
        .fold(ModeStats::default(), |acc, mode| acc.combine(mode))
}

/// Roll a player's per-mode statistics into one summary.
pub fn summarize(stats: &GameModeStats) -> SummaryStats {
    SummaryStats::from(mode_totals(stats))
}

/// Played modes in [`PREFERRED_MODE_ORDER`]; other keys and empty modes are left out.
pub fn ordered_modes(stats: &GameModeStats) -> Vec<(&'static str, &ModeStats)> {
    PREFERRED_MODE_ORDER
        .iter()
        .filter_map(|&mode| {
            stats
                .get(mode)
                .filter(|s| s.rounds_played > 0)
                .map(|s| (mode, s))
        })
        .collect()
}

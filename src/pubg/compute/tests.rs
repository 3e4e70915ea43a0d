//! Unit tests for stat aggregation

use super::*;

fn mode(kills: u64, deaths: u64, damage: f64, rounds: u64) -> ModeStats {
    ModeStats {
        kills,
        deaths,
        damage_dealt: damage,
        rounds_played: rounds,
        ..Default::default()
    }
}

fn stats_of(modes: &[(&str, ModeStats)]) -> GameModeStats {
    modes
        .iter()
        .map(|(name, s)| (name.to_string(), *s))
        .collect()
}

#[cfg(test)]
mod aggregation_tests {
    use super::*;

    #[test]
    fn test_summarize_empty_is_all_zero() {
        let summary = summarize(&GameModeStats::new());

        assert_eq!(summary, SummaryStats::default());
        assert_eq!(summary.kd, 0.0);
        assert_eq!(summary.adr, 0.0);
        assert_eq!(summary.kpr, 0.0);
    }

    #[test]
    fn test_summarize_single_squad_mode() {
        let stats = stats_of(&[(
            "squad",
            ModeStats {
                wins: 1,
                ..mode(10, 2, 500.0, 5)
            },
        )]);

        let summary = summarize(&stats);
        assert_eq!(summary.kills, 10);
        assert_eq!(summary.deaths, 2);
        assert_eq!(summary.wins, 1);
        assert_eq!(summary.rounds_played, 5);
        assert_eq!(summary.kd, 5.0);
        assert_eq!(summary.adr, 100.0);
        assert_eq!(summary.kpr, 2.0);
    }

    #[test]
    fn test_kd_falls_back_to_kills_without_deaths() {
        let summary = summarize(&stats_of(&[("solo", mode(7, 0, 0.0, 0))]));

        assert_eq!(summary.kd, 7.0);
        // No rounds means no per-round ratios
        assert_eq!(summary.adr, 0.0);
        assert_eq!(summary.kpr, 0.0);
    }

    #[test]
    fn test_sums_across_modes_including_unknown_keys() {
        let stats = stats_of(&[
            ("squad-fpp", mode(4, 2, 300.0, 3)),
            ("duo", mode(2, 1, 150.0, 2)),
            ("war-mode", mode(6, 3, 50.0, 5)),
        ]);

        let summary = summarize(&stats);
        assert_eq!(summary.kills, 12);
        assert_eq!(summary.deaths, 6);
        assert_eq!(summary.damage_dealt, 500.0);
        assert_eq!(summary.rounds_played, 10);
        assert_eq!(summary.kd, 2.0);
        assert_eq!(summary.adr, 50.0);
        assert_eq!(summary.kpr, 1.2);
    }

    #[test]
    fn test_max_fields_take_maximum_not_sum() {
        let stats = stats_of(&[
            (
                "solo",
                ModeStats {
                    max_kill_streaks: 3,
                    longest_kill: 120.5,
                    ..Default::default()
                },
            ),
            (
                "squad",
                ModeStats {
                    max_kill_streaks: 2,
                    longest_kill: 340.25,
                    ..Default::default()
                },
            ),
        ]);

        let summary = summarize(&stats);
        assert_eq!(summary.max_kill_streaks, 3);
        assert_eq!(summary.longest_kill, 340.25);
    }

    #[test]
    fn test_counters_saturate_instead_of_overflowing() {
        let stats = stats_of(&[
            ("squad", mode(u64::MAX, u64::MAX - 1, 10.0, u64::MAX)),
            ("solo", mode(1, 5, 10.0, 2)),
        ]);

        let summary = summarize(&stats);
        assert_eq!(summary.kills, u64::MAX);
        assert_eq!(summary.deaths, u64::MAX);
        assert_eq!(summary.rounds_played, u64::MAX);
        assert_eq!(summary.kd, 1.0);
        assert!(summary.adr.is_finite());
        assert!(summary.kpr.is_finite());
    }

    #[test]
    fn test_ratios_match_branch_policy() {
        let cases = [
            (0u64, 0u64, 0.0f64, 0u64),
            (5, 0, 0.0, 0),
            (9, 3, 900.0, 3),
            (1, 4, 10.0, 7),
            (0, 5, 0.0, 5),
        ];

        for (kills, deaths, damage, rounds) in cases {
            let s = summarize(&stats_of(&[("squad", mode(kills, deaths, damage, rounds))]));

            let kd = if deaths > 0 {
                kills as f64 / deaths as f64
            } else {
                kills as f64
            };
            let adr = if rounds > 0 { damage / rounds as f64 } else { 0.0 };
            let kpr = if rounds > 0 {
                kills as f64 / rounds as f64
            } else {
                0.0
            };

            assert_eq!(s.kd, kd, "kd for {kills}/{deaths}");
            assert_eq!(s.adr, adr, "adr for {damage}/{rounds}");
            assert_eq!(s.kpr, kpr, "kpr for {kills}/{rounds}");
        }
    }

    #[test]
    fn test_combination_is_order_independent() {
        let a = ModeStats {
            wins: 2,
            losses: 5,
            assists: 1,
            max_kill_streaks: 4,
            longest_kill: 99.0,
            ..mode(8, 5, 812.5, 7)
        };
        let b = ModeStats {
            wins: 1,
            losses: 3,
            assists: 6,
            max_kill_streaks: 2,
            longest_kill: 310.0,
            ..mode(3, 4, 410.0, 4)
        };

        assert_eq!(a.combine(&b), b.combine(&a));

        // Summarizing {A, B} equals A with B's contributions added
        let both = mode_totals(&stats_of(&[("solo", a), ("squad", b)]));
        let stepwise = mode_totals(&stats_of(&[("solo", a)])).combine(&b);
        assert_eq!(both, stepwise);
        assert_eq!(both.kills, 11);
        assert_eq!(both.max_kill_streaks, 4);
        assert_eq!(both.longest_kill, 310.0);
    }

    #[test]
    fn test_summarize_is_deterministic() {
        let stats = stats_of(&[
            ("squad-fpp", mode(13, 7, 1777.7, 9)),
            ("solo", mode(1, 3, 88.8, 3)),
        ]);

        let first = summarize(&stats);
        let second = summarize(&stats);
        assert_eq!(first.kd.to_bits(), second.kd.to_bits());
        assert_eq!(first.adr.to_bits(), second.adr.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_ordered_modes_uses_display_order() {
        let stats = stats_of(&[
            ("solo", mode(1, 1, 10.0, 1)),
            ("squad-fpp", mode(2, 1, 20.0, 2)),
            ("duo", mode(0, 0, 0.0, 0)),
            ("tdm", mode(5, 5, 50.0, 5)),
        ]);

        let names: Vec<&str> = ordered_modes(&stats).into_iter().map(|(m, _)| m).collect();
        assert_eq!(names, vec!["squad-fpp", "solo"]);
    }

    #[test]
    fn test_ratio_helpers() {
        assert_eq!(kill_death_ratio(3, 0), 3.0);
        assert_eq!(kill_death_ratio(3, 2), 1.5);
        assert_eq!(average_damage_per_round(250.0, 0), 0.0);
        assert_eq!(average_damage_per_round(250.0, 2), 125.0);
        assert_eq!(kills_per_round(4, 0), 0.0);
        assert_eq!(kills_per_round(4, 8), 0.5);
    }
}

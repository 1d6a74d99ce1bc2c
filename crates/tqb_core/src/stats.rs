//! Per-team aggregation and the TQB / ER-TQB balance metric.

use crate::innings::innings_to_outs;
use crate::types::{per_inning, GameRecord, Team, TeamStats};

/// Runs scored per inning at bat minus runs allowed per inning on defense.
///
/// Zero when either side has no recorded outs: a team without completed
/// innings cannot be ranked by this metric.
pub fn balance_metric(scored: u32, outs_batted: u32, allowed: u32, outs_fielded: u32) -> f64 {
    if outs_batted == 0 || outs_fielded == 0 {
        return 0.0;
    }
    per_inning(scored, outs_batted) - per_inning(allowed, outs_fielded)
}

/// Fold every game `team` took part in into its season totals.
///
/// Totals saturate at `u32::MAX` rather than overflow.
pub fn compute_stats(team: &Team, games: &[GameRecord]) -> TeamStats {
    let mut stats = TeamStats {
        id: team.id.clone(),
        name: team.name.clone(),
        ..Default::default()
    };

    for side in games.iter().filter_map(|game| game.side(&team.id)) {
        if side.runs > side.opponent_runs {
            stats.wins += 1;
        } else if side.runs < side.opponent_runs {
            stats.losses += 1;
        }

        stats.runs_scored = stats.runs_scored.saturating_add(side.runs);
        stats.runs_allowed = stats.runs_allowed.saturating_add(side.opponent_runs);
        stats.earned_runs_scored = stats.earned_runs_scored.saturating_add(side.earned_runs);
        stats.earned_runs_allowed = stats
            .earned_runs_allowed
            .saturating_add(side.opponent_earned_runs);
        stats.outs_batted = stats.outs_batted.saturating_add(innings_to_outs(side.innings_batting));
        stats.outs_fielded = stats.outs_fielded.saturating_add(innings_to_outs(side.innings_defense));
    }

    stats.balance_metric = balance_metric(
        stats.runs_scored,
        stats.outs_batted,
        stats.runs_allowed,
        stats.outs_fielded,
    );
    stats.earned_balance_metric = balance_metric(
        stats.earned_runs_scored,
        stats.outs_batted,
        stats.earned_runs_allowed,
        stats.outs_fielded,
    );

    stats
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;

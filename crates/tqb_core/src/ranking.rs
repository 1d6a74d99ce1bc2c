//! Standings: win groups, tie-breaks, and the residual tie check.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::stats::compute_stats;
use crate::tiebreak::resolve_group;
use crate::types::{BalanceVariant, GameRecord, RankingResult, Team, TeamStats, TieBreakMethod};

/// Metric values closer than this are treated as equal.
pub const TIE_TOLERANCE: f64 = 1e-4;

/// Rank `teams` from `games`, breaking win ties with the chosen metric.
///
/// Teams are grouped by wins (most first). Each group is ordered by
/// head-to-head or, failing that, by the balance metric. Afterwards every
/// win group is checked for metric values still within [`TIE_TOLERANCE`],
/// however it was ordered: with TQB that asks for an ER-TQB pass, with
/// ER-TQB it leaves the ranking unresolved.
pub fn rank(teams: &[Team], games: &[GameRecord], variant: BalanceVariant) -> RankingResult {
    let mut groups: BTreeMap<u32, Vec<TeamStats>> = BTreeMap::new();
    for team in teams {
        let stats = compute_stats(team, games);
        groups.entry(stats.wins).or_default().push(stats);
    }

    let mut standings = Vec::with_capacity(teams.len());
    let mut method = TieBreakMethod::WinLoss;
    let mut residual_ties = false;

    for (wins, group) in groups.iter().rev() {
        let resolution = resolve_group(group, games, variant);
        method = method.max(resolution.method);

        if has_metric_tie(&resolution.teams, variant) {
            debug!(wins, metric = variant.label(), "balance metric left a tie");
            residual_ties = true;
        }
        standings.extend(resolution.teams);
    }

    let (needs_earned_variant, unresolved_ties) = match (residual_ties, variant) {
        (false, _) => (false, false),
        (true, BalanceVariant::Total) => (true, false),
        (true, BalanceVariant::Earned) => (false, true),
    };
    if unresolved_ties {
        method = TieBreakMethod::Unresolved;
    }

    info!(
        teams = standings.len(),
        method = ?method,
        needs_earned_variant,
        unresolved_ties,
        "ranking complete"
    );

    RankingResult {
        standings,
        tie_break_method: method,
        needs_earned_variant,
        unresolved_ties,
        variant,
    }
}

/// Rank with TQB and, when that leaves ties and every game has earned runs,
/// rank again with ER-TQB.
///
/// Without complete earned runs the TQB result is returned with
/// `needs_earned_variant` still set.
pub fn rank_with_escalation(teams: &[Team], games: &[GameRecord]) -> RankingResult {
    let first = rank(teams, games, BalanceVariant::Total);
    if !first.needs_earned_variant {
        return first;
    }
    if !games.iter().all(GameRecord::has_earned_runs) {
        info!("TQB left ties but earned runs are incomplete");
        return first;
    }
    rank(teams, games, BalanceVariant::Earned)
}

/// Any two members of a win group whose metrics are within tolerance.
///
/// Head-to-head order need not follow the metric, so the values are sorted
/// before neighbours are compared.
fn has_metric_tie(group: &[TeamStats], variant: BalanceVariant) -> bool {
    let mut metrics: Vec<f64> = group.iter().map(|t| t.metric(variant)).collect();
    metrics.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    metrics
        .windows(2)
        .any(|pair| (pair[0] - pair[1]).abs() < TIE_TOLERANCE)
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;

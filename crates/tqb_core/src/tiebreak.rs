//! Ordering teams that finished with the same number of wins.
//!
//! Head-to-head results among the tied teams come first. When they do not
//! separate every team, the whole group is ordered by the balance metric
//! instead.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{BalanceVariant, GameRecord, TeamStats, TieBreakMethod};

/// A team's record counted only against the other members of its group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadToHeadRecord {
    pub team: TeamStats,
    pub wins: u32,
    pub losses: u32,
}

/// An ordered group and the stage that ordered it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupResolution {
    pub teams: Vec<TeamStats>,
    pub method: TieBreakMethod,
}

/// Head-to-head records among `group`, best first.
///
/// Only games where both teams belong to the group count. Sorted by wins
/// descending, then losses ascending; equal records keep group order.
pub fn head_to_head(group: &[TeamStats], games: &[GameRecord]) -> Vec<HeadToHeadRecord> {
    let ids: HashSet<&str> = group.iter().map(|t| t.id.as_str()).collect();
    let relevant: Vec<&GameRecord> = games
        .iter()
        .filter(|g| ids.contains(g.team_a.as_str()) && ids.contains(g.team_b.as_str()))
        .collect();

    let mut records: Vec<HeadToHeadRecord> = group
        .iter()
        .map(|team| {
            let mut record = HeadToHeadRecord {
                team: team.clone(),
                wins: 0,
                losses: 0,
            };
            for side in relevant.iter().filter_map(|g| g.side(&team.id)) {
                match side.runs.cmp(&side.opponent_runs) {
                    Ordering::Greater => record.wins += 1,
                    Ordering::Less => record.losses += 1,
                    Ordering::Equal => {}
                }
            }
            record
        })
        .collect();

    records.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.losses.cmp(&b.losses)));
    records
}

/// True when no two members share the same head-to-head (wins, losses).
///
/// A circular group (A beat B, B beat C, C beat A) gives every member the
/// same 1-1 record and so stays unresolved.
pub fn head_to_head_resolves(records: &[HeadToHeadRecord]) -> bool {
    let mut seen = HashSet::with_capacity(records.len());
    records.iter().all(|r| seen.insert((r.wins, r.losses)))
}

/// Order `teams` by the chosen balance metric, highest first.
///
/// Equal metrics keep their incoming order; detecting those is left to the
/// residual tie scan after ranking.
pub fn sort_by_balance(teams: &mut [TeamStats], variant: BalanceVariant) {
    teams.sort_by(|a, b| {
        b.metric(variant)
            .partial_cmp(&a.metric(variant))
            .unwrap_or(Ordering::Equal)
    });
}

/// Order a group of teams tied on wins.
pub fn resolve_group(
    group: &[TeamStats],
    games: &[GameRecord],
    variant: BalanceVariant,
) -> GroupResolution {
    if group.len() < 2 {
        return GroupResolution {
            teams: group.to_vec(),
            method: TieBreakMethod::WinLoss,
        };
    }

    let records = head_to_head(group, games);
    if head_to_head_resolves(&records) {
        debug!(
            teams = group.len(),
            wins = group[0].wins,
            "head-to-head resolved tie"
        );
        return GroupResolution {
            teams: records.into_iter().map(|r| r.team).collect(),
            method: TieBreakMethod::HeadToHead,
        };
    }

    let mut teams = group.to_vec();
    sort_by_balance(&mut teams, variant);
    debug!(
        teams = teams.len(),
        wins = group[0].wins,
        metric = variant.label(),
        "head-to-head did not resolve tie, ordered by balance metric"
    );
    GroupResolution {
        teams,
        method: variant.stage(),
    }
}

#[cfg(test)]
#[path = "tiebreak_tests.rs"]
mod tiebreak_tests;

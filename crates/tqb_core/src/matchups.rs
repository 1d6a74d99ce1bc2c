//! Round-robin pairing.

use crate::types::{GameRecord, Team};

/// One empty score sheet per unordered pair of teams, in input order.
///
/// Team `i` always plays the `team_a` role against every later team `j`,
/// so `n` teams give `n * (n - 1) / 2` games.
pub fn generate_matchups(teams: &[Team]) -> Vec<GameRecord> {
    let mut games = Vec::with_capacity(teams.len() * teams.len().saturating_sub(1) / 2);
    for (i, team_a) in teams.iter().enumerate() {
        for team_b in &teams[i + 1..] {
            games.push(GameRecord::unplayed(team_a, team_b));
        }
    }
    games
}

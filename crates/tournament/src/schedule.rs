//! Teams and games of one round robin, with data-entry validation.
//!
//! The engine reads whatever it is given; this is where bad names, missing
//! scores and malformed innings are caught before ranking.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tqb_core::{generate_matchups, is_valid_innings, GameRecord, Team};

use crate::config::TournamentConfig;
use crate::error::{TournamentError, TournamentResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub teams: Vec<Team>,
    pub games: Vec<GameRecord>,
}

impl Schedule {
    pub fn new(teams: Vec<Team>, games: Vec<GameRecord>) -> Self {
        Self { teams, games }
    }

    /// Create teams `team-0..` from display names and pair them up.
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        config: &TournamentConfig,
    ) -> TournamentResult<Self> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();
        let mut teams = Vec::with_capacity(names.len());

        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                errors.push(format!("Team {}: name is required", i + 1));
            } else if name.chars().count() > config.max_name_len {
                errors.push(format!(
                    "Team {}: name is longer than {} characters",
                    i + 1,
                    config.max_name_len
                ));
            } else if !seen.insert(name.to_lowercase()) {
                errors.push(format!("Team {}: duplicate team name '{}'", i + 1, name));
            } else {
                teams.push(Team::new(format!("team-{}", teams.len()), name));
            }
        }

        if names.len() < config.min_teams || names.len() > config.max_teams {
            errors.push(format!(
                "a tournament needs {} to {} teams, got {}",
                config.min_teams,
                config.max_teams,
                names.len()
            ));
        }

        if !errors.is_empty() {
            return Err(TournamentError::InvalidSchedule(errors));
        }

        let games = generate_matchups(&teams);
        Ok(Self { teams, games })
    }

    pub fn team_name(&self, id: &str) -> Option<&str> {
        self.teams
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.name.as_str())
    }

    /// Name of a team, or its id if the team is unknown.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.team_name(id).unwrap_or(id)
    }

    /// "Tigers vs Eagles"
    pub fn game_label(&self, game: &GameRecord) -> String {
        format!(
            "{} vs {}",
            self.display_name(&game.team_a),
            self.display_name(&game.team_b)
        )
    }

    /// Every game has both scores and four valid innings values.
    pub fn validate_scores(&self) -> TournamentResult<()> {
        let mut errors = Vec::new();

        for (i, game) in self.games.iter().enumerate() {
            let label = format!("Game {} ({})", i + 1, self.game_label(game));
            for (team, runs) in [(&game.team_a, game.runs_a), (&game.team_b, game.runs_b)] {
                if runs.is_none() {
                    errors.push(format!(
                        "{}: runs for {} are required",
                        label,
                        self.display_name(team)
                    ));
                }
            }

            let innings = [
                ("innings_a_batting", &game.innings_a_batting),
                ("innings_a_defense", &game.innings_a_defense),
                ("innings_b_batting", &game.innings_b_batting),
                ("innings_b_defense", &game.innings_b_defense),
            ];
            for (field, value) in innings {
                if !is_valid_innings(value) {
                    errors.push(format!(
                        "{}: {} '{}' is not valid (use X, X.1 or X.2)",
                        label, field, value
                    ));
                }
            }
        }

        into_result(errors)
    }

    /// Every game has earned runs for both teams, none above the runs scored.
    pub fn validate_earned_runs(&self) -> TournamentResult<()> {
        let mut errors = Vec::new();

        for (i, game) in self.games.iter().enumerate() {
            let label = format!("Game {} ({})", i + 1, self.game_label(game));
            let sides = [
                (&game.team_a, game.earned_runs_a, game.runs_a),
                (&game.team_b, game.earned_runs_b, game.runs_b),
            ];
            for (team, earned, runs) in sides {
                let name = self.display_name(team);
                let runs = runs.unwrap_or(0);
                match earned {
                    None => errors.push(format!("{}: earned runs for {} are required", label, name)),
                    Some(earned) if earned > runs => errors.push(format!(
                        "{}: earned runs for {} ({}) exceed total runs ({})",
                        label, name, earned, runs
                    )),
                    Some(_) => {}
                }
            }
        }

        into_result(errors)
    }

    pub fn has_earned_runs(&self) -> bool {
        self.games.iter().all(GameRecord::has_earned_runs)
    }
}

fn into_result(errors: Vec<String>) -> TournamentResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(TournamentError::InvalidSchedule(errors))
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;

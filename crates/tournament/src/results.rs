//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;
use tqb_core::{rank, rank_with_escalation, BalanceVariant, RankingResult, TieBreakMethod};
use tracing::info;

use crate::config::{Language, TournamentConfig};
use crate::error::TournamentResult;
use crate::report::{
    earned_runs_notice, explanation_table, format_metric, method_text, standings_table,
};
use crate::schedule::Schedule;

/// Complete tournament results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Teams and every game played
    pub schedule: Schedule,
    /// Final standings
    pub ranking: RankingResult,
}

impl TournamentResults {
    pub fn new(name: &str, schedule: Schedule, ranking: RankingResult) -> Self {
        Self {
            name: name.to_string(),
            schedule,
            ranking,
        }
    }

    /// Rank a validated schedule.
    ///
    /// `force_earned` ranks with ER-TQB straight away. Otherwise the
    /// config decides whether TQB ties escalate to ER-TQB on their own.
    pub fn compute(
        schedule: Schedule,
        config: &TournamentConfig,
        force_earned: bool,
    ) -> TournamentResult<Self> {
        schedule.validate_scores()?;
        if force_earned {
            schedule.validate_earned_runs()?;
        }

        let ranking = if force_earned {
            rank(&schedule.teams, &schedule.games, BalanceVariant::Earned)
        } else if config.auto_escalate {
            if schedule.has_earned_runs() {
                schedule.validate_earned_runs()?;
            }
            rank_with_escalation(&schedule.teams, &schedule.games)
        } else {
            rank(&schedule.teams, &schedule.games, BalanceVariant::Total)
        };

        Ok(Self::new(&config.name, schedule, ranking))
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> TournamentResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(path = %path.display(), "saved results");
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> TournamentResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self, language: Language) -> String {
        let ranking = &self.ranking;
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Teams: {}\n",
            self.schedule
                .teams
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        ));
        report.push_str(&format!("Games: {}\n\n", self.schedule.games.len()));

        report.push_str("Results:\n");
        for game in &self.schedule.games {
            report.push_str(&format!(
                "  {:<24} {:>3} - {:<3} {}\n",
                self.schedule.display_name(&game.team_a),
                game.runs_a.unwrap_or(0),
                game.runs_b.unwrap_or(0),
                self.schedule.display_name(&game.team_b),
            ));
        }
        report.push('\n');

        report.push_str("Standings:\n");
        report.push_str(&standings_table(ranking));
        report.push('\n');
        report.push_str(method_text(ranking.tie_break_method, language));
        report.push('\n');

        if ranking.tie_break_method >= TieBreakMethod::BalanceMetric {
            report.push('\n');
            report.push_str(&explanation_table(ranking, ranking.variant));
        }

        if ranking.variant == BalanceVariant::Earned {
            report.push_str("\nTQB vs ER-TQB:\n");
            for team in &ranking.standings {
                report.push_str(&format!(
                    "  {:<24} {:>9} {:>9} {:>9}\n",
                    team.name,
                    format_metric(team.balance_metric),
                    format_metric(team.earned_balance_metric),
                    format_metric(team.earned_balance_metric - team.balance_metric),
                ));
            }
        }

        if ranking.needs_earned_variant {
            report.push('\n');
            report.push_str(earned_runs_notice(language));
            report.push('\n');
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self, language: Language) {
        println!("{}", self.generate_report(language));
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

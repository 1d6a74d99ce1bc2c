//! Data model shared by the ranking engine and its collaborators.

use serde::{Deserialize, Serialize};

use crate::innings::outs_to_innings;

/// A tournament participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique within a tournament
    pub id: String,
    /// Display name
    pub name: String,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One game between two teams, stored by role rather than home/away.
///
/// Innings fields use decimal-innings notation: the integer part counts
/// complete innings and the single fractional digit (0, 1 or 2) counts
/// extra outs. Absent run values are read as zero by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub team_a: String,
    pub team_b: String,
    pub runs_a: Option<u32>,
    pub runs_b: Option<u32>,
    pub innings_a_batting: String,
    pub innings_a_defense: String,
    pub innings_b_batting: String,
    pub innings_b_defense: String,
    pub earned_runs_a: Option<u32>,
    pub earned_runs_b: Option<u32>,
}

/// One side of a game, seen from a single team.
#[derive(Debug, Clone, Copy)]
pub struct GameSide<'a> {
    pub runs: u32,
    pub opponent_runs: u32,
    pub earned_runs: u32,
    pub opponent_earned_runs: u32,
    pub innings_batting: &'a str,
    pub innings_defense: &'a str,
}

impl GameRecord {
    /// Empty score sheet for a pairing.
    pub fn unplayed(team_a: &Team, team_b: &Team) -> Self {
        Self {
            id: format!("{}-{}", team_a.id, team_b.id),
            team_a: team_a.id.clone(),
            team_b: team_b.id.clone(),
            ..Default::default()
        }
    }

    /// A finished game with a full seven innings for both sides.
    pub fn played(team_a: &Team, team_b: &Team, runs_a: u32, runs_b: u32) -> Self {
        Self {
            runs_a: Some(runs_a),
            runs_b: Some(runs_b),
            ..Self::unplayed(team_a, team_b)
        }
        .with_innings("7", "7", "7", "7")
    }

    pub fn with_innings(
        mut self,
        a_batting: &str,
        a_defense: &str,
        b_batting: &str,
        b_defense: &str,
    ) -> Self {
        self.innings_a_batting = a_batting.to_string();
        self.innings_a_defense = a_defense.to_string();
        self.innings_b_batting = b_batting.to_string();
        self.innings_b_defense = b_defense.to_string();
        self
    }

    pub fn with_earned_runs(mut self, earned_a: u32, earned_b: u32) -> Self {
        self.earned_runs_a = Some(earned_a);
        self.earned_runs_b = Some(earned_b);
        self
    }

    /// The game from `team_id`'s perspective, or `None` if it did not play.
    pub fn side(&self, team_id: &str) -> Option<GameSide<'_>> {
        let runs_a = self.runs_a.unwrap_or(0);
        let runs_b = self.runs_b.unwrap_or(0);
        let earned_a = self.earned_runs_a.unwrap_or(0);
        let earned_b = self.earned_runs_b.unwrap_or(0);

        if self.team_a == team_id {
            Some(GameSide {
                runs: runs_a,
                opponent_runs: runs_b,
                earned_runs: earned_a,
                opponent_earned_runs: earned_b,
                innings_batting: &self.innings_a_batting,
                innings_defense: &self.innings_a_defense,
            })
        } else if self.team_b == team_id {
            Some(GameSide {
                runs: runs_b,
                opponent_runs: runs_a,
                earned_runs: earned_b,
                opponent_earned_runs: earned_a,
                innings_batting: &self.innings_b_batting,
                innings_defense: &self.innings_b_defense,
            })
        } else {
            None
        }
    }

    pub fn has_earned_runs(&self) -> bool {
        self.earned_runs_a.is_some() && self.earned_runs_b.is_some()
    }
}

/// Which run totals feed the balance metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BalanceVariant {
    /// TQB: all runs
    #[default]
    Total,
    /// ER-TQB: earned runs only
    Earned,
}

impl BalanceVariant {
    pub fn label(self) -> &'static str {
        match self {
            BalanceVariant::Total => "TQB",
            BalanceVariant::Earned => "ER-TQB",
        }
    }

    /// The tie-break stage reached when this metric orders a group.
    pub fn stage(self) -> TieBreakMethod {
        match self {
            BalanceVariant::Total => TieBreakMethod::BalanceMetric,
            BalanceVariant::Earned => TieBreakMethod::EarnedBalanceMetric,
        }
    }
}

/// Tie-break stages, ordered from shallowest to deepest.
///
/// The derived `Ord` follows declaration order, so the deepest stage used
/// across several groups is simply the maximum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum TieBreakMethod {
    #[default]
    WinLoss,
    HeadToHead,
    BalanceMetric,
    EarnedBalanceMetric,
    Unresolved,
}

/// Aggregated results for one team. Rebuilt from the games on every ranking.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TeamStats {
    pub id: String,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub runs_scored: u32,
    pub runs_allowed: u32,
    pub earned_runs_scored: u32,
    pub earned_runs_allowed: u32,
    /// Outs recorded while batting
    pub outs_batted: u32,
    /// Outs recorded while on defense
    pub outs_fielded: u32,
    /// TQB
    pub balance_metric: f64,
    /// ER-TQB
    pub earned_balance_metric: f64,
}

impl TeamStats {
    pub fn metric(&self, variant: BalanceVariant) -> f64 {
        match variant {
            BalanceVariant::Total => self.balance_metric,
            BalanceVariant::Earned => self.earned_balance_metric,
        }
    }

    pub fn scored(&self, variant: BalanceVariant) -> u32 {
        match variant {
            BalanceVariant::Total => self.runs_scored,
            BalanceVariant::Earned => self.earned_runs_scored,
        }
    }

    pub fn allowed(&self, variant: BalanceVariant) -> u32 {
        match variant {
            BalanceVariant::Total => self.runs_allowed,
            BalanceVariant::Earned => self.earned_runs_allowed,
        }
    }

    /// Runs scored per inning at bat (0 with no innings).
    pub fn scored_ratio(&self, variant: BalanceVariant) -> f64 {
        per_inning(self.scored(variant), self.outs_batted)
    }

    /// Runs allowed per inning on defense (0 with no innings).
    pub fn allowed_ratio(&self, variant: BalanceVariant) -> f64 {
        per_inning(self.allowed(variant), self.outs_fielded)
    }

    /// Innings at bat in display notation.
    pub fn innings_batted(&self) -> f64 {
        outs_to_innings(self.outs_batted)
    }

    /// Innings on defense in display notation.
    pub fn innings_fielded(&self) -> f64 {
        outs_to_innings(self.outs_fielded)
    }
}

pub(crate) fn per_inning(runs: u32, outs: u32) -> f64 {
    if outs == 0 {
        return 0.0;
    }
    runs as f64 / (outs as f64 / 3.0)
}

/// Output of one ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Rank is position + 1
    pub standings: Vec<TeamStats>,
    /// Deepest tie-break stage used
    pub tie_break_method: TieBreakMethod,
    /// TQB left ties; rank again with earned runs
    pub needs_earned_variant: bool,
    /// ER-TQB left ties; manual resolution required
    pub unresolved_ties: bool,
    /// Metric this pass ordered tied groups by
    pub variant: BalanceVariant,
}

impl RankingResult {
    /// 1-based rank of a team, if present.
    pub fn rank_of(&self, team_id: &str) -> Option<usize> {
        self.standings
            .iter()
            .position(|s| s.id == team_id)
            .map(|idx| idx + 1)
    }

    pub fn team_ids(&self) -> Vec<&str> {
        self.standings.iter().map(|s| s.id.as_str()).collect()
    }
}

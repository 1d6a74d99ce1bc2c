//! Tournament settings, read from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::error::{TournamentError, TournamentResult};

/// Language for tie-break explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

/// Tournament configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Shown at the top of reports
    pub name: String,
    pub min_teams: usize,
    pub max_teams: usize,
    /// Longest accepted team name, in characters
    pub max_name_len: usize,
    pub language: Language,
    /// Rank again with ER-TQB when TQB leaves ties
    pub auto_escalate: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: "Softball Tournament".to_string(),
            min_teams: 2,
            max_teams: 8,
            max_name_len: 50,
            language: Language::En,
            auto_escalate: true,
        }
    }
}

impl TournamentConfig {
    /// Load and validate a TOML config file. Missing keys keep defaults.
    pub fn load(path: &Path) -> TournamentResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        info!(path = %path.display(), name = %config.name, "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> TournamentResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// The file at `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> TournamentResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> TournamentResult<()> {
        if self.min_teams < 2 {
            return Err(TournamentError::InvalidConfig(format!(
                "min_teams must be at least 2, got {}",
                self.min_teams
            )));
        }
        if self.min_teams > self.max_teams {
            return Err(TournamentError::InvalidConfig(format!(
                "min_teams ({}) exceeds max_teams ({})",
                self.min_teams, self.max_teams
            )));
        }
        if self.max_name_len == 0 {
            return Err(TournamentError::InvalidConfig(
                "max_name_len must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

//! CSV import and export of game results and standings.
//!
//! One row per game:
//!
//! ```text
//! Team_A,Team_B,Runs_A,Runs_B,Earned_Runs_A,Earned_Runs_B,Innings_A_Batting,Innings_A_Defense,Innings_B_Batting,Innings_B_Defense
//! Tigers,Eagles,5,3,4,2,7,6.2,6.2,7
//! ```
//!
//! Headers are matched case-insensitively and may come in any order.

use std::collections::HashMap;
use std::io::{Read, Write};

use tqb_core::{format_innings, is_valid_innings, GameRecord, RankingResult, Team};
use tracing::{info, warn};

use crate::config::TournamentConfig;
use crate::error::{TournamentError, TournamentResult};
use crate::report::format_metric;
use crate::schedule::Schedule;

pub const COLUMNS: [&str; 10] = [
    "Team_A",
    "Team_B",
    "Runs_A",
    "Runs_B",
    "Earned_Runs_A",
    "Earned_Runs_B",
    "Innings_A_Batting",
    "Innings_A_Defense",
    "Innings_B_Batting",
    "Innings_B_Defense",
];

/// Column positions, indexed like [`COLUMNS`].
struct ColumnMap([usize; 10]);

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, Vec<String>> {
        let positions: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim().to_lowercase(), i))
            .collect();

        let mut indices = [0; 10];
        let mut missing = Vec::new();
        for (slot, column) in indices.iter_mut().zip(COLUMNS) {
            match positions.get(&column.to_lowercase()) {
                Some(&i) => *slot = i,
                None => missing.push(format!("Missing required column: {}", column.to_lowercase())),
            }
        }

        if missing.is_empty() {
            Ok(Self(indices))
        } else {
            Err(missing)
        }
    }

    fn get<'r>(&self, record: &'r csv::StringRecord, column: usize) -> &'r str {
        record.get(self.0[column]).map(str::trim).unwrap_or("")
    }
}

/// Read a schedule from CSV.
///
/// Teams are created in order of first appearance as `team-0`, `team-1`, ...
/// Every bad row is reported; nothing is returned unless all rows parse.
pub fn import_schedule<R: Read>(reader: R, config: &TournamentConfig) -> TournamentResult<Schedule> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv.headers()?).map_err(TournamentError::InvalidCsv)?;

    let mut errors = Vec::new();
    let mut teams: Vec<Team> = Vec::new();
    let mut games = Vec::new();

    for record in csv.records() {
        let record = record?;
        let row = record.position().map(|p| p.line()).unwrap_or(0);

        match parse_row(&record, &columns) {
            Ok(row_data) => {
                let team_a = intern_team(&mut teams, row_data.team_a);
                let team_b = intern_team(&mut teams, row_data.team_b);
                games.push(GameRecord {
                    id: format!("game-{}", games.len()),
                    team_a,
                    team_b,
                    ..row_data.game
                });
            }
            Err(message) => {
                warn!(row, %message, "skipping CSV row");
                errors.push(format!("Row {}: {}", row, message));
            }
        }
    }

    if games.is_empty() && errors.is_empty() {
        errors.push("CSV must contain a header row and at least one data row".to_string());
    }
    if teams.len() < config.min_teams {
        errors.push(format!(
            "CSV must contain at least {} different teams",
            config.min_teams
        ));
    }
    if teams.len() > config.max_teams {
        errors.push(format!(
            "CSV contains more than {} teams (maximum allowed)",
            config.max_teams
        ));
    }

    if !errors.is_empty() {
        return Err(TournamentError::InvalidCsv(errors));
    }

    info!(teams = teams.len(), games = games.len(), "imported schedule");
    Ok(Schedule::new(teams, games))
}

struct Row<'r> {
    team_a: &'r str,
    team_b: &'r str,
    game: GameRecord,
}

fn parse_row<'r>(record: &'r csv::StringRecord, columns: &ColumnMap) -> Result<Row<'r>, String> {
    let team_a = columns.get(record, 0);
    let team_b = columns.get(record, 1);
    if team_a.is_empty() || team_b.is_empty() {
        return Err("Missing team name(s)".to_string());
    }
    if team_a.eq_ignore_ascii_case(team_b) {
        return Err(format!("{} cannot play itself", team_a));
    }

    let runs_a = parse_count(columns.get(record, 2)).ok_or("Invalid runs values")?;
    let runs_b = parse_count(columns.get(record, 3)).ok_or("Invalid runs values")?;
    let earned_a = parse_count(columns.get(record, 4)).ok_or("Invalid earned runs values")?;
    let earned_b = parse_count(columns.get(record, 5)).ok_or("Invalid earned runs values")?;
    if earned_a > runs_a || earned_b > runs_b {
        return Err("Earned runs cannot exceed total runs".to_string());
    }

    let innings: Vec<&str> = (6..10).map(|c| columns.get(record, c)).collect();
    if !innings.iter().all(|value| is_valid_innings(value)) {
        return Err("Invalid innings format (use X, X.1, or X.2)".to_string());
    }

    Ok(Row {
        team_a,
        team_b,
        game: GameRecord {
            runs_a: Some(runs_a),
            runs_b: Some(runs_b),
            earned_runs_a: Some(earned_a),
            earned_runs_b: Some(earned_b),
            ..Default::default()
        }
        .with_innings(innings[0], innings[1], innings[2], innings[3]),
    })
}

fn parse_count(value: &str) -> Option<u32> {
    value.parse().ok()
}

/// Id of the team called `name`, adding it if new.
fn intern_team(teams: &mut Vec<Team>, name: &str) -> String {
    if let Some(team) = teams.iter().find(|t| t.name == name) {
        return team.id.clone();
    }
    let team = Team::new(format!("team-{}", teams.len()), name);
    let id = team.id.clone();
    teams.push(team);
    id
}

/// Write every game in the import format. Missing values become empty fields.
pub fn export_schedule<W: Write>(schedule: &Schedule, writer: W) -> TournamentResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;

    for game in &schedule.games {
        let innings = [
            &game.innings_a_batting,
            &game.innings_a_defense,
            &game.innings_b_batting,
            &game.innings_b_defense,
        ];
        let mut row = vec![
            schedule.display_name(&game.team_a).to_string(),
            schedule.display_name(&game.team_b).to_string(),
            optional(game.runs_a),
            optional(game.runs_b),
            optional(game.earned_runs_a),
            optional(game.earned_runs_b),
        ];
        row.extend(innings.iter().map(|value| value.trim().to_string()));
        csv.write_record(&row)?;
    }

    csv.flush()?;
    Ok(())
}

fn optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the final table, one row per team in rank order.
pub fn export_standings<W: Write>(result: &RankingResult, writer: W) -> TournamentResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "Rank",
        "Team",
        "W",
        "L",
        "Runs_Scored",
        "Runs_Allowed",
        "Earned_Runs_Scored",
        "Earned_Runs_Allowed",
        "Innings_Batting",
        "Innings_Defense",
        "TQB",
        "ER_TQB",
    ])?;

    for (i, team) in result.standings.iter().enumerate() {
        csv.write_record([
            (i + 1).to_string(),
            team.name.clone(),
            team.wins.to_string(),
            team.losses.to_string(),
            team.runs_scored.to_string(),
            team.runs_allowed.to_string(),
            team.earned_runs_scored.to_string(),
            team.earned_runs_allowed.to_string(),
            format_innings(team.outs_batted),
            format_innings(team.outs_fielded),
            format_metric(team.balance_metric),
            format_metric(team.earned_balance_metric),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Example file content for users preparing their own CSV.
pub fn sample_csv() -> &'static str {
    "Team_A,Team_B,Runs_A,Runs_B,Earned_Runs_A,Earned_Runs_B,Innings_A_Batting,Innings_A_Defense,Innings_B_Batting,Innings_B_Defense
Tigers,Eagles,5,3,4,2,7,6.2,6.2,7
Eagles,Sharks,2,8,1,6,7,7,7,7
Tigers,Sharks,4,4,3,3,7,7,7,7
"
}

#[cfg(test)]
#[path = "csv_io_tests.rs"]
mod csv_io_tests;

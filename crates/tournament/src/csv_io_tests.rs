use super::*;
use tqb_core::{rank, BalanceVariant};

fn import(content: &str) -> TournamentResult<Schedule> {
    import_schedule(content.as_bytes(), &TournamentConfig::default())
}

fn csv_errors(content: &str) -> Vec<String> {
    match import(content) {
        Err(TournamentError::InvalidCsv(errors)) => errors,
        other => panic!("expected InvalidCsv, got {other:?}"),
    }
}

#[test]
fn test_import_sample() {
    let schedule = import(sample_csv()).unwrap();

    let names: Vec<&str> = schedule.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Tigers", "Eagles", "Sharks"]);
    assert_eq!(schedule.games.len(), 3);

    let first = &schedule.games[0];
    assert_eq!(first.id, "game-0");
    assert_eq!((first.team_a.as_str(), first.team_b.as_str()), ("team-0", "team-1"));
    assert_eq!((first.runs_a, first.runs_b), (Some(5), Some(3)));
    assert_eq!(first.innings_a_defense, "6.2");
    assert!(schedule.has_earned_runs());
    assert!(schedule.validate_scores().is_ok());
}

#[test]
fn test_headers_any_case_and_order() {
    let content = "\
team_b,TEAM_A,runs_b,runs_a,earned_runs_b,earned_runs_a,innings_b_defense,innings_b_batting,innings_a_defense,innings_a_batting
Eagles,Tigers,3,5,2,4,7,6.2,6.2,7
";
    let schedule = import(content).unwrap();
    assert_eq!(schedule.teams[0].name, "Tigers");
    let game = &schedule.games[0];
    assert_eq!((game.runs_a, game.runs_b), (Some(5), Some(3)));
    assert_eq!(game.innings_a_batting, "7");
    assert_eq!(game.innings_a_defense, "6.2");
}

#[test]
fn test_missing_columns_reported_together() {
    let errors = csv_errors("Team_A,Team_B,Runs_A,Runs_B\nTigers,Eagles,1,0\n");
    assert_eq!(errors.len(), 6);
    assert!(errors.contains(&"Missing required column: earned_runs_a".to_string()));
    assert!(errors.contains(&"Missing required column: innings_b_defense".to_string()));
}

#[test]
fn test_bad_rows_are_numbered() {
    let content = "\
Team_A,Team_B,Runs_A,Runs_B,Earned_Runs_A,Earned_Runs_B,Innings_A_Batting,Innings_A_Defense,Innings_B_Batting,Innings_B_Defense
Tigers,Eagles,5,3,4,2,7,6.2,6.2,7
Tigers,,1,0,0,0,7,7,7,7
Tigers,Sharks,x,0,0,0,7,7,7,7
Eagles,Sharks,1,0,-1,0,7,7,7,7
Eagles,Sharks,1,0,1,0,7.3,7,7,7
Sharks,Tigers,1,0,2,0,7,7,7,7
";
    let errors = csv_errors(content);
    assert_eq!(
        errors,
        vec![
            "Row 3: Missing team name(s)",
            "Row 4: Invalid runs values",
            "Row 5: Invalid earned runs values",
            "Row 6: Invalid innings format (use X, X.1, or X.2)",
            "Row 7: Earned runs cannot exceed total runs",
        ]
    );
}

#[test]
fn test_team_count_limits() {
    let header = COLUMNS.join(",");
    let errors = csv_errors(&format!("{header}\n"));
    assert!(errors[0].contains("at least one data row"));
    assert!(errors[1].contains("at least 2 different teams"));

    let mut content = format!("{header}\n");
    for i in 0..5 {
        content.push_str(&format!("T{},U{},1,0,0,0,7,7,7,7\n", i, i));
    }
    let errors = csv_errors(&content);
    assert_eq!(errors, vec!["CSV contains more than 8 teams (maximum allowed)"]);
}

#[test]
fn test_export_import_round_trip() {
    let schedule = import(sample_csv()).unwrap();

    let mut buffer = Vec::new();
    export_schedule(&schedule, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert!(text.starts_with("Team_A,Team_B,Runs_A"));

    let reimported = import(&text).unwrap();
    assert_eq!(reimported, schedule);
}

#[test]
fn test_export_unplayed_schedule() {
    let config = TournamentConfig::default();
    let schedule = Schedule::from_names(&["Tigers", "Eagles"], &config).unwrap();

    let mut buffer = Vec::new();
    export_schedule(&schedule, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    assert_eq!(text.lines().nth(1), Some("Tigers,Eagles,,,,,,,,"));
}

#[test]
fn test_export_standings() {
    let schedule = import(sample_csv()).unwrap();
    let result = rank(&schedule.teams, &schedule.games, BalanceVariant::Total);

    let mut buffer = Vec::new();
    export_standings(&result, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Rank,Team,W,L"));
    // Sharks: 14 innings each way, 12 scored and 6 allowed
    assert_eq!(lines[1], "1,Sharks,1,0,12,6,9,4,14,14,+0.4286,+0.3571");
}

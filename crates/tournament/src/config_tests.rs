use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = TournamentConfig::default();
    assert_eq!(config.min_teams, 2);
    assert_eq!(config.max_teams, 8);
    assert_eq!(config.language, Language::En);
    assert!(config.auto_escalate);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = TournamentConfig::from_toml(
        r#"
name = "Copa Regional"
language = "es"
"#,
    )
    .unwrap();
    assert_eq!(config.name, "Copa Regional");
    assert_eq!(config.language, Language::Es);
    assert_eq!(config.max_teams, 8);
}

#[test]
fn test_invalid_team_bounds() {
    let err = TournamentConfig::from_toml("min_teams = 6\nmax_teams = 4").unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfig(_)));

    let err = TournamentConfig::from_toml("min_teams = 1").unwrap_err();
    assert!(err.to_string().contains("at least 2"));
}

#[test]
fn test_bad_toml() {
    let err = TournamentConfig::from_toml("max_teams = \"eight\"").unwrap_err();
    assert!(matches!(err, TournamentError::Toml(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "name = \"Spring Cup\"\nauto_escalate = false").unwrap();

    let config = TournamentConfig::load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.name, "Spring Cup");
    assert!(!config.auto_escalate);

    let default = TournamentConfig::load_or_default(None).unwrap();
    assert_eq!(default, TournamentConfig::default());
}

use super::*;
use tqb_core::{rank, GameRecord, Team};

fn sample_result() -> RankingResult {
    let tigers = Team::new("team-0", "Tigers");
    let eagles = Team::new("team-1", "Eagles");
    let games = vec![
        GameRecord::played(&tigers, &eagles, 5, 3)
            .with_innings("7", "6.2", "6.2", "7")
            .with_earned_runs(4, 2),
    ];
    rank(&[tigers, eagles], &games, BalanceVariant::Total)
}

#[test]
fn test_format_metric() {
    assert_eq!(format_metric(0.285714), "+0.2857");
    assert_eq!(format_metric(-1.0), "-1.0000");
    assert_eq!(format_metric(0.0), "+0.0000");
    assert_eq!(format_metric(-0.00001), "+0.0000");
}

#[test]
fn test_method_text_languages() {
    assert_eq!(
        method_text(TieBreakMethod::HeadToHead, Language::En),
        "Ties resolved using Head-to-Head Results"
    );
    assert!(method_text(TieBreakMethod::Unresolved, Language::Es).contains("revisión manual"));
    assert!(earned_runs_notice(Language::En).contains("earned runs"));
}

#[test]
fn test_standings_table() {
    let table = standings_table(&sample_result());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].contains("Rank") && lines[0].contains("ER-TQB"));
    assert!(lines[2].contains("Tigers"));
    assert!(lines[3].contains("Eagles"));
}

#[test]
fn test_explanation_table() {
    let table = explanation_table(&sample_result(), BalanceVariant::Total);
    assert!(table.starts_with("TQB calculation summary"));

    let tigers = table.lines().find(|l| l.contains("Tigers")).unwrap();
    // 5 runs over 7 innings at bat, 3 allowed over 6.2 innings on defense
    assert!(tigers.contains("6.2"));
    assert!(tigers.contains("0.7143"));
    assert!(tigers.contains("0.4500"));
    assert!(tigers.contains("+0.2643"));

    let earned = explanation_table(&sample_result(), BalanceVariant::Earned);
    assert!(earned.starts_with("ER-TQB calculation summary"));
}

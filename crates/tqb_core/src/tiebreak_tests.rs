use super::*;
use crate::stats::compute_stats;
use crate::types::Team;

fn stats_for(teams: &[Team], games: &[GameRecord]) -> Vec<TeamStats> {
    teams.iter().map(|t| compute_stats(t, games)).collect()
}

fn names(teams: &[TeamStats]) -> Vec<&str> {
    teams.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn test_single_team_passes_through() {
    let a = Team::new("a", "A");
    let group = stats_for(std::slice::from_ref(&a), &[]);

    let resolution = resolve_group(&group, &[], BalanceVariant::Total);
    assert_eq!(names(&resolution.teams), vec!["A"]);
    assert_eq!(resolution.method, TieBreakMethod::WinLoss);
}

#[test]
fn test_head_to_head_decides_pair() {
    let a = Team::new("a", "A");
    let b = Team::new("b", "B");
    let c = Team::new("c", "C");
    // B beat A head-to-head, but A has far better run differential overall
    let games = vec![
        GameRecord::played(&a, &b, 1, 2),
        GameRecord::played(&a, &c, 20, 0),
        GameRecord::played(&b, &c, 0, 1),
    ];
    let all = stats_for(&[a, b], &games);

    let resolution = resolve_group(&all, &games, BalanceVariant::Total);
    assert_eq!(names(&resolution.teams), vec!["B", "A"]);
    assert_eq!(resolution.method, TieBreakMethod::HeadToHead);
}

#[test]
fn test_head_to_head_ignores_games_outside_group() {
    let a = Team::new("a", "A");
    let b = Team::new("b", "B");
    let c = Team::new("c", "C");
    let games = vec![
        GameRecord::played(&a, &c, 5, 0),
        GameRecord::played(&b, &c, 5, 0),
        GameRecord::played(&a, &b, 3, 3),
    ];
    let group = stats_for(&[a, b], &games);

    let records = head_to_head(&group, &games);
    assert!(records.iter().all(|r| r.wins == 0 && r.losses == 0));
    assert!(!head_to_head_resolves(&records));
}

#[test]
fn test_split_series_falls_through_to_balance() {
    let a = Team::new("a", "A");
    let b = Team::new("b", "B");
    // 1-1 in two meetings with different margins
    let games = vec![
        GameRecord::played(&a, &b, 10, 1),
        GameRecord::played(&b, &a, 3, 2),
    ];
    let group = stats_for(&[b.clone(), a.clone()], &games);

    let records = head_to_head(&group, &games);
    assert!(records.iter().all(|r| r.wins == 1 && r.losses == 1));

    let resolution = resolve_group(&group, &games, BalanceVariant::Total);
    assert_eq!(resolution.method, TieBreakMethod::BalanceMetric);
    assert_eq!(names(&resolution.teams), vec!["A", "B"]);
}

#[test]
fn test_cycle_is_not_resolved_by_head_to_head() {
    let a = Team::new("a", "A");
    let b = Team::new("b", "B");
    let c = Team::new("c", "C");
    let games = vec![
        GameRecord::played(&a, &b, 2, 1),
        GameRecord::played(&b, &c, 6, 1),
        GameRecord::played(&c, &a, 4, 3),
    ];
    let group = stats_for(&[a, b, c], &games);

    let records = head_to_head(&group, &games);
    assert!(!head_to_head_resolves(&records));

    let resolution = resolve_group(&group, &games, BalanceVariant::Total);
    assert_eq!(resolution.method, TieBreakMethod::BalanceMetric);
    // Over 14 innings each: B nets +4 runs, A breaks even, C nets -4
    assert_eq!(names(&resolution.teams), vec!["B", "A", "C"]);
}

#[test]
fn test_three_way_distinct_records_resolve() {
    let a = Team::new("a", "A");
    let b = Team::new("b", "B");
    let c = Team::new("c", "C");
    // C beats both, B beats A
    let games = vec![
        GameRecord::played(&a, &b, 0, 1),
        GameRecord::played(&a, &c, 0, 1),
        GameRecord::played(&b, &c, 0, 1),
    ];
    let group = stats_for(&[a, b, c], &games);

    let resolution = resolve_group(&group, &games, BalanceVariant::Total);
    assert_eq!(resolution.method, TieBreakMethod::HeadToHead);
    assert_eq!(names(&resolution.teams), vec!["C", "B", "A"]);
}

#[test]
fn test_earned_variant_sets_earned_stage() {
    let a = Team::new("a", "A");
    let b = Team::new("b", "B");
    let games = vec![GameRecord::played(&a, &b, 4, 4).with_earned_runs(1, 3)];
    let group = stats_for(&[a, b], &games);

    let resolution = resolve_group(&group, &games, BalanceVariant::Earned);
    assert_eq!(resolution.method, TieBreakMethod::EarnedBalanceMetric);
    assert_eq!(names(&resolution.teams), vec!["B", "A"]);
}

#[test]
fn test_equal_metrics_keep_group_order() {
    let a = Team::new("a", "A");
    let b = Team::new("b", "B");
    let games = vec![GameRecord::played(&a, &b, 2, 2)];
    let group = stats_for(&[b.clone(), a.clone()], &games);

    let resolution = resolve_group(&group, &games, BalanceVariant::Total);
    assert_eq!(names(&resolution.teams), vec!["B", "A"]);
}

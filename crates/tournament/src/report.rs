//! Text rendering of standings and tie-break explanations

use tqb_core::{BalanceVariant, RankingResult, TieBreakMethod};

use crate::config::Language;

/// Signed, four decimals: `+0.2857`, `-1.0000`.
pub fn format_metric(value: f64) -> String {
    // Keep -0.00001 from printing as "-0.0000"
    let value = if value.abs() < 5e-5 { 0.0 } else { value };
    format!("{:+.4}", value)
}

/// What decided the order, for display under the table.
pub fn method_text(method: TieBreakMethod, language: Language) -> &'static str {
    match (language, method) {
        (Language::En, TieBreakMethod::WinLoss) => "Rankings determined by Win-Loss Record",
        (Language::En, TieBreakMethod::HeadToHead) => "Ties resolved using Head-to-Head Results",
        (Language::En, TieBreakMethod::BalanceMetric) => {
            "Ties resolved using TQB (Team Quality Balance)"
        }
        (Language::En, TieBreakMethod::EarnedBalanceMetric) => {
            "Ties resolved using ER-TQB (Earned Runs Team Quality Balance)"
        }
        (Language::En, TieBreakMethod::Unresolved) => {
            "ER-TQB did not resolve all ties. Manual review needed for Batting Average or Coin Toss."
        }
        (Language::Es, TieBreakMethod::WinLoss) => {
            "Clasificación determinada por Récord de Victorias-Derrotas"
        }
        (Language::Es, TieBreakMethod::HeadToHead) => "Empates resueltos usando Resultados Directos",
        (Language::Es, TieBreakMethod::BalanceMetric) => {
            "Empates resueltos usando TQB (Balance de Calidad del Equipo)"
        }
        (Language::Es, TieBreakMethod::EarnedBalanceMetric) => {
            "Empates resueltos usando ER-TQB (Balance de Calidad por Carreras Limpias)"
        }
        (Language::Es, TieBreakMethod::Unresolved) => {
            "ER-TQB no resolvió todos los empates. Se requiere revisión manual para Promedio de Bateo o Lanzamiento de Moneda."
        }
    }
}

/// Notice shown when TQB left ties and earned runs are still needed.
pub fn earned_runs_notice(language: Language) -> &'static str {
    match language {
        Language::En => "TQB did not resolve all ties. Enter earned runs for ER-TQB calculation.",
        Language::Es => {
            "TQB no resolvió todos los empates. Ingrese las carreras limpias para calcular ER-TQB."
        }
    }
}

/// Rank, record, runs and both metrics per team.
pub fn standings_table(result: &RankingResult) -> String {
    let mut table = String::new();
    table.push_str(&format!(
        "{:>4}  {:<24} {:>3} {:>3} {:>5} {:>5} {:>9} {:>9}\n",
        "Rank", "Team", "W", "L", "RS", "RA", "TQB", "ER-TQB"
    ));
    table.push_str(&"-".repeat(70));
    table.push('\n');

    for (i, team) in result.standings.iter().enumerate() {
        table.push_str(&format!(
            "{:>4}  {:<24} {:>3} {:>3} {:>5} {:>5} {:>9} {:>9}\n",
            i + 1,
            team.name,
            team.wins,
            team.losses,
            team.runs_scored,
            team.runs_allowed,
            format_metric(team.balance_metric),
            format_metric(team.earned_balance_metric),
        ));
    }

    table
}

/// The arithmetic behind each team's metric: runs over innings at bat,
/// minus runs allowed over innings on defense.
pub fn explanation_table(result: &RankingResult, variant: BalanceVariant) -> String {
    let (scored, allowed) = match variant {
        BalanceVariant::Total => ("Runs", "Allowed"),
        BalanceVariant::Earned => ("ER", "ER Allow"),
    };

    let mut table = String::new();
    table.push_str(&format!("{} calculation summary\n", variant.label()));
    table.push_str(&format!(
        "{:>4}  {:<24} {:>8} {:>7} {:>8} {:>7} {:>8} {:>8} {:>9}\n",
        "Rank", "Team", scored, "Inn Bat", allowed, "Inn Def", "Ratio S", "Ratio A", variant.label()
    ));
    table.push_str(&"-".repeat(96));
    table.push('\n');

    for (i, team) in result.standings.iter().enumerate() {
        table.push_str(&format!(
            "{:>4}  {:<24} {:>8} {:>7.1} {:>8} {:>7.1} {:>8.4} {:>8.4} {:>9}\n",
            i + 1,
            team.name,
            team.scored(variant),
            team.innings_batted(),
            team.allowed(variant),
            team.innings_fielded(),
            team.scored_ratio(variant),
            team.allowed_ratio(variant),
            format_metric(team.metric(variant)),
        ));
    }

    table
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;

//! Tournament CLI
//!
//! Rank softball round robins from CSV and print the tie-break report.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tournament::csv_io::{export_schedule, export_standings, import_schedule, sample_csv};
use tournament::{Schedule, TournamentConfig, TournamentResults};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tournament", version, about = "Softball round-robin standings with TQB tie-breaks")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank a CSV of game results
    Rank {
        csv: PathBuf,
        /// Rank with ER-TQB straight away
        #[arg(long)]
        earned: bool,
        /// Save the results as JSON
        #[arg(long, value_name = "OUT")]
        json: Option<PathBuf>,
        /// Save the standings as CSV
        #[arg(long, value_name = "OUT")]
        standings_csv: Option<PathBuf>,
    },
    /// Write an empty score sheet for the given teams
    Matchups {
        #[arg(required = true)]
        names: Vec<String>,
        /// Output file, stdout if omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a sample CSV
    Sample,
    /// Print the report of saved results
    Show { results: PathBuf },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_rank(
    config: &TournamentConfig,
    csv: &Path,
    earned: bool,
    json: Option<&Path>,
    standings_csv: Option<&Path>,
) -> Result<()> {
    let file = File::open(csv).with_context(|| format!("failed to open {}", csv.display()))?;
    let schedule = import_schedule(BufReader::new(file), config)
        .with_context(|| format!("failed to import {}", csv.display()))?;

    let results = TournamentResults::compute(schedule, config, earned)?;
    results.print_report(config.language);

    if let Some(path) = json {
        results
            .save(path)
            .with_context(|| format!("failed to save {}", path.display()))?;
    }
    if let Some(path) = standings_csv {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        export_standings(&results.ranking, file)?;
        info!(path = %path.display(), "saved standings");
    }
    Ok(())
}

fn run_matchups(config: &TournamentConfig, names: &[String], out: Option<&Path>) -> Result<()> {
    let schedule = Schedule::from_names(names, config)?;
    info!(teams = schedule.teams.len(), games = schedule.games.len(), "generated matchups");

    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            export_schedule(&schedule, file)?;
        }
        None => export_schedule(&schedule, io::stdout().lock())?,
    }
    Ok(())
}

fn run_show(config: &TournamentConfig, path: &Path) -> Result<()> {
    let results = TournamentResults::load(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    results.print_report(config.language);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = TournamentConfig::load_or_default(cli.config.as_deref())
        .context("failed to load config")?;

    match cli.command {
        Command::Rank {
            csv,
            earned,
            json,
            standings_csv,
        } => run_rank(&config, &csv, earned, json.as_deref(), standings_csv.as_deref()),
        Command::Matchups { names, out } => run_matchups(&config, &names, out.as_deref()),
        Command::Sample => {
            print!("{}", sample_csv());
            Ok(())
        }
        Command::Show { results } => run_show(&config, &results),
    }
}

//! league_core CLI - project a league table by Monte Carlo simulation

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use league_core::{CliOverrides, LeagueConfig, SeasonState};
use tracing::info;

/// Width of the leader's bar in the chart
const CHART_WIDTH: usize = 50;

#[derive(Parser)]
#[command(name = "league_core")]
#[command(about = "Project a league table from Elo ratings by Monte Carlo simulation")]
struct Cli {
    /// TOML config file (teams, ratings, simulation settings)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV file of `team,rating` lines
    #[arg(short, long, value_name = "FILE")]
    ratings: Option<PathBuf>,

    /// Comma-separated team names, replacing the configured list
    #[arg(long, value_delimiter = ',')]
    teams: Option<Vec<String>>,

    /// Require an explicit rating for every team, with no default fallback
    #[arg(long)]
    strict_ratings: bool,

    /// Rating points added to the home side
    #[arg(long)]
    home_advantage: Option<f64>,

    /// Fixed draw probability (0.0-1.0)
    #[arg(long)]
    draw_probability: Option<f64>,

    /// Number of simulated seasons
    #[arg(short = 'n', long)]
    simulations: Option<usize>,

    /// Seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run trials across all cores
    #[arg(long)]
    parallel: bool,

    /// Print the table as JSON instead of text
    #[arg(long, conflicts_with = "chart")]
    json: bool,

    /// Print a bar chart after the table
    #[arg(long)]
    chart: bool,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            teams: self.teams.clone(),
            ratings_file: self.ratings.clone(),
            strict_ratings: self.strict_ratings,
            home_advantage: self.home_advantage,
            draw_probability: self.draw_probability,
            simulations: self.simulations,
            seed: self.seed,
            parallel: self.parallel,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = LeagueConfig::load(cli.config.as_deref(), &cli.overrides())
        .context("invalid league configuration")?;
    info!(
        teams = config.teams.len(),
        rated = config.ratings.len(),
        seed = ?config.seed,
        "configuration loaded"
    );

    let state = SeasonState::from_config(&config)?;
    let table = state.predict();

    if cli.json {
        println!("{}", table.to_json().context("failed to serialise table")?);
        return Ok(());
    }

    print!("{}", table.render_text());
    if cli.chart {
        println!();
        print!("{}", table.render_bar_chart(CHART_WIDTH));
    }

    Ok(())
}

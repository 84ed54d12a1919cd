use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use statrs::statistics::Statistics;
use tracing::{debug, info};

use crate::config::LeagueConfig;
use crate::error::ConfigError;
use crate::fixtures::{generate_fixtures, Fixture};
use crate::table::PredictedTable;
use crate::team::Team;
use crate::win_prob::{calculate_outcome_probs, simulate_outcome, Outcome, OutcomeProbs};

/// Points and result tallies from one simulated season.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialResult {
    /// Points per team, indexed like the team list
    pub points: Vec<u32>,
    pub home_wins: u32,
    pub draws: u32,
    pub away_wins: u32,
}

impl TrialResult {
    pub fn total_points(&self) -> u32 {
        self.points.iter().sum()
    }

    pub fn fixtures_played(&self) -> u32 {
        self.home_wins + self.draws + self.away_wins
    }

    pub fn decisive(&self) -> u32 {
        self.home_wins + self.away_wins
    }
}

/// Per-team point totals across every trial of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResults {
    pub team_names: Vec<String>,

    /// `points[team][trial]`
    pub points: Vec<Vec<u32>>,

    /// Drawn fixtures in each trial
    pub draws: Vec<u32>,
}

impl SimulationResults {
    fn from_trials(team_names: Vec<String>, trials: Vec<TrialResult>) -> Self {
        let mut points: Vec<Vec<u32>> = team_names
            .iter()
            .map(|_| Vec::with_capacity(trials.len()))
            .collect();
        let mut draws = Vec::with_capacity(trials.len());

        // Per-trial tallies are folded into the sequences and dropped
        for trial in trials {
            for (seq, &p) in points.iter_mut().zip(&trial.points) {
                seq.push(p);
            }
            draws.push(trial.draws);
        }

        SimulationResults {
            team_names,
            points,
            draws,
        }
    }

    pub fn num_trials(&self) -> usize {
        self.draws.len()
    }

    /// Mean points per team, indexed like the team list.
    pub fn mean_points(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|seq| seq.iter().map(|&p| f64::from(p)).mean())
            .collect()
    }

    /// Sum of all teams' points in one trial, `None` past the last trial.
    pub fn trial_total(&self, trial: usize) -> Option<u32> {
        if trial >= self.num_trials() {
            return None;
        }
        Some(self.points.iter().map(|seq| seq[trial]).sum())
    }

    /// Ranked table of mean points.
    pub fn to_table(&self) -> PredictedTable {
        PredictedTable::from_means(&self.team_names, &self.mean_points())
    }
}

/// Season simulator: static ratings, a fixed fixture list and run settings.
#[derive(Clone, Debug)]
pub struct SeasonState {
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,

    /// Outcome distribution per fixture, parallel to `fixtures`.
    /// Ratings and model parameters are fixed at construction, so these are computed once.
    probs: Vec<OutcomeProbs>,

    home_advantage: f64,
    draw_prob: f64,
    pub simulations: usize,
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl SeasonState {
    /// Build a simulator from resolved teams, generating the full fixture list.
    pub fn new(teams: Vec<Team>, home_advantage: f64, draw_prob: f64) -> Self {
        let fixtures = generate_fixtures(teams.len());
        Self::build(teams, fixtures, home_advantage, draw_prob)
    }

    /// Build a simulator over an explicit fixture list.
    ///
    /// Every fixture must name two distinct teams from `teams`.
    pub fn with_fixtures(
        teams: Vec<Team>,
        fixtures: Vec<Fixture>,
        home_advantage: f64,
        draw_prob: f64,
    ) -> Result<Self, ConfigError> {
        if let Some(bad) = fixtures
            .iter()
            .find(|f| f.home == f.away || f.home >= teams.len() || f.away >= teams.len())
        {
            return Err(ConfigError::InvalidFixture {
                home: bad.home,
                away: bad.away,
                teams: teams.len(),
            });
        }

        Ok(Self::build(teams, fixtures, home_advantage, draw_prob))
    }

    fn build(teams: Vec<Team>, fixtures: Vec<Fixture>, home_advantage: f64, draw_prob: f64) -> Self {
        let probs = fixtures
            .iter()
            .map(|f| {
                calculate_outcome_probs(
                    teams[f.home].rating,
                    teams[f.away].rating,
                    home_advantage,
                    draw_prob,
                )
            })
            .collect();

        SeasonState {
            teams,
            fixtures,
            probs,
            home_advantage,
            draw_prob,
            simulations: 1,
            seed: None,
            parallel: false,
        }
    }

    /// Validate `config` and build the simulator it describes.
    pub fn from_config(config: &LeagueConfig) -> Result<Self, ConfigError> {
        let teams = config.resolve_teams()?;
        let mut state = Self::new(teams, config.home_advantage, config.draw_probability);
        state.simulations = config.simulations;
        state.seed = config.seed;
        state.parallel = config.parallel;
        Ok(state)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn team_names(&self) -> Vec<String> {
        self.teams.iter().map(|t| t.name.clone()).collect()
    }

    pub fn home_advantage(&self) -> f64 {
        self.home_advantage
    }

    pub fn draw_prob(&self) -> f64 {
        self.draw_prob
    }

    /// Outcome distribution the simulator uses for the fixture at `index`.
    pub fn fixture_probs(&self, index: usize) -> Option<&OutcomeProbs> {
        self.probs.get(index)
    }

    /// Simulate every fixture once, in fixture order.
    pub fn simulate_trial<R: Rng>(&self, rng: &mut R) -> TrialResult {
        let mut result = TrialResult {
            points: vec![0; self.teams.len()],
            home_wins: 0,
            draws: 0,
            away_wins: 0,
        };

        for (fixture, probs) in self.fixtures.iter().zip(&self.probs) {
            let outcome = simulate_outcome(probs, rng);
            let (home_pts, away_pts) = outcome.points();
            result.points[fixture.home] += home_pts;
            result.points[fixture.away] += away_pts;

            match outcome {
                Outcome::Home => result.home_wins += 1,
                Outcome::Draw => result.draws += 1,
                Outcome::Away => result.away_wins += 1,
            }
        }

        result
    }

    /// Simulate one trial from its own seed.
    pub fn simulate_trial_seeded(&self, seed: u64) -> TrialResult {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.simulate_trial(&mut rng)
    }

    /// Run `n_simulations` trials sequentially.
    ///
    /// Each trial gets its own stream seeded from a master generator, so the
    /// output matches `run_trials_parallel` for the same seed.
    pub fn run_trials(&self, n_simulations: usize, seed: Option<u64>) -> SimulationResults {
        let trials = trial_seeds(n_simulations, seed)
            .into_iter()
            .map(|s| self.simulate_trial_seeded(s))
            .collect();

        SimulationResults::from_trials(self.team_names(), trials)
    }

    /// Run `n_simulations` trials on the rayon pool.
    pub fn run_trials_parallel(&self, n_simulations: usize, seed: Option<u64>) -> SimulationResults {
        let trials = trial_seeds(n_simulations, seed)
            .into_par_iter()
            .map(|s| self.simulate_trial_seeded(s))
            .collect();

        SimulationResults::from_trials(self.team_names(), trials)
    }

    /// Run the configured number of trials and rank teams by mean points.
    pub fn predict(&self) -> PredictedTable {
        let start = Instant::now();
        info!(
            teams = self.teams.len(),
            fixtures = self.fixtures.len(),
            simulations = self.simulations,
            parallel = self.parallel,
            "simulating season"
        );

        let results = if self.parallel {
            self.run_trials_parallel(self.simulations, self.seed)
        } else {
            self.run_trials(self.simulations, self.seed)
        };
        let table = results.to_table();

        info!(elapsed_ms = start.elapsed().as_millis() as u64, "simulation finished");
        table
    }
}

/// Derive one seed per trial from a master stream, in trial order.
fn trial_seeds(n_simulations: usize, seed: Option<u64>) -> Vec<u64> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };
    debug!(n_simulations, seeded = seed.is_some(), "deriving trial seeds");

    (0..n_simulations).map(|_| rng.gen::<u64>()).collect()
}

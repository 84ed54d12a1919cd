//! League Core - Monte Carlo projection of a league table from Elo ratings.
//!
//! Every pair of teams meets home and away; each fixture is drawn from a
//! home/draw/away distribution derived from the two ratings, and the season
//! is replayed many times to estimate each team's expected points.

pub mod config;
pub mod constants;
pub mod error;
pub mod fixtures;
pub mod ratings;
pub mod season;
pub mod table;
pub mod team;
pub mod win_prob;

pub use config::{CliOverrides, LeagueConfig};
pub use constants::{
    DEFAULT_RATING, DEFAULT_SIMULATIONS, DEFAULT_TEAMS, DRAW_PROB, ELO_SCALE, HOME_ADVANTAGE,
    POINTS_DRAW, POINTS_WIN,
};
pub use error::ConfigError;
pub use fixtures::{generate_fixtures, Fixture};
pub use ratings::RatingsMap;
pub use season::{SeasonState, SimulationResults, TrialResult};
pub use table::{PredictedTable, StandingsRow};
pub use team::Team;
pub use win_prob::{calculate_outcome_probs, expected_score, sample_outcome, win_prob, Outcome, OutcomeProbs};

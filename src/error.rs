//! Configuration errors. The simulator itself cannot fail once constructed.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("team list is empty")]
    EmptyTeams,

    #[error("duplicate team name: {0}")]
    DuplicateTeam(String),

    #[error("no rating for team {0}")]
    MissingRating(String),

    #[error("rating given for unknown team {0}")]
    UnknownTeam(String),

    #[error("fixture {home} v {away} is invalid for a league of {teams} teams")]
    InvalidFixture {
        home: usize,
        away: usize,
        teams: usize,
    },

    #[error("simulation count must be positive")]
    InvalidSimulations,

    #[error("draw probability {0} is outside [0, 1]")]
    InvalidDrawProbability(f64),

    #[error("{field} must be finite, got {value}")]
    NonFiniteValue { field: String, value: f64 },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

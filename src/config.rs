//! League configuration with layered resolution.
//!
//! Resolution order (highest priority first):
//! 1. CLI flags (applied via `apply_cli_overrides`)
//! 2. TOML config file (`--config`)
//! 3. Compiled defaults (twenty teams, all rated 1500)

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    default_teams, DEFAULT_RATING, DEFAULT_SIMULATIONS, DRAW_PROB, HOME_ADVANTAGE,
};
use crate::error::ConfigError;
use crate::ratings::RatingsMap;
use crate::team::Team;

/// Every input to a season projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    /// Team names in table order; fixture generation follows this order
    pub teams: Vec<String>,

    /// Explicit ratings, keyed by team name
    pub ratings: RatingsMap,

    /// Rating for every team when `ratings` is empty
    pub default_rating: f64,

    /// Require an explicit rating for every team even when `ratings` is empty
    pub strict_ratings: bool,

    /// Rating points added to the home side
    pub home_advantage: f64,

    /// Fixed draw probability (0.0-1.0)
    pub draw_probability: f64,

    /// Number of simulated seasons
    pub simulations: usize,

    /// Master seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Run trials on the rayon pool
    pub parallel: bool,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            teams: default_teams(),
            ratings: RatingsMap::new(),
            default_rating: DEFAULT_RATING,
            strict_ratings: false,
            home_advantage: HOME_ADVANTAGE,
            draw_probability: DRAW_PROB,
            simulations: DEFAULT_SIMULATIONS,
            seed: None,
            parallel: false,
        }
    }
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub teams: Option<Vec<String>>,
    pub ratings_file: Option<PathBuf>,
    pub strict_ratings: bool,
    pub home_advantage: Option<f64>,
    pub draw_probability: Option<f64>,
    pub simulations: Option<usize>,
    pub seed: Option<u64>,
    pub parallel: bool,
}

impl LeagueConfig {
    /// Resolve config from an optional TOML file plus CLI overrides.
    pub fn load(path: Option<&Path>, cli: &CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_toml_file(p)?,
            None => Self::default(),
        };
        config.apply_cli_overrides(cli)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file. Missing keys take their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })
    }

    /// Apply CLI overrides (highest priority layer).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(teams) = &cli.teams {
            self.teams = teams.clone();
        }
        if let Some(path) = &cli.ratings_file {
            let mut file_ratings = RatingsMap::new();
            file_ratings.read_from_file(path)?;
            self.ratings.extend(file_ratings);
        }
        if cli.strict_ratings {
            self.strict_ratings = true;
        }
        if let Some(advantage) = cli.home_advantage {
            self.home_advantage = advantage;
        }
        if let Some(draw) = cli.draw_probability {
            self.draw_probability = draw;
        }
        if let Some(n) = cli.simulations {
            self.simulations = n;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.parallel {
            self.parallel = true;
        }
        Ok(())
    }

    /// Reject configurations the simulator cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.teams.is_empty() {
            return Err(ConfigError::EmptyTeams);
        }
        if self.simulations == 0 {
            return Err(ConfigError::InvalidSimulations);
        }
        if !(0.0..=1.0).contains(&self.draw_probability) {
            return Err(ConfigError::InvalidDrawProbability(self.draw_probability));
        }
        check_finite("home_advantage", self.home_advantage)?;
        check_finite("default_rating", self.default_rating)?;

        // A partial ratings map is an error; only an empty one falls back to the default
        let require_ratings = self.strict_ratings || !self.ratings.is_empty();
        let mut seen = HashSet::with_capacity(self.teams.len());
        for name in &self.teams {
            if !seen.insert(name.as_str()) {
                return Err(ConfigError::DuplicateTeam(name.clone()));
            }
            match self.ratings.get(name) {
                Some(rating) => check_finite(&format!("rating for {}", name), rating)?,
                None if require_ratings => return Err(ConfigError::MissingRating(name.clone())),
                None => {}
            }
        }

        // Sorted so the reported team is stable across runs
        let mut unknown: Vec<&str> = self.ratings.names().filter(|n| !seen.contains(n)).collect();
        unknown.sort_unstable();
        if let Some(name) = unknown.first() {
            return Err(ConfigError::UnknownTeam(name.to_string()));
        }

        Ok(())
    }

    /// Validate and resolve each team's rating, in team-list order.
    pub fn resolve_teams(&self) -> Result<Vec<Team>, ConfigError> {
        self.validate()?;

        if self.ratings.is_empty() {
            debug!(
                default_rating = self.default_rating,
                "no ratings given, every team at the default"
            );
        }

        Ok(self
            .teams
            .iter()
            .map(|name| Team::new(name.clone(), self.ratings.get(name).unwrap_or(self.default_rating)))
            .collect())
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteValue {
            field: field.to_string(),
            value,
        })
    }
}

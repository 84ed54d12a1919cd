use std::fmt;

use crate::constants::DEFAULT_RATING;

/// Team with a static Elo-style strength rating.
///
/// Ratings are fixed for the whole run; nothing in the simulator mutates them.
#[derive(Clone, Debug, PartialEq)]
pub struct Team {
    pub name: String,

    /// Strength rating on the Elo scale (1500 = league average)
    pub rating: f64,
}

impl Team {
    /// Create a new Team.
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Team {
            name: name.into(),
            rating,
        }
    }

    /// Create a team at the default rating
    pub fn unrated(name: impl Into<String>) -> Self {
        Team::new(name, DEFAULT_RATING)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrated_uses_default() {
        let team = Team::unrated("Fulham");
        assert_eq!(team.rating, DEFAULT_RATING);
        assert_eq!(team.to_string(), "Fulham: 1500");
    }
}

use rand::Rng;

use crate::constants::{DRAW_PROB, ELO_SCALE, POINTS_DRAW, POINTS_WIN};

/// Result of a single match from the home side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    /// League points awarded as (home_points, away_points)
    pub fn points(self) -> (u32, u32) {
        match self {
            Outcome::Home => (POINTS_WIN, 0),
            Outcome::Draw => (POINTS_DRAW, POINTS_DRAW),
            Outcome::Away => (0, POINTS_WIN),
        }
    }
}

/// Three-way outcome distribution for a fixture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutcomeProbs {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OutcomeProbs {
    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }
}

/// Standard Elo expectation of `rating_a` scoring against `rating_b`.
///
/// Bounded in (0, 1) for finite inputs and exactly 0.5 at equal ratings.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf(-(rating_a - rating_b) / ELO_SCALE))
}

/// Calculate the home/draw/away distribution for a matchup.
///
/// The home side gets `home_advantage` rating points before the logistic
/// expectation is taken. The draw probability is a flat constant, the home
/// expectation is scaled into the remaining mass and the away probability
/// closes the simplex by subtraction.
///
/// # Arguments
/// * `home_rating` - Rating of the home team
/// * `away_rating` - Rating of the away team
/// * `home_advantage` - Rating points added to the home side
/// * `draw_prob` - Fixed draw probability (0.0-1.0)
pub fn calculate_outcome_probs(
    home_rating: f64,
    away_rating: f64,
    home_advantage: f64,
    draw_prob: f64,
) -> OutcomeProbs {
    let home_raw = expected_score(home_rating + home_advantage, away_rating);
    let home = home_raw * (1.0 - draw_prob);
    let away = 1.0 - home - draw_prob;

    OutcomeProbs {
        home,
        draw: draw_prob,
        // Rounding can leave a hair below zero near saturation
        away: away.max(0.0),
    }
}

/// Outcome distribution with the league's fixed draw probability.
pub fn win_prob(home_rating: f64, away_rating: f64, home_advantage: f64) -> OutcomeProbs {
    calculate_outcome_probs(home_rating, away_rating, home_advantage, DRAW_PROB)
}

/// Map a uniform draw `u` in [0, 1) onto an outcome by inverse transform.
pub fn sample_outcome(probs: &OutcomeProbs, u: f64) -> Outcome {
    if u < probs.home {
        Outcome::Home
    } else if u < probs.home + probs.draw {
        Outcome::Draw
    } else {
        Outcome::Away
    }
}

/// Draw one outcome from `probs` using `rng`.
pub fn simulate_outcome<R: Rng>(probs: &OutcomeProbs, rng: &mut R) -> Outcome {
    sample_outcome(probs, rng.gen::<f64>())
}

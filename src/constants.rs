/// Rating assigned to every team when no better data is available
pub const DEFAULT_RATING: f64 = 1500.0;

/// Rating points added to the home side before computing win expectation
pub const HOME_ADVANTAGE: f64 = 50.0;

/// Fixed probability of a drawn match, independent of rating difference
pub const DRAW_PROB: f64 = 0.2;

/// Logistic scale of the Elo expectation (a 400 point gap is 10:1 odds)
pub const ELO_SCALE: f64 = 400.0;

/// Number of simulated seasons per run
pub const DEFAULT_SIMULATIONS: usize = 5000;

/// League points for a win
pub const POINTS_WIN: u32 = 3;

/// League points for each side in a draw
pub const POINTS_DRAW: u32 = 1;

/// Default league: twenty clubs, in table order of the seeded run
pub const DEFAULT_TEAMS: [&str; 20] = [
    "Arsenal",
    "Man City",
    "Man United",
    "Chelsea",
    "Liverpool",
    "Tottenham",
    "Newcastle",
    "Brighton",
    "Aston Villa",
    "Brentford",
    "Fulham",
    "West Ham",
    "Crystal Palace",
    "Wolves",
    "Bournemouth",
    "Everton",
    "Leicester",
    "Nottingham Forest",
    "Southampton",
    "Sheffield Utd",
];

/// Default team list as owned names
pub fn default_teams() -> Vec<String> {
    DEFAULT_TEAMS.iter().map(|name| name.to_string()).collect()
}

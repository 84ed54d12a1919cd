/// A scheduled match, holding indices into the league's team list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fixture {
    pub home: usize,
    pub away: usize,
}

impl Fixture {
    pub fn new(home: usize, away: usize) -> Self {
        debug_assert_ne!(home, away, "a team cannot play itself");
        Fixture { home, away }
    }
}

/// Generate every ordered pair of distinct teams.
///
/// Fixtures come out home-major: all of team 0's home games first, then team
/// 1's, and so on. Each pair meets twice, once at each ground, giving
/// `n * (n - 1)` fixtures. The trial loop consumes random draws in this order.
pub fn generate_fixtures(num_teams: usize) -> Vec<Fixture> {
    let mut fixtures = Vec::with_capacity(num_teams * num_teams.saturating_sub(1));

    for home in 0..num_teams {
        for away in 0..num_teams {
            if home != away {
                fixtures.push(Fixture::new(home, away));
            }
        }
    }

    fixtures
}

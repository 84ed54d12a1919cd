use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Team name to rating lookup.
///
/// Ratings are static inputs; the map is read once at startup and handed to
/// the simulator, which copies what it needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingsMap {
    ratings: HashMap<String, f64>,
}

impl RatingsMap {
    pub fn new() -> Self {
        RatingsMap {
            ratings: HashMap::new(),
        }
    }

    /// Read ratings from a CSV file.
    /// Format: team,rating
    ///
    /// Blank lines and lines starting with `#` are skipped. A first data line
    /// whose rating column does not parse is treated as a header.
    pub fn read_from_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut loaded = 0;
        let mut first_data_line = true;
        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((name, rating)) = line.rsplit_once(',') else {
                return Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    message: format!("line {}: expected `team,rating`", lineno + 1),
                });
            };

            let is_first = std::mem::replace(&mut first_data_line, false);
            let rating: f64 = match rating.trim().parse() {
                Ok(r) => r,
                Err(_) if is_first => continue,
                Err(e) => {
                    return Err(ConfigError::Parse {
                        path: path.to_path_buf(),
                        message: format!("line {}: invalid rating: {}", lineno + 1, e),
                    })
                }
            };

            self.set(name.trim(), rating);
            loaded += 1;
        }

        debug!(path = %path.display(), loaded, "read ratings file");
        Ok(())
    }

    /// Add or update a team's rating.
    pub fn set(&mut self, name: &str, rating: f64) {
        self.ratings.insert(name.to_string(), rating);
    }

    /// Get a team's rating, if one exists.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.ratings.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ratings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Team names with a rating, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ratings.keys().map(String::as_str)
    }

    /// Merge `other` into this map; entries in `other` win.
    pub fn extend(&mut self, other: RatingsMap) {
        self.ratings.extend(other.ratings);
    }
}

impl FromIterator<(String, f64)> for RatingsMap {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        RatingsMap {
            ratings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_read_from_file() {
        let file = write_csv("team,rating\nArsenal,1620\n\n# promoted\nLuton Town, 1390.5\n");

        let mut ratings = RatingsMap::new();
        ratings.read_from_file(file.path()).unwrap();

        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings.get("Arsenal"), Some(1620.0));
        assert_eq!(ratings.get("Luton Town"), Some(1390.5));
        assert!(!ratings.contains("team"));
    }

    #[test]
    fn test_read_without_header() {
        let file = write_csv("Brighton,1555\n");

        let mut ratings = RatingsMap::new();
        ratings.read_from_file(file.path()).unwrap();

        assert_eq!(ratings.get("Brighton"), Some(1555.0));
    }

    #[test]
    fn test_header_after_comments() {
        let file = write_csv("# end of season ratings\n\nteam,rating\nWolves,1460\n");

        let mut ratings = RatingsMap::new();
        ratings.read_from_file(file.path()).unwrap();

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings.get("Wolves"), Some(1460.0));
    }

    #[test]
    fn test_header_only_skipped_once() {
        let file = write_csv("team,rating\nname,rating\n");

        let mut ratings = RatingsMap::new();
        assert!(matches!(
            ratings.read_from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_bad_rating_rejected() {
        let file = write_csv("Arsenal,1620\nChelsea,strong\n");

        let mut ratings = RatingsMap::new();
        let err = ratings.read_from_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_missing_column_rejected() {
        let file = write_csv("Arsenal\n");

        let mut ratings = RatingsMap::new();
        assert!(matches!(
            ratings.read_from_file(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let mut ratings = RatingsMap::new();
        let err = ratings
            .read_from_file(Path::new("/nonexistent/ratings.csv"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_set_overwrites() {
        let mut ratings = RatingsMap::new();
        ratings.set("Wolves", 1450.0);
        ratings.set("Wolves", 1470.0);

        assert_eq!(ratings.len(), 1);
        assert_eq!(ratings.get("Wolves"), Some(1470.0));
    }
}

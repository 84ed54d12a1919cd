use std::fmt::Write;

use serde::Serialize;

/// One line of the projected table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StandingsRow {
    pub team: String,
    pub predicted_points: f64,
}

/// Teams ranked by mean simulated points, highest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictedTable {
    rows: Vec<StandingsRow>,
}

impl PredictedTable {
    /// Build a ranked table from parallel name/mean slices.
    ///
    /// The sort is stable, so teams with identical means keep their input order.
    pub fn from_means(names: &[String], means: &[f64]) -> Self {
        let mut rows: Vec<StandingsRow> = names
            .iter()
            .zip(means)
            .map(|(team, &predicted_points)| StandingsRow {
                team: team.clone(),
                predicted_points,
            })
            .collect();

        rows.sort_by(|a, b| b.predicted_points.total_cmp(&a.predicted_points));

        PredictedTable { rows }
    }

    pub fn rows(&self) -> &[StandingsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Predicted points for `team`, if it is in the table.
    pub fn points_for(&self, team: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|row| row.team == team)
            .map(|row| row.predicted_points)
    }

    /// 1-based table position of `team`.
    pub fn position(&self, team: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.team == team).map(|i| i + 1)
    }

    fn name_width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.team.chars().count())
            .max()
            .unwrap_or(0)
            .max(4)
    }

    /// Fixed-width ranked table.
    pub fn render_text(&self) -> String {
        let width = self.name_width();
        let mut out = String::new();

        let _ = writeln!(out, " {:>2}  {:<width$}  {:>16}", "#", "Team", "Predicted Points");
        let _ = writeln!(out, "{:-<1$}", "", width + 24);
        for (rank, row) in self.rows.iter().enumerate() {
            let _ = writeln!(
                out,
                " {:>2}  {:<width$}  {:>16.2}",
                rank + 1,
                row.team,
                row.predicted_points
            );
        }

        out
    }

    /// Horizontal bar chart, bars scaled so the leader spans `bar_width` cells.
    pub fn render_bar_chart(&self, bar_width: usize) -> String {
        let width = self.name_width();
        let max = self
            .rows
            .first()
            .map(|row| row.predicted_points)
            .unwrap_or(0.0);
        let mut out = String::new();

        let _ = writeln!(out, "Predicted Points");
        for row in &self.rows {
            let len = if max > 0.0 {
                ((row.predicted_points / max) * bar_width as f64).round() as usize
            } else {
                0
            };
            let _ = writeln!(
                out,
                "{:<width$} | {} {:.1}",
                row.team,
                "█".repeat(len),
                row.predicted_points
            );
        }

        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorted_descending() {
        let table = PredictedTable::from_means(&names(&["A", "B", "C"]), &[40.0, 71.5, 55.0]);
        let order: Vec<&str> = table.rows().iter().map(|r| r.team.as_str()).collect();

        assert_eq!(order, vec!["B", "C", "A"]);
        assert_eq!(table.position("A"), Some(3));
        assert_eq!(table.points_for("C"), Some(55.0));
        assert_eq!(table.points_for("Z"), None);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let table = PredictedTable::from_means(
            &names(&["Wolves", "Everton", "Fulham", "Brentford"]),
            &[50.0, 60.0, 50.0, 50.0],
        );
        let order: Vec<&str> = table.rows().iter().map(|r| r.team.as_str()).collect();

        assert_eq!(order, vec!["Everton", "Wolves", "Fulham", "Brentford"]);
    }

    #[test]
    fn test_render_text() {
        let table = PredictedTable::from_means(&names(&["A", "B"]), &[3.0, 6.0]);
        let text = table.render_text();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Predicted Points"));
        assert!(lines[2].contains("B") && lines[2].ends_with("6.00"));
        assert!(lines[3].contains("A") && lines[3].ends_with("3.00"));
    }

    #[test]
    fn test_render_bar_chart_scaling() {
        let table = PredictedTable::from_means(&names(&["A", "B"]), &[20.0, 40.0]);
        let chart = table.render_bar_chart(10);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[1].matches('█').count(), 10);
        assert_eq!(lines[2].matches('█').count(), 5);
    }

    #[test]
    fn test_render_bar_chart_all_zero() {
        let table = PredictedTable::from_means(&names(&["A"]), &[0.0]);
        assert_eq!(table.render_bar_chart(10).matches('█').count(), 0);
    }

    #[test]
    fn test_to_json() {
        let table = PredictedTable::from_means(&names(&["A", "B"]), &[1.0, 4.0]);
        let json: serde_json::Value = serde_json::from_str(&table.to_json().unwrap()).unwrap();

        assert_eq!(json[0]["team"], "B");
        assert_eq!(json[0]["predicted_points"], 4.0);
        assert_eq!(json.as_array().unwrap().len(), 2);
    }
}

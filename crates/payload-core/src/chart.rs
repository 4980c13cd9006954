//! Donut chart input derived from the ordered rows.

use payload_model::Mission;
use serde::{Deserialize, Serialize};

/// Label of the single chart dataset.
pub const CHART_DATASET_LABEL: &str = "Total Mass";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
}

/// Chart input: labels, values and colors index-aligned with the table rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

/// One donut segment with its share of the filtered mass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSegment<'a> {
    pub label: &'a str,
    pub value: f64,
    pub color: &'a str,
    /// Fraction of the summed value, in `0.0..=1.0`.
    pub share: f64,
}

impl ChartData {
    pub fn from_rows(rows: &[Mission]) -> Self {
        Self {
            labels: rows.iter().map(|row| row.name.clone()).collect(),
            datasets: vec![ChartDataset {
                label: CHART_DATASET_LABEL.to_string(),
                data: rows.iter().map(|row| row.total).collect(),
                background_color: rows.iter().map(|row| row.color.clone()).collect(),
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Sum of all segment values.
    pub fn total(&self) -> f64 {
        self.datasets
            .first()
            .map(|dataset| dataset.data.iter().sum())
            .unwrap_or(0.0)
    }

    /// Segments in row order.
    pub fn segments(&self) -> Vec<ChartSegment<'_>> {
        let Some(dataset) = self.datasets.first() else {
            return Vec::new();
        };
        let total = self.total();
        self.labels
            .iter()
            .zip(&dataset.data)
            .zip(&dataset.background_color)
            .map(|((label, value), color)| ChartSegment {
                label,
                value: *value,
                color,
                share: if total > 0.0 { value / total } else { 0.0 },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, color: &str, total: f64) -> Mission {
        Mission {
            name: name.to_string(),
            color: color.to_string(),
            total,
        }
    }

    #[test]
    fn projection_is_index_aligned() {
        let rows = vec![row("Apollo", "#aaaaaa", 30.0), row("Vostok", "#bbbbbb", 10.0)];
        let chart = ChartData::from_rows(&rows);
        assert_eq!(chart.labels, vec!["Apollo", "Vostok"]);
        assert_eq!(chart.datasets[0].label, CHART_DATASET_LABEL);
        assert_eq!(chart.datasets[0].data, vec![30.0, 10.0]);
        assert_eq!(chart.datasets[0].background_color, vec!["#aaaaaa", "#bbbbbb"]);
    }

    #[test]
    fn segments_carry_shares() {
        let rows = vec![row("Apollo", "#aaaaaa", 30.0), row("Vostok", "#bbbbbb", 10.0)];
        let chart = ChartData::from_rows(&rows);
        let segments = chart.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].share, 0.75);
        assert_eq!(segments[1].share, 0.25);
        assert_eq!(segments[1].color, "#bbbbbb");
    }

    #[test]
    fn empty_rows_give_empty_chart() {
        let chart = ChartData::from_rows(&[]);
        assert!(chart.is_empty());
        assert_eq!(chart.total(), 0.0);
        assert!(chart.segments().is_empty());
    }

    #[test]
    fn serializes_chart_js_shape() {
        let chart = ChartData::from_rows(&[row("Apollo", "#aaaaaa", 10.0)]);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["datasets"][0]["backgroundColor"][0], "#aaaaaa");
        assert_eq!(json["datasets"][0]["label"], "Total Mass");
    }
}

//! Mapping of analysis rows onto the two-axis Plotly chart.
//!
//! Safety is drawn against the left axis, fixed to `[0, 5]`. Crowd level is a
//! stepped line on an overlaid right axis fixed to `[0, 4]`, where only the
//! ticks 1..=3 carry labels so 0 and 4 act as padding.

use crate::{AnalysisRow, CrowdLevel};
use serde_json::{Value, json};

pub const CHART_ELEMENT_ID: &str = "analysisChart";

pub const SAFETY_AXIS_RANGE: [u8; 2] = [0, 5];
pub const CROWD_AXIS_RANGE: [u8; 2] = [0, 4];

const CROWD_LEVELS: [CrowdLevel; 3] = [CrowdLevel::Low, CrowdLevel::Medium, CrowdLevel::High];

/// Label drawn next to a tick of the crowd axis.
pub fn crowd_tick_label(value: u8) -> &'static str {
    CROWD_LEVELS
        .iter()
        .find(|level| level.chart_value() == value)
        .map(|level| level.as_str())
        .unwrap_or("")
}

/// Identifies one drawn chart so it can be disposed before the next is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(u64);

impl ChartHandle {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(self) -> u64 {
        self.0
    }

    /// Id of the element the chart is drawn into.
    pub fn element_id(self) -> &'static str {
        CHART_ELEMENT_ID
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisChart {
    pub labels: Vec<String>,
    pub safety: Vec<u8>,
    pub crowd: Vec<u8>,
}

impl AnalysisChart {
    pub fn from_rows(rows: &[AnalysisRow]) -> Self {
        Self {
            labels: rows.iter().map(|row| row.time.clone()).collect(),
            safety: rows.iter().map(|row| row.safety_rating.value()).collect(),
            crowd: rows.iter().map(|row| row.crowd_level.chart_value()).collect(),
        }
    }

    pub fn traces(&self) -> Value {
        json!([
            {
                "x": self.labels,
                "y": self.safety,
                "type": "scatter",
                "mode": "lines",
                "name": "Safety Rating",
                "yaxis": "y",
                "line": {"color": "green", "shape": "spline", "smoothing": 0.1}
            },
            {
                "x": self.labels,
                "y": self.crowd,
                "type": "scatter",
                "mode": "lines",
                "name": "Crowd Level",
                "yaxis": "y2",
                "line": {"color": "red", "shape": "hv"}
            }
        ])
    }

    pub fn layout(&self) -> Value {
        let crowd_ticks: Vec<u8> = CROWD_LEVELS.iter().map(|level| level.chart_value()).collect();
        let crowd_labels: Vec<&str> = crowd_ticks.iter().map(|&tick| crowd_tick_label(tick)).collect();

        json!({
            "autosize": true,
            "margin": {"t": 10, "r": 60, "l": 60, "b": 40},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "xaxis": {"type": "category", "showgrid": false},
            "yaxis": {
                "title": {"text": "Safety Rating"},
                "side": "left",
                "range": SAFETY_AXIS_RANGE,
                "fixedrange": true
            },
            "yaxis2": {
                "title": {"text": "Crowd Level"},
                "side": "right",
                "overlaying": "y",
                "range": CROWD_AXIS_RANGE,
                "fixedrange": true,
                "dtick": 1,
                "tickmode": "array",
                "tickvals": crowd_ticks,
                "ticktext": crowd_labels,
                "showgrid": false
            },
            "legend": {"orientation": "h", "y": -0.2}
        })
    }

    pub fn config(&self) -> Value {
        json!({"responsive": true, "displayModeBar": false})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::central_rows;

    #[test]
    fn test_series_from_rows() {
        let chart = AnalysisChart::from_rows(&central_rows());

        assert_eq!(chart.labels, vec!["00:00", "01:00"]);
        assert_eq!(chart.safety, vec![4, 2]);
        assert_eq!(chart.crowd, vec![1, 3]);
    }

    #[test]
    fn test_crowd_tick_labels_pad_both_ends() {
        let labels: Vec<&str> = (0..=4).map(crowd_tick_label).collect();
        assert_eq!(labels, vec!["", "Low", "Medium", "High", ""]);
    }

    #[test]
    fn test_traces_use_separate_axes() {
        let traces = AnalysisChart::from_rows(&central_rows()).traces();

        assert_eq!(traces[0]["name"], "Safety Rating");
        assert_eq!(traces[0]["yaxis"], "y");
        assert_eq!(traces[0]["y"], json!([4, 2]));
        assert_eq!(traces[1]["name"], "Crowd Level");
        assert_eq!(traces[1]["yaxis"], "y2");
        assert_eq!(traces[1]["line"]["shape"], "hv");
        assert_eq!(traces[1]["y"], json!([1, 3]));
    }

    #[test]
    fn test_layout_fixes_axis_ranges() {
        let layout = AnalysisChart::from_rows(&central_rows()).layout();

        assert_eq!(layout["yaxis"]["range"], json!([0, 5]));
        assert_eq!(layout["yaxis2"]["range"], json!([0, 4]));
        assert_eq!(layout["yaxis2"]["overlaying"], "y");
        assert_eq!(layout["yaxis2"]["side"], "right");
        assert_eq!(layout["yaxis2"]["tickvals"], json!([1, 2, 3]));
        assert_eq!(layout["yaxis2"]["ticktext"], json!(["Low", "Medium", "High"]));
    }

    #[test]
    fn test_handle_element_id() {
        assert_eq!(ChartHandle::new(7).element_id(), "analysisChart");
        assert_eq!(ChartHandle::new(7).generation(), 7);
    }
}

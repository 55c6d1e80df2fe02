//! Shared station-analysis types and the UI logic that does not need a live
//! document. The frontend crate renders what this crate computes, so every
//! behaviour here can be exercised with fixture data on the native target.

pub mod autocomplete;
pub mod chart;
pub mod controller;
pub mod error;
pub mod stations;
pub mod table;

pub use autocomplete::{Suggestion, SuggestionPanel};
pub use chart::{AnalysisChart, ChartHandle};
pub use controller::{AnalysisReport, AnalysisView, ClickTarget, Command, RequestId, StationApp, UiEvent, UiEvents};
pub use error::{ApiError, AppError};
pub use stations::{LoadStatus, StationRepository};
pub use table::AnalysisTable;

use serde::{Deserialize, Serialize};
use std::fmt;

// ===================== Stations =====================

/// A named transit stop, identified by its display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Station(String);

impl Station {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Station {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

// ===================== Analysis =====================

/// Categorical occupancy indicator for one time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    /// Position on the crowd axis of the analysis chart.
    pub fn chart_value(self) -> u8 {
        match self {
            CrowdLevel::Low => 1,
            CrowdLevel::Medium => 2,
            CrowdLevel::High => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CrowdLevel::Low => "Low",
            CrowdLevel::Medium => "Medium",
            CrowdLevel::High => "High",
        }
    }
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Safety score for a time slot, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct SafetyRating(u8);

impl SafetyRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for SafetyRating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(format!(
                "safety rating {} outside {}..={}",
                value,
                Self::MIN,
                Self::MAX
            ))
        }
    }
}

impl From<SafetyRating> for u8 {
    fn from(rating: SafetyRating) -> Self {
        rating.0
    }
}

impl fmt::Display for SafetyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One hour slot of the `/station_analysis` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub time: String,
    #[serde(rename = "Crowd_Level")]
    pub crowd_level: CrowdLevel,
    #[serde(rename = "Safety_Rating")]
    pub safety_rating: SafetyRating,
}

impl AnalysisRow {
    pub fn new(time: impl Into<String>, crowd_level: CrowdLevel, safety_rating: SafetyRating) -> Self {
        Self {
            time: time.into(),
            crowd_level,
            safety_rating,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    pub fn rating(value: i64) -> SafetyRating {
        SafetyRating::try_from(value).unwrap()
    }

    pub fn stations(names: &[&str]) -> Vec<Station> {
        names.iter().map(|name| Station::from(*name)).collect()
    }

    pub fn central_rows() -> Vec<AnalysisRow> {
        vec![
            AnalysisRow::new("00:00", CrowdLevel::Low, rating(4)),
            AnalysisRow::new("01:00", CrowdLevel::High, rating(2)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_analysis_rows() {
        let payload = json!([
            {"time": "00:00", "Crowd_Level": "Low", "Safety_Rating": 4},
            {"time": "01:00", "Crowd_Level": "High", "Safety_Rating": 2}
        ]);

        let rows: Vec<AnalysisRow> = serde_json::from_value(payload).expect("valid rows");
        assert_eq!(rows, testing::central_rows());
    }

    #[test]
    fn test_decode_rejects_unknown_crowd_level() {
        let payload = json!([{"time": "00:00", "Crowd_Level": "Extreme", "Safety_Rating": 3}]);
        let result: Result<Vec<AnalysisRow>, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_rejects_out_of_range_rating() {
        for rating in [0, 6, -1] {
            let payload = json!([{"time": "00:00", "Crowd_Level": "Low", "Safety_Rating": rating}]);
            let result: Result<Vec<AnalysisRow>, _> = serde_json::from_value(payload);
            assert!(result.is_err(), "rating {} should be rejected", rating);
        }
    }

    #[test]
    fn test_decode_rejects_missing_crowd_level() {
        let payload = json!([{"time": "00:00", "Safety_Rating": 3}]);
        let result: Result<Vec<AnalysisRow>, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_station_list_is_plain_strings() {
        let stations: Vec<Station> =
            serde_json::from_str(r#"["Central", "North Ave"]"#).expect("valid list");
        assert_eq!(stations, testing::stations(&["Central", "North Ave"]));
        assert_eq!(serde_json::to_string(&stations[1]).unwrap(), r#""North Ave""#);
    }

    #[test]
    fn test_crowd_level_chart_values() {
        assert_eq!(CrowdLevel::Low.chart_value(), 1);
        assert_eq!(CrowdLevel::Medium.chart_value(), 2);
        assert_eq!(CrowdLevel::High.chart_value(), 3);
        assert_eq!(CrowdLevel::Medium.to_string(), "Medium");
    }
}

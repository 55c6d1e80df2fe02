use crate::{AnalysisRow, Station};

pub const TABLE_HEADERS: [&str; 3] = ["Time", "Crowd Level", "Safety Rating (1-5)"];

/// Text content of the 24-hour analysis table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTable {
    pub title: String,
    pub rows: Vec<[String; 3]>,
}

impl AnalysisTable {
    pub fn new(station: &Station, rows: &[AnalysisRow]) -> Self {
        Self {
            title: format!("24-Hour Analysis for {}", station),
            rows: rows
                .iter()
                .map(|row| {
                    [
                        row.time.clone(),
                        row.crowd_level.to_string(),
                        row.safety_rating.to_string(),
                    ]
                })
                .collect(),
        }
    }

    pub fn headers(&self) -> [&'static str; 3] {
        TABLE_HEADERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::central_rows;

    #[test]
    fn test_one_table_row_per_analysis_row() {
        let table = AnalysisTable::new(&Station::from("Central"), &central_rows());

        assert_eq!(table.title, "24-Hour Analysis for Central");
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], ["00:00", "Low", "4"]);
        assert_eq!(table.rows[1], ["01:00", "High", "2"]);
    }

    #[test]
    fn test_empty_analysis_has_only_headers() {
        let table = AnalysisTable::new(&Station::from("Central"), &[]);
        assert!(table.rows.is_empty());
        assert_eq!(table.headers(), ["Time", "Crowd Level", "Safety Rating (1-5)"]);
    }
}

//! The list of known stations, loaded once from the API.

use crate::Station;
use crate::error::ApiError;
use std::collections::HashSet;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StationRepository {
    stations: Vec<Station>,
    status: LoadStatus,
}

impl StationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that is already loaded, for fixtures.
    pub fn with_stations(stations: Vec<Station>) -> Self {
        let mut repository = Self::new();
        repository.load(Ok(stations));
        repository
    }

    /// Stores the outcome of the stations request.
    ///
    /// Duplicate names keep their first position. On failure the list is
    /// left empty and the error is handed back to the caller.
    pub fn load(&mut self, result: Result<Vec<Station>, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(stations) => {
                let received = stations.len();
                let mut seen = HashSet::with_capacity(received);
                self.stations = stations
                    .into_iter()
                    .filter(|station| seen.insert(station.clone()))
                    .collect();
                if self.stations.len() != received {
                    warn!(
                        "Dropped {} duplicate station names",
                        received - self.stations.len()
                    );
                }
                self.status = LoadStatus::Ready;
                info!("Loaded {} stations", self.stations.len());
                Ok(())
            }
            Err(err) => {
                self.stations.clear();
                self.status = LoadStatus::Failed;
                Err(err)
            }
        }
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::stations;

    #[test]
    fn test_new_repository_is_pending() {
        let repository = StationRepository::new();
        assert_eq!(repository.status(), LoadStatus::Pending);
        assert!(repository.stations().is_empty());
    }

    #[test]
    fn test_load_keeps_api_order() {
        let mut repository = StationRepository::new();
        repository
            .load(Ok(stations(&["Northgate", "Central", "North Ave"])))
            .expect("load should succeed");

        assert!(repository.is_ready());
        assert_eq!(repository.stations(), stations(&["Northgate", "Central", "North Ave"]).as_slice());
    }

    #[test]
    fn test_load_drops_duplicates() {
        let mut repository = StationRepository::new();
        repository
            .load(Ok(stations(&["Central", "North Ave", "Central"])))
            .expect("load should succeed");

        assert_eq!(repository.stations(), stations(&["Central", "North Ave"]).as_slice());
    }

    #[test]
    fn test_failed_load_leaves_list_empty() {
        let mut repository = StationRepository::with_stations(stations(&["Central"]));
        let result = repository.load(Err(ApiError::Status(503)));

        assert_eq!(result, Err(ApiError::Status(503)));
        assert_eq!(repository.status(), LoadStatus::Failed);
        assert!(repository.stations().is_empty());
    }
}

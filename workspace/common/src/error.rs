use crate::Station;
use thiserror::Error;

/// Transport-level failure of a request to the station API
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Request failed: {0}")]
    Network(String),

    /// The API answered with a non-success status
    #[error("HTTP error: {0}")]
    Status(u16),

    /// The body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Failures shown to the user in the error area.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Error: Could not fetch station list. Is the API running?")]
    StationListUnavailable(#[source] ApiError),

    #[error("Error: Could not get analysis for \"{station}\".")]
    AnalysisUnavailable {
        station: Station,
        #[source]
        source: ApiError,
    },
}

impl AppError {
    /// The underlying transport error, for logging.
    pub fn cause(&self) -> &ApiError {
        match self {
            AppError::StationListUnavailable(source) => source,
            AppError::AnalysisUnavailable { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages() {
        let err = AppError::StationListUnavailable(ApiError::Network("refused".to_string()));
        assert_eq!(
            err.to_string(),
            "Error: Could not fetch station list. Is the API running?"
        );

        let err = AppError::AnalysisUnavailable {
            station: Station::from("Central"),
            source: ApiError::Status(404),
        };
        assert_eq!(err.to_string(), "Error: Could not get analysis for \"Central\".");
        assert_eq!(err.cause(), &ApiError::Status(404));
    }

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error: 500");
        assert!(ApiError::Decode("eof".to_string()).to_string().contains("eof"));
    }
}

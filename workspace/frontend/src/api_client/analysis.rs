use common::{AnalysisRow, ApiError, Station};
use crate::api_client;

fn analysis_endpoint(station: &Station) -> String {
    let name: String = js_sys::encode_uri_component(station.name()).into();
    format!("/station_analysis?name={}", name)
}

/// Fetch the 24-hour analysis for one station. Rows with an unknown crowd
/// level or an out-of-range rating fail the whole response.
pub async fn fetch_analysis(station: &Station) -> Result<Vec<AnalysisRow>, ApiError> {
    log::trace!("Fetching analysis for station: {}", station);

    let result = api_client::get::<Vec<AnalysisRow>>(&analysis_endpoint(station)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch analysis for {}: {}", station, e);
    } else {
        log::info!("Successfully fetched analysis for station: {}", station);
    }

    result
}

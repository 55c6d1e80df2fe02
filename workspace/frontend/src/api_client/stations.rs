use common::{ApiError, Station};
use crate::api_client;

pub async fn fetch_stations() -> Result<Vec<Station>, ApiError> {
    log::trace!("Fetching station list");
    let result = api_client::get::<Vec<Station>>("/stations").await;

    match &result {
        Ok(stations) => log::info!("Fetched {} stations", stations.len()),
        Err(e) => log::error!("Failed to fetch station list: {}", e),
    }

    result
}

pub mod analysis;
pub mod stations;

use common::ApiError;
use gloo_net::http::Request;
use serde::Deserialize;
use crate::settings;

/// Common GET request handler. The station API answers with bare JSON
/// documents, so the body is decoded straight into `T`.
pub async fn get<T>(endpoint: &str) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let err = ApiError::Network(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    if !response.ok() {
        let err = ApiError::Status(response.status());
        log::error!("GET {} - {}", endpoint, err);
        return Err(err);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data: T = response
        .json()
        .await
        .map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            log::error!("GET {} - {}", endpoint, err);
            err
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

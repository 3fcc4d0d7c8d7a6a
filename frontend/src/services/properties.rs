//! HTTP service for the property API.

use estately::{ApiConfig, FetchError, FetchResult, Property};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Client for the remote property service.
///
/// One attempt per call: no retries, no timeout policy, no caching.
#[derive(Clone, Debug)]
pub struct PropertyService {
    config: ApiConfig,
}

impl PropertyService {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Service configured for this browser (see [`crate::config::api_config`]).
    pub fn from_env() -> Self {
        Self::new(crate::config::api_config())
    }

    /// `GET /api/properties`
    pub async fn fetch_all(&self) -> FetchResult<Vec<Property>> {
        get_json(&self.config.all_properties_url()).await
    }

    /// `GET /api/properties/propertyType/{type}`
    pub async fn fetch_by_type(&self, property_type: &str) -> FetchResult<Vec<Property>> {
        get_json(&self.config.properties_by_type_url(property_type)).await
    }

    /// `GET /api/properties/{id}`
    pub async fn fetch_by_id(&self, id: &str) -> FetchResult<Property> {
        get_json(&self.config.property_url(id)).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> FetchResult<T> {
    log::debug!("GET {}", url);

    let response = Request::get(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(FetchError::Status {
            status: response.status(),
            body,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

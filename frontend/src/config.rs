//! Application configuration.
//!
//! Centralized configuration for the Estately frontend. The service address
//! is fixed at build time and can be overridden per browser through local
//! storage, which is handy when pointing a deployed build at a staging API.

use estately::ApiConfig;

/// Property service base URL.
///
/// Set `ESTATELY_API_URL` when building to change it.
pub const BACKEND_URL: &str = match option_env!("ESTATELY_API_URL") {
    Some(url) => url,
    None => estately::DEFAULT_API_URL,
};

/// Local storage key holding a per-browser service URL override.
pub const API_URL_STORAGE_KEY: &str = "estately_api_url";

/// Application name, used for page titles.
pub const APP_NAME: &str = "Estately";

/// Name shown on the seller dashboard when none is supplied.
pub const DEFAULT_SELLER_NAME: &str = "Seller";

/// Resolve the service configuration for this browser.
pub fn api_config() -> ApiConfig {
    let override_url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_STORAGE_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    match override_url {
        Some(url) => {
            log::info!("Using property service override: {}", url);
            ApiConfig::new(url)
        }
        None => ApiConfig::new(BACKEND_URL),
    }
}

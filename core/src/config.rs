//! Property service addressing.
//!
//! Builds the three endpoint URLs from a configured base address. Path
//! segments are passed through untouched; the service decides what an empty
//! or unknown segment means.

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Location of the property service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Trailing slashes are dropped so paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/properties`
    pub fn all_properties_url(&self) -> String {
        format!("{}/api/properties", self.base_url)
    }

    /// `GET /api/properties/propertyType/{type}`
    pub fn properties_by_type_url(&self, property_type: &str) -> String {
        format!("{}/api/properties/propertyType/{}", self.base_url, property_type)
    }

    /// `GET /api/properties/{id}`
    pub fn property_url(&self, id: &str) -> String {
        format!("{}/api/properties/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let config = ApiConfig::default();
        assert_eq!(config.all_properties_url(), "http://localhost:8080/api/properties");
        assert_eq!(
            config.properties_by_type_url("Villa"),
            "http://localhost:8080/api/properties/propertyType/Villa"
        );
        assert_eq!(config.property_url("1"), "http://localhost:8080/api/properties/1");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://api.estately.dev//");
        assert_eq!(config.base_url(), "https://api.estately.dev");
        assert_eq!(config.property_url("42"), "https://api.estately.dev/api/properties/42");
    }

    #[test]
    fn test_segments_are_opaque() {
        let config = ApiConfig::default();
        assert_eq!(
            config.properties_by_type_url(""),
            "http://localhost:8080/api/properties/propertyType/"
        );
    }
}

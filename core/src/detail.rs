//! Display model for the property details page.

use crate::listing::{format_amount, Listing};
use crate::models::Property;

/// Amenities listed on every details page, independent of the record.
pub const AMENITIES: [&str; 7] = [
    "Swimming pool",
    "Gym",
    "24/7 Security",
    "Parking",
    "Garden",
    "Playground",
    "Clubhouse",
];

/// Shown instead of an empty feature list.
pub const NO_FEATURES: &str = "No features listed";

/// Shown when the details request fails.
pub const DETAIL_ERROR_MESSAGE: &str = "Error fetching property details";

/// Text lines of a details page, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyDetail {
    /// `{type} in {location}`, also the image alt text
    pub heading: String,
    pub listing: Listing,
    /// `Buy at ...` / `Rent at ...`
    pub price: String,
    pub bhk: String,
    pub size: String,
    /// `{name}, {contact}`
    pub agent: String,
    pub details: String,
    /// Record features, or the single [`NO_FEATURES`] line
    pub features: Vec<String>,
    pub amenities: &'static [&'static str],
}

impl PropertyDetail {
    pub fn new(property: &Property) -> Self {
        let listing = Listing::of(property);
        let features = match &property.features {
            Some(features) if !features.is_empty() => features.clone(),
            _ => vec![NO_FEATURES.to_string()],
        };

        Self {
            heading: format!("{} in {}", property.property_type, property.location),
            listing,
            price: listing.price_label(property.price),
            bhk: property.bhk.map(|b| b.to_string()).unwrap_or_default(),
            size: property.size.map(format_amount).unwrap_or_default(),
            agent: format!("{}, {}", property.agent_name, property.agent_contact),
            details: property.details.clone().unwrap_or_default(),
            features,
            amenities: &AMENITIES,
        }
    }
}

impl From<&Property> for PropertyDetail {
    fn from(property: &Property) -> Self {
        Self::new(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_villa_scenario() {
        let json = r#"{
            "id": 1,
            "propertyType": "Villa",
            "location": "X",
            "price": 500000,
            "sale": true,
            "rent": false,
            "agentName": "A",
            "agentContact": "123"
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        let detail = PropertyDetail::new(&property);

        assert_eq!(detail.heading, "Villa in X");
        assert_eq!(detail.price, "Buy at 500000");
        assert_eq!(detail.agent, "A, 123");
        assert_eq!(detail.amenities.len(), 7);
        assert_eq!(detail.amenities[2], "24/7 Security");
        assert_eq!(detail.features, vec![NO_FEATURES.to_string()]);
        assert_eq!(detail.bhk, "");
    }

    #[test]
    fn test_features_and_optional_fields() {
        let json = r#"{
            "id": "h-12",
            "propertyType": "House",
            "location": "Indiranagar",
            "size": 1200,
            "price": 35000,
            "sale": false,
            "rent": true,
            "details": "Semi-furnished",
            "agentName": "Kiran",
            "agentContact": "kiran@example.com",
            "bhk": 2,
            "features": ["Lift", "Power backup"]
        }"#;
        let property: Property = serde_json::from_str(json).unwrap();
        let detail = PropertyDetail::from(&property);

        assert_eq!(detail.listing, Listing::ForRent);
        assert_eq!(detail.price, "Rent at 35000");
        assert_eq!(detail.size, "1200");
        assert_eq!(detail.bhk, "2");
        assert_eq!(detail.details, "Semi-furnished");
        assert_eq!(detail.features, vec!["Lift", "Power backup"]);
    }

    #[test]
    fn test_empty_feature_list_shows_placeholder() {
        let property: Property =
            serde_json::from_str(r#"{"id": 3, "features": []}"#).unwrap();
        assert_eq!(PropertyDetail::new(&property).features, vec![NO_FEATURES]);
    }
}

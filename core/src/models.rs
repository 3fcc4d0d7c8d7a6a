//! Wire model for the property service.
//!
//! Records are read-only snapshots: fetched, displayed, then dropped with the
//! view that asked for them. Decoding is lenient so one odd record never
//! sinks a whole list:
//!
//! - missing or `null` fields take their defaults
//! - numbers may arrive as strings (`"1200 sqft"` reads as `1200`)
//! - unknown property types are kept verbatim

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// Property Type
// =============================================================================

/// Category of a listing.
///
/// The service sends this as a plain string (`"Villa"`, `"House"`, ...).
/// Anything outside the known set is preserved in [`PropertyType::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Villa,
    House,
    Plot,
    Commercial,
    Rental,
    /// Category the client does not know about.
    Other(String),
}

impl PropertyType {
    /// Known categories, in navigation order.
    pub const ALL: [PropertyType; 5] = [
        PropertyType::Villa,
        PropertyType::House,
        PropertyType::Plot,
        PropertyType::Commercial,
        PropertyType::Rental,
    ];

    /// Wire name, also used as the route segment.
    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::House => "House",
            PropertyType::Plot => "Plot",
            PropertyType::Commercial => "Commercial",
            PropertyType::Rental => "Rental",
            PropertyType::Other(name) => name,
        }
    }

    /// Label used for aggregate cards and chart legends.
    pub fn plural_label(&self) -> String {
        match self {
            PropertyType::Villa => "Villas".to_string(),
            PropertyType::House => "Houses".to_string(),
            PropertyType::Plot => "Plots".to_string(),
            PropertyType::Commercial => "Commercial Buildings".to_string(),
            PropertyType::Rental => "PG/Rentals".to_string(),
            PropertyType::Other(name) => name.clone(),
        }
    }
}

impl Default for PropertyType {
    fn default() -> Self {
        PropertyType::Other(String::new())
    }
}

impl From<String> for PropertyType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Villa" => PropertyType::Villa,
            "House" => PropertyType::House,
            "Plot" => PropertyType::Plot,
            "Commercial" => PropertyType::Commercial,
            "Rental" => PropertyType::Rental,
            _ => PropertyType::Other(value),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(value: &str) -> Self {
        PropertyType::from(value.to_string())
    }
}

impl From<PropertyType> for String {
    fn from(value: PropertyType) -> Self {
        match value {
            PropertyType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Property Identifier
// =============================================================================

/// Opaque property identifier.
///
/// The service may send ids as numbers or strings; both end up as the string
/// used in `/api/properties/{id}` and in `/property/{id}` routes. A missing
/// or `null` id decodes as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct PropertyId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Null,
    Number(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl From<RawId> for PropertyId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Null => PropertyId::default(),
            RawId::Number(n) => PropertyId(n.to_string()),
            RawId::Unsigned(n) => PropertyId(n.to_string()),
            // 12.0 prints as "12"
            RawId::Float(n) => PropertyId(n.to_string()),
            RawId::Text(s) => PropertyId(s),
        }
    }
}

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        PropertyId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Property
// =============================================================================

/// A single listing as returned by the property service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Service identifier
    #[serde(default)]
    pub id: PropertyId,
    /// Listing category
    #[serde(default, deserialize_with = "null_as_default")]
    pub property_type: PropertyType,
    /// Free-form location text
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    /// Size in square feet
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub size: Option<f64>,
    /// Asking price (purchase or monthly rent)
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    /// Offered for sale
    #[serde(default, deserialize_with = "null_as_default")]
    pub sale: bool,
    /// Offered for rent
    #[serde(default, deserialize_with = "null_as_default")]
    pub rent: bool,
    /// Seller-provided description
    #[serde(default)]
    pub details: Option<String>,
    /// Listing agent
    #[serde(default, deserialize_with = "null_as_default")]
    pub agent_name: String,
    /// Agent phone or email. Older records use `agentPhone`.
    #[serde(default, alias = "agentPhone", deserialize_with = "null_as_default")]
    pub agent_contact: String,
    /// Bedroom/hall/kitchen count
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub bhk: Option<u32>,
    /// Ordered feature list
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

// =============================================================================
// Lenient field decoding
// =============================================================================

/// Numeric field as the service may send it.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl RawNumber {
    fn value(self) -> Option<f64> {
        match self {
            RawNumber::Number(n) => Some(n),
            RawNumber::Text(text) => parse_leading_number(&text),
            RawNumber::Other(_) => None,
        }
        .filter(|n| n.is_finite())
    }
}

/// Reads the number at the start of `text`, ignoring thousands separators.
///
/// `"1,200 sqft"` gives `1200`; text with no leading number gives `None`.
fn parse_leading_number(text: &str) -> Option<f64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    let end = cleaned
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*c == '-' && *i == 0)))
        .map(|(i, _)| i)
        .unwrap_or(cleaned.len());
    cleaned[..end].parse().ok()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawNumber>::deserialize(deserializer)?.and_then(RawNumber::value))
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?.unwrap_or_default())
}

fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_f64(deserializer)?
        .filter(|n| *n >= 0.0 && *n <= u32::MAX as f64)
        .map(|n| n.trunc() as u32))
}

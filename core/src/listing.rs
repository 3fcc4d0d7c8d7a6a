//! Presentation rules shared by the listing views.
//!
//! Covers the sale/rent price label, the heading of a type listing, and how a
//! collection fetch maps onto what the list page shows.

use crate::models::Property;
use crate::state::ViewState;

/// Shown when a type listing has nothing to display.
pub const NO_PROPERTIES_MESSAGE: &str = "No properties found for this type.";

// =============================================================================
// Listing Status
// =============================================================================

/// How a property is offered.
///
/// `Unlisted` covers records with neither `sale` nor `rent` set. It still
/// renders with the rental label; the distinct state lets callers spot it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Listing {
    ForSale,
    ForRent,
    Unlisted,
}

impl Listing {
    /// `sale` wins over `rent`.
    pub fn from_flags(sale: bool, rent: bool) -> Self {
        match (sale, rent) {
            (true, _) => Listing::ForSale,
            (false, true) => Listing::ForRent,
            (false, false) => Listing::Unlisted,
        }
    }

    pub fn of(property: &Property) -> Self {
        Self::from_flags(property.sale, property.rent)
    }

    /// Verb prefix for the price line.
    pub fn price_prefix(&self) -> &'static str {
        match self {
            Listing::ForSale => "Buy at",
            Listing::ForRent | Listing::Unlisted => "Rent at",
        }
    }

    /// Full price line, e.g. `Buy at 500000`.
    pub fn price_label(&self, price: f64) -> String {
        format!("{} {}", self.price_prefix(), format_amount(price))
    }
}

/// Render a price or size without a trailing `.0` for whole numbers.
pub fn format_amount(value: f64) -> String {
    format!("{value}")
}

/// `Yes`/`No` for boolean flags on listing cards.
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Heading of a type listing page: the type upper-cased, or `Properties`.
pub fn collection_heading(type_param: &str) -> String {
    if type_param.is_empty() {
        "Properties".to_string()
    } else {
        type_param.to_uppercase()
    }
}

// =============================================================================
// Collection Outcome
// =============================================================================

/// What a type listing page renders for a given fetch state.
#[derive(Debug, PartialEq)]
pub enum CollectionOutcome<'a> {
    /// A request is in flight or has not started yet.
    Pending,
    /// Nothing to show, either because the service returned no rows or
    /// because the request failed.
    Empty,
    Entries(&'a [Property]),
}

impl<'a> CollectionOutcome<'a> {
    pub fn from_state(state: &'a ViewState<Vec<Property>>) -> Self {
        if state.is_pending() {
            return CollectionOutcome::Pending;
        }
        match state.loaded() {
            Some(properties) if !properties.is_empty() => CollectionOutcome::Entries(properties),
            _ => CollectionOutcome::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::PropertyId;

    fn property(sale: bool, rent: bool) -> Property {
        Property {
            id: PropertyId::new("1"),
            property_type: Default::default(),
            location: "X".to_string(),
            size: None,
            price: 500000.0,
            sale,
            rent,
            details: None,
            agent_name: String::new(),
            agent_contact: String::new(),
            bhk: None,
            features: None,
        }
    }

    #[test]
    fn test_sale_renders_purchase_price() {
        let listing = Listing::of(&property(true, false));
        assert_eq!(listing, Listing::ForSale);
        assert_eq!(listing.price_label(500000.0), "Buy at 500000");

        // sale takes precedence when both flags are set
        assert_eq!(Listing::from_flags(true, true), Listing::ForSale);
    }

    #[test]
    fn test_rent_renders_rental_price() {
        let listing = Listing::of(&property(false, true));
        assert_eq!(listing, Listing::ForRent);
        assert_eq!(listing.price_label(25000.0), "Rent at 25000");
    }

    #[test]
    fn test_unlisted_still_renders_rental_price() {
        // Neither flag set: shown as a rental, tracked separately as Unlisted.
        let listing = Listing::of(&property(false, false));
        assert_eq!(listing, Listing::Unlisted);
        assert_eq!(listing.price_label(500000.0), "Rent at 500000");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1200000.0), "1200000");
        assert_eq!(format_amount(999.5), "999.5");
    }

    #[test]
    fn test_collection_heading() {
        assert_eq!(collection_heading("villa"), "VILLA");
        assert_eq!(collection_heading(""), "Properties");
    }

    #[test]
    fn test_empty_result_is_empty_outcome() {
        let mut state = ViewState::new();
        let id = state.begin();
        assert_eq!(CollectionOutcome::from_state(&state), CollectionOutcome::Pending);

        state.resolve(id, Ok(Vec::new()));
        assert_eq!(CollectionOutcome::from_state(&state), CollectionOutcome::Empty);
    }

    #[test]
    fn test_failed_fetch_is_empty_outcome() {
        let mut state = ViewState::<Vec<Property>>::new();
        let id = state.begin();
        state.resolve(id, Err(FetchError::Network("connection refused".into())));
        assert_eq!(CollectionOutcome::from_state(&state), CollectionOutcome::Empty);
    }

    #[test]
    fn test_loaded_entries() {
        let mut state = ViewState::new();
        let id = state.begin();
        state.resolve(id, Ok(vec![property(true, false), property(false, true)]));
        match CollectionOutcome::from_state(&state) {
            CollectionOutcome::Entries(entries) => assert_eq!(entries.len(), 2),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}

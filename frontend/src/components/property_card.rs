//! Summary card for one property in a type listing.

use estately::{format_amount, yes_no, Property, PropertyTypeCatalog};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

/// One listing entry: a stock image for its type plus the record's fields.
///
/// The image is drawn at random each time the card is rendered.
#[component]
pub fn PropertyCard(property: Property) -> impl IntoView {
    let catalog = use_context::<Rc<PropertyTypeCatalog>>().unwrap_or_default();

    let image = catalog.random_image(&property.property_type).to_string();
    let alt = format!("{} image", property.property_type);
    let href = format!("/property/{}", property.id);
    let size = property.size.map(format_amount).unwrap_or_default();

    view! {
        <li class="property-card">
            <A href=href class="property-card-link">
                <img src=image alt=alt class="property-image"/>
            </A>
            <div class="property-card-body">
                <strong>"Location: "</strong> {property.location}<br/>
                <strong>"Size: "</strong> {size}<br/>
                <strong>"Price: "</strong> {format_amount(property.price)}<br/>
                <strong>"For Sale: "</strong> {yes_no(property.sale)}<br/>
                <strong>"For Rent: "</strong> {yes_no(property.rent)}<br/>
                <strong>"Details: "</strong> {property.details.unwrap_or_default()}<br/>
                <strong>"Agent Name: "</strong> {property.agent_name}<br/>
                <strong>"Agent Contact: "</strong> {property.agent_contact}<br/>
            </div>
        </li>
    }
}

//! Property details page (`/property/:id`).

use estately::{
    Listing, LoadState, Property, PropertyDetail, PropertyTypeCatalog, ViewState,
    DETAIL_ERROR_MESSAGE,
};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::services::{spawn_load, PropertyService};

#[component]
pub fn PropertyDetails() -> impl IntoView {
    let params = use_params_map();
    let service = use_context::<PropertyService>().unwrap_or_else(PropertyService::from_env);
    let state = create_rw_signal(ViewState::<Property>::new());

    let id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    create_effect(move |_| {
        let id = id();
        log::info!("🔎 Loading property {}", id);

        let service = service.clone();
        spawn_load(state, "property details", async move {
            service.fetch_by_id(&id).await
        });
    });

    view! {
        <div class="property-details-wrapper">
            {move || state.with(|state| match state.load() {
                LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_view(),
                LoadState::Failed(_) => view! { <p class="error">{DETAIL_ERROR_MESSAGE}</p> }.into_view(),
                LoadState::Idle => view! { <p>"No property found."</p> }.into_view(),
                LoadState::Loaded(property) => view! { <PropertyDetailView property=property.clone()/> }.into_view(),
            })}
        </div>
    }
}

/// Full attribute view of a loaded property.
#[component]
fn PropertyDetailView(property: Property) -> impl IntoView {
    let catalog = use_context::<Rc<PropertyTypeCatalog>>().unwrap_or_default();
    let image = catalog.random_image(&property.property_type).to_string();
    let detail = PropertyDetail::new(&property);

    if detail.listing == Listing::Unlisted {
        log::warn!(
            "⚠️ Property {} is neither for sale nor for rent; showing rental price",
            property.id
        );
    }

    view! {
        <div class="property-details-page">
            <img src=image alt=detail.heading.clone() class="property-image"/>
            <div class="property-details-container">
                <h2>{detail.heading}</h2>
                <div class="property-bhk"><strong>"BHK: "</strong> {detail.bhk}</div>
                <div class="property-size"><strong>"Size: "</strong> {detail.size}</div>
                <div class="property-price"><strong>"Price: "</strong> {detail.price}</div>
                <div class="property-agent"><strong>"Agent: "</strong> {detail.agent}</div>
                <div class="property-details"><strong>"Details: "</strong> {detail.details}</div>
                <div class="property-features">
                    <h3>"Features:"</h3>
                    <ul>
                        {detail.features.into_iter().map(|feature| view! { <li>{feature}</li> }).collect_view()}
                    </ul>
                </div>
                <div class="property-amenities">
                    <h3>"Amenities:"</h3>
                    <ul>
                        {detail.amenities.iter().map(|amenity| view! { <li>{*amenity}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

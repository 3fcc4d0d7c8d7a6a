//! Type listing page (`/properties/:type`).

use estately::{collection_heading, CollectionOutcome, Property, ViewState, NO_PROPERTIES_MESSAGE};
use leptos::*;
use leptos_router::*;

use crate::components::PropertyCard;
use crate::services::{spawn_load, PropertyService};

#[component]
pub fn PropertyList() -> impl IntoView {
    let params = use_params_map();
    let service = use_context::<PropertyService>().unwrap_or_else(PropertyService::from_env);
    let state = create_rw_signal(ViewState::<Vec<Property>>::new());

    let property_type = move || params.with(|p| p.get("type").cloned().unwrap_or_default());

    // Refetch whenever the route parameter changes; the newest request wins.
    create_effect(move |_| {
        let property_type = property_type();
        log::info!("🏠 Loading properties of type '{}'", property_type);

        let service = service.clone();
        spawn_load(state, "properties", async move {
            let result = service.fetch_by_type(&property_type).await;
            if let Ok(properties) = &result {
                log::debug!("Fetched {} properties", properties.len());
            }
            result
        });
    });

    view! {
        <div class="property-list">
            <h2>{move || collection_heading(&property_type())}</h2>
            {move || state.with(|state| match CollectionOutcome::from_state(state) {
                CollectionOutcome::Pending => view! { <p class="loading">"Loading..."</p> }.into_view(),
                CollectionOutcome::Empty => view! { <p class="empty">{NO_PROPERTIES_MESSAGE}</p> }.into_view(),
                CollectionOutcome::Entries(properties) => view! {
                    <ul>
                        {properties
                            .iter()
                            .cloned()
                            .map(|property| view! { <PropertyCard property=property/> })
                            .collect_view()}
                    </ul>
                }.into_view(),
            })}
        </div>
    }
}

//! Home page: hero text and one card per property type.

use estately::{PropertyType, PropertyTypeCatalog};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Find your next property"</h1>
            <p class="subtitle">
                "Villas, houses, plots, commercial buildings and rentals. "
                "Browse by category or manage your own listings from the seller dashboard."
            </p>
        </div>
    }
}

#[component]
pub fn Home() -> impl IntoView {
    let catalog = use_context::<Rc<PropertyTypeCatalog>>().unwrap_or_default();

    view! {
        <Hero/>
        <div class="type-grid">
            {PropertyType::ALL
                .into_iter()
                .map(|property_type| {
                    let href = format!("/properties/{}", property_type.as_str());
                    let image = catalog.random_image(&property_type).to_string();
                    let label = property_type.plural_label();
                    view! {
                        <A href=href class="type-card">
                            <img src=image alt=label.clone() class="type-card-image"/>
                            <div class="type-card-title">{label}</div>
                        </A>
                    }
                })
                .collect_view()}
        </div>
    }
}

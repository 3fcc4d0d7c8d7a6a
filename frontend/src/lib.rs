//! Estately - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for browsing property listings and managing a
//! seller's portfolio.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (property type navigation)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /                  Home (hero, type cards)             │
//! │  ├── /properties/:type  PropertyList → PropertyCard*        │
//! │  ├── /property/:id      PropertyDetails                     │
//! │  └── /seller            SellerDashboard (tabs, charts)      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each view owns its fetched snapshot. The image catalog and the property
//! service are provided once through context.
//!
//! # Modules
//!
//! - [`config`] - Service address and app constants
//! - [`components`] - UI components (Header, PropertyList, SellerDashboard, ...)
//! - [`services`] - Property API client and fetch state driver

use estately::PropertyTypeCatalog;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use std::rc::Rc;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Root
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Injected once so views never reach for globals.
    provide_context(Rc::new(PropertyTypeCatalog::standard()));
    provide_context(PropertyService::from_env());

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=Home/>
                    <Route path="/properties/:type" view=PropertyList/>
                    <Route path="/property/:id" view=PropertyDetails/>
                    <Route path="/seller" view=|| view! { <SellerDashboard/> }/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Back to listings"</A>
        </div>
    }
}

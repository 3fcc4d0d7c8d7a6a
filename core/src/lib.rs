//! Estately core - property model and view logic
//!
//! Platform-independent pieces of the Estately marketplace views. The Leptos
//! frontend renders what this crate computes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌──────────────────────┐
//! │  ApiConfig   │──▶│  HTTP service │──▶│  ViewState<T>        │
//! │  (endpoints) │   │  (frontend)   │   │  Idle/Loading/...    │
//! └──────────────┘   └───────────────┘   └──────────┬───────────┘
//!                                                   │
//!          ┌───────────────────┬────────────────────┼─────────────────┐
//!          ▼                   ▼                    ▼                 ▼
//!   CollectionOutcome    PropertyDetail        Window<T>         Insights
//!   (type listing)       (details page)       (seller paging)   (charts)
//! ```
//!
//! # Modules
//!
//! - [`models`] - Property wire model
//! - [`catalog`] - Property type image table and selectors
//! - [`listing`] - Price labels and type listing rules
//! - [`detail`] - Details page display model
//! - [`state`] - Fetch lifecycle with stale-response protection
//! - [`paging`] - Circular window paging
//! - [`insights`] - Chart aggregation
//! - [`dashboard`] - Seller dashboard tabs
//! - [`config`] - Service endpoints
//! - [`error`] - Fetch error type

// =============================================================================
// Module declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod detail;
pub mod error;
pub mod insights;
pub mod listing;
pub mod models;
pub mod paging;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{ImageSelector, PropertyTypeCatalog, RandomSelector, DEFAULT_IMAGE};
pub use config::{ApiConfig, DEFAULT_API_URL};
pub use dashboard::DashboardTab;
pub use detail::{PropertyDetail, AMENITIES, DETAIL_ERROR_MESSAGE, NO_FEATURES};
pub use error::{FetchError, FetchResult};
pub use insights::{compute_insights, Insights, TrendPoint, TypeCount, TypePrice};
pub use listing::{
    collection_heading, format_amount, yes_no, CollectionOutcome, Listing,
    NO_PROPERTIES_MESSAGE,
};
pub use models::{Property, PropertyId, PropertyType};
pub use paging::{Window, SELLER_WINDOW};
pub use state::{LoadState, RequestId, ViewState};

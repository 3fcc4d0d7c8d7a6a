//! UI Components for the Estately application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with property type links
//! - [`Home`] / [`Hero`] - Landing page
//! - [`Footer`] - Page footer
//!
//! # Buyer Views
//! - [`PropertyList`] - Listings of one property type
//! - [`PropertyCard`] - One entry in a listing
//! - [`PropertyDetails`] - Full view of a single property
//!
//! # Seller Views
//! - [`SellerDashboard`] - Tabbed seller workspace
//! - [`InsightsPanel`] - Charts over the seller's listings
//! - [`ChartCanvas`] - Canvas pie/bar/line charts

mod charts;
mod footer;
mod header;
mod hero;
mod insights;
mod property_card;
mod property_detail;
mod property_list;
mod seller_dashboard;

pub use charts::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use insights::*;
pub use property_card::*;
pub use property_detail::*;
pub use property_list::*;
pub use seller_dashboard::*;

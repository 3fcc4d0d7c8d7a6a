//! Property service communication.
//!
//! # Services
//!
//! - [`properties`] - HTTP client for the property API
//! - [`loader`] - Applies request results to a view's fetch state

pub mod loader;
pub mod properties;

pub use loader::*;
pub use properties::*;

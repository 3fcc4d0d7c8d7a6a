//! Property type image catalog.
//!
//! A fixed table from [`PropertyType`] to illustrative image URLs. The table
//! is built once at startup and handed to the views, so tests and alternate
//! deployments can swap it out.
//!
//! Image choice goes through an [`ImageSelector`]. The browser uses
//! [`RandomSelector`]; tests plug in a deterministic one.

use rand::Rng;
use std::collections::HashMap;

use crate::models::PropertyType;

/// Placeholder shown when a type has no configured images.
pub const DEFAULT_IMAGE: &str = "https://example.com/default.jpg";

// =============================================================================
// Selectors
// =============================================================================

/// Picks an index into a non-empty image list.
pub trait ImageSelector {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn select(&mut self, len: usize) -> usize;
}

/// Uniform random choice on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSelector;

impl ImageSelector for RandomSelector {
    fn select(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

impl<F> ImageSelector for F
where
    F: FnMut(usize) -> usize,
{
    fn select(&mut self, len: usize) -> usize {
        self(len)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Immutable image table keyed by property type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTypeCatalog {
    images: HashMap<PropertyType, Vec<String>>,
    default_image: String,
}

impl PropertyTypeCatalog {
    /// Empty catalog: every type resolves to `default_image`.
    pub fn new(default_image: impl Into<String>) -> Self {
        Self {
            images: HashMap::new(),
            default_image: default_image.into(),
        }
    }

    /// Three stock images per known type.
    pub fn standard() -> Self {
        let mut catalog = Self::new(DEFAULT_IMAGE);
        for property_type in PropertyType::ALL {
            let stem = property_type.as_str().to_lowercase();
            let urls = (1..=3)
                .map(|n| format!("https://example.com/{stem}{n}.jpg"))
                .collect();
            catalog = catalog.with_images(property_type, urls);
        }
        catalog
    }

    /// Builder-style registration of a type's images.
    pub fn with_images(mut self, property_type: PropertyType, urls: Vec<String>) -> Self {
        self.images.insert(property_type, urls);
        self
    }

    /// Configured images for a type (empty if none).
    pub fn images_for(&self, property_type: &PropertyType) -> &[String] {
        self.images
            .get(property_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// Choose a display image for a type.
    ///
    /// Falls back to the default placeholder when the type has no images or
    /// the selector returns an out-of-range index.
    pub fn pick_image(
        &self,
        property_type: &PropertyType,
        selector: &mut impl ImageSelector,
    ) -> &str {
        let images = self.images_for(property_type);
        if images.is_empty() {
            return &self.default_image;
        }
        images
            .get(selector.select(images.len()))
            .map(String::as_str)
            .unwrap_or(&self.default_image)
    }

    /// Random pick, as used at render time.
    pub fn random_image(&self, property_type: &PropertyType) -> &str {
        self.pick_image(property_type, &mut RandomSelector)
    }
}

impl Default for PropertyTypeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

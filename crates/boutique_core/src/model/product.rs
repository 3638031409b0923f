//! Product catalog model.
//!
//! # Responsibility
//! - Define the sellable item tracked by the inventory.
//! - Provide the descriptive summary returned by inventory lookups.
//!
//! # Invariants
//! - `id` is stable and distinguishes products with identical fields.
//! - `quantity` is signed; permissive sales may drive it below zero.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of one catalog entry.
pub type ProductId = Uuid;

/// One sellable item in the boutique catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identity used for duplicate-registration checks.
    pub id: ProductId,
    /// Lookup key used by inventory operations.
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Units on hand.
    pub quantity: i64,
}

impl Product {
    /// Creates a product with a generated identity.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, description, price, quantity)
    }

    /// Creates a product with a caller-provided identity.
    ///
    /// Two products built with the same `id` are treated as the same entry
    /// by the inventory.
    pub fn with_id(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            quantity,
        }
    }

    /// Returns whether at least one unit is on hand.
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Builds the descriptive lookup view of this product.
    pub fn summary(&self) -> ProductSummary {
        ProductSummary {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Descriptive mapping returned by `InventoryService::get_product`.
///
/// Serialized with the storefront's display keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(rename = "Product Name")]
    pub name: String,
    #[serde(rename = "Product Description")]
    pub description: String,
    #[serde(rename = "Product Price")]
    pub price: f64,
    #[serde(rename = "Quantity Available")]
    pub quantity: i64,
}

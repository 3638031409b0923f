//! Inventory repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Store catalog entries in registration order.
//! - Resolve names to the first product registered under them.
//!
//! # Invariants
//! - A product id is stored at most once.
//! - The name index always points at the earliest entry with that name.

use crate::model::product::{Product, ProductId};
use std::collections::{HashMap, HashSet};

/// Storage interface for catalog entries.
pub trait InventoryRepository {
    /// Appends one product. Callers check identity first.
    fn insert_product(&mut self, product: Product);
    fn contains_product(&self, id: ProductId) -> bool;
    /// Returns the first product registered under `name`.
    fn find_by_name(&self, name: &str) -> Option<&Product>;
    /// Sets the quantity of the first product named `name`.
    ///
    /// Returns `false` when no product has that name.
    fn set_quantity(&mut self, name: &str, quantity: i64) -> bool;
    fn list_products(&self) -> &[Product];
}

/// Vec-backed inventory with a name index.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    products: Vec<Product>,
    name_index: HashMap<String, usize>,
    ids: HashSet<ProductId>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn insert_product(&mut self, product: Product) {
        let position = self.products.len();
        self.name_index
            .entry(product.name.clone())
            .or_insert(position);
        self.ids.insert(product.id);
        self.products.push(product);
    }

    fn contains_product(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.name_index
            .get(name)
            .and_then(|&position| self.products.get(position))
    }

    fn set_quantity(&mut self, name: &str, quantity: i64) -> bool {
        let Some(&position) = self.name_index.get(name) else {
            return false;
        };
        match self.products.get_mut(position) {
            Some(product) => {
                product.quantity = quantity;
                true
            }
            None => false,
        }
    }

    fn list_products(&self) -> &[Product] {
        &self.products
    }
}

//! Purchase history and sales ledger entries.
//!
//! # Invariants
//! - Entries are appended once and never mutated afterwards.
//! - `product_name` is captured at recording time so raw dumps stay readable
//!   without an inventory lookup.

use crate::model::customer::{Customer, CustomerId};
use crate::model::product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// One line of the purchase history log linking a customer to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub customer_id: CustomerId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
}

impl PurchaseRecord {
    pub fn new(customer: &Customer, product: &Product, quantity: i64) -> Self {
        Self {
            customer_id: customer.id,
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
        }
    }
}

/// One completed sale in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i64,
    pub customer_id: CustomerId,
}

impl SaleRecord {
    pub fn new(product: &Product, quantity: i64, customer: &Customer) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            customer_id: customer.id,
        }
    }
}

//! Customer repository contract and in-memory implementation.
//!
//! Holds both the customer list and the append-only purchase history log.

use crate::model::customer::{Customer, CustomerId};
use crate::model::sale::PurchaseRecord;
use std::collections::HashMap;

/// Storage interface for customers and their purchase history.
pub trait CustomerRepository {
    /// Stores one customer. Returns `false` when the id is already stored.
    fn insert_customer(&mut self, customer: Customer) -> bool;
    fn get_customer(&self, id: CustomerId) -> Option<&Customer>;
    fn list_customers(&self) -> &[Customer];
    fn append_purchase(&mut self, purchase: PurchaseRecord);
    fn list_purchases(&self) -> &[PurchaseRecord];
}

#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: Vec<Customer>,
    id_index: HashMap<CustomerId, usize>,
    purchases: Vec<PurchaseRecord>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn insert_customer(&mut self, customer: Customer) -> bool {
        if self.id_index.contains_key(&customer.id) {
            return false;
        }
        self.id_index.insert(customer.id, self.customers.len());
        self.customers.push(customer);
        true
    }

    fn get_customer(&self, id: CustomerId) -> Option<&Customer> {
        self.id_index
            .get(&id)
            .and_then(|&position| self.customers.get(position))
    }

    fn list_customers(&self) -> &[Customer] {
        &self.customers
    }

    fn append_purchase(&mut self, purchase: PurchaseRecord) {
        self.purchases.push(purchase);
    }

    fn list_purchases(&self) -> &[PurchaseRecord] {
        &self.purchases
    }
}

//! Customer use-case service.
//!
//! # Responsibility
//! - Register customers explicitly or through the create-and-register helper.
//! - Maintain the append-only purchase history log.
//!
//! # Invariants
//! - Registering the same customer id twice keeps the first record.
//! - Purchase history appends never check that the customer or product is
//!   registered anywhere.

use crate::model::customer::{Customer, CustomerId};
use crate::model::product::Product;
use crate::model::sale::PurchaseRecord;
use crate::repo::customer_repo::CustomerRepository;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Customer lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerError {
    CustomerNotFound(CustomerId),
}

impl Display for CustomerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CustomerNotFound(id) => write!(f, "customer not found: {id}"),
        }
    }
}

impl Error for CustomerError {}

/// Customer facade over repository implementations.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers an existing customer record and returns its id.
    pub fn register(&mut self, customer: Customer) -> CustomerId {
        let id = customer.id;
        if self.repo.insert_customer(customer) {
            info!("event=customer_register module=customers status=ok customer_id={id}");
        } else {
            debug!(
                "event=customer_register module=customers status=skipped reason=already_present customer_id={id}"
            );
        }
        id
    }

    /// Creates a customer and registers it in one step.
    pub fn register_customer(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Customer {
        let customer = Customer::new(name, email);
        self.register(customer.clone());
        customer
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.repo.get_customer(id)
    }

    /// Like `customer`, but reports absence as an error.
    pub fn require_customer(&self, id: CustomerId) -> Result<&Customer, CustomerError> {
        self.repo
            .get_customer(id)
            .ok_or(CustomerError::CustomerNotFound(id))
    }

    /// Registered customers in registration order.
    pub fn customers(&self) -> &[Customer] {
        self.repo.list_customers()
    }

    /// Appends one purchase to the history log.
    pub fn add_purchase_history(&mut self, customer: &Customer, product: &Product, quantity: i64) {
        debug!(
            "event=purchase_append module=customers customer_id={} product={} quantity={quantity}",
            customer.id, product.name
        );
        self.repo
            .append_purchase(PurchaseRecord::new(customer, product, quantity));
    }

    /// Full purchase history across all customers, oldest first.
    pub fn purchase_history(&self) -> &[PurchaseRecord] {
        self.repo.list_purchases()
    }

    /// Purchase history of one customer, oldest first.
    pub fn purchase_history_for(&self, customer_id: CustomerId) -> Vec<&PurchaseRecord> {
        self.repo
            .list_purchases()
            .iter()
            .filter(|purchase| purchase.customer_id == customer_id)
            .collect()
    }
}

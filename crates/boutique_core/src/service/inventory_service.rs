//! Inventory use-case service.
//!
//! # Responsibility
//! - Register catalog entries and maintain on-hand quantities.
//! - Answer name lookups and availability listings.
//!
//! # Invariants
//! - A product id is registered at most once; re-adding it is a no-op.
//! - Under `StockPolicy::Permissive`, updates for unknown names are silent
//!   no-ops reported as `UpdateOutcome::Missing`.
//! - Under `StockPolicy::Strict`, unknown names, duplicate names and negative
//!   quantities are rejected before any write.

use crate::config::StockPolicy;
use crate::model::product::{Product, ProductId, ProductSummary};
use crate::repo::inventory_repo::InventoryRepository;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory use-case errors. Only raised under the strict policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryError {
    ProductNotFound(String),
    DuplicateName(String),
    NegativeQuantity { name: String, quantity: i64 },
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProductNotFound(name) => write!(f, "product not found: `{name}`"),
            Self::DuplicateName(name) => {
                write!(f, "a different product is already registered as `{name}`")
            }
            Self::NegativeQuantity { name, quantity } => {
                write!(f, "quantity for `{name}` must be >= 0, got {quantity}")
            }
        }
    }
}

impl Error for InventoryError {}

/// Result of `InventoryService::add_product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// The same product id was registered earlier.
    AlreadyPresent,
}

/// Result of `InventoryService::update_quantity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    /// No product carries the name; nothing changed.
    Missing,
}

/// Inventory facade over repository implementations.
pub struct InventoryService<R: InventoryRepository> {
    repo: R,
    policy: StockPolicy,
}

impl<R: InventoryRepository> InventoryService<R> {
    /// Creates a permissive service over `repo`.
    pub fn new(repo: R) -> Self {
        Self::with_policy(repo, StockPolicy::default())
    }

    pub fn with_policy(repo: R, policy: StockPolicy) -> Self {
        Self { repo, policy }
    }

    pub fn policy(&self) -> StockPolicy {
        self.policy
    }

    /// Registers one product unless its id is already present.
    pub fn add_product(&mut self, product: Product) -> InventoryResult<AddOutcome> {
        if self.repo.contains_product(product.id) {
            debug!(
                "event=product_add module=inventory status=skipped reason=already_present name={}",
                product.name
            );
            return Ok(AddOutcome::AlreadyPresent);
        }
        if self.policy.is_strict() {
            if self.repo.find_by_name(&product.name).is_some() {
                return Err(InventoryError::DuplicateName(product.name));
            }
            if product.quantity < 0 {
                return Err(InventoryError::NegativeQuantity {
                    name: product.name,
                    quantity: product.quantity,
                });
            }
        }

        info!(
            "event=product_add module=inventory status=ok name={} quantity={}",
            product.name, product.quantity
        );
        self.repo.insert_product(product);
        Ok(AddOutcome::Added)
    }

    /// Sets the on-hand quantity of the first product named `name`.
    pub fn update_quantity(
        &mut self,
        name: &str,
        new_quantity: i64,
    ) -> InventoryResult<UpdateOutcome> {
        if self.policy.is_strict() && new_quantity < 0 {
            return Err(InventoryError::NegativeQuantity {
                name: name.to_string(),
                quantity: new_quantity,
            });
        }

        if self.repo.set_quantity(name, new_quantity) {
            debug!(
                "event=quantity_update module=inventory status=ok name={name} quantity={new_quantity}"
            );
            return Ok(UpdateOutcome::Updated);
        }

        if self.policy.is_strict() {
            return Err(InventoryError::ProductNotFound(name.to_string()));
        }
        debug!("event=quantity_update module=inventory status=skipped reason=missing name={name}");
        Ok(UpdateOutcome::Missing)
    }

    /// Returns the descriptive view of the first product named `name`.
    pub fn get_product(&self, name: &str) -> Option<ProductSummary> {
        self.repo.find_by_name(name).map(Product::summary)
    }

    /// Borrows the first product named `name`.
    pub fn product(&self, name: &str) -> Option<&Product> {
        self.repo.find_by_name(name)
    }

    /// Returns whether this exact product id is registered.
    pub fn contains_product(&self, id: ProductId) -> bool {
        self.repo.contains_product(id)
    }

    /// Lists products with at least one unit on hand, in registration order.
    pub fn list_available_products(&self) -> Vec<&Product> {
        self.repo
            .list_products()
            .iter()
            .filter(|product| product.is_available())
            .collect()
    }

    /// All registered products in registration order.
    pub fn products(&self) -> &[Product] {
        self.repo.list_products()
    }

    pub fn len(&self) -> usize {
        self.repo.list_products().len()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.list_products().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{AddOutcome, InventoryError, InventoryService, UpdateOutcome};
    use crate::config::StockPolicy;
    use crate::model::product::Product;
    use crate::repo::inventory_repo::InMemoryInventoryRepository;

    fn permissive() -> InventoryService<InMemoryInventoryRepository> {
        InventoryService::new(InMemoryInventoryRepository::new())
    }

    fn strict() -> InventoryService<InMemoryInventoryRepository> {
        InventoryService::with_policy(InMemoryInventoryRepository::new(), StockPolicy::Strict)
    }

    #[test]
    fn re_adding_same_product_is_a_no_op() {
        let mut service = permissive();
        let dress = Product::new("Dress", "Red cocktail dress", 49.99, 10);

        assert_eq!(service.add_product(dress.clone()), Ok(AddOutcome::Added));
        assert_eq!(service.add_product(dress), Ok(AddOutcome::AlreadyPresent));
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn permissive_keeps_lookalike_products() {
        let mut service = permissive();
        service
            .add_product(Product::new("Dress", "red", 49.99, 10))
            .expect("first add");
        service
            .add_product(Product::new("Dress", "red", 49.99, 10))
            .expect("lookalike add");

        assert_eq!(service.len(), 2);
    }

    #[test]
    fn permissive_update_of_missing_name_is_silent() {
        let mut service = permissive();
        assert_eq!(
            service.update_quantity("Ghost", 3),
            Ok(UpdateOutcome::Missing)
        );
        assert!(service.is_empty());
    }

    #[test]
    fn strict_rejects_missing_duplicate_and_negative() {
        let mut service = strict();
        service
            .add_product(Product::new("Dress", "red", 49.99, 10))
            .expect("first add");

        assert_eq!(
            service.add_product(Product::new("Dress", "blue", 39.99, 1)),
            Err(InventoryError::DuplicateName("Dress".to_string()))
        );
        assert_eq!(
            service.update_quantity("Ghost", 3),
            Err(InventoryError::ProductNotFound("Ghost".to_string()))
        );
        assert!(matches!(
            service.update_quantity("Dress", -1),
            Err(InventoryError::NegativeQuantity { quantity: -1, .. })
        ));
        assert_eq!(service.get_product("Dress").map(|p| p.quantity), Some(10));
    }

    #[test]
    fn strict_add_rejects_negative_stock() {
        let mut service = strict();
        let err = service
            .add_product(Product::new("Belt", "leather belt", 25.0, -4))
            .expect_err("negative stock must be rejected");

        assert_eq!(
            err,
            InventoryError::NegativeQuantity {
                name: "Belt".to_string(),
                quantity: -4,
            }
        );
        assert!(service.is_empty());
    }

    #[test]
    fn contains_product_matches_identity_not_name() {
        let mut service = permissive();
        let dress = Product::new("Dress", "red", 49.99, 10);
        let lookalike = Product::new("Dress", "red", 49.99, 10);
        service.add_product(dress.clone()).expect("add dress");

        assert!(service.contains_product(dress.id));
        assert!(!service.contains_product(lookalike.id));
    }
}

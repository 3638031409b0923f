//! Sales use-case service.
//!
//! # Responsibility
//! - Run the combined sell-and-record flow across inventory, customers and
//!   the sales ledger.
//! - Expose the raw ledger as the sales report.
//!
//! # Invariants
//! - Side effects run in order: stock update, purchase history, ledger.
//! - Strict validation happens before the first write, so a rejected sale
//!   leaves every registry untouched.
//! - The inventory's `StockPolicy` governs the whole flow.
//! - Permissive sales never fail; unknown products skip the stock update,
//!   oversells drive the quantity negative and arithmetic saturates at the
//!   `i64` bounds.

use crate::model::customer::Customer;
use crate::model::product::Product;
use crate::model::sale::SaleRecord;
use crate::repo::customer_repo::CustomerRepository;
use crate::repo::inventory_repo::InventoryRepository;
use crate::repo::sales_repo::SalesRepository;
use crate::service::customer_service::{CustomerError, CustomerService};
use crate::service::inventory_service::{InventoryError, InventoryService, UpdateOutcome};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Sale flow errors. Only raised under the strict policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleError {
    /// Sold quantity must be positive.
    InvalidQuantity(i64),
    InsufficientStock {
        product: String,
        requested: i64,
        available: i64,
    },
    /// Remaining stock would fall outside the `i64` range.
    QuantityOverflow {
        product: String,
        available: i64,
        requested: i64,
    },
    Inventory(InventoryError),
    Customer(CustomerError),
}

impl Display for SaleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQuantity(quantity) => {
                write!(f, "sale quantity must be > 0, got {quantity}")
            }
            Self::InsufficientStock {
                product,
                requested,
                available,
            } => write!(
                f,
                "insufficient stock for `{product}`: requested {requested}, available {available}"
            ),
            Self::QuantityOverflow {
                product,
                available,
                requested,
            } => write!(
                f,
                "stock for `{product}` overflows: {available} on hand minus {requested}"
            ),
            Self::Inventory(err) => write!(f, "{err}"),
            Self::Customer(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SaleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Inventory(err) => Some(err),
            Self::Customer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InventoryError> for SaleError {
    fn from(value: InventoryError) -> Self {
        Self::Inventory(value)
    }
}

impl From<CustomerError> for SaleError {
    fn from(value: CustomerError) -> Self {
        Self::Customer(value)
    }
}

/// Sales ledger facade over repository implementations.
pub struct SalesService<S: SalesRepository> {
    repo: S,
}

impl<S: SalesRepository> SalesService<S> {
    pub fn new(repo: S) -> Self {
        Self { repo }
    }

    /// Sells `quantity` units of `product` to `customer` and records it.
    ///
    /// # Contract
    /// - Stock is set to the registry's live quantity minus `quantity`; an
    ///   unregistered product falls back to its own `quantity` field.
    /// - Validation follows `inventory.policy()`.
    /// - Exactly one purchase record and one sale record are appended on
    ///   success.
    pub fn make_and_record_sale<I, C>(
        &mut self,
        inventory: &mut InventoryService<I>,
        customers: &mut CustomerService<C>,
        product: &Product,
        quantity: i64,
        customer: &Customer,
    ) -> Result<SaleRecord, SaleError>
    where
        I: InventoryRepository,
        C: CustomerRepository,
    {
        let policy = inventory.policy();
        if policy.is_strict() {
            check_sale(inventory, customers, product, quantity, customer)?;
        }

        let current = inventory
            .product(&product.name)
            .map_or(product.quantity, |stocked| stocked.quantity);
        let remaining = match current.checked_sub(quantity) {
            Some(remaining) => remaining,
            None if policy.is_strict() => {
                return Err(SaleError::QuantityOverflow {
                    product: product.name.clone(),
                    available: current,
                    requested: quantity,
                });
            }
            None => {
                warn!(
                    "event=stock_saturated module=sales product={} requested={quantity} available={current}",
                    product.name
                );
                current.saturating_sub(quantity)
            }
        };
        if remaining < 0 {
            warn!(
                "event=oversell module=sales product={} requested={quantity} available={current}",
                product.name
            );
        }
        if inventory.update_quantity(&product.name, remaining)? == UpdateOutcome::Missing {
            warn!(
                "event=sale_stock_skipped module=sales reason=unregistered_product product={}",
                product.name
            );
        }

        customers.add_purchase_history(customer, product, quantity);

        let sale = SaleRecord::new(product, quantity, customer);
        self.repo.append_sale(sale.clone());
        info!(
            "event=sale_recorded module=sales product={} quantity={quantity} customer_id={} policy={}",
            product.name, customer.id, policy
        );
        Ok(sale)
    }

    /// Returns every recorded sale, oldest first. Empty when nothing sold.
    pub fn generate_sales_report(&self) -> &[SaleRecord] {
        self.repo.list_sales()
    }
}

fn check_sale<I, C>(
    inventory: &InventoryService<I>,
    customers: &CustomerService<C>,
    product: &Product,
    quantity: i64,
    customer: &Customer,
) -> Result<(), SaleError>
where
    I: InventoryRepository,
    C: CustomerRepository,
{
    if quantity <= 0 {
        return Err(SaleError::InvalidQuantity(quantity));
    }
    let available = inventory
        .product(&product.name)
        .filter(|_| inventory.contains_product(product.id))
        .map(|stocked| stocked.quantity)
        .ok_or_else(|| InventoryError::ProductNotFound(product.name.clone()))?;
    customers.require_customer(customer.id)?;
    if quantity > available {
        return Err(SaleError::InsufficientStock {
            product: product.name.clone(),
            requested: quantity,
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{SaleError, SalesService};
    use crate::config::StockPolicy;
    use crate::model::customer::Customer;
    use crate::model::product::Product;
    use crate::repo::customer_repo::InMemoryCustomerRepository;
    use crate::repo::inventory_repo::InMemoryInventoryRepository;
    use crate::repo::sales_repo::InMemorySalesRepository;
    use crate::service::customer_service::CustomerService;
    use crate::service::inventory_service::{InventoryError, InventoryService};

    fn inventory(policy: StockPolicy) -> InventoryService<InMemoryInventoryRepository> {
        InventoryService::with_policy(InMemoryInventoryRepository::new(), policy)
    }

    #[test]
    fn empty_ledger_reports_no_sales() {
        let sales = SalesService::new(InMemorySalesRepository::new());
        assert!(sales.generate_sales_report().is_empty());
    }

    #[test]
    fn permissive_sale_of_unregistered_product_still_records() {
        let mut inventory = inventory(StockPolicy::Permissive);
        let mut customers = CustomerService::new(InMemoryCustomerRepository::new());
        let mut sales = SalesService::new(InMemorySalesRepository::new());
        let ghost = Product::new("Ghost", "never stocked", 1.0, 0);
        let ada = customers.register_customer("Ada", "ada@x.com");

        sales
            .make_and_record_sale(&mut inventory, &mut customers, &ghost, 2, &ada)
            .expect("permissive sale never fails");

        assert!(inventory.is_empty());
        assert_eq!(customers.purchase_history().len(), 1);
        assert_eq!(sales.generate_sales_report().len(), 1);
    }

    #[test]
    fn permissive_extreme_quantity_saturates_instead_of_overflowing() {
        let mut inventory = inventory(StockPolicy::Permissive);
        let mut customers = CustomerService::new(InMemoryCustomerRepository::new());
        let mut sales = SalesService::new(InMemorySalesRepository::new());
        let dress = Product::new("Dress", "Red cocktail dress", 49.99, 0);
        inventory.add_product(dress.clone()).expect("add dress");
        let ada = customers.register_customer("Ada", "ada@x.com");

        sales
            .make_and_record_sale(&mut inventory, &mut customers, &dress, i64::MIN, &ada)
            .expect("permissive sale never fails");
        assert_eq!(
            inventory.get_product("Dress").map(|p| p.quantity),
            Some(i64::MAX)
        );

        inventory.update_quantity("Dress", -2).expect("set negative stock");
        sales
            .make_and_record_sale(&mut inventory, &mut customers, &dress, i64::MAX, &ada)
            .expect("permissive sale never fails");
        assert_eq!(
            inventory.get_product("Dress").map(|p| p.quantity),
            Some(i64::MIN)
        );
        assert_eq!(sales.generate_sales_report().len(), 2);
    }

    #[test]
    fn strict_rejects_lookalike_of_a_stocked_product() {
        let mut inventory = inventory(StockPolicy::Strict);
        let mut customers = CustomerService::new(InMemoryCustomerRepository::new());
        let mut sales = SalesService::new(InMemorySalesRepository::new());
        let dress = Product::new("Dress", "Red cocktail dress", 49.99, 10);
        inventory.add_product(dress).expect("add dress");
        let lookalike = Product::new("Dress", "never registered", 1.0, 10);
        let ada = customers.register_customer("Ada", "ada@x.com");

        let err = sales
            .make_and_record_sale(&mut inventory, &mut customers, &lookalike, 2, &ada)
            .expect_err("unregistered product id must be rejected");

        assert_eq!(
            err,
            SaleError::Inventory(InventoryError::ProductNotFound("Dress".to_string()))
        );
        assert_eq!(inventory.get_product("Dress").map(|p| p.quantity), Some(10));
        assert!(customers.purchase_history().is_empty());
        assert!(sales.generate_sales_report().is_empty());
    }

    #[test]
    fn strict_rejects_unregistered_customer_without_side_effects() {
        let mut inventory = inventory(StockPolicy::Strict);
        let mut customers = CustomerService::new(InMemoryCustomerRepository::new());
        let mut sales = SalesService::new(InMemorySalesRepository::new());
        let dress = Product::new("Dress", "Red cocktail dress", 49.99, 10);
        inventory.add_product(dress.clone()).expect("add dress");
        let stranger = Customer::new("Grace", "grace@x.com");

        let err = sales
            .make_and_record_sale(&mut inventory, &mut customers, &dress, 1, &stranger)
            .expect_err("unknown customer must be rejected");

        assert!(matches!(err, SaleError::Customer(_)));
        assert_eq!(inventory.get_product("Dress").map(|p| p.quantity), Some(10));
        assert!(customers.purchase_history().is_empty());
        assert!(sales.generate_sales_report().is_empty());
    }

    #[test]
    fn strict_rejects_non_positive_quantity() {
        let mut inventory = inventory(StockPolicy::Strict);
        let mut customers = CustomerService::new(InMemoryCustomerRepository::new());
        let mut sales = SalesService::new(InMemorySalesRepository::new());
        let dress = Product::new("Dress", "Red cocktail dress", 49.99, 10);
        inventory.add_product(dress.clone()).expect("add dress");
        let ada = customers.register_customer("Ada", "ada@x.com");

        for quantity in [0, i64::MIN] {
            let err = sales
                .make_and_record_sale(&mut inventory, &mut customers, &dress, quantity, &ada)
                .expect_err("non-positive quantity must be rejected");
            assert_eq!(err, SaleError::InvalidQuantity(quantity));
            assert!(err.to_string().contains("must be > 0"));
        }
        assert_eq!(inventory.get_product("Dress").map(|p| p.quantity), Some(10));
    }

    #[test]
    fn permissive_inventory_makes_the_sale_permissive() {
        let mut inventory = inventory(StockPolicy::Permissive);
        let mut customers = CustomerService::new(InMemoryCustomerRepository::new());
        let mut sales = SalesService::new(InMemorySalesRepository::new());
        let dress = Product::new("Dress", "Red cocktail dress", 49.99, 1);
        inventory.add_product(dress.clone()).expect("add dress");
        let stranger = Customer::new("Grace", "grace@x.com");

        sales
            .make_and_record_sale(&mut inventory, &mut customers, &dress, 3, &stranger)
            .expect("permissive sale never fails");
        assert_eq!(inventory.get_product("Dress").map(|p| p.quantity), Some(-2));
    }
}

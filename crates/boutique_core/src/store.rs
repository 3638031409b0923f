//! Store context wiring the three registries together.
//!
//! # Responsibility
//! - Own one inventory, customer registry and sales ledger per store.
//! - Provide the sell shortcut that borrows all three at once.
//!
//! # Invariants
//! - Separate `Boutique` values never share state.
//! - Every service in one store runs under the same `StockPolicy`.

use crate::config::StoreConfig;
use crate::model::customer::Customer;
use crate::model::product::Product;
use crate::model::sale::SaleRecord;
use crate::repo::customer_repo::InMemoryCustomerRepository;
use crate::repo::inventory_repo::InMemoryInventoryRepository;
use crate::repo::sales_repo::InMemorySalesRepository;
use crate::service::customer_service::CustomerService;
use crate::service::inventory_service::InventoryService;
use crate::service::sales_service::{SaleError, SalesService};
use log::debug;

/// In-memory boutique records for one running process or test.
pub struct Boutique {
    config: StoreConfig,
    inventory: InventoryService<InMemoryInventoryRepository>,
    customers: CustomerService<InMemoryCustomerRepository>,
    sales: SalesService<InMemorySalesRepository>,
}

impl Boutique {
    pub fn new(config: StoreConfig) -> Self {
        debug!("event=store_open module=store policy={}", config.policy);
        Self {
            config,
            inventory: InventoryService::with_policy(
                InMemoryInventoryRepository::new(),
                config.policy,
            ),
            customers: CustomerService::new(InMemoryCustomerRepository::new()),
            sales: SalesService::new(InMemorySalesRepository::new()),
        }
    }

    pub fn config(&self) -> StoreConfig {
        self.config
    }

    pub fn inventory(&self) -> &InventoryService<InMemoryInventoryRepository> {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut InventoryService<InMemoryInventoryRepository> {
        &mut self.inventory
    }

    pub fn customers(&self) -> &CustomerService<InMemoryCustomerRepository> {
        &self.customers
    }

    pub fn customers_mut(&mut self) -> &mut CustomerService<InMemoryCustomerRepository> {
        &mut self.customers
    }

    pub fn sales(&self) -> &SalesService<InMemorySalesRepository> {
        &self.sales
    }

    /// Runs `make_and_record_sale` against this store's registries.
    pub fn sell(
        &mut self,
        product: &Product,
        quantity: i64,
        customer: &Customer,
    ) -> Result<SaleRecord, SaleError> {
        self.sales.make_and_record_sale(
            &mut self.inventory,
            &mut self.customers,
            product,
            quantity,
            customer,
        )
    }

    pub fn generate_sales_report(&self) -> &[SaleRecord] {
        self.sales.generate_sales_report()
    }
}

impl Default for Boutique {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

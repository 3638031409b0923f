//! Core record keeping for a small fashion boutique.
//! Tracks products, customers and sales in memory for one running process.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use config::{parse_stock_policy, ConfigError, StockPolicy, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::{Customer, CustomerId};
pub use model::product::{Product, ProductId, ProductSummary};
pub use model::sale::{PurchaseRecord, SaleRecord};
pub use repo::customer_repo::{CustomerRepository, InMemoryCustomerRepository};
pub use repo::inventory_repo::{InMemoryInventoryRepository, InventoryRepository};
pub use repo::sales_repo::{InMemorySalesRepository, SalesRepository};
pub use service::customer_service::{CustomerError, CustomerService};
pub use service::inventory_service::{
    AddOutcome, InventoryError, InventoryResult, InventoryService, UpdateOutcome,
};
pub use service::sales_service::{SaleError, SalesService};
pub use store::Boutique;

/// Minimal health-check API for embedding smoke tests.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

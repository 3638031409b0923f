//! Repository layer contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define storage contracts for inventory, customers and sales.
//! - Keep indexing details out of service/business orchestration.
//!
//! # Invariants
//! - Iteration order is always insertion order.
//! - Repositories never validate business rules; services do.

pub mod customer_repo;
pub mod inventory_repo;
pub mod sales_repo;

//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into inventory, customer and sales APIs.
//! - Apply the configured `StockPolicy` consistently across use-cases.

pub mod customer_service;
pub mod inventory_service;
pub mod sales_service;

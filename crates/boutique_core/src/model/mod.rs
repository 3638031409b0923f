//! Domain records for boutique inventory, customers and sales.
//!
//! # Responsibility
//! - Define the plain data structures shared by repositories and services.
//! - Give every product and customer a stable identity independent of its
//!   field values.
//!
//! # Invariants
//! - Records carry no registry references; they link through ids only.
//! - Purchase and sale records are append-only once recorded.

pub mod customer;
pub mod product;
pub mod sale;

//! Customer model.
//!
//! Creating a `Customer` does not register it; registration is an explicit
//! step on `CustomerService`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of one customer.
pub type CustomerId = Uuid;

/// Contact record for a boutique customer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Creates an unregistered customer with a generated identity.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
        }
    }
}

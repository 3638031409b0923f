//! Store configuration.
//!
//! # Responsibility
//! - Select how strictly inventory and sales operations validate input.
//! - Parse policy names supplied by embedding applications.
//!
//! # Invariants
//! - `StockPolicy::Permissive` is the default and reproduces the unchecked
//!   bookkeeping behavior: silent no-ops on missing names, oversells allowed.
//! - Configuration is caller-supplied; nothing is read from env or disk.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Policy string for the unchecked bookkeeping mode.
pub const STOCK_POLICY_PERMISSIVE: &str = "permissive";
/// Policy string for the validated mode.
pub const STOCK_POLICY_STRICT: &str = "strict";

/// Validation policy applied by inventory and sales services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockPolicy {
    /// Missing names are ignored and stock may go negative.
    #[default]
    Permissive,
    /// Missing names, duplicate names, bad quantities and oversells are errors.
    Strict,
}

impl StockPolicy {
    /// Stable string id used in log lines and config values.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => STOCK_POLICY_PERMISSIVE,
            Self::Strict => STOCK_POLICY_STRICT,
        }
    }

    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }
}

impl Display for StockPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one stock policy from a config string.
pub fn parse_stock_policy(value: &str) -> Result<StockPolicy, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        STOCK_POLICY_PERMISSIVE | "lenient" => Ok(StockPolicy::Permissive),
        STOCK_POLICY_STRICT => Ok(StockPolicy::Strict),
        other => Err(ConfigError::UnsupportedPolicy(other.to_string())),
    }
}

/// Configuration for one `Boutique` store context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub policy: StockPolicy,
}

impl StoreConfig {
    pub fn permissive() -> Self {
        Self {
            policy: StockPolicy::Permissive,
        }
    }

    pub fn strict() -> Self {
        Self {
            policy: StockPolicy::Strict,
        }
    }
}

/// Configuration parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    UnsupportedPolicy(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPolicy(value) => write!(
                f,
                "unsupported stock policy `{value}`; expected permissive|strict"
            ),
        }
    }
}

impl Error for ConfigError {}

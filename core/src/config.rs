//! Purchase configuration.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default cap on seat-occupying tickets per purchase.
pub const DEFAULT_MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Environment variable overriding [`PurchaseConfig::max_tickets_per_purchase`].
pub const MAX_TICKETS_ENV: &str = "CINEMA_MAX_TICKETS_PER_PURCHASE";

/// Purchase rules configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseConfig {
    /// Maximum adult + child tickets in a single purchase (infants excluded)
    pub max_tickets_per_purchase: u32,
}

impl PurchaseConfig {
    /// Creates a configuration with the given ticket cap
    #[must_use]
    pub const fn new(max_tickets_per_purchase: u32) -> Self {
        Self {
            max_tickets_per_purchase,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, with the same
    /// fallbacks as [`PurchaseConfig::from_env`].
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_tickets_per_purchase: lookup(MAX_TICKETS_ENV)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(DEFAULT_MAX_TICKETS_PER_PURCHASE),
        }
    }

    /// Returns a copy with a different ticket cap
    #[must_use]
    pub const fn with_max_tickets_per_purchase(mut self, max: u32) -> Self {
        self.max_tickets_per_purchase = max;
        self
    }
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TICKETS_PER_PURCHASE)
    }
}

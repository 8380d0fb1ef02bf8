//! Cart Configuration
//!
//! Storage key, currency label and log level shared by the service and views.

use log::LevelFilter;

/// Storage key the cart has always been saved under
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Currency prefix shown in front of prices
pub const DEFAULT_CURRENCY_LABEL: &str = "Rs.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Key of the persisted cart in the key-value store
    pub storage_key: String,
    /// Currency prefix for rendered prices
    pub currency_label: String,
    /// Maximum level passed to the logger
    pub log_level: LevelFilter,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_label: DEFAULT_CURRENCY_LABEL.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl CartConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_currency_label(mut self, label: impl Into<String>) -> Self {
        self.currency_label = label.into();
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Format a whole-rupee amount, e.g. `Rs. 1200`
    pub fn format_price(&self, amount: u64) -> String {
        format!("{} {}", self.currency_label, amount)
    }
}

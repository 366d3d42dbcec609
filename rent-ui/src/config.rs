//! TOML configuration for the invoice wizard.
//!
//! ## File format
//!
//! Every table and key is optional. Missing keys fall back to the built-in
//! defaults; a missing `[[tenants]]` array falls back to the built-in roster.
//! Tenants are processed in file order.
//!
//! | Key                          | Type    | Default             |
//! |------------------------------|---------|---------------------|
//! | `billing.shared_cost_divisor`| integer | `6`                 |
//! | `billing.payment_due_day`    | integer | `10` (1-28)         |
//! | `billing.currency_symbol`    | string  | `"₹"`               |
//! | `billing.shared_bill_label`  | string  | `"Water pump bill"` |
//! | `billing.tenant_bill_label`  | string  | `"Power bill"`      |
//! | `tenants[].name`             | string  | required per entry  |
//! | `tenants[].rent`             | integer | required per entry  |
//!
//! ### Example
//!
//! ```toml
//! [billing]
//! shared_cost_divisor = 6
//! payment_due_day = 10
//!
//! [[tenants]]
//! name = "Nagesh"
//! rent = 3800
//!
//! [[tenants]]
//! name = "Sujith"
//! rent = 5000
//! ```

use std::num::NonZeroU32;
use std::path::{Path, PathBuf};

use rent_core::calculations::{DEFAULT_PAYMENT_DUE_DAY, DEFAULT_SHARED_COST_DIVISOR};
use rent_core::{BillingConfig, BillingConfigError, Tenant, TenantConfig, TenantConfigError};
use serde::Deserialize;
use tracing::debug;

use crate::render::CardStyle;

/// Roster used when no configuration file supplies one.
const BUILT_IN_ROSTER: [(&str, u32); 5] = [
    ("Laxmana Chary", 4000),
    ("Nagaraju", 4000),
    ("Nagesh", 3800),
    ("Sujith", 5000),
    ("Anvesh", 5300),
];

/// Errors that can occur while loading or converting configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML was malformed or a value had the wrong type.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tenant roster: {0}")]
    Tenants(#[from] TenantConfigError),

    #[error("invalid billing settings: {0}")]
    Billing(#[from] BillingConfigError),
}

/// `[billing]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BillingSection {
    pub shared_cost_divisor: NonZeroU32,
    pub payment_due_day: u32,
    pub currency_symbol: String,
    pub shared_bill_label: String,
    pub tenant_bill_label: String,
}

impl Default for BillingSection {
    fn default() -> Self {
        Self {
            shared_cost_divisor: DEFAULT_SHARED_COST_DIVISOR,
            payment_due_day: DEFAULT_PAYMENT_DUE_DAY,
            currency_symbol: "₹".to_string(),
            shared_bill_label: "Water pump bill".to_string(),
            tenant_bill_label: "Power bill".to_string(),
        }
    }
}

/// One `[[tenants]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TenantSection {
    pub name: String,
    pub rent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub billing: BillingSection,
    pub tenants: Vec<TenantSection>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            billing: BillingSection::default(),
            tenants: BUILT_IN_ROSTER
                .iter()
                .map(|(name, rent)| TenantSection {
                    name: (*name).to_string(),
                    rent: *rent,
                })
                .collect(),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Parse`] if the TOML is invalid or has unknown keys.
    pub fn load_from_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        debug!(tenants = config.tenants.len(), "parsed configuration");
        Ok(config)
    }

    /// Reads a file from disk and delegates to [`load_from_str`](Self::load_from_str).
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_str(&contents)
    }

    /// Validated tenant roster, in file order.
    pub fn tenant_config(&self) -> Result<TenantConfig, ConfigError> {
        let tenants = self
            .tenants
            .iter()
            .map(|t| Tenant::new(&t.name, t.rent))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TenantConfig::new(tenants)?)
    }

    /// Validated billing parameters.
    pub fn billing_config(&self) -> Result<BillingConfig, ConfigError> {
        let config = BillingConfig {
            shared_cost_divisor: self.billing.shared_cost_divisor,
            payment_due_day: self.billing.payment_due_day,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn card_style(&self) -> CardStyle {
        CardStyle {
            currency_symbol: self.billing.currency_symbol.clone(),
            shared_bill_label: self.billing.shared_bill_label.clone(),
            tenant_bill_label: self.billing.tenant_bill_label.clone(),
        }
    }
}

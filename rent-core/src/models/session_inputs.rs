//! Raw values typed during one wizard session.
//!
//! Every field keeps the text exactly as entered. Nothing is validated on
//! entry; see [`crate::amount`] for how the text is read back.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::amount::{lenient_amount, parse_amount};
use crate::models::{TenantConfig, TenantId};

/// Per-tenant input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantEntry {
    /// The tenant's own utility (power) bill. Required before leaving the
    /// tenant's step.
    pub utility_bill: String,
    /// Advance already paid by the tenant. Optional; blank reads as zero.
    pub advance_paid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInputs {
    shared_utility_bill: String,
    entries: HashMap<TenantId, TenantEntry>,
}

impl SessionInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates blank entries for every tenant on the roster.
    pub fn for_roster(tenants: &TenantConfig) -> Self {
        Self {
            shared_utility_bill: String::new(),
            entries: tenants
                .ids()
                .map(|id| (id.clone(), TenantEntry::default()))
                .collect(),
        }
    }

    pub fn set_shared_utility_bill(
        &mut self,
        value: impl Into<String>,
    ) {
        self.shared_utility_bill = value.into();
    }

    pub fn set_utility_bill(
        &mut self,
        tenant: &TenantId,
        value: impl Into<String>,
    ) {
        self.entries.entry(tenant.clone()).or_default().utility_bill = value.into();
    }

    pub fn set_advance_paid(
        &mut self,
        tenant: &TenantId,
        value: impl Into<String>,
    ) {
        self.entries.entry(tenant.clone()).or_default().advance_paid = value.into();
    }

    pub fn shared_utility_bill_text(&self) -> &str {
        &self.shared_utility_bill
    }

    pub fn entry(
        &self,
        tenant: &TenantId,
    ) -> Option<&TenantEntry> {
        self.entries.get(tenant)
    }

    pub fn utility_bill_text(
        &self,
        tenant: &TenantId,
    ) -> &str {
        self.entry(tenant).map_or("", |e| e.utility_bill.as_str())
    }

    pub fn advance_paid_text(
        &self,
        tenant: &TenantId,
    ) -> &str {
        self.entry(tenant).map_or("", |e| e.advance_paid.as_str())
    }

    /// Shared bill as a number; blank or malformed text reads as zero.
    pub fn shared_utility_bill(&self) -> Decimal {
        lenient_amount(&self.shared_utility_bill)
    }

    pub fn utility_bill(
        &self,
        tenant: &TenantId,
    ) -> Decimal {
        lenient_amount(self.utility_bill_text(tenant))
    }

    pub fn advance_paid(
        &self,
        tenant: &TenantId,
    ) -> Decimal {
        lenient_amount(self.advance_paid_text(tenant))
    }

    /// `true` when the tenant's utility bill holds a parseable amount.
    /// An explicit `"0"` counts as entered.
    pub fn has_utility_bill(
        &self,
        tenant: &TenantId,
    ) -> bool {
        parse_amount(self.utility_bill_text(tenant)).is_ok()
    }
}

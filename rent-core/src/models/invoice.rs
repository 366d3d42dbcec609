use rust_decimal::Decimal;

use crate::models::TenantId;

/// Amount due from one tenant for the billing period.
///
/// Derived on demand from the session inputs; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantInvoice {
    pub tenant: TenantId,
    pub rent: Decimal,
    pub utility_bill: Decimal,
    /// This tenant's share of the shared utility bill.
    pub shared_split: Decimal,
    pub advance_paid: Decimal,
    /// `rent + utility_bill + shared_split - advance_paid`. May be negative.
    pub total_due: Decimal,
}

impl TenantInvoice {
    /// Advance payments are only listed on the card when there is one.
    pub fn shows_advance(&self) -> bool {
        self.advance_paid > Decimal::ZERO
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub tenant: TenantId,
    pub total_due: Decimal,
}

/// Totals for every tenant in roster order plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceSummary {
    pub lines: Vec<SummaryLine>,
    pub aggregate_total_due: Decimal,
}

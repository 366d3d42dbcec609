mod billing_period;
mod invoice;
mod session_inputs;
mod tenant;

pub use billing_period::BillingPeriod;
pub use invoice::{InvoiceSummary, SummaryLine, TenantInvoice};
pub use session_inputs::{SessionInputs, TenantEntry};
pub use tenant::{Tenant, TenantConfig, TenantConfigError, TenantId};

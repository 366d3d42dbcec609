use crate::models::{TenantConfig, TenantId};

/// Current position in the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardStep {
    ConfirmPeriod,
    CollectSharedBill,
    CollectTenant(TenantId),
    /// Terminal state. `card_index` selects the visible card; indices
    /// `0..N` are tenant invoices and `N` is the summary.
    Display { card_index: usize },
}

impl WizardStep {
    /// Linear step number: 0, 1, then `2 + i` for the i-th tenant, and
    /// `2 + N` for the display state.
    pub fn index(
        &self,
        tenants: &TenantConfig,
    ) -> usize {
        match self {
            Self::ConfirmPeriod => 0,
            Self::CollectSharedBill => 1,
            Self::CollectTenant(tenant) => 2 + tenants.position(tenant).unwrap_or(tenants.len()),
            Self::Display { .. } => 2 + tenants.len(),
        }
    }

    pub fn is_display(&self) -> bool {
        matches!(self, Self::Display { .. })
    }

    pub fn tenant(&self) -> Option<&TenantId> {
        match self {
            Self::CollectTenant(tenant) => Some(tenant),
            _ => None,
        }
    }
}

/// Carousel navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A single user action.
///
/// Hosts that queue gestures feed them to
/// [`WizardController::apply`](super::WizardController::apply) one at a
/// time, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    SetSharedUtilityBill(String),
    SetTenantUtilityBill { tenant: TenantId, value: String },
    SetTenantAdvancePaid { tenant: TenantId, value: String },
    Advance,
    Navigate(Direction),
}

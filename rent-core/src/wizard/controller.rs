use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::display::{DisplayCard, wrap_index};
use super::step::{Direction, WizardEvent, WizardStep};
use crate::calculations::{BillingCalculator, BillingConfig};
use crate::models::{BillingPeriod, SessionInputs, Tenant, TenantConfig, TenantId};

/// Raised when the wizard refuses to leave the current step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter the power bill amount for {tenant} before proceeding")]
    MissingUtilityBill { tenant: TenantId },
}

/// Owns one invoicing session: the step pointer, the typed inputs and the
/// last validation error.
///
/// All mutation goes through `&mut self`, so each user action is applied
/// completely before the next one is seen.
#[derive(Debug, Clone)]
pub struct WizardController {
    tenants: TenantConfig,
    billing: BillingConfig,
    period: BillingPeriod,
    inputs: SessionInputs,
    step: WizardStep,
    validation_error: Option<ValidationError>,
}

impl WizardController {
    /// Starts a session. The billing period is the month before
    /// `session_start`.
    pub fn new(
        tenants: TenantConfig,
        billing: BillingConfig,
        session_start: NaiveDate,
    ) -> Self {
        let period = BillingPeriod::preceding(session_start);
        debug!(%period, tenants = tenants.len(), "starting invoice wizard");

        let inputs = SessionInputs::for_roster(&tenants);
        Self {
            tenants,
            billing,
            period,
            inputs,
            step: WizardStep::ConfirmPeriod,
            validation_error: None,
        }
    }

    pub fn current_step(&self) -> &WizardStep {
        &self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index(&self.tenants)
    }

    pub fn is_displaying(&self) -> bool {
        self.step.is_display()
    }

    /// Tenant whose details are being collected, if any.
    pub fn current_tenant(&self) -> Option<&Tenant> {
        self.step.tenant().and_then(|id| self.tenants.find(id))
    }

    /// `true` on the last tenant step, where advancing submits the session.
    pub fn is_final_input_step(&self) -> bool {
        match (&self.step, self.tenants.tenants().last()) {
            (WizardStep::CollectTenant(tenant), Some(last)) => tenant == &last.id,
            _ => false,
        }
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    /// User-facing validation message, or an empty string.
    pub fn validation_message(&self) -> String {
        self.validation_error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn billing_period(&self) -> BillingPeriod {
        self.period
    }

    pub fn payment_deadline(&self) -> Option<NaiveDate> {
        self.period.payment_deadline(self.billing.payment_due_day)
    }

    pub fn tenants(&self) -> &TenantConfig {
        &self.tenants
    }

    pub fn billing_config(&self) -> &BillingConfig {
        &self.billing
    }

    pub fn inputs(&self) -> &SessionInputs {
        &self.inputs
    }

    pub fn calculator(&self) -> BillingCalculator<'_> {
        BillingCalculator::new(&self.tenants, self.billing)
    }

    /// Moves to the next step.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingUtilityBill`] when the current step
    /// collects a tenant whose utility bill is blank or not a number. The
    /// step and inputs are left untouched; the error is also kept for
    /// [`validation_message`](Self::validation_message).
    pub fn advance(&mut self) -> Result<WizardStep, ValidationError> {
        if let WizardStep::CollectTenant(tenant) = &self.step {
            if !self.inputs.has_utility_bill(tenant) {
                let error = ValidationError::MissingUtilityBill {
                    tenant: tenant.clone(),
                };
                debug!(%tenant, "advance blocked: {}", error);
                self.validation_error = Some(error.clone());
                return Err(error);
            }
        }

        self.validation_error = None;
        let next = self.next_step();
        if next != self.step {
            debug!(from = self.step_index(), to = next.index(&self.tenants), "wizard advanced");
            if next.is_display() {
                info!(period = %self.period, "all tenant details collected");
            }
        }
        self.step = next;

        Ok(self.step.clone())
    }

    fn next_step(&self) -> WizardStep {
        match &self.step {
            WizardStep::ConfirmPeriod => WizardStep::CollectSharedBill,
            WizardStep::CollectSharedBill => self.tenant_step(0),
            WizardStep::CollectTenant(tenant) => {
                let next = self
                    .tenants
                    .position(tenant)
                    .map_or(self.tenants.len(), |i| i + 1);
                self.tenant_step(next)
            }
            WizardStep::Display { card_index } => WizardStep::Display {
                card_index: *card_index,
            },
        }
    }

    fn tenant_step(
        &self,
        index: usize,
    ) -> WizardStep {
        self.tenants
            .get(index)
            .map_or(WizardStep::Display { card_index: 0 }, |t| {
                WizardStep::CollectTenant(t.id.clone())
            })
    }

    pub fn set_shared_utility_bill(
        &mut self,
        value: impl Into<String>,
    ) {
        let value = value.into();
        debug!(%value, "shared utility bill updated");
        self.inputs.set_shared_utility_bill(value);
        self.validation_error = None;
    }

    pub fn set_tenant_utility_bill(
        &mut self,
        tenant: &TenantId,
        value: impl Into<String>,
    ) {
        self.validation_error = None;
        if !self.tenants.contains(tenant) {
            warn!(%tenant, "ignoring utility bill for a tenant not on the roster");
            return;
        }
        let value = value.into();
        debug!(%tenant, %value, "utility bill updated");
        self.inputs.set_utility_bill(tenant, value);
    }

    pub fn set_tenant_advance_paid(
        &mut self,
        tenant: &TenantId,
        value: impl Into<String>,
    ) {
        self.validation_error = None;
        if !self.tenants.contains(tenant) {
            warn!(%tenant, "ignoring advance for a tenant not on the roster");
            return;
        }
        let value = value.into();
        debug!(%tenant, %value, "advance paid updated");
        self.inputs.set_advance_paid(tenant, value);
    }

    /// Number of cards in the display carousel: one per tenant plus the summary.
    pub fn display_card_count(&self) -> usize {
        self.tenants.len() + 1
    }

    /// Moves the visible card by one, wrapping at both ends.
    ///
    /// Returns the new card index, or `None` (and does nothing) outside the
    /// display state.
    pub fn navigate_display(
        &mut self,
        direction: Direction,
    ) -> Option<usize> {
        let count = self.display_card_count();
        match &mut self.step {
            WizardStep::Display { card_index } => {
                *card_index = wrap_index(*card_index, count, direction == Direction::Next);
                debug!(card_index = *card_index, "display card changed");
                Some(*card_index)
            }
            _ => None,
        }
    }

    /// Builds the card at `index` from the current inputs.
    ///
    /// Indices `0..N` are tenant invoices in roster order and `N` is the
    /// summary; anything else is `None`.
    pub fn display_card(
        &self,
        index: usize,
    ) -> Option<DisplayCard> {
        let calculator = self.calculator();
        match self.tenants.get(index) {
            Some(tenant) => Some(DisplayCard::Invoice(
                calculator.tenant_invoice(tenant, &self.inputs),
            )),
            None if index == self.tenants.len() => {
                Some(DisplayCard::Summary(calculator.summary(&self.inputs)))
            }
            None => None,
        }
    }

    /// The card currently visible in the display state.
    pub fn current_card(&self) -> Option<DisplayCard> {
        match self.step {
            WizardStep::Display { card_index } => self.display_card(card_index),
            _ => None,
        }
    }

    /// Applies one user action.
    ///
    /// # Errors
    ///
    /// Only [`WizardEvent::Advance`] can fail; see [`advance`](Self::advance).
    pub fn apply(
        &mut self,
        event: WizardEvent,
    ) -> Result<(), ValidationError> {
        match event {
            WizardEvent::SetSharedUtilityBill(value) => self.set_shared_utility_bill(value),
            WizardEvent::SetTenantUtilityBill { tenant, value } => {
                self.set_tenant_utility_bill(&tenant, value)
            }
            WizardEvent::SetTenantAdvancePaid { tenant, value } => {
                self.set_tenant_advance_paid(&tenant, value)
            }
            WizardEvent::Advance => {
                self.advance()?;
            }
            WizardEvent::Navigate(direction) => {
                self.navigate_display(direction);
            }
        }
        Ok(())
    }
}

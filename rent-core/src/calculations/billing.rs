//! Monthly invoice calculation.
//!
//! Each tenant owes, for the billing period:
//!
//! | Component      | Source |
//! |----------------|--------|
//! | Rent           | fixed monthly rent from the roster |
//! | Utility bill   | the tenant's own (power) bill |
//! | Shared split   | `ceil(shared bill / divisor)` |
//! | Advance paid   | subtracted |
//!
//! The shared cost divisor is a configuration value (6 by default). It is
//! deliberately not derived from the number of tenants on the roster.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use rent_core::{BillingCalculator, BillingConfig, SessionInputs, TenantConfig, TenantId};
//!
//! let roster = TenantConfig::from_pairs([("A", 4000), ("B", 3800)]).unwrap();
//! let a = TenantId::new("A").unwrap();
//! let b = TenantId::new("B").unwrap();
//!
//! let mut inputs = SessionInputs::for_roster(&roster);
//! inputs.set_shared_utility_bill("600");
//! inputs.set_utility_bill(&a, "200");
//! inputs.set_utility_bill(&b, "150");
//! inputs.set_advance_paid(&b, "500");
//!
//! let calculator = BillingCalculator::new(&roster, BillingConfig::default());
//!
//! assert_eq!(calculator.shared_split(&inputs), dec!(100));
//! assert_eq!(calculator.aggregate_total_due(&inputs), dec!(7850));
//! ```

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::trace;

use crate::calculations::common::ceil_div;
use crate::models::{InvoiceSummary, SessionInputs, SummaryLine, Tenant, TenantConfig, TenantInvoice};

/// Number of shares the shared utility bill is split into.
pub const DEFAULT_SHARED_COST_DIVISOR: NonZeroU32 = match NonZeroU32::new(6) {
    Some(n) => n,
    None => unreachable!(),
};

/// Day of the following month by which invoices should be paid.
pub const DEFAULT_PAYMENT_DUE_DAY: u32 = 10;

/// Errors that can occur while validating a [`BillingConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingConfigError {
    /// The due day must exist in every month.
    #[error("payment due day must be between 1 and 28, got {0}")]
    DueDayOutOfRange(u32),
}

/// Fixed billing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingConfig {
    /// Divisor applied to the shared utility bill.
    pub shared_cost_divisor: NonZeroU32,
    /// Day of the month after the billing period on which payment is due.
    pub payment_due_day: u32,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            shared_cost_divisor: DEFAULT_SHARED_COST_DIVISOR,
            payment_due_day: DEFAULT_PAYMENT_DUE_DAY,
        }
    }
}

impl BillingConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BillingConfigError::DueDayOutOfRange`] when the due day is
    /// outside `1..=28`.
    pub fn validate(&self) -> Result<(), BillingConfigError> {
        if !(1..=28).contains(&self.payment_due_day) {
            return Err(BillingConfigError::DueDayOutOfRange(self.payment_due_day));
        }
        Ok(())
    }
}

/// One tenant's share of the shared utility bill: `ceil(amount / divisor)`.
pub fn shared_split(
    shared_utility_bill: Decimal,
    divisor: NonZeroU32,
) -> Decimal {
    ceil_div(shared_utility_bill, Decimal::from(divisor.get()))
}

/// Calculator for tenant invoices.
///
/// Borrows the roster and reads the session inputs; it never mutates
/// either, so every call reflects the latest inputs.
#[derive(Debug, Clone)]
pub struct BillingCalculator<'a> {
    tenants: &'a TenantConfig,
    config: BillingConfig,
}

impl<'a> BillingCalculator<'a> {
    pub fn new(
        tenants: &'a TenantConfig,
        config: BillingConfig,
    ) -> Self {
        Self { tenants, config }
    }

    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Share of the shared utility bill charged to every tenant.
    pub fn shared_split(
        &self,
        inputs: &SessionInputs,
    ) -> Decimal {
        shared_split(inputs.shared_utility_bill(), self.config.shared_cost_divisor)
    }

    /// Builds the full invoice for one tenant.
    pub fn tenant_invoice(
        &self,
        tenant: &Tenant,
        inputs: &SessionInputs,
    ) -> TenantInvoice {
        let rent = Decimal::from(tenant.rent);
        let utility_bill = inputs.utility_bill(&tenant.id);
        let shared_split = self.shared_split(inputs);
        let advance_paid = inputs.advance_paid(&tenant.id);
        let total_due = rent
            .saturating_add(utility_bill)
            .saturating_add(shared_split)
            .saturating_sub(advance_paid);

        trace!(tenant = %tenant.id, %total_due, "computed tenant invoice");

        TenantInvoice {
            tenant: tenant.id.clone(),
            rent,
            utility_bill,
            shared_split,
            advance_paid,
            total_due,
        }
    }

    pub fn tenant_total_due(
        &self,
        tenant: &Tenant,
        inputs: &SessionInputs,
    ) -> Decimal {
        self.tenant_invoice(tenant, inputs).total_due
    }

    /// Invoices for every tenant, in roster order.
    pub fn invoices(
        &self,
        inputs: &SessionInputs,
    ) -> Vec<TenantInvoice> {
        self.tenants
            .tenants()
            .iter()
            .map(|tenant| self.tenant_invoice(tenant, inputs))
            .collect()
    }

    /// Sum of every tenant's total due.
    pub fn aggregate_total_due(
        &self,
        inputs: &SessionInputs,
    ) -> Decimal {
        self.tenants
            .tenants()
            .iter()
            .map(|tenant| self.tenant_total_due(tenant, inputs))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn summary(
        &self,
        inputs: &SessionInputs,
    ) -> InvoiceSummary {
        let lines: Vec<SummaryLine> = self
            .invoices(inputs)
            .into_iter()
            .map(|invoice| SummaryLine {
                tenant: invoice.tenant,
                total_due: invoice.total_due,
            })
            .collect();
        let aggregate_total_due = lines
            .iter()
            .map(|line| line.total_due)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        InvoiceSummary {
            lines,
            aggregate_total_due,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::TenantId;

    fn test_roster() -> TenantConfig {
        TenantConfig::from_pairs([("A", 4000), ("B", 3800)]).unwrap()
    }

    fn id(name: &str) -> TenantId {
        TenantId::new(name).unwrap()
    }

    fn scenario_inputs(roster: &TenantConfig) -> SessionInputs {
        let mut inputs = SessionInputs::for_roster(roster);
        inputs.set_shared_utility_bill("600");
        inputs.set_utility_bill(&id("A"), "200");
        inputs.set_advance_paid(&id("A"), "0");
        inputs.set_utility_bill(&id("B"), "150");
        inputs.set_advance_paid(&id("B"), "500");
        inputs
    }

    // =========================================================================
    // shared_split tests
    // =========================================================================

    #[test]
    fn shared_split_of_zero_is_zero() {
        assert_eq!(shared_split(Decimal::ZERO, DEFAULT_SHARED_COST_DIVISOR), Decimal::ZERO);
    }

    #[test]
    fn shared_split_rounds_up() {
        assert_eq!(shared_split(dec!(601), DEFAULT_SHARED_COST_DIVISOR), dec!(101));
    }

    #[test]
    fn shared_split_uses_configured_divisor_not_roster_size() {
        let roster = test_roster();
        let mut inputs = SessionInputs::for_roster(&roster);
        inputs.set_shared_utility_bill("600");
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        // Two tenants on the roster, but the bill is still split six ways.
        assert_eq!(calculator.shared_split(&inputs), dec!(100));
    }

    #[test]
    fn shared_split_respects_custom_divisor() {
        let roster = test_roster();
        let mut inputs = SessionInputs::for_roster(&roster);
        inputs.set_shared_utility_bill("600");
        let config = BillingConfig {
            shared_cost_divisor: NonZeroU32::new(5).unwrap(),
            ..BillingConfig::default()
        };
        let calculator = BillingCalculator::new(&roster, config);

        assert_eq!(calculator.shared_split(&inputs), dec!(120));
    }

    #[test]
    fn shared_split_of_unparseable_bill_is_zero() {
        let roster = test_roster();
        let mut inputs = SessionInputs::for_roster(&roster);
        inputs.set_shared_utility_bill("lots");
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        assert_eq!(calculator.shared_split(&inputs), Decimal::ZERO);
    }

    // =========================================================================
    // tenant invoice tests
    // =========================================================================

    #[test]
    fn tenant_invoice_ignores_amount_beyond_decimal_range() {
        let roster = test_roster();
        let mut inputs = scenario_inputs(&roster);
        inputs.set_utility_bill(&id("A"), "79228162514264337593543950335");
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let invoice = calculator.tenant_invoice(&roster.tenants()[0], &inputs);

        assert_eq!(invoice.utility_bill, Decimal::ZERO);
        assert_eq!(invoice.total_due, dec!(4100));
        assert_eq!(calculator.aggregate_total_due(&inputs), dec!(7650));
    }

    #[test]
    fn totals_at_maximum_amounts_do_not_overflow() {
        let roster = test_roster();
        let max = "1,000,000,000,000";
        let mut inputs = SessionInputs::for_roster(&roster);
        inputs.set_shared_utility_bill(max);
        inputs.set_utility_bill(&id("A"), max);
        inputs.set_utility_bill(&id("B"), max);
        inputs.set_advance_paid(&id("B"), "-1000000000000");
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let summary = calculator.summary(&inputs);

        // split = ceil(10^12 / 6) = 166666666667
        assert_eq!(summary.lines[0].total_due, dec!(1166666670667));
        assert_eq!(summary.lines[1].total_due, dec!(2166666670467));
        assert_eq!(summary.aggregate_total_due, dec!(3333333341134));
    }

    #[test]
    fn tenant_invoice_without_advance() {
        let roster = test_roster();
        let inputs = scenario_inputs(&roster);
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let invoice = calculator.tenant_invoice(&roster.tenants()[0], &inputs);

        assert_eq!(
            invoice,
            TenantInvoice {
                tenant: id("A"),
                rent: dec!(4000),
                utility_bill: dec!(200),
                shared_split: dec!(100),
                advance_paid: dec!(0),
                total_due: dec!(4300),
            }
        );
        assert!(!invoice.shows_advance());
    }

    #[test]
    fn tenant_invoice_subtracts_advance() {
        let roster = test_roster();
        let inputs = scenario_inputs(&roster);
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let invoice = calculator.tenant_invoice(&roster.tenants()[1], &inputs);

        assert_eq!(invoice.total_due, dec!(3550));
        assert!(invoice.shows_advance());
    }

    #[test]
    fn tenant_total_due_may_be_negative() {
        let roster = test_roster();
        let mut inputs = SessionInputs::for_roster(&roster);
        inputs.set_utility_bill(&id("A"), "0");
        inputs.set_advance_paid(&id("A"), "5000");
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let total = calculator.tenant_total_due(&roster.tenants()[0], &inputs);

        assert_eq!(total, dec!(-1000));
    }

    #[test]
    fn tenant_total_due_with_blank_inputs_is_rent() {
        let roster = test_roster();
        let inputs = SessionInputs::for_roster(&roster);
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let total = calculator.tenant_total_due(&roster.tenants()[1], &inputs);

        assert_eq!(total, dec!(3800));
    }

    #[test]
    fn tenant_invoice_keeps_fractional_amounts_unrounded() {
        let roster = test_roster();
        let mut inputs = SessionInputs::for_roster(&roster);
        inputs.set_utility_bill(&id("A"), "123.456");
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let total = calculator.tenant_total_due(&roster.tenants()[0], &inputs);

        assert_eq!(total, dec!(4123.456));
    }

    // =========================================================================
    // aggregate tests
    // =========================================================================

    #[test]
    fn aggregate_total_due_matches_scenario() {
        let roster = test_roster();
        let inputs = scenario_inputs(&roster);
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        assert_eq!(calculator.aggregate_total_due(&inputs), dec!(7850));
    }

    #[test]
    fn summary_lists_tenants_in_roster_order() {
        let roster = test_roster();
        let inputs = scenario_inputs(&roster);
        let calculator = BillingCalculator::new(&roster, BillingConfig::default());

        let summary = calculator.summary(&inputs);

        assert_eq!(
            summary.lines,
            vec![
                SummaryLine {
                    tenant: id("A"),
                    total_due: dec!(4300),
                },
                SummaryLine {
                    tenant: id("B"),
                    total_due: dec!(3550),
                },
            ]
        );
        assert_eq!(summary.aggregate_total_due, dec!(7850));
    }

    // =========================================================================
    // config tests
    // =========================================================================

    #[test]
    fn default_config_validates() {
        assert_eq!(BillingConfig::default().validate(), Ok(()));
    }

    #[test]
    fn due_day_out_of_range_is_rejected() {
        let config = BillingConfig {
            payment_due_day: 31,
            ..BillingConfig::default()
        };

        assert_eq!(config.validate(), Err(BillingConfigError::DueDayOutOfRange(31)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a larger shared bill never produces a smaller split.
        #[test]
        fn shared_split_is_monotonic(
            a in 0i64..10_000_000i64,
            b in 0i64..10_000_000i64,
        ) {
            let (low, high) = if a <= b { (a, b) } else { (b, a) };
            let low_split = shared_split(Decimal::new(low, 2), DEFAULT_SHARED_COST_DIVISOR);
            let high_split = shared_split(Decimal::new(high, 2), DEFAULT_SHARED_COST_DIVISOR);

            prop_assert!(low_split <= high_split);
        }

        /// Property: the aggregate always equals the sum of per-tenant totals.
        #[test]
        fn aggregate_equals_sum_of_tenant_totals(
            shared in 0u32..100_000u32,
            bills in prop::collection::vec(0u32..50_000u32, 2),
            advances in prop::collection::vec(0u32..50_000u32, 2),
        ) {
            let roster = test_roster();
            let mut inputs = SessionInputs::for_roster(&roster);
            inputs.set_shared_utility_bill(shared.to_string());
            for (i, tenant) in roster.tenants().iter().enumerate() {
                inputs.set_utility_bill(&tenant.id, bills[i].to_string());
                inputs.set_advance_paid(&tenant.id, advances[i].to_string());
            }
            let calculator = BillingCalculator::new(&roster, BillingConfig::default());

            let sum: Decimal = roster
                .tenants()
                .iter()
                .map(|t| calculator.tenant_total_due(t, &inputs))
                .sum();

            prop_assert_eq!(calculator.aggregate_total_due(&inputs), sum);
            prop_assert_eq!(calculator.summary(&inputs).aggregate_total_due, sum);
        }
    }
}

//! End-to-end wizard sessions: collect every input through the controller,
//! then read the results back through the display cards.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rent_core::{
    BillingConfig, Direction, DisplayCard, TenantConfig, TenantId, ValidationError,
    WizardController, WizardStep,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn id(name: &str) -> TenantId {
    TenantId::new(name).unwrap()
}

fn two_tenant_wizard() -> WizardController {
    init_tracing();
    let roster = TenantConfig::from_pairs([("A", 4000), ("B", 3800)]).unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    WizardController::new(roster, BillingConfig::default(), start)
}

/// Runs the documented two-tenant scenario through to the display state.
fn completed_scenario() -> WizardController {
    let mut wizard = two_tenant_wizard();

    wizard.advance().unwrap();
    wizard.set_shared_utility_bill("600");
    wizard.advance().unwrap();

    wizard.set_tenant_utility_bill(&id("A"), "200");
    wizard.set_tenant_advance_paid(&id("A"), "0");
    wizard.advance().unwrap();

    wizard.set_tenant_utility_bill(&id("B"), "150");
    wizard.set_tenant_advance_paid(&id("B"), "500");
    wizard.advance().unwrap();

    wizard
}

#[test]
fn scenario_produces_expected_invoices() {
    let wizard = completed_scenario();

    assert_eq!(wizard.current_step(), &WizardStep::Display { card_index: 0 });

    let a = wizard.display_card(0).unwrap();
    let a = a.as_invoice().unwrap();
    assert_eq!(a.shared_split, dec!(100));
    assert_eq!(a.total_due, dec!(4300));

    let b = wizard.display_card(1).unwrap();
    let b = b.as_invoice().unwrap();
    assert_eq!(b.advance_paid, dec!(500));
    assert_eq!(b.total_due, dec!(3550));

    let summary = wizard.display_card(2).unwrap();
    let summary = summary.as_summary().unwrap();
    assert_eq!(summary.aggregate_total_due, dec!(7850));
}

#[test]
fn scenario_billing_period_is_previous_month() {
    let wizard = completed_scenario();

    assert_eq!(wizard.billing_period().to_string(), "December 2023");
}

#[test]
fn display_cards_are_idempotent() {
    let wizard = completed_scenario();

    for index in 0..wizard.display_card_count() {
        assert_eq!(wizard.display_card(index), wizard.display_card(index));
    }
}

#[test]
fn navigation_wraps_both_ways() {
    let mut wizard = completed_scenario();
    let last = wizard.display_card_count() - 1;

    assert_eq!(wizard.navigate_display(Direction::Previous), Some(last));
    assert!(wizard.current_card().is_some_and(|c| c.is_summary()));

    assert_eq!(wizard.navigate_display(Direction::Next), Some(0));
    assert_eq!(
        wizard.current_card().and_then(|c| c.as_invoice().map(|i| i.tenant.clone())),
        Some(id("A"))
    );
}

#[test]
fn summary_matches_sum_of_invoice_cards() {
    let wizard = completed_scenario();

    let invoice_sum: Decimal = (0..wizard.tenants().len())
        .filter_map(|i| wizard.display_card(i))
        .filter_map(|card| match card {
            DisplayCard::Invoice(invoice) => Some(invoice.total_due),
            DisplayCard::Summary(_) => None,
        })
        .sum();
    let summary = wizard.calculator().summary(wizard.inputs());

    assert_eq!(summary.aggregate_total_due, invoice_sum);
}

#[test]
fn every_tenant_step_is_gated_on_its_own_bill() {
    let mut wizard = two_tenant_wizard();
    wizard.advance().unwrap();
    wizard.advance().unwrap();

    for name in ["A", "B"] {
        assert_eq!(
            wizard.advance(),
            Err(ValidationError::MissingUtilityBill { tenant: id(name) })
        );
        wizard.set_tenant_utility_bill(&id(name), "0");
        wizard.advance().unwrap();
    }

    assert!(wizard.is_displaying());
}

#[test]
fn entering_a_later_tenants_bill_does_not_unblock_current_step() {
    let mut wizard = two_tenant_wizard();
    wizard.advance().unwrap();
    wizard.advance().unwrap();
    wizard.set_tenant_utility_bill(&id("B"), "150");

    assert!(wizard.advance().is_err());
    assert_eq!(wizard.current_step(), &WizardStep::CollectTenant(id("A")));
}

#[test]
fn edits_after_display_are_reflected_in_cards() {
    let mut wizard = completed_scenario();

    wizard.set_shared_utility_bill("1200");

    let summary = wizard.display_card(2).unwrap();
    assert_eq!(summary.as_summary().unwrap().aggregate_total_due, dec!(8050));
}

#[test]
fn malformed_shared_bill_is_treated_as_zero() {
    let mut wizard = two_tenant_wizard();
    wizard.advance().unwrap();
    wizard.set_shared_utility_bill("six hundred");
    wizard.advance().unwrap();
    wizard.set_tenant_utility_bill(&id("A"), "0");
    wizard.advance().unwrap();
    wizard.set_tenant_utility_bill(&id("B"), "0");
    wizard.advance().unwrap();

    let summary = wizard.display_card(2).unwrap();

    assert_eq!(summary.as_summary().unwrap().aggregate_total_due, dec!(7800));
}

#[test]
fn oversized_utility_bill_is_not_accepted_as_entered() {
    let mut wizard = two_tenant_wizard();
    wizard.advance().unwrap();
    wizard.set_shared_utility_bill("600");
    wizard.advance().unwrap();

    wizard.set_tenant_utility_bill(&id("A"), "79228162514264337593543950335");

    assert_eq!(
        wizard.advance(),
        Err(ValidationError::MissingUtilityBill { tenant: id("A") })
    );
    assert!(!wizard.inputs().has_utility_bill(&id("A")));
}

#[test]
fn oversized_amounts_after_display_leave_cards_readable() {
    let mut wizard = completed_scenario();

    wizard.set_tenant_utility_bill(&id("A"), "79228162514264337593543950335");
    wizard.set_shared_utility_bill("79228162514264337593543950335");

    let a = wizard.display_card(0).unwrap();
    assert_eq!(a.as_invoice().unwrap().total_due, dec!(4000));

    let summary = wizard.display_card(2).unwrap();
    assert_eq!(summary.as_summary().unwrap().aggregate_total_due, dec!(7450));
}

//! Plain-text rendering of wizard prompts and result cards.

use chrono::NaiveDate;
use rent_core::calculations::common::round_half_up;
use rent_core::{BillingPeriod, DisplayCard, InvoiceSummary, TenantInvoice, WizardController, WizardStep};
use rust_decimal::Decimal;

const CARD_WIDTH: usize = 40;

/// Labels and currency used when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyle {
    pub currency_symbol: String,
    pub shared_bill_label: String,
    pub tenant_bill_label: String,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            shared_bill_label: "Water pump bill".to_string(),
            tenant_bill_label: "Power bill".to_string(),
        }
    }
}

impl CardStyle {
    /// Amount as typed-in components are shown: no forced decimals.
    pub fn amount(
        &self,
        value: Decimal,
    ) -> String {
        format!("{}{}", self.currency_symbol, value.normalize())
    }

    /// Totals are always shown with two decimal places.
    pub fn total(
        &self,
        value: Decimal,
    ) -> String {
        format!("{}{}", self.currency_symbol, round_half_up(value))
    }
}

/// Heading shown above the input for the current step.
pub fn step_title(
    wizard: &WizardController,
    style: &CardStyle,
) -> String {
    match wizard.current_step() {
        WizardStep::ConfirmPeriod => "Creating invoices for month:".to_string(),
        WizardStep::CollectSharedBill => style.shared_bill_label.clone(),
        WizardStep::CollectTenant(tenant) => format!("{tenant}'s Details"),
        WizardStep::Display { .. } => format!("Summary - {}", wizard.billing_period()),
    }
}

/// Label of the button that advances the current step.
pub fn action_label(wizard: &WizardController) -> &'static str {
    match wizard.current_step() {
        WizardStep::ConfirmPeriod => "Yes, proceed",
        WizardStep::CollectTenant(_) if wizard.is_final_input_step() => "Submit",
        _ => "Next",
    }
}

/// Formats a payment deadline as e.g. `10 January 2024`.
pub fn format_deadline(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

fn rule(
    out: &mut String,
    ch: char,
) {
    out.extend(std::iter::repeat_n(ch, CARD_WIDTH));
    out.push('\n');
}

fn row(
    out: &mut String,
    label: &str,
    value: &str,
) {
    let width = CARD_WIDTH.saturating_sub(label.chars().count() + 1);
    out.push_str(&format!("{label} {value:>width$}\n"));
}

pub fn render_invoice(
    invoice: &TenantInvoice,
    period: BillingPeriod,
    deadline: Option<NaiveDate>,
    style: &CardStyle,
) -> String {
    let mut out = String::new();
    rule(&mut out, '=');
    out.push_str(&format!("{}\n", invoice.tenant));
    rule(&mut out, '-');
    row(&mut out, &format!("Rent for {period}"), &style.amount(invoice.rent));
    row(&mut out, &style.tenant_bill_label, &style.amount(invoice.utility_bill));
    row(
        &mut out,
        &format!("{} split", style.shared_bill_label),
        &style.amount(invoice.shared_split),
    );
    if invoice.shows_advance() {
        row(&mut out, "Advance paid", &style.amount(invoice.advance_paid));
    }
    rule(&mut out, '-');
    row(&mut out, "Total due", &style.total(invoice.total_due));
    if let Some(deadline) = deadline {
        rule(&mut out, '-');
        out.push_str(&format!(
            "Please pay the full amount before {}\n",
            format_deadline(deadline)
        ));
    }
    rule(&mut out, '=');
    out
}

pub fn render_summary(
    summary: &InvoiceSummary,
    period: BillingPeriod,
    style: &CardStyle,
) -> String {
    let mut out = String::new();
    rule(&mut out, '=');
    out.push_str(&format!("Summary - {period}\n"));
    rule(&mut out, '-');
    for line in &summary.lines {
        row(&mut out, line.tenant.as_str(), &style.total(line.total_due));
    }
    rule(&mut out, '-');
    row(&mut out, "Total due", &style.total(summary.aggregate_total_due));
    rule(&mut out, '=');
    out
}

pub fn render_card(
    card: &DisplayCard,
    period: BillingPeriod,
    deadline: Option<NaiveDate>,
    style: &CardStyle,
) -> String {
    match card {
        DisplayCard::Invoice(invoice) => render_invoice(invoice, period, deadline, style),
        DisplayCard::Summary(summary) => render_summary(summary, period, style),
    }
}

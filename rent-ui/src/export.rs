//! CSV export of the invoice summary.
//!
//! ## CSV format
//!
//! One row per tenant in roster order, followed by a `TOTAL` row that only
//! carries `total_due`. Totals are rounded to two decimal places.
//!
//! ```csv
//! tenant,rent,utility_bill,shared_split,advance_paid,total_due
//! A,4000,200,100,0,4300.00
//! B,3800,150,100,500,3550.00
//! TOTAL,,,,,7850.00
//! ```

use std::io;
use std::path::Path;

use rent_core::calculations::common::round_half_up;
use rent_core::{InvoiceSummary, TenantInvoice, WizardController};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    tenant: &'a str,
    rent: Option<Decimal>,
    utility_bill: Option<Decimal>,
    shared_split: Option<Decimal>,
    advance_paid: Option<Decimal>,
    total_due: Decimal,
}

/// Errors that can occur while writing the export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the invoices and their aggregate to `writer`.
pub fn write_summary<W: io::Write>(
    writer: W,
    invoices: &[TenantInvoice],
    summary: &InvoiceSummary,
) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);

    for invoice in invoices {
        csv.serialize(CsvRow {
            tenant: invoice.tenant.as_str(),
            rent: Some(invoice.rent),
            utility_bill: Some(invoice.utility_bill),
            shared_split: Some(invoice.shared_split),
            advance_paid: Some(invoice.advance_paid),
            total_due: round_half_up(invoice.total_due),
        })?;
    }
    csv.serialize(CsvRow {
        tenant: "TOTAL",
        rent: None,
        utility_bill: None,
        shared_split: None,
        advance_paid: None,
        total_due: round_half_up(summary.aggregate_total_due),
    })?;

    csv.flush()?;
    Ok(())
}

/// Exports the wizard's current results to a file at `path`.
pub fn export_to_file(
    wizard: &WizardController,
    path: &Path,
) -> Result<(), ExportError> {
    let calculator = wizard.calculator();
    let invoices = calculator.invoices(wizard.inputs());
    let summary = calculator.summary(wizard.inputs());

    let file = std::fs::File::create(path)?;
    write_summary(file, &invoices, &summary)?;

    info!(path = %path.display(), rows = invoices.len(), "exported invoice summary");
    Ok(())
}

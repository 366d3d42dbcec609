//! Wiring between configuration, the wizard and the terminal session.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use rent_core::WizardController;
use tracing::{info, warn};

use crate::config::{AppConfig, ConfigError};
use crate::export;
use crate::session::{SessionOutcome, TerminalSession};

/// Today's date in the local time zone; the default session start.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Validates the configuration and starts a wizard session.
pub fn build_wizard(
    config: &AppConfig,
    session_start: NaiveDate,
) -> Result<WizardController, ConfigError> {
    let tenants = config.tenant_config()?;
    let billing = config.billing_config()?;
    Ok(WizardController::new(tenants, billing, session_start))
}

/// Runs one interactive session and, if it completed, exports the summary.
pub fn run_session<R: BufRead, W: Write>(
    config: &AppConfig,
    session_start: NaiveDate,
    input: R,
    output: W,
    export_path: Option<&Path>,
) -> Result<SessionOutcome> {
    let wizard = build_wizard(config, session_start).context("invalid configuration")?;
    info!(
        period = %wizard.billing_period(),
        tenants = wizard.tenants().len(),
        "invoice session started"
    );

    let mut session = TerminalSession::new(wizard, config.card_style(), input, output);
    let outcome = session.run()?;

    if let Some(path) = export_path {
        if outcome == SessionOutcome::Completed {
            export::export_to_file(session.wizard(), path)
                .with_context(|| format!("failed to export summary to {}", path.display()))?;
        } else {
            warn!(?outcome, "session did not complete; skipping export");
        }
    }

    Ok(outcome)
}

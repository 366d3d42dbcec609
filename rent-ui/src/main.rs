use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;

use rent_ui::app;
use rent_ui::config::AppConfig;
use rent_ui::logging::{self, LoggingOptions};
use rent_ui::session::SessionOutcome;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Monthly rent and utility invoices for a fixed set of tenants.
///
/// Walks through the billing month, the shared utility bill and each
/// tenant's own bill, then shows one invoice card per tenant and a summary.
#[derive(Debug, Parser)]
#[command(name = "tenant-invoices", version, about)]
struct Cli {
    /// TOML file with the tenant roster and billing settings.
    /// The built-in roster is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Session start date (YYYY-MM-DD). The month before it is invoiced.
    /// Defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Write the invoice summary as CSV to this path when the session completes.
    #[arg(long)]
    export_csv: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not write log records to stderr.
    #[arg(short, long)]
    quiet: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&LoggingOptions {
        level: cli.log_level.clone(),
        file: cli.log_file.clone(),
        quiet: cli.quiet,
    })?;

    let config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    let session_start = cli.date.unwrap_or_else(app::today);
    debug!(%session_start, "resolved session start");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let outcome = app::run_session(
        &config,
        session_start,
        stdin.lock(),
        stdout.lock(),
        cli.export_csv.as_deref(),
    )?;

    if outcome == SessionOutcome::Incomplete {
        anyhow::bail!("input ended before all tenant details were collected");
    }
    Ok(())
}

//! Line-oriented terminal front end for the invoice wizard.
//!
//! Reads one answer per line from any [`BufRead`] and writes prompts and
//! cards to any [`Write`], so a session can be scripted in tests.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use rent_core::{Direction, WizardController, WizardStep};
use rust_decimal::Decimal;
use tracing::debug;

use crate::render::{self, CardStyle};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every tenant's details were collected and the user left the cards.
    Completed,
    /// The user declined the billing month.
    Cancelled,
    /// Input ran out before the results were reached.
    Incomplete,
}

pub struct TerminalSession<R, W> {
    wizard: WizardController,
    style: CardStyle,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    pub fn new(
        wizard: WizardController,
        style: CardStyle,
        input: R,
        output: W,
    ) -> Self {
        Self {
            wizard,
            style,
            input,
            output,
        }
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn into_wizard(self) -> WizardController {
        self.wizard
    }

    /// Drives the wizard until the user quits or input ends.
    pub fn run(&mut self) -> Result<SessionOutcome> {
        loop {
            let step = self.wizard.current_step().clone();
            let finished = match step {
                WizardStep::ConfirmPeriod => self.confirm_period()?,
                WizardStep::CollectSharedBill => self.collect_shared_bill()?,
                WizardStep::CollectTenant(_) => self.collect_tenant()?,
                WizardStep::Display { .. } => Some(self.browse_cards()?),
            };
            if let Some(outcome) = finished {
                debug!(?outcome, "terminal session ended");
                return Ok(outcome);
            }
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(
        &mut self,
        label: &str,
    ) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn heading(&mut self) -> Result<()> {
        let title = render::step_title(&self.wizard, &self.style);
        let action = render::action_label(&self.wizard);
        writeln!(self.output)?;
        writeln!(self.output, "{title} [{action}]")?;
        Ok(())
    }

    fn confirm_period(&mut self) -> Result<Option<SessionOutcome>> {
        self.heading()?;
        writeln!(self.output, "  {}", self.wizard.billing_period())?;

        let Some(answer) = self.prompt("Proceed? [Y/n]")? else {
            return Ok(Some(SessionOutcome::Incomplete));
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "n" | "no" | "q" | "quit" => Ok(Some(SessionOutcome::Cancelled)),
            _ => {
                self.wizard.advance()?;
                Ok(None)
            }
        }
    }

    fn collect_shared_bill(&mut self) -> Result<Option<SessionOutcome>> {
        self.heading()?;

        let Some(amount) = self.prompt("Amount")? else {
            return Ok(Some(SessionOutcome::Incomplete));
        };
        self.wizard.set_shared_utility_bill(amount);
        self.wizard.advance()?;
        Ok(None)
    }

    fn collect_tenant(&mut self) -> Result<Option<SessionOutcome>> {
        let Some(tenant) = self.wizard.current_tenant().cloned() else {
            return Ok(Some(SessionOutcome::Incomplete));
        };
        self.heading()?;
        writeln!(
            self.output,
            "  Monthly rent: {}",
            self.style.amount(Decimal::from(tenant.rent))
        )?;

        let bill_label = self.style.tenant_bill_label.clone();
        let Some(bill) = self.prompt(&bill_label)? else {
            return Ok(Some(SessionOutcome::Incomplete));
        };
        self.wizard.set_tenant_utility_bill(&tenant.id, bill);

        let Some(advance) = self.prompt("Advance paid")? else {
            return Ok(Some(SessionOutcome::Incomplete));
        };
        self.wizard.set_tenant_advance_paid(&tenant.id, advance);

        if let Err(error) = self.wizard.advance() {
            writeln!(self.output, "! {error}")?;
        }
        Ok(None)
    }

    fn browse_cards(&mut self) -> Result<SessionOutcome> {
        let period = self.wizard.billing_period();
        let deadline = self.wizard.payment_deadline();
        let count = self.wizard.display_card_count();

        loop {
            if let WizardStep::Display { card_index } = self.wizard.current_step() {
                writeln!(self.output)?;
                writeln!(self.output, "Card {} of {count}", card_index + 1)?;
            }
            if let Some(card) = self.wizard.current_card() {
                let text = render::render_card(&card, period, deadline, &self.style);
                write!(self.output, "{text}")?;
            }

            let Some(command) = self.prompt("[n]ext, [p]revious, [q]uit")? else {
                return Ok(SessionOutcome::Completed);
            };
            match command.trim().to_ascii_lowercase().as_str() {
                "" | "n" | "next" | ">" => {
                    self.wizard.navigate_display(Direction::Next);
                }
                "p" | "prev" | "previous" | "<" => {
                    self.wizard.navigate_display(Direction::Previous);
                }
                "q" | "quit" => return Ok(SessionOutcome::Completed),
                other => writeln!(self.output, "unknown command '{other}'")?,
            }
        }
    }
}

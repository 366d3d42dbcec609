//! Invoice wizard state machine.
//!
//! The wizard walks a fixed, linear sequence of steps:
//!
//! | Step                    | Collects |
//! |-------------------------|----------|
//! | `ConfirmPeriod`         | nothing; the user confirms the billing month |
//! | `CollectSharedBill`     | the shared utility bill |
//! | `CollectTenant(t)`      | tenant `t`'s utility bill and advance, once per tenant in roster order |
//! | `Display`               | nothing; a wrapping carousel of invoice cards plus one summary card |
//!
//! Leaving a `CollectTenant` step requires that tenant's utility bill to be
//! entered. That gate is the only failure the wizard reports.

mod controller;
mod display;
mod step;

pub use controller::{ValidationError, WizardController};
pub use display::DisplayCard;
pub use step::{Direction, WizardEvent, WizardStep};

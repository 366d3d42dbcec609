pub mod amount;
pub mod calculations;
pub mod models;
pub mod wizard;

pub use amount::{MAX_AMOUNT, ParseAmountError, lenient_amount, parse_amount};
pub use calculations::{BillingCalculator, BillingConfig, BillingConfigError};
pub use models::*;
pub use wizard::{
    Direction, DisplayCard, ValidationError, WizardController, WizardEvent, WizardStep,
};

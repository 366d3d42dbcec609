//! Billing arithmetic.
//!
//! Pure functions over the tenant roster and the session inputs. Nothing in
//! this module mutates state or fails.

pub mod billing;
pub mod common;

pub use billing::{
    BillingCalculator, BillingConfig, BillingConfigError, DEFAULT_PAYMENT_DUE_DAY,
    DEFAULT_SHARED_COST_DIVISOR, shared_split,
};

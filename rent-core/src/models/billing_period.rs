use std::fmt;

use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The calendar month being invoiced.
///
/// Always the month before the one in which the session started. Computed
/// once when the wizard is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BillingPeriod {
    year: i32,
    month: u32,
}

impl BillingPeriod {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(
        year: i32,
        month: u32,
    ) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month immediately before `session_start`, regardless of day-of-month.
    pub fn preceding(session_start: NaiveDate) -> Self {
        match session_start.month() {
            1 => Self {
                year: session_start.year() - 1,
                month: 12,
            },
            month => Self {
                year: session_start.year(),
                month: month - 1,
            },
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// The period after this one.
    pub fn following(&self) -> Self {
        match self.month {
            12 => Self {
                year: self.year + 1,
                month: 1,
            },
            month => Self {
                year: self.year,
                month: month + 1,
            },
        }
    }

    /// Date by which the invoiced amount should be paid: `due_day` of the
    /// month after the billing period.
    ///
    /// Returns `None` if `due_day` does not exist in that month.
    pub fn payment_deadline(
        &self,
        due_day: u32,
    ) -> Option<NaiveDate> {
        let next = self.following();
        NaiveDate::from_ymd_opt(next.year, next.month, due_day)
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

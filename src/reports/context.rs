//! Shared inputs for report formatters
//!
//! A formatter needs two things besides the expenses themselves: the rules
//! table and today's date. Both are captured here so every formatter reads
//! them from one explicit value.

use chrono::{NaiveDate, Utc};
use std::fmt;
use std::sync::Arc;

use crate::models::{Amount, CategoryRules, Expense};

/// Source of the report date
pub trait Clock: fmt::Debug + Send + Sync {
    /// The date printed in report headers
    fn today(&self) -> NaiveDate;
}

/// Wall-clock date in UTC
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one date, for reproducible output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// One expense resolved against the rules table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseRow {
    /// Category display name
    pub name: &'static str,
    pub amount: Amount,
    pub over_limit: bool,
}

impl ExpenseRow {
    /// `"X"` when over the limit, a single space otherwise
    pub fn marker(&self) -> &'static str {
        if self.over_limit {
            "X"
        } else {
            " "
        }
    }
}

/// Rules and clock shared by a formatter
#[derive(Debug, Clone)]
pub struct ReportContext {
    rules: CategoryRules,
    clock: Arc<dyn Clock>,
}

impl ReportContext {
    /// Create a context from a rules table and a clock
    pub fn new(rules: CategoryRules, clock: impl Clock + 'static) -> Self {
        Self {
            rules,
            clock: Arc::new(clock),
        }
    }

    /// Standard rules with the given clock
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::new(CategoryRules::STANDARD, clock)
    }

    /// Standard rules, report dated `date`
    pub fn fixed(date: NaiveDate) -> Self {
        Self::with_clock(FixedClock(date))
    }

    pub fn rules(&self) -> &CategoryRules {
        &self.rules
    }

    /// Report date formatted as `YYYY-MM-DD`
    pub fn report_date(&self) -> String {
        self.clock.today().format("%Y-%m-%d").to_string()
    }

    /// Resolve an expense's display name and over-limit flag
    pub fn describe(&self, expense: &Expense) -> ExpenseRow {
        let rule = self.rules.lookup(expense.category);
        ExpenseRow {
            name: rule.name,
            amount: expense.amount,
            over_limit: rule.is_over_limit(expense.amount),
        }
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new(CategoryRules::STANDARD, SystemClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpendingLimit;

    #[test]
    fn test_report_date_is_iso() {
        let ctx = ReportContext::fixed(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(ctx.report_date(), "2024-03-07");
    }

    #[test]
    fn test_system_clock_date_shape() {
        let date = ReportContext::default().report_date();
        assert_eq!(date.len(), 10);
        assert!(NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_describe() {
        let ctx = ReportContext::default();

        let row = ctx.describe(&Expense::dinner(6000));
        assert_eq!(row.name, "Dinner");
        assert_eq!(row.amount, Amount::new(6000));
        assert!(row.over_limit);
        assert_eq!(row.marker(), "X");

        let row = ctx.describe(&Expense::breakfast(1000));
        assert!(!row.over_limit);
        assert_eq!(row.marker(), " ");

        let row = ctx.describe(&Expense::car_rental(15000));
        assert_eq!(row.name, "Car Rental");
        assert!(!row.over_limit);
    }

    #[test]
    fn test_marker_boundary_is_strict() {
        let ctx = ReportContext::default();
        for (category, rule) in ctx.rules().iter() {
            if let SpendingLimit::Limited(cap) = rule.limit {
                let at_cap = ctx.describe(&Expense::new(category, cap));
                let over = ctx.describe(&Expense::new(category, cap + Amount::new(1)));
                assert_eq!(at_cap.marker(), " ", "{} at limit", category);
                assert_eq!(over.marker(), "X", "{} over limit", category);
            }
        }

        let car = ctx.describe(&Expense::car_rental(u64::MAX));
        assert_eq!(car.marker(), " ");
    }
}

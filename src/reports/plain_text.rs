//! Plain-text expense report
//!
//! Tab-separated rows between a one-line header and a two-line footer.

use super::context::ReportContext;
use super::formatter::ReportFormatter;
use crate::models::{Amount, Expense};

#[derive(Debug, Clone, Default)]
pub struct PlainTextReportFormatter {
    context: ReportContext,
}

impl PlainTextReportFormatter {
    pub fn new(context: ReportContext) -> Self {
        Self { context }
    }
}

impl ReportFormatter for PlainTextReportFormatter {
    fn context(&self) -> &ReportContext {
        &self.context
    }

    fn generate_header(&self) -> String {
        format!("Expense Report: {}\n", self.context.report_date())
    }

    fn generate_row(&self, expense: &Expense) -> String {
        let row = self.context.describe(expense);
        format!("{}\t{}\t{}\n", row.name, row.amount, row.marker())
    }

    fn generate_footer(&self, total_expenses: Amount, meal_expenses: Amount) -> String {
        format!(
            "Meal Expenses: {}\nTotal Expenses: {}\n",
            meal_expenses, total_expenses
        )
    }
}

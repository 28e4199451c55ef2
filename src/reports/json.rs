//! JSON expense report
//!
//! The document is assembled by hand so the layout stays fixed:
//!
//! ```text
//! {
//!   "date": "2024-05-01",
//!   "expenses": [
//!     {"type": "Dinner", "amount": 6000, "overLimit": "X"},
//!     {"type": "Breakfast", "amount": 800, "overLimit": " "}
//!   ],
//!   "mealExpenses": 6800,
//!   "totalExpenses": 6800
//! }
//! ```
//!
//! Rows carry no trailing comma; the driver joins them with
//! [`ReportFormatter::row_separator`].

use serde_json::Value;

use super::context::ReportContext;
use super::formatter::ReportFormatter;
use crate::models::{Amount, Expense};

#[derive(Debug, Clone, Default)]
pub struct JsonReportFormatter {
    context: ReportContext,
}

impl JsonReportFormatter {
    pub fn new(context: ReportContext) -> Self {
        Self { context }
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn context(&self) -> &ReportContext {
        &self.context
    }

    fn generate_header(&self) -> String {
        format!(
            "{{\n  \"date\": {},\n  \"expenses\": [\n",
            json_string(&self.context.report_date())
        )
    }

    fn generate_row(&self, expense: &Expense) -> String {
        let row = self.context.describe(expense);
        format!(
            "    {{\"type\": {}, \"amount\": {}, \"overLimit\": {}}}",
            json_string(row.name),
            row.amount,
            json_string(row.marker())
        )
    }

    fn generate_footer(&self, total_expenses: Amount, meal_expenses: Amount) -> String {
        format!(
            "\n  ],\n  \"mealExpenses\": {},\n  \"totalExpenses\": {}\n}}",
            meal_expenses, total_expenses
        )
    }

    fn row_separator(&self) -> &str {
        ",\n"
    }
}

/// Quote and escape a string as a JSON literal
fn json_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

//! Expense Report driver
//!
//! Walks the expense list once, collecting the meal and overall totals while
//! concatenating the formatter's header, rows and footer.

use serde::Serialize;
use std::io::{self, Write};

use super::formatter::ReportFormatter;
use crate::error::KataResult;
use crate::models::{Amount, CategoryRules, Expense};

/// Aggregates of a single report render
///
/// Totals saturate at `u64::MAX`; see [`Amount`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    /// Sum of every expense
    pub total_expenses: Amount,
    /// Sum of expenses in meal categories
    pub meal_expenses: Amount,
    /// Number of expenses seen
    pub expense_count: usize,
}

impl ExpenseSummary {
    /// Total the given expenses against a rules table
    pub fn tally(rules: &CategoryRules, expenses: &[Expense]) -> Self {
        let mut summary = Self::default();
        for expense in expenses {
            summary.record(rules, expense);
        }
        summary
    }

    fn record(&mut self, rules: &CategoryRules, expense: &Expense) {
        if rules.lookup(expense.category).meal {
            self.meal_expenses += expense.amount;
        }
        self.total_expenses += expense.amount;
        self.expense_count += 1;
    }
}

/// A rendered report and its totals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub output: String,
    pub summary: ExpenseSummary,
}

/// Render a complete report as a string
///
/// Rows appear in input order; the footer is rendered exactly once, after
/// the last row. An empty expense list yields header and footer with zero
/// totals.
pub fn render_report<F>(formatter: &F, expenses: &[Expense]) -> RenderedReport
where
    F: ReportFormatter + ?Sized,
{
    let rules = formatter.context().rules();
    let mut summary = ExpenseSummary::default();

    let mut output = formatter.generate_header();

    for (i, expense) in expenses.iter().enumerate() {
        if i > 0 {
            output.push_str(formatter.row_separator());
        }
        summary.record(rules, expense);
        output.push_str(&formatter.generate_row(expense));
    }

    output.push_str(&formatter.generate_footer(summary.total_expenses, summary.meal_expenses));

    tracing::debug!(
        expenses = summary.expense_count,
        total = summary.total_expenses.value(),
        meal = summary.meal_expenses.value(),
        "Rendered expense report"
    );

    RenderedReport { output, summary }
}

/// Render a report and write it to `writer`
pub fn write_report<F, W>(
    formatter: &F,
    expenses: &[Expense],
    writer: &mut W,
) -> KataResult<ExpenseSummary>
where
    F: ReportFormatter + ?Sized,
    W: Write,
{
    let report = render_report(formatter, expenses);
    writer.write_all(report.output.as_bytes())?;
    writer.flush()?;
    Ok(report.summary)
}

/// Render a report and write it to standard output
pub fn print_report<F>(formatter: &F, expenses: &[Expense]) -> KataResult<ExpenseSummary>
where
    F: ReportFormatter + ?Sized,
{
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(formatter, expenses, &mut handle)
}

use anyhow::Result;

use tdd_katas::logging::init_logger;
use tdd_katas::models::Expense;
use tdd_katas::reports::{print_report, ReportContext, ReportFormat};

/// Prints the sample expense report in every built-in format
fn main() -> Result<()> {
    init_logger(false);

    let expenses = [
        Expense::dinner(6000),
        Expense::breakfast(800),
        Expense::lunch(3000),
        Expense::car_rental(15000),
    ];

    for (i, format) in ReportFormat::ALL.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        let formatter = format.formatter(ReportContext::default());
        let summary = print_report(formatter.as_ref(), &expenses)?;
        tracing::debug!(%format, total = summary.total_expenses.value(), "Printed report");
    }

    Ok(())
}

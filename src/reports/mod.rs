//! Expense report rendering
//!
//! Formatters render the pieces of a report in plain text, HTML or JSON;
//! the driver in `expense_report` stitches them together and totals the
//! expenses on the way.

pub mod context;
pub mod expense_report;
pub mod formatter;
pub mod html;
pub mod json;
pub mod plain_text;

pub use context::{Clock, ExpenseRow, FixedClock, ReportContext, SystemClock};
pub use expense_report::{
    print_report, render_report, write_report, ExpenseSummary, RenderedReport,
};
pub use formatter::{ReportFormat, ReportFormatter};
pub use html::HtmlReportFormatter;
pub use json::JsonReportFormatter;
pub use plain_text::PlainTextReportFormatter;

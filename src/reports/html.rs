//! HTML expense report
//!
//! A minimal standalone document: the rows form a table body and the
//! totals follow as paragraphs.

use super::context::ReportContext;
use super::formatter::ReportFormatter;
use crate::models::{Amount, Expense};

#[derive(Debug, Clone, Default)]
pub struct HtmlReportFormatter {
    context: ReportContext,
}

impl HtmlReportFormatter {
    pub fn new(context: ReportContext) -> Self {
        Self { context }
    }
}

impl ReportFormatter for HtmlReportFormatter {
    fn context(&self) -> &ReportContext {
        &self.context
    }

    fn generate_header(&self) -> String {
        let date = self.context.report_date();
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        output.push_str(&format!("<title>Expense Report: {}</title>\n", date));
        output.push_str("</head>\n<body>\n");
        output.push_str(&format!("<h1>Expense Report: {}</h1>\n", date));
        output.push_str("<table>\n<thead>\n");
        output.push_str("<tr><th scope=\"col\">Type</th>");
        output.push_str("<th scope=\"col\">Amount</th>");
        output.push_str("<th scope=\"col\">Over Limit</th></tr>\n");
        output.push_str("</thead>\n<tbody>\n");

        output
    }

    fn generate_row(&self, expense: &Expense) -> String {
        let row = self.context.describe(expense);
        format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(row.name),
            row.amount,
            row.marker()
        )
    }

    fn generate_footer(&self, total_expenses: Amount, meal_expenses: Amount) -> String {
        let mut output = String::from("</tbody>\n</table>\n");
        output.push_str(&format!("<p>Meal Expenses: {}</p>\n", meal_expenses));
        output.push_str(&format!("<p>Total Expenses: {}</p>\n", total_expenses));
        output.push_str("</body>\n</html>\n");
        output
    }
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

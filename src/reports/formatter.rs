//! The report formatter seam
//!
//! A formatter renders three pieces: a header, one row per expense, and a
//! footer carrying the totals. Formats differ only in textual shape.

use std::fmt;
use std::str::FromStr;

use super::context::ReportContext;
use super::html::HtmlReportFormatter;
use super::json::JsonReportFormatter;
use super::plain_text::PlainTextReportFormatter;
use crate::error::KataError;
use crate::models::{Amount, Expense};

/// Renders the pieces of an expense report in one output format
pub trait ReportFormatter: Send + Sync {
    /// Rules and clock the formatter was built with
    fn context(&self) -> &ReportContext;

    /// Preamble including the report date
    fn generate_header(&self) -> String;

    /// One expense line
    fn generate_row(&self, expense: &Expense) -> String;

    /// Closing text with the meal and overall totals
    fn generate_footer(&self, total_expenses: Amount, meal_expenses: Amount) -> String;

    /// Text placed between consecutive rows
    fn row_separator(&self) -> &str {
        ""
    }
}

/// The built-in output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    PlainText,
    Html,
    Json,
}

impl ReportFormat {
    pub const ALL: [ReportFormat; 3] = [Self::PlainText, Self::Html, Self::Json];

    /// Build a formatter of this format
    pub fn formatter(self, context: ReportContext) -> Box<dyn ReportFormatter> {
        match self {
            Self::PlainText => Box::new(PlainTextReportFormatter::new(context)),
            Self::Html => Box::new(HtmlReportFormatter::new(context)),
            Self::Json => Box::new(JsonReportFormatter::new(context)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "text" | "plain-text" | "txt" => Ok(Self::PlainText),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(KataError::InvalidFormatter(s.to_string())),
        }
    }
}

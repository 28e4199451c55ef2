//! tdd-katas - test-driven development practice katas
//!
//! The centerpiece is an expense report generator: a fixed table of expense
//! categories with spending limits, and interchangeable formatters that
//! render a report in plain text, HTML or JSON. Alongside it live the
//! smaller katas (FizzBuzz, string calculator, rock-paper-scissors, age
//! calculator and a greeter).
//!
//! # Architecture
//!
//! - `error`: Custom error types
//! - `models`: Amounts, expense categories with their rules, expenses
//! - `reports`: Report formatters and the rendering driver
//! - `import`: CSV expense list parsing
//! - `katas`: The smaller exercises
//! - `logging`: Subscriber setup for the binary
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tdd_katas::models::Expense;
//! use tdd_katas::reports::{render_report, PlainTextReportFormatter, ReportContext};
//!
//! let context = ReportContext::fixed(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
//! let formatter = PlainTextReportFormatter::new(context);
//! let report = render_report(&formatter, &[Expense::dinner(6000), Expense::car_rental(15000)]);
//!
//! assert!(report.output.starts_with("Expense Report: 2024-05-01\n"));
//! assert_eq!(report.summary.meal_expenses.value(), 6000);
//! ```

pub mod error;
pub mod import;
pub mod katas;
pub mod logging;
pub mod models;
pub mod reports;

pub use error::{KataError, KataResult};

//! Core data models for the expense report
//!
//! Amounts, categories with their spending rules, and the expense value
//! itself.

pub mod amount;
pub mod category;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use category::{CategoryRule, CategoryRules, ExpenseCategory, SpendingLimit};
pub use expense::Expense;

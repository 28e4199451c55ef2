//! Expense model
//!
//! An expense is an immutable (category, amount) pair supplied by the caller.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::category::ExpenseCategory;

/// A single expense line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expense {
    /// What the money was spent on
    #[serde(rename = "type")]
    pub category: ExpenseCategory,

    /// How much was spent
    pub amount: Amount,
}

impl Expense {
    /// Create a new expense
    pub fn new(category: ExpenseCategory, amount: impl Into<Amount>) -> Self {
        Self {
            category,
            amount: amount.into(),
        }
    }

    pub fn dinner(amount: u64) -> Self {
        Self::new(ExpenseCategory::Dinner, amount)
    }

    pub fn breakfast(amount: u64) -> Self {
        Self::new(ExpenseCategory::Breakfast, amount)
    }

    pub fn lunch(amount: u64) -> Self {
        Self::new(ExpenseCategory::Lunch, amount)
    }

    pub fn car_rental(amount: u64) -> Self {
        Self::new(ExpenseCategory::CarRental, amount)
    }
}

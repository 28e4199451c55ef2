//! Expense categories and their spending rules
//!
//! Every category has exactly one rule: a display name, a spending limit and
//! whether it counts toward the meal subtotal. The rules table is a plain
//! value handed to whoever needs it, never a global.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use crate::error::KataError;

/// The kind of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    Dinner,
    Breakfast,
    CarRental,
    Lunch,
}

impl ExpenseCategory {
    /// All categories, in rule-table order
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Dinner,
        ExpenseCategory::Breakfast,
        ExpenseCategory::CarRental,
        ExpenseCategory::Lunch,
    ];

    /// Short machine name (`car-rental`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dinner => "dinner",
            Self::Breakfast => "breakfast",
            Self::CarRental => "car-rental",
            Self::Lunch => "lunch",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Dinner => 0,
            Self::Breakfast => 1,
            Self::CarRental => 2,
            Self::Lunch => 3,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = KataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "dinner" => Ok(Self::Dinner),
            "breakfast" => Ok(Self::Breakfast),
            "car-rental" | "carrental" => Ok(Self::CarRental),
            "lunch" => Ok(Self::Lunch),
            _ => Err(KataError::UnknownCategory(s.to_string())),
        }
    }
}

/// How much may be spent on a single expense of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendingLimit {
    /// Amounts strictly above the cap are over the limit
    Limited(Amount),
    /// No cap; never over the limit
    Unbounded,
}

impl SpendingLimit {
    /// Check whether an amount exceeds this limit
    pub fn is_exceeded_by(&self, amount: Amount) -> bool {
        match self {
            Self::Limited(cap) => amount > *cap,
            Self::Unbounded => false,
        }
    }
}

/// Static data attached to a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRule {
    /// Name shown in reports
    pub name: &'static str,
    /// Per-expense spending limit
    pub limit: SpendingLimit,
    /// Whether the category counts toward meal expenses
    pub meal: bool,
}

impl CategoryRule {
    /// Create a capped rule
    pub const fn limited(name: &'static str, cap: u64, meal: bool) -> Self {
        Self {
            name,
            limit: SpendingLimit::Limited(Amount::new(cap)),
            meal,
        }
    }

    /// Create a rule without a cap
    pub const fn unbounded(name: &'static str, meal: bool) -> Self {
        Self {
            name,
            limit: SpendingLimit::Unbounded,
            meal,
        }
    }

    /// Check whether an amount is over this rule's limit
    pub fn is_over_limit(&self, amount: Amount) -> bool {
        self.limit.is_exceeded_by(amount)
    }
}

/// The read-only rule table, one rule per category
///
/// Indexed by category, so lookups cannot miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRules {
    rules: [CategoryRule; 4],
}

impl CategoryRules {
    /// The standard limits used by the expense report
    pub const STANDARD: CategoryRules = CategoryRules {
        rules: [
            CategoryRule::limited("Dinner", 5000, true),
            CategoryRule::limited("Breakfast", 1000, true),
            CategoryRule::unbounded("Car Rental", false),
            CategoryRule::limited("Lunch", 2000, true),
        ],
    };

    /// Build a table from a rule for every category
    pub fn from_fn(rule_for: impl FnMut(ExpenseCategory) -> CategoryRule) -> Self {
        Self {
            rules: ExpenseCategory::ALL.map(rule_for),
        }
    }

    /// Look up the rule for a category
    pub fn lookup(&self, category: ExpenseCategory) -> &CategoryRule {
        &self.rules[category.index()]
    }

    /// Iterate over all categories with their rules
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, &CategoryRule)> {
        ExpenseCategory::ALL.into_iter().zip(self.rules.iter())
    }
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

//! String calculator
//!
//! Sums a comma-separated list of integers.

use crate::error::{KataError, KataResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct StringCalculator;

impl StringCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Add the numbers in `input`
    ///
    /// An empty string is 0. Each comma-separated operand must be an
    /// integer, optionally surrounded by whitespace. A sum outside `i64`
    /// is rejected as [`KataError::InvalidNumber`] carrying the whole input.
    pub fn add(&self, input: &str) -> KataResult<i64> {
        if input.trim().is_empty() {
            return Ok(0);
        }

        input.split(',').try_fold(0i64, |total, operand| {
            let value = operand
                .trim()
                .parse::<i64>()
                .map_err(|_| KataError::InvalidNumber(operand.to_string()))?;
            total
                .checked_add(value)
                .ok_or_else(|| KataError::InvalidNumber(input.to_string()))
        })
    }
}

//! CSV expense import
//!
//! Reads expense lists shaped like the kata fixtures: one `type,amount`
//! record per line, with an optional header row.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;

use crate::error::{KataError, KataResult};
use crate::models::{Amount, Expense, ExpenseCategory};

/// Parse expenses from CSV text
///
/// The first record is treated as a header when it has two fields and
/// neither parses: no known category and no amount. Blank lines are skipped.
pub fn parse_expenses_csv<R: Read>(reader: R) -> KataResult<Vec<Expense>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut expenses = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let line = index + 1;

        if index == 0 && looks_like_header(&record) {
            continue;
        }

        expenses.push(parse_record(&record, line)?);
    }

    tracing::debug!(count = expenses.len(), "Parsed expenses from CSV");

    Ok(expenses)
}

/// Parse expenses from an in-memory CSV string
pub fn parse_expenses_str(csv_data: &str) -> KataResult<Vec<Expense>> {
    parse_expenses_csv(csv_data.as_bytes())
}

fn looks_like_header(record: &StringRecord) -> bool {
    match (record.get(0), record.get(1)) {
        (Some(category), Some(amount)) if record.len() == 2 => {
            category.parse::<ExpenseCategory>().is_err() && amount.parse::<Amount>().is_err()
        }
        _ => false,
    }
}

fn parse_record(record: &StringRecord, line: usize) -> KataResult<Expense> {
    if record.len() != 2 {
        return Err(KataError::Import(format!(
            "line {}: expected 2 fields, found {}",
            line,
            record.len()
        )));
    }

    let category: ExpenseCategory = record[0].parse()?;
    let amount: Amount = record[1]
        .parse()
        .map_err(|e| KataError::Import(format!("line {}: {}", line, e)))?;

    Ok(Expense::new(category, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_header() {
        let csv = "type,amount\ndinner,4500\nbreakfast, 700\ncar-rental,12000\n";
        let expenses = parse_expenses_str(csv).unwrap();

        assert_eq!(
            expenses,
            vec![
                Expense::dinner(4500),
                Expense::breakfast(700),
                Expense::car_rental(12000),
            ]
        );
    }

    #[test]
    fn test_parse_without_header() {
        let expenses = parse_expenses_str("lunch,1500\nLunch,2500").unwrap();
        assert_eq!(expenses, vec![Expense::lunch(1500), Expense::lunch(2500)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_expenses_str("").unwrap().is_empty());
        assert!(parse_expenses_str("type,amount\n").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_category_in_body() {
        let err = parse_expenses_str("dinner,10\ntaxi,20\n").unwrap_err();
        assert!(matches!(err, KataError::UnknownCategory(ref s) if s == "taxi"));
    }

    #[test]
    fn test_unknown_category_in_first_row() {
        let err = parse_expenses_str("taxi,20\ndinner,10\n").unwrap_err();
        assert!(matches!(err, KataError::UnknownCategory(ref s) if s == "taxi"));
    }

    #[test]
    fn test_header_with_other_names() {
        let expenses = parse_expenses_str("Category, Cost\nlunch,300\n").unwrap();
        assert_eq!(expenses, vec![Expense::lunch(300)]);
    }

    #[test]
    fn test_bad_amount_reports_line() {
        let err = parse_expenses_str("type,amount\ndinner,-5\n").unwrap_err();
        assert!(matches!(err, KataError::Import(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_expenses_str("dinner,10,extra\n").unwrap_err();
        assert!(err.to_string().contains("expected 2 fields"));
    }
}

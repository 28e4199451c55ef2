//! Age in completed years

use chrono::{Datelike, NaiveDate};

use crate::error::{KataError, KataResult};

/// Completed years between `birth` and `target`
///
/// A year only counts once the birthday has been reached in the target
/// year. A Feb 29 birthday is reached on Mar 1 in common years.
pub fn age_in_years(birth: NaiveDate, target: NaiveDate) -> KataResult<u32> {
    if target < birth {
        return Err(KataError::DateOrder { birth, target });
    }

    let years = target.year() - birth.year();
    let had_birthday = (target.month(), target.day()) >= (birth.month(), birth.day());
    let age = if had_birthday { years } else { years - 1 };

    Ok(age as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_already_passed() {
        let cases = [
            (date(1979, 2, 15), date(2000, 3, 21), 21),
            (date(1950, 1, 31), date(2001, 3, 21), 51),
            (date(2015, 3, 10), date(2022, 3, 21), 7),
            (date(2000, 2, 29), date(2008, 2, 29), 8),
        ];
        for (birth, target, expected) in cases {
            assert_eq!(age_in_years(birth, target).unwrap(), expected, "{} -> {}", birth, target);
        }
    }

    #[test]
    fn test_birthday_in_later_month() {
        let cases = [
            (date(1979, 2, 15), date(2000, 1, 1), 20),
            (date(2015, 3, 21), date(2022, 2, 28), 6),
            (date(2004, 2, 29), date(2005, 3, 1), 1),
        ];
        for (birth, target, expected) in cases {
            assert_eq!(age_in_years(birth, target).unwrap(), expected, "{} -> {}", birth, target);
        }
    }

    #[test]
    fn test_birthday_later_in_same_month() {
        assert_eq!(age_in_years(date(1950, 1, 31), date(2000, 1, 1)).unwrap(), 49);
        assert_eq!(age_in_years(date(2000, 2, 29), date(2022, 2, 28)).unwrap(), 21);
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(age_in_years(date(2020, 6, 1), date(2020, 6, 1)).unwrap(), 0);
    }

    #[test]
    fn test_target_before_birth() {
        let err = age_in_years(date(2020, 6, 1), date(2020, 5, 31)).unwrap_err();
        assert!(matches!(err, KataError::DateOrder { .. }));
    }
}

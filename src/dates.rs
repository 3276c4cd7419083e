//! Date Utilities
//!
//! Trip duration and date ordering checks for the search form.

use chrono::NaiveDate;

/// Format produced by `<input type="date">`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which date input was just edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Start,
    End,
}

/// Dates entered in the wrong order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateOrderError {
    /// Field that was changed last and gets cleared
    pub field: DateField,
}

impl std::fmt::Display for DateOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.field {
            DateField::Start => write!(f, "開始日期不能晚於結束日期"),
            DateField::End => write!(f, "結束日期不能早於開始日期"),
        }
    }
}

impl std::error::Error for DateOrderError {}

/// Days between two calendar dates, rounded up.
///
/// Returns `None` if either side is empty or not a valid date.
/// Negative when `end` precedes `start`.
pub fn compute_days(start: &str, end: &str) -> Option<i64> {
    let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT).ok()?;
    let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT).ok()?;
    // Whole calendar dates, so the difference is already integral
    Some((end - start).num_days())
}

/// Reject a reversed date pair, blaming the field that was just changed.
///
/// Incomplete or unparsable pairs pass; equal dates pass (0 days).
pub fn check_date_order(field: DateField, start: &str, end: &str) -> Result<(), DateOrderError> {
    if start.is_empty() || end.is_empty() {
        return Ok(());
    }
    match compute_days(start, end) {
        Some(days) if days < 0 => Err(DateOrderError { field }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_days_forward() {
        assert_eq!(compute_days("2024-01-01", "2024-01-05"), Some(4));
        assert_eq!(compute_days("2023-12-30", "2024-01-02"), Some(3));
        // Leap day
        assert_eq!(compute_days("2024-02-28", "2024-03-01"), Some(2));
    }

    #[test]
    fn test_compute_days_same_day_is_zero() {
        assert_eq!(compute_days("2024-06-15", "2024-06-15"), Some(0));
    }

    #[test]
    fn test_compute_days_reversed_is_negative() {
        assert_eq!(compute_days("2024-06-15", "2024-06-10"), Some(-5));
    }

    #[test]
    fn test_compute_days_invalid_input() {
        assert_eq!(compute_days("", "2024-06-10"), None);
        assert_eq!(compute_days("2024-06-10", ""), None);
        assert_eq!(compute_days("not-a-date", "2024-06-10"), None);
        assert_eq!(compute_days("2024-02-30", "2024-03-01"), None);
    }

    #[test]
    fn test_compute_days_never_negative_when_ordered() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for offset in 0..400 {
            let end = start + chrono::Duration::days(offset);
            let days = compute_days(
                &start.format(DATE_FORMAT).to_string(),
                &end.format(DATE_FORMAT).to_string(),
            );
            assert_eq!(days, Some(offset));
        }
    }

    #[test]
    fn test_check_date_order() {
        assert!(check_date_order(DateField::End, "2024-01-05", "2024-01-05").is_ok());
        assert!(check_date_order(DateField::End, "", "2024-01-01").is_ok());
        assert!(check_date_order(DateField::Start, "garbage", "2024-01-01").is_ok());

        let err = check_date_order(DateField::End, "2024-01-05", "2024-01-01").unwrap_err();
        assert_eq!(err.field, DateField::End);
        assert_eq!(err.to_string(), "結束日期不能早於開始日期");

        let err = check_date_order(DateField::Start, "2024-01-05", "2024-01-01").unwrap_err();
        assert_eq!(err.to_string(), "開始日期不能晚於結束日期");
    }
}

use crate::utils::error::{ExpError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses a calendar date written as `YYYY-MM-DD` or `YYYY-MM`.
///
/// The month-only form resolves to the first day of that month.
pub fn parse_calendar_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ExpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Date cannot be empty".to_string(),
        });
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d"))
        .map_err(|e| ExpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected YYYY-MM-DD or YYYY-MM: {}", e),
        })
}

/// Returns true when a configured end value means "still ongoing".
pub fn is_open_end_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("present")
        || trimmed.eq_ignore_ascii_case("current")
}

pub fn validate_date_order(label: Option<&str>, start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(ExpError::InvalidInterval {
            label: label.map(str::to_string),
            start,
            end,
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ExpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ExpError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calendar_date() {
        assert_eq!(
            parse_calendar_date("start", "2023-02-01").unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
        );
        assert_eq!(
            parse_calendar_date("start", "2023-02").unwrap(),
            NaiveDate::from_ymd_opt(2023, 2, 1).unwrap()
        );
        assert_eq!(
            parse_calendar_date("start", " 2020-06-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2020, 6, 15).unwrap()
        );
        assert!(parse_calendar_date("start", "").is_err());
        assert!(parse_calendar_date("start", "2023-13").is_err());
        assert!(parse_calendar_date("start", "Feb 2023").is_err());
    }

    #[test]
    fn test_open_end_markers() {
        assert!(is_open_end_marker(""));
        assert!(is_open_end_marker("Present"));
        assert!(is_open_end_marker("current"));
        assert!(!is_open_end_marker("2025-08-01"));
    }

    #[test]
    fn test_validate_date_order() {
        let early = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let late = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
        assert!(validate_date_order(None, early, late).is_ok());
        assert!(validate_date_order(None, early, early).is_ok());
        assert!(matches!(
            validate_date_order(Some("Volstory"), late, early),
            Err(ExpError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let missing: Option<i32> = None;
        assert_eq!(*validate_required_field("x", &present).unwrap(), 3);
        assert!(validate_required_field("x", &missing).is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}

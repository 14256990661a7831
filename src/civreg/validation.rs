//! Input validation for registry fields.
//!
//! Every validator takes the raw text the user typed and either returns the
//! typed value or a recoverable [`RegistryError`]. None of them loop or
//! prompt: re-asking on failure is the caller's job.
//!
//! Accepted dates:
//! - `d/m/yyyy` or `d-m-yyyy`, the same separator in both positions
//! - Day and month with one or two digits, year with exactly four
//! - Must name a real calendar day (no 31 April, no 29 February in 2023)

use crate::error::{RegistryError, Result};
use crate::model::{Category, LicenseType};
use chrono::NaiveDate;

const DATE_SEPARATORS: [char; 2] = ['/', '-'];

/// Parses a calendar date typed as `d/m/yyyy` or `d-m-yyyy`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use civreg::validation::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// assert_eq!(parse_date("5/1/2024").unwrap(), expected);
/// assert_eq!(parse_date("05-01-2024").unwrap(), expected);
///
/// assert!(parse_date("32/13/2024").is_err());
/// assert!(parse_date("abc").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    DATE_SEPARATORS
        .iter()
        .find_map(|&sep| parse_with_separator(text, sep))
        .ok_or_else(|| RegistryError::InvalidFormat(text.to_string()))
}

fn parse_with_separator(text: &str, separator: char) -> Option<NaiveDate> {
    let mut parts = text.split(separator);
    let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    if !is_digits(day, 1, 2) || !is_digits(month, 1, 2) || !is_digits(year, 4, 4) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn is_digits(part: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a license category. Only the first character is inspected.
///
/// # Examples
/// ```
/// use civreg::model::Category;
/// use civreg::validation::validate_category;
///
/// assert_eq!(validate_category("b").unwrap(), Category::B);
/// assert_eq!(validate_category("Banana").unwrap(), Category::B);
/// assert!(validate_category("F").is_err());
/// ```
pub fn validate_category(text: &str) -> Result<Category> {
    text.chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
        .and_then(Category::from_letter)
        .ok_or_else(|| RegistryError::InvalidChoice(text.to_string()))
}

/// Validates a license type token, case-insensitively, against `PPD` and
/// `DEFINITIVA`.
pub fn validate_license_type(text: &str) -> Result<LicenseType> {
    match text.to_uppercase().as_str() {
        "PPD" => Ok(LicenseType::Provisional),
        "DEFINITIVA" => Ok(LicenseType::Definitive),
        _ => Err(RegistryError::InvalidChoice(text.to_string())),
    }
}

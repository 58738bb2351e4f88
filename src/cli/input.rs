//! Parsing of values typed at prompts.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use edurec::{Prefix, Reference, domain::assignment::end_of_day};

/// Text typed at a prompt could not be understood.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    /// Expected a number.
    #[error("'{0}' is not a valid number")]
    Number(String),

    /// Expected a `YYYY-MM-DD` date.
    #[error("'{0}' is not a date in YYYY-MM-DD format")]
    Date(String),

    /// Expected an id, or a reference with the given prefix.
    #[error("'{0}' is not an id or a {1} reference")]
    Id(String, Prefix),
}

/// Parse a due date typed as `YYYY-MM-DD`. The assignment falls due at the
/// end of that day.
pub fn parse_due_date(text: &str) -> Result<NaiveDateTime, InputError> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map(end_of_day)
        .map_err(|_| InputError::Date(text.to_string()))
}

/// Parse an optional number. Blank input means "no value".
pub fn parse_optional<T: FromStr>(text: &str) -> Result<Option<T>, InputError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| InputError::Number(text.to_string()))
}

/// Parse a number.
pub fn parse_number<T: FromStr>(text: &str) -> Result<T, InputError> {
    text.trim()
        .parse()
        .map_err(|_| InputError::Number(text.to_string()))
}

/// Parse a record id typed either as a bare number (`3`) or as a reference
/// with the expected prefix (`STU0003`, `stu3`).
pub fn parse_id(text: &str, prefix: Prefix) -> Result<u32, InputError> {
    if let Ok(id) = text.trim().parse() {
        return Ok(id);
    }
    match Reference::try_from(text) {
        Ok(reference) if reference.prefix() == prefix => Ok(reference.id()),
        _ => Err(InputError::Id(text.to_string(), prefix)),
    }
}

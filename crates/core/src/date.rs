//! Conversion of ISO-8601 date strings into calendar dates.
//!
//! Entities only ever accept a [`NaiveDate`]; callers holding text parse it
//! here first and get a [`CoreError::InvalidDate`] on malformed input.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CoreError, Result};

const DATE_LEN: usize = "YYYY-MM-DD".len();
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Parse `YYYY-MM-DD`, or an ISO date-time `YYYY-MM-DDTHH:MM[:SS[.fff]]`
/// whose time part is discarded.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let invalid = |reason: &str| CoreError::InvalidDate {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if !input.is_ascii() || input.len() < DATE_LEN {
        return Err(invalid("expected YYYY-MM-DD"));
    }
    let (date_part, rest) = input.split_at(DATE_LEN);

    let bytes = date_part.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid("expected YYYY-MM-DD"));
    }
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| invalid(&e.to_string()))?;

    if rest.is_empty() {
        return Ok(date);
    }

    let time_part = rest
        .strip_prefix('T')
        .or_else(|| rest.strip_prefix(' '))
        .ok_or_else(|| invalid("unexpected trailing characters"))?;

    if TIME_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(time_part, fmt).is_ok())
    {
        Ok(date)
    } else {
        Err(invalid("malformed time component"))
    }
}

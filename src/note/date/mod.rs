//! # Dates
//!
//! User supplied dates are accepted in exactly three formats, tried in order:
//!
//! 1. `2006-01-02T15:04:05Z07:00` (RFC 3339, offset included)
//! 2. `2006-01-02 15:04:05` (local time)
//! 3. `2006-01-02` (local midnight)
//!
//! An absent or blank date means "now". A non-empty date that matches none of
//! the formats is a [`NoteError::DateParse`]: an explicit value is never
//! silently replaced.
//!
//! Formatting lives in [`layout`].

use crate::error::{NoteError, Result};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub mod layout;

pub use layout::format_date;

const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const LOCAL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date string against the three supported formats.
pub fn parse_date(input: &str) -> Result<DateTime<FixedOffset>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt);
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(input, LOCAL_DATETIME_FORMAT) {
        return Ok(localize(naive));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, LOCAL_DATE_FORMAT) {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| NoteError::DateParse {
            input: input.to_string(),
        })?;
        return Ok(localize(midnight));
    }

    Err(NoteError::DateParse {
        input: input.to_string(),
    })
}

/// Resolves the note date: `now` when nothing was given, the parsed date otherwise.
pub fn resolve_date(
    input: Option<&str>,
    now: DateTime<FixedOffset>,
) -> Result<DateTime<FixedOffset>> {
    match input.map(str::trim) {
        None | Some("") => Ok(now),
        Some(raw) => parse_date(raw),
    }
}

/// The current local time with its offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

// Local times that fall into a DST gap have no local representation; those
// are taken as UTC.
fn localize(naive: NaiveDateTime) -> DateTime<FixedOffset> {
    match Local.from_local_datetime(&naive).earliest() {
        Some(local) => local.fixed_offset(),
        None => Utc.from_utc_datetime(&naive).fixed_offset(),
    }
}

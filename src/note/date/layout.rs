//! Date layouts for `dateFormat`.
//!
//! Two dialects are understood:
//!
//! - **strftime**: any layout containing `%` is handed to chrono as-is
//!   (`"%Y%m%d"`). Invalid specifiers are reported, not panicked on.
//! - **reference date**: every other layout spells out how the reference time
//!   `Mon Jan 2 15:04:05 MST 2006` should look (`"20060102"`,
//!   `"2006-01-02T15:04:05Z07:00"`). Characters that are not part of a
//!   reference component are copied through verbatim.
//!
//! | component | meaning | component | meaning |
//! |-----------|---------|-----------|---------|
//! | `2006` `06` | year | `15` | hour (24h) |
//! | `01` `1` | month number | `03` `3` | hour (12h) |
//! | `January` `Jan` | month name | `04` `4` | minute |
//! | `02` `2` `_2` | day of month | `05` `5` | second |
//! | `002` | day of year | `PM` `pm` | meridiem |
//! | `Monday` `Mon` | weekday name | `.000` `.000000` `.000000000` | fraction |
//! | `MST` | zone abbreviation | `-07:00` `-0700` `-07` | offset |
//! | `Z07:00` `Z0700` `Z07` | offset, `Z` for UTC | | |

use crate::error::{NoteError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};
use std::fmt::Write;

/// Formats `dt` using either a strftime or a reference-date layout.
pub fn format_date(layout: &str, dt: &DateTime<FixedOffset>) -> Result<String> {
    if layout.contains('%') {
        return format_strftime(layout, dt);
    }

    let mut out = String::with_capacity(layout.len() + 8);
    for chunk in parse_layout(layout) {
        match chunk {
            Chunk::Literal(text) => out.push_str(text),
            Chunk::Spec(spec) => {
                write!(out, "{}", dt.format(spec)).map_err(|_| invalid_layout(layout))?
            }
            Chunk::Offset { zulu, spec } => {
                if zulu && dt.offset().local_minus_utc() == 0 {
                    out.push('Z');
                } else {
                    write!(out, "{}", dt.format(spec)).map_err(|_| invalid_layout(layout))?
                }
            }
        }
    }
    Ok(out)
}

fn format_strftime(layout: &str, dt: &DateTime<FixedOffset>) -> Result<String> {
    let items: Vec<Item<'_>> = StrftimeItems::new(layout).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(invalid_layout(layout));
    }

    let mut out = String::new();
    write!(out, "{}", dt.format_with_items(items.into_iter()))
        .map_err(|_| invalid_layout(layout))?;
    Ok(out)
}

fn invalid_layout(layout: &str) -> NoteError {
    NoteError::Validation(format!("Invalid date layout: '{}'", layout))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chunk<'a> {
    Literal(&'a str),
    Spec(&'static str),
    Offset { zulu: bool, spec: &'static str },
}

// Longest components first within each leading character.
const COMPONENTS: &[(&str, Chunk<'static>)] = &[
    ("January", Chunk::Spec("%B")),
    ("Jan", Chunk::Spec("%b")),
    ("Monday", Chunk::Spec("%A")),
    ("Mon", Chunk::Spec("%a")),
    ("MST", Chunk::Spec("%Z")),
    ("2006", Chunk::Spec("%Y")),
    ("002", Chunk::Spec("%j")),
    ("01", Chunk::Spec("%m")),
    ("02", Chunk::Spec("%d")),
    ("03", Chunk::Spec("%I")),
    ("04", Chunk::Spec("%M")),
    ("05", Chunk::Spec("%S")),
    ("06", Chunk::Spec("%y")),
    ("_2", Chunk::Spec("%e")),
    ("15", Chunk::Spec("%H")),
    ("1", Chunk::Spec("%-m")),
    ("2", Chunk::Spec("%-d")),
    ("3", Chunk::Spec("%-I")),
    ("4", Chunk::Spec("%-M")),
    ("5", Chunk::Spec("%-S")),
    ("PM", Chunk::Spec("%p")),
    ("pm", Chunk::Spec("%P")),
    ("Z07:00", Chunk::Offset { zulu: true, spec: "%:z" }),
    ("Z0700", Chunk::Offset { zulu: true, spec: "%z" }),
    ("Z07", Chunk::Offset { zulu: true, spec: "%:::z" }),
    ("-07:00", Chunk::Offset { zulu: false, spec: "%:z" }),
    ("-0700", Chunk::Offset { zulu: false, spec: "%z" }),
    ("-07", Chunk::Offset { zulu: false, spec: "%:::z" }),
    (".000000000", Chunk::Spec("%.9f")),
    (".000000", Chunk::Spec("%.6f")),
    (".000", Chunk::Spec("%.3f")),
];

fn parse_layout(layout: &str) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < layout.len() {
        let rest = &layout[i..];
        let matched = COMPONENTS.iter().find(|(token, _)| {
            rest.starts_with(token) && !fraction_runs_on(token, &rest[token.len()..])
        });

        match matched {
            Some((token, chunk)) => {
                if literal_start < i {
                    chunks.push(Chunk::Literal(&layout[literal_start..i]));
                }
                chunks.push(*chunk);
                i += token.len();
                literal_start = i;
            }
            None => {
                i += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if literal_start < layout.len() {
        chunks.push(Chunk::Literal(&layout[literal_start..]));
    }
    chunks
}

// A fraction component only counts when no further digit follows it.
fn fraction_runs_on(token: &str, after: &str) -> bool {
    token.starts_with('.') && after.starts_with(|c: char| c.is_ascii_digit())
}

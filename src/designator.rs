//! Long-form GMT offset designators.
//!
//! A designator is the `longOffset` time zone name: `GMT` for a zero offset,
//! `GMT±HH:MM` otherwise, and `GMT±HH:MM:SS` when the offset is not a whole
//! number of minutes (local mean time entries in the tz database).

use crate::error::Rejection;

pub(crate) const PREFIX: &str = "GMT";

/// Render an offset, given in seconds east of UTC, as a designator.
///
/// Hours are not capped at two digits, so any [`crate::Offset`] renders.
pub fn render(offset_seconds: i64) -> String {
    if offset_seconds == 0 {
        return PREFIX.to_string();
    }

    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let abs = offset_seconds.unsigned_abs();
    let (hours, minutes, seconds) = (abs / 3600, abs % 3600 / 60, abs % 60);

    if seconds == 0 {
        format!("{PREFIX}{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{PREFIX}{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

/// The text between the first `GMT` in `text` and the next `GMT`, or the end.
pub(crate) fn remainder(text: &str) -> Option<&str> {
    let (_, rest) = text.split_once(PREFIX)?;
    Some(match rest.find(PREFIX) {
        Some(end) => &rest[..end],
        None => rest,
    })
}

/// Read the designator embedded in `text` and return its offset in minutes.
///
/// `text` may be a whole formatted timestamp (`7/1/2024, GMT-04:00`); only
/// the part following `GMT` is inspected, and it must be exactly `[+-]HH:MM`.
///
/// ```
/// use civil_offset::{Rejection, parse_designator};
///
/// assert_eq!(parse_designator("1/1/2024, GMT-05:00"), Ok(-300));
/// assert_eq!(parse_designator("1/1/2024, GMT"), Err(Rejection::WrongLength(0)));
/// ```
pub fn parse(text: &str) -> Result<i32, Rejection> {
    let rest = remainder(text).ok_or(Rejection::MissingDesignator)?;

    let len = rest.chars().count();
    if len != 6 {
        return Err(Rejection::WrongLength(len));
    }

    let malformed = || Rejection::Malformed(rest.to_string());
    let caps = regex!(r"^(.)([0-9]{2}):([0-9]{2})$").captures(rest).ok_or_else(malformed)?;

    let sign = match &caps[1] {
        "+" => 1,
        "-" => -1,
        other => return Err(Rejection::BadSign(other.chars().next().unwrap_or_default())),
    };
    let hours: i32 = caps[2].parse().map_err(|_| malformed())?;
    let minutes: i32 = caps[3].parse().map_err(|_| malformed())?;

    Ok(sign * (hours * 60 + minutes))
}

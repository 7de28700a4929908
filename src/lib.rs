//! DST-aware UTC offsets for named civil time zones.
//!
//! The offset is derived the way a browser would report it: render the
//! instant as wall-clock text in the zone with a long-form `GMT±HH:MM`
//! designator, then read the designator back. Zone rules come from the IANA
//! database through `jiff`, including the recurring rule that applies after
//! the last listed transition.
//!
//! ```
//! use civil_offset::{Instant, offset_minutes};
//!
//! // 2024-07-01T12:00:00Z, daylight time in New York.
//! let summer = Instant::from_millis(1_719_835_200_000);
//! assert_eq!(offset_minutes(summer).map(|o| o.minutes()), Some(-240));
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use jiff::Timestamp;
use std::fmt;
use std::str::FromStr;

#[macro_use]
mod macros;
mod api;
mod calculator;
mod designator;
mod error;
mod formatter;

pub use api::{OffsetDetails, Options, new_york_offset, offset_details_with, offset_minutes, offset_minutes_with};
pub use calculator::OffsetCalculator;
pub use designator::{parse as parse_designator, render as render_designator};
pub use error::{Error, Rejection};
pub use formatter::ZoneFormatter;

// --- Core types -------------------------------------------------------------

/// A point in time, as milliseconds since the Unix epoch.
///
/// Negative values are instants before 1970.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i64);

impl Instant {
    pub const fn from_millis(millis: i64) -> Self {
        Instant(millis)
    }

    pub const fn millis(self) -> i64 {
        self.0
    }

    /// The current system time.
    pub fn now() -> Self {
        Instant(Utc::now().timestamp_millis())
    }

    /// Convert to a UTC datetime. Returns `None` when the millisecond count is
    /// outside the range chrono can represent.
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// Convert to a `jiff` timestamp for zone lookups. Returns `None` outside
    /// jiff's range (roughly years -9999..=9999).
    pub fn to_timestamp(self) -> Option<Timestamp> {
        Timestamp::from_millisecond(self.0).ok()
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Instant(value.timestamp_millis())
    }
}

/// Accepts epoch milliseconds (`1719835200000`), an RFC 3339 timestamp
/// (`2024-07-01T08:00:00-04:00`) or a bare `YYYY-MM-DDTHH:MM:SS`, read as UTC.
impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(millis) = s.parse::<i64>() {
            return Ok(Instant(millis));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Instant::from(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
            .map(|naive| Instant::from(naive.and_utc()))
            .map_err(|_| Error::InvalidInstant(s.to_string()))
    }
}

/// Signed distance of local civil time from UTC, in whole minutes.
///
/// Positive offsets are east of UTC. `Display` renders the long-form
/// designator, e.g. `GMT-04:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(i32);

impl Offset {
    pub const fn from_minutes(minutes: i32) -> Self {
        Offset(minutes)
    }

    pub const fn minutes(self) -> i32 {
        self.0
    }

    pub const fn seconds(self) -> i64 {
        self.0 as i64 * 60
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&designator::render(self.seconds()))
    }
}

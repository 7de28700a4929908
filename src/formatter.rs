//! Wall-clock rendering in a named zone.

use crate::designator;
use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Immutable formatting configuration for one time zone.
///
/// Renders instants as `M/D/YYYY, <designator>`, the shape an en-US
/// `Intl.DateTimeFormat` produces with `timeZoneName: "longOffset"` and no
/// other fields requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneFormatter {
    zone: TimeZone,
}

impl ZoneFormatter {
    pub fn new(zone: TimeZone) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> &TimeZone {
        &self.zone
    }

    /// IANA name of the zone, or `"unnamed"` for fixed and POSIX zones.
    pub fn zone_name(&self) -> &str {
        self.zone.iana_name().unwrap_or("unnamed")
    }

    /// Offset observed in the zone at `at`, in seconds east of UTC.
    ///
    /// Past the last transition listed for the zone, the zone's recurring
    /// rule still applies.
    pub fn offset_seconds(&self, at: Timestamp) -> i32 {
        self.zone.to_offset(at).seconds()
    }

    /// ```
    /// use civil_offset::ZoneFormatter;
    /// use jiff::{Timestamp, tz::TimeZone};
    ///
    /// let fmt = ZoneFormatter::new(TimeZone::get("America/New_York").unwrap());
    /// let at: Timestamp = "2024-01-01T03:00:00Z".parse().unwrap();
    /// assert_eq!(fmt.format(at), "12/31/2023, GMT-05:00");
    /// ```
    pub fn format(&self, at: Timestamp) -> String {
        let local = self.zone.to_datetime(at);
        let designator = designator::render(i64::from(self.offset_seconds(at)));
        let text = format!("{}/{}/{}, {}", local.month(), local.day(), local.year(), designator);
        log::trace!("[format] zone={} at={} text=\"{}\"", self.zone_name(), at, text);
        text
    }
}

use crate::calculator::OffsetCalculator;
use crate::error::{Error, Rejection};
use crate::{Instant, Offset};
use jiff::tz::TimeZone;
use once_cell::sync::Lazy;
use std::time::Duration;

static DEFAULT_CALCULATOR: Lazy<OffsetCalculator> = Lazy::new(|| OffsetCalculator::new(&Options::default()));

const DEFAULT_ZONE: &str = "America/New_York";

/// Options that select the zone offsets are computed for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Target zone. Defaults to `America/New_York`.
    pub zone: TimeZone,
}

impl Default for Options {
    fn default() -> Self {
        // The bundled database always carries the default zone; falling back to
        // UTC keeps this total, and every UTC lookup reports no offset.
        let zone = TimeZone::get(DEFAULT_ZONE).unwrap_or_else(|err| {
            log::warn!("failed to load {DEFAULT_ZONE}: {err}");
            TimeZone::UTC
        });
        Self { zone }
    }
}

impl Options {
    /// Look up `name` in the IANA database.
    ///
    /// ```
    /// use civil_offset::{Error, Options};
    ///
    /// assert!(Options::with_zone_name("Asia/Kolkata").is_ok());
    /// assert_eq!(
    ///     Options::with_zone_name("Mars/Olympus_Mons"),
    ///     Err(Error::UnknownZone("Mars/Olympus_Mons".to_string())),
    /// );
    /// ```
    pub fn with_zone_name(name: &str) -> Result<Self, Error> {
        let zone = TimeZone::get(name.trim()).map_err(|_| Error::UnknownZone(name.to_string()))?;
        Ok(Self { zone })
    }
}

/// Everything the calculator saw while handling one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetDetails {
    pub instant: Instant,
    pub zone: TimeZone,
    /// Wall-clock text in the zone, e.g. `7/1/2024, GMT-04:00`. `None` when
    /// the instant is out of range.
    pub rendered: Option<String>,
    /// Text following `GMT` in `rendered`.
    pub designator: Option<String>,
    pub offset: Option<Offset>,
    /// Why `offset` is `None`.
    pub rejection: Option<Rejection>,
    pub elapsed: Duration,
}

/// Offset observed in `America/New_York` at `instant`.
pub fn offset_minutes(instant: Instant) -> Option<Offset> {
    DEFAULT_CALCULATOR.offset_minutes(instant)
}

/// Offset observed in the zone selected by `options` at `instant`.
pub fn offset_minutes_with(instant: Instant, options: &Options) -> Option<Offset> {
    OffsetCalculator::new(options).offset_minutes(instant)
}

/// Compute the offset for `instant` and return the intermediate text and timing.
pub fn offset_details_with(instant: Instant, options: &Options) -> OffsetDetails {
    OffsetCalculator::new(options).details(instant)
}

/// New York offset in minutes for a Unix timestamp in milliseconds, with `0`
/// standing for "unknown".
///
/// New York is never at UTC, so `0` cannot be confused with a real result for
/// this zone. Prefer [`offset_minutes`] anywhere an `Option` can be used.
///
/// ```
/// use civil_offset::new_york_offset;
///
/// assert_eq!(new_york_offset(1_704_110_400_000), -300); // 2024-01-01T12:00:00Z
/// assert_eq!(new_york_offset(i64::MIN), 0);
/// ```
pub fn new_york_offset(timestamp_ms: i64) -> i32 {
    offset_minutes(Instant::from_millis(timestamp_ms)).map_or(0, Offset::minutes)
}

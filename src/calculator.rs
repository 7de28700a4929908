//! Offset calculation.
//!
//! ```text
//! Instant ──▶ Timestamp ──▶ ZoneFormatter::format ──▶ "7/1/2024, GMT-04:00"
//!                                                          │
//!                                      designator::parse ◀─┘
//!                                                 │
//!                                                 ▼
//!                                       Some(Offset(-240)) / None
//! ```
//!
//! The calculator never fails loudly. Every rejected instant is reported as
//! `None`, with the reason logged at `debug` level and available through
//! [`OffsetCalculator::details`].

use crate::api::{OffsetDetails, Options};
use crate::designator;
use crate::error::Rejection;
use crate::formatter::ZoneFormatter;
use crate::{Instant, Offset};
use jiff::tz::TimeZone;
use log::debug;

#[cfg(test)]
mod tests;

/// Maps instants to the UTC offset a single named zone observes.
///
/// Holds only an immutable [`ZoneFormatter`], so one value can be shared
/// freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetCalculator {
    formatter: ZoneFormatter,
}

impl OffsetCalculator {
    pub fn new(options: &Options) -> Self {
        Self { formatter: ZoneFormatter::new(options.zone.clone()) }
    }

    pub fn zone(&self) -> &TimeZone {
        self.formatter.zone()
    }

    /// Offset observed in the zone at `instant`, or `None` if it could not be
    /// derived from the rendered designator.
    pub fn offset_minutes(&self, instant: Instant) -> Option<Offset> {
        self.resolve(instant).0.ok()
    }

    /// Like [`offset_minutes`](Self::offset_minutes), but also returns the
    /// intermediate text and timing.
    pub fn details(&self, instant: Instant) -> OffsetDetails {
        let started = std::time::Instant::now();
        let (outcome, rendered) = self.resolve(instant);
        let elapsed = started.elapsed();

        let designator = rendered.as_deref().and_then(designator::remainder).map(str::to_string);
        let (offset, rejection) = match outcome {
            Ok(offset) => (Some(offset), None),
            Err(reason) => (None, Some(reason)),
        };

        OffsetDetails { instant, zone: self.zone().clone(), rendered, designator, offset, rejection, elapsed }
    }

    fn resolve(&self, instant: Instant) -> (Result<Offset, Rejection>, Option<String>) {
        let Some(at) = instant.to_timestamp() else {
            debug!("[offset] zone={} instant={} rejected: out of range", self.formatter.zone_name(), instant.millis());
            return (Err(Rejection::Unrepresentable(instant.millis())), None);
        };

        let rendered = self.formatter.format(at);
        let outcome = designator::parse(&rendered).map(Offset::from_minutes);
        if let Err(reason) = &outcome {
            debug!("[offset] zone={} text=\"{}\" rejected: {}", self.formatter.zone_name(), rendered, reason);
        }

        (outcome, Some(rendered))
    }
}

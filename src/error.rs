//! Error types.
//!
//! `Error` covers configuration and input problems the caller can fix.
//! `Rejection` explains why an instant produced no offset; it never escapes
//! the offset functions themselves, which report `None` instead, but it is
//! surfaced in [`crate::OffsetDetails`] and in debug logs.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("unknown time zone '{0}' (expected an IANA name such as America/New_York)")]
    UnknownZone(String),

    #[error("invalid instant '{0}' (expected epoch milliseconds or an RFC 3339 timestamp)")]
    InvalidInstant(String),
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Rejection {
    /// The millisecond count is outside the representable calendar range.
    #[error("instant {0} ms is out of range")]
    Unrepresentable(i64),

    #[error("no GMT designator in rendered text")]
    MissingDesignator,

    /// The text after `GMT` is not six characters long. A bare `GMT` (zero
    /// offset) and offsets with a seconds part both land here.
    #[error("designator remainder has {0} characters, expected 6")]
    WrongLength(usize),

    #[error("designator sign '{0}' is neither '+' nor '-'")]
    BadSign(char),

    #[error("designator remainder '{0}' is not HH:MM")]
    Malformed(String),
}

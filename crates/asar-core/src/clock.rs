//! Time-of-day arithmetic on `HHMM` values.
//!
//! # Design
//!
//! Input times are four-digit `HHMM` fields.  Adding two of them adds the
//! minute fields, carrying one hour when the sum reaches 60; subtracting
//! borrows one hour when the minute difference goes negative.  As long as
//! every minute field stays in `0..60`, that is exactly integer arithmetic on
//! total minutes, so `ClockTime` stores the total and only splits it back
//! into hours and minutes for display.
//!
//! Hours are never wrapped at 24: a ready time computed late in the day can
//! read `2430`.  That is elapsed time, not a next-day wall clock.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::{AsarError, AsarResult};

/// Minutes per hour, the carry threshold for the minute field.
const MINUTES_PER_HOUR: u32 = 60;

/// A non-negative `HHMM` value, stored as total minutes.
///
/// Used both for times of day (opening, closing, departure, ready time) and
/// for durations (flight time, turnaround).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClockTime(u32);

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime(0);

    /// Build from separate fields.  Returns `None` if `minutes >= 60`.
    #[inline]
    pub fn from_hm(hours: u32, minutes: u32) -> Option<ClockTime> {
        if minutes >= MINUTES_PER_HOUR {
            return None;
        }
        Some(ClockTime(hours * MINUTES_PER_HOUR + minutes))
    }

    #[inline]
    pub fn from_minutes(total: u32) -> ClockTime {
        ClockTime(total)
    }

    #[inline]
    pub fn total_minutes(self) -> u32 {
        self.0
    }

    /// The hour field.  May exceed 23.
    #[inline]
    pub fn hours(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    /// The minute field, always in `0..60`.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// Subtract with minute borrow.  `None` when the result would be negative.
    #[inline]
    pub fn checked_sub(self, rhs: ClockTime) -> Option<ClockTime> {
        self.0.checked_sub(rhs.0).map(ClockTime)
    }

    /// Parse an `HHMM` string: exactly four ASCII digits, minutes below 60.
    pub fn parse_hhmm(s: &str) -> AsarResult<ClockTime> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(AsarError::InvalidClock(s.to_owned()));
        }
        let field = |i: usize| (bytes[i] - b'0') as u32 * 10 + (bytes[i + 1] - b'0') as u32;
        ClockTime::from_hm(field(0), field(2)).ok_or_else(|| AsarError::InvalidClock(s.to_owned()))
    }
}

impl Add for ClockTime {
    type Output = ClockTime;
    #[inline]
    fn add(self, rhs: ClockTime) -> ClockTime {
        ClockTime(self.0 + rhs.0)
    }
}

impl FromStr for ClockTime {
    type Err = AsarError;
    fn from_str(s: &str) -> AsarResult<ClockTime> {
        ClockTime::parse_hhmm(s)
    }
}

impl fmt::Display for ClockTime {
    /// Zero-padded `HHMM`; the hour field widens past two digits if needed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hours(), self.minutes())
    }
}

//! Airports and their operating windows.

use asar_core::ClockTime;

/// A location that legs depart from and arrive at.
///
/// `opening <= closing` is checked by `DomainBuilder::build`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub code:    String,
    pub opening: ClockTime,
    pub closing: ClockTime,
}

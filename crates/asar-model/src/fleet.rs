//! Vehicle classes and the vehicles that belong to them.

use asar_core::{ClassId, ClockTime};

/// A class of vehicle (aircraft type).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleClass {
    pub name:       String,
    /// Time added after a leg's flight duration before the vehicle can
    /// start its next leg.
    pub turnaround: ClockTime,
}

/// One schedulable vehicle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    pub name:  String,
    pub class: ClassId,
}

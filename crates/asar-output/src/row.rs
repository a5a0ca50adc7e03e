//! Plain row structs decoupled from the search types.

use asar_core::ClockTime;
use asar_model::Domain;
use asar_schedule::{Solution, VehicleSchedule};

/// One leg of an `S` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegCell {
    pub departure: ClockTime,
    pub from:      String,
    pub to:        String,
}

/// One `S` line: a vehicle and the legs it flies, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub vehicle: String,
    pub legs:    Vec<LegCell>,
}

impl ScheduleRow {
    pub fn from_schedule(domain: &Domain, schedule: &VehicleSchedule) -> Self {
        let legs = schedule
            .legs
            .iter()
            .map(|scheduled| {
                let leg = domain.leg(scheduled.leg);
                LegCell {
                    departure: scheduled.departure,
                    from:      domain.location(leg.departure).code.clone(),
                    to:        domain.location(leg.arrival).code.clone(),
                }
            })
            .collect();
        Self { vehicle: domain.vehicle(schedule.vehicle).name.clone(), legs }
    }

    /// Every row of `solution`, in vehicle order.
    pub fn all(domain: &Domain, solution: &Solution) -> Vec<Self> {
        solution.schedules.iter().map(|s| Self::from_schedule(domain, s)).collect()
    }

    /// Fields of the `S` record: tag, vehicle, then `time dep arr` per leg.
    pub fn fields(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2 + 3 * self.legs.len());
        out.push("S".to_owned());
        out.push(self.vehicle.clone());
        for cell in &self.legs {
            out.push(cell.departure.to_string());
            out.push(cell.from.clone());
            out.push(cell.to.clone());
        }
        out
    }
}

//! A goal state flattened into per-vehicle timetables.

use asar_core::{ClockTime, LegId, Profit, VehicleId};
use asar_model::Domain;

use crate::{ScheduleState, replay_departures};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ScheduledLeg {
    pub leg:       LegId,
    pub departure: ClockTime,
    pub profit:    Profit,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct VehicleSchedule {
    pub vehicle: VehicleId,
    /// In flight order; never empty.
    pub legs:    Vec<ScheduledLeg>,
}

impl VehicleSchedule {
    pub fn profit(&self) -> Profit {
        self.legs.iter().map(|l| l.profit).sum()
    }
}

/// Timetables of the vehicles that fly, in vehicle id order.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Solution {
    pub schedules: Vec<VehicleSchedule>,
}

impl Solution {
    pub fn from_state(domain: &Domain, state: &ScheduleState) -> Self {
        let schedules = domain
            .vehicle_ids()
            .zip(state.tracks())
            .filter(|(_, track)| !track.is_empty())
            .map(|(vehicle, track)| {
                let legs = track
                    .legs()
                    .into_iter()
                    .map(|(leg, departure, profit)| ScheduledLeg { leg, departure, profit })
                    .collect();
                VehicleSchedule { vehicle, legs }
            })
            .collect();
        let solution = Solution { schedules };
        debug_assert!(solution.replays_consistently(domain), "recorded departures disagree with replay");
        solution
    }

    /// Total profit over every vehicle.
    pub fn total_profit(&self) -> Profit {
        self.schedules.iter().map(VehicleSchedule::profit).sum()
    }

    pub fn schedule(&self, vehicle: VehicleId) -> Option<&VehicleSchedule> {
        self.schedules.iter().find(|s| s.vehicle == vehicle)
    }

    /// Departure and arrival codes of the `position`-th leg flown by
    /// `vehicle`.
    pub fn leg_at<'d>(&self, domain: &'d Domain, vehicle: VehicleId, position: usize) -> Option<(&'d str, &'d str)> {
        let scheduled = self.schedule(vehicle)?.legs.get(position)?;
        let leg = domain.leg(scheduled.leg);
        Some((domain.location(leg.departure).code.as_str(), domain.location(leg.arrival).code.as_str()))
    }

    /// `true` if replaying each timetable from its first leg reproduces the
    /// recorded departures.
    pub fn replays_consistently(&self, domain: &Domain) -> bool {
        self.schedules.iter().all(|s| {
            let turnaround = domain.vehicle_class(s.vehicle).turnaround;
            let recorded: Vec<ClockTime> = s.legs.iter().map(|l| l.departure).collect();
            replay_departures(domain, turnaround, s.legs.iter().map(|l| domain.leg(l.leg)))
                .is_some_and(|replayed| replayed == recorded)
        })
    }
}

/// Total profit of the legs assigned in `state`.
pub fn calculate_profit(state: &ScheduleState) -> Profit {
    state.tracks().iter().map(|t| t.profit()).sum()
}

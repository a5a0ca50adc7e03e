//! Successor generation: which leg may go to which vehicle next.

use asar_core::{ClockTime, LegId, Profit, VehicleId};
use asar_model::Domain;
use tracing::trace;

use crate::{ReadyTime, ScheduleState, leg_initial_time, leg_timing};

/// Assign `leg` to `vehicle`, departing at `departure`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Move {
    pub vehicle:   VehicleId,
    pub leg:       LegId,
    pub departure: ClockTime,
    /// The vehicle's ready time after the leg, or `Closed` if the leg ends
    /// its loop for the day.
    pub ready:     ReadyTime,
    /// Profit of the leg for the vehicle's class.
    pub profit:    Profit,
}

/// Push every legal move from `state` onto `out`, vehicles in id order and
/// legs in id order within each vehicle.
///
/// * An idle vehicle may start any remaining leg its class can fly, timed
///   from [`leg_initial_time`].  Idle vehicles are skipped while only one
///   leg remains, since a single leg can never close a loop.
/// * A busy vehicle continues only with legs leaving from where its last
///   leg landed, timed from its ready time.  If that ready time reaches the
///   arrival location's closing time, the leg must bring the vehicle back to
///   its first departure, and the vehicle is closed.
/// * A closed vehicle takes nothing.
pub fn generate_moves(domain: &Domain, state: &ScheduleState, out: &mut Vec<Move>) {
    let remaining = state.remaining();

    for vehicle in domain.vehicle_ids() {
        let track = state.track(vehicle);
        let turnaround = domain.vehicle_class(vehicle).turnaround;

        let (first, last, available) = match (track.first_leg(), track.last_leg(), track.ready()) {
            (_, _, Some(ReadyTime::Closed)) => continue,
            (Some(first), Some(last), Some(ReadyTime::At(t))) => (first, last, t),
            _ => {
                if remaining.len() < 2 {
                    continue;
                }
                for id in remaining.iter() {
                    let leg = domain.leg(id);
                    let Some(profit) = domain.profit(id, vehicle) else { continue };
                    let start = leg_initial_time(domain, leg);
                    if let Some(timing) = leg_timing(domain, leg, turnaround, start) {
                        out.push(Move {
                            vehicle,
                            leg: id,
                            departure: timing.departure,
                            ready: ReadyTime::At(timing.ready),
                            profit,
                        });
                    }
                }
                continue;
            }
        };

        let here = domain.leg(last).arrival;
        let home = domain.leg(first).departure;

        for id in remaining.iter() {
            let leg = domain.leg(id);
            if leg.departure != here {
                continue;
            }
            let Some(profit) = domain.profit(id, vehicle) else { continue };
            let Some(timing) = leg_timing(domain, leg, turnaround, available) else { continue };

            let ready = if timing.ready >= domain.location(leg.arrival).closing {
                if leg.arrival != home {
                    trace!(%vehicle, leg = %id, "pruned: ready after closing away from home");
                    continue;
                }
                ReadyTime::Closed
            } else {
                ReadyTime::At(timing.ready)
            };
            out.push(Move { vehicle, leg: id, departure: timing.departure, ready, profit });
        }
    }
}

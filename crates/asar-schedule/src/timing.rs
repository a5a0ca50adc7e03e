//! Operating-window feasibility of a single leg.
//!
//! This is the only place departure and ready times are computed.  The move
//! generator records its results in the state, and the formatter prints what
//! was recorded, so the times that were searched are the times shown.

use asar_core::ClockTime;
use asar_model::{Domain, Leg};

/// When a vehicle may start its next leg.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ReadyTime {
    At(ClockTime),
    /// The loop is closed; the vehicle takes no further legs.
    Closed,
}

/// A feasible timing for one leg.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LegTiming {
    /// When the leg leaves its departure location.
    pub departure: ClockTime,
    /// When the vehicle is free again: departure + duration + turnaround.
    pub ready:     ClockTime,
}

/// Time the leg for a vehicle available from `available`.
///
/// If flying immediately would land before the arrival location opens, the
/// vehicle waits and leaves at `arrival.opening − duration`; that departure
/// must come before the departure location closes.  Otherwise it leaves at
/// `available` and must land before the arrival location closes.
///
/// Returns `None` when neither holds.
pub fn leg_timing(
    domain:     &Domain,
    leg:        &Leg,
    turnaround: ClockTime,
    available:  ClockTime,
) -> Option<LegTiming> {
    let departure_loc = domain.location(leg.departure);
    let arrival_loc = domain.location(leg.arrival);

    let earliest_arrival = available + leg.duration;
    let turnaround_delta = leg.duration + turnaround;

    if earliest_arrival < arrival_loc.opening {
        // Non-negative: opening > available + duration >= duration.
        let departure = arrival_loc.opening.checked_sub(leg.duration)?;
        (departure < departure_loc.closing).then(|| LegTiming {
            departure,
            ready: departure + turnaround_delta,
        })
    } else {
        (earliest_arrival < arrival_loc.closing).then(|| LegTiming {
            departure: available,
            ready:     available + turnaround_delta,
        })
    }
}

/// The natural start of a leg for a vehicle that has not flown yet.
///
/// The departure location's opening time, or later if leaving then would
/// land before the arrival location opens.
pub fn leg_initial_time(domain: &Domain, leg: &Leg) -> ClockTime {
    let departure_open = domain.location(leg.departure).opening;
    let arrival_open = domain.location(leg.arrival).opening;
    match arrival_open.checked_sub(leg.duration) {
        Some(latest) if latest > departure_open => latest,
        _ => departure_open,
    }
}

/// Recompute the departure of each leg in a chain flown by a vehicle with
/// the given turnaround, starting from the first leg's initial time.
///
/// Returns `None` if any leg in the chain is infeasible.
pub fn replay_departures<'a, I>(domain: &Domain, turnaround: ClockTime, legs: I) -> Option<Vec<ClockTime>>
where
    I: IntoIterator<Item = &'a Leg>,
{
    let mut legs = legs.into_iter().peekable();
    let mut available = leg_initial_time(domain, legs.peek()?);
    let mut departures = Vec::new();
    for leg in legs {
        let timing = leg_timing(domain, leg, turnaround, available)?;
        departures.push(timing.departure);
        available = timing.ready;
    }
    Some(departures)
}

//! Search states: one `Track` per vehicle plus the unassigned legs.
//!
//! States are persistent values.  A child shares every leg of its parent's
//! tracks through `Rc` links and only allocates the node for the leg it
//! appends, so no state is ever mutated after construction.

use std::rc::Rc;

use asar_core::{ClockTime, LegId, Profit, VehicleId};
use asar_model::Domain;

use crate::{LegSet, Move, ReadyTime};

// ── Track ─────────────────────────────────────────────────────────────────────

/// One flown leg, linked to the leg flown before it.
#[derive(Debug)]
struct Flown {
    leg:       LegId,
    departure: ClockTime,
    profit:    Profit,
    prev:      Option<Rc<Flown>>,
}

/// The chain of legs assigned to one vehicle.
///
/// An empty track (`Track::default()`) has no ready time; the vehicle is
/// idle and may start anywhere.
#[derive(Clone, Debug, Default)]
pub struct Track {
    last:  Option<Rc<Flown>>,
    first: Option<LegId>,
    len:   u32,
    ready: Option<ReadyTime>,
}

impl Track {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn first_leg(&self) -> Option<LegId> {
        self.first
    }

    #[inline]
    pub fn last_leg(&self) -> Option<LegId> {
        self.last.as_ref().map(|f| f.leg)
    }

    /// `None` for an idle vehicle.
    #[inline]
    pub fn ready(&self) -> Option<ReadyTime> {
        self.ready
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.ready == Some(ReadyTime::Closed)
    }

    /// A new track with `leg` appended.  `self` is left untouched.
    pub fn with_leg(&self, leg: LegId, departure: ClockTime, profit: Profit, ready: ReadyTime) -> Track {
        Track {
            last:  Some(Rc::new(Flown { leg, departure, profit, prev: self.last.clone() })),
            first: self.first.or(Some(leg)),
            len:   self.len + 1,
            ready: Some(ready),
        }
    }

    /// `(leg, departure, profit)` in flight order.
    pub fn legs(&self) -> Vec<(LegId, ClockTime, Profit)> {
        let mut out = Vec::with_capacity(self.len());
        let mut cursor = self.last.as_deref();
        while let Some(flown) = cursor {
            out.push((flown.leg, flown.departure, flown.profit));
            cursor = flown.prev.as_deref();
        }
        out.reverse();
        out
    }

    /// Sum of the profits of every leg on the track.
    pub fn profit(&self) -> Profit {
        let mut total = Profit::ZERO;
        let mut cursor = self.last.as_deref();
        while let Some(flown) = cursor {
            total = total + flown.profit;
            cursor = flown.prev.as_deref();
        }
        total
    }

    /// `true` for an empty track or one whose last arrival is its first
    /// departure.
    pub fn is_loop(&self, domain: &Domain) -> bool {
        match (self.first_leg(), self.last_leg()) {
            (Some(first), Some(last)) => domain.leg(first).departure == domain.leg(last).arrival,
            _ => true,
        }
    }
}

// ── ScheduleState ─────────────────────────────────────────────────────────────

/// A partial assignment of legs to vehicles.
///
/// Path cost, heuristic and depth belong to the search node that holds the
/// state, not to the state itself.
#[derive(Clone, Debug)]
pub struct ScheduleState {
    tracks:    Vec<Track>,
    remaining: LegSet,
}

impl ScheduleState {
    /// Every vehicle idle, every leg unassigned.
    pub fn initial(domain: &Domain) -> Self {
        Self {
            tracks:    (0..domain.vehicle_count()).map(|_| Track::default()).collect(),
            remaining: LegSet::full(domain.leg_count()),
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn track(&self, vehicle: VehicleId) -> &Track {
        &self.tracks[vehicle.index()]
    }

    #[inline]
    pub fn remaining(&self) -> &LegSet {
        &self.remaining
    }

    /// Legs assigned so far over all vehicles.
    pub fn assigned(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    /// The successor reached by applying `mv`.
    ///
    /// The moved leg leaves `remaining` and joins the vehicle's track.  Other
    /// tracks are shared with `self`.
    pub fn apply(&self, mv: &Move) -> ScheduleState {
        debug_assert!(self.remaining.contains(mv.leg), "{} assigned twice", mv.leg);
        let mut tracks = self.tracks.clone();
        let slot = &mut tracks[mv.vehicle.index()];
        *slot = slot.with_leg(mv.leg, mv.departure, mv.profit, mv.ready);
        ScheduleState { tracks, remaining: self.remaining.without(mv.leg) }
    }
}

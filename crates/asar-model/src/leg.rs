//! Legs: one flight segment with a profit per vehicle class.

use asar_core::{ClassId, ClockTime, LocationId, Profit};
use smallvec::SmallVec;

/// A flight segment between two locations.
///
/// Legs are built by [`DomainBuilder`](crate::DomainBuilder), which also
/// fixes `best_profit` once.  The profit table is dense over all classes of
/// the domain; `None` means vehicles of that class cannot fly the leg.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    pub departure: LocationId,
    pub arrival:   LocationId,
    pub duration:  ClockTime,
    profits:       SmallVec<[Option<Profit>; 4]>,
    best_profit:   Profit,
}

impl Leg {
    /// Build from a dense per-class profit table.  Returns `None` if no
    /// class has a profit entry.
    pub(crate) fn new(
        departure: LocationId,
        arrival:   LocationId,
        duration:  ClockTime,
        profits:   SmallVec<[Option<Profit>; 4]>,
    ) -> Option<Leg> {
        let best_profit = profits.iter().flatten().copied().max()?;
        Some(Leg { departure, arrival, duration, profits, best_profit })
    }

    /// Profit earned when a vehicle of `class` flies this leg.
    #[inline]
    pub fn profit(&self, class: ClassId) -> Option<Profit> {
        self.profits.get(class.index()).copied().flatten()
    }

    /// Highest profit over every class that can fly the leg.
    #[inline]
    pub fn best_profit(&self) -> Profit {
        self.best_profit
    }

    /// `(class, profit)` for every class that can fly the leg.
    pub fn profits(&self) -> impl Iterator<Item = (ClassId, Profit)> + '_ {
        self.profits
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|p| (ClassId(i as u16), p)))
    }
}

//! The `Domain` tables and the builder that validates them.

use asar_core::{ClassId, ClockTime, LegId, LocationId, Profit, ProfitFormat, VehicleId};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::{Leg, Location, ModelError, ModelResult, Vehicle, VehicleClass};

// ── Domain ────────────────────────────────────────────────────────────────────

/// Immutable problem tables: locations, vehicle classes, vehicles and legs.
///
/// Every cross reference is a typed id into one of the tables, checked once
/// by [`DomainBuilder::build`].  Lookups by id therefore index directly.
#[derive(Clone, Debug)]
pub struct Domain {
    locations:       Vec<Location>,
    classes:         Vec<VehicleClass>,
    vehicles:        Vec<Vehicle>,
    legs:            Vec<Leg>,
    location_index:  FxHashMap<String, LocationId>,
    class_index:     FxHashMap<String, ClassId>,
    max_best_profit: Profit,
    profit_format:   ProfitFormat,
}

impl Domain {
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn classes(&self) -> &[VehicleClass] {
        &self.classes
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    #[inline]
    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.index()]
    }

    #[inline]
    pub fn class(&self, id: ClassId) -> &VehicleClass {
        &self.classes[id.index()]
    }

    #[inline]
    pub fn vehicle(&self, id: VehicleId) -> &Vehicle {
        &self.vehicles[id.index()]
    }

    #[inline]
    pub fn leg(&self, id: LegId) -> &Leg {
        &self.legs[id.index()]
    }

    /// The class of vehicle `id`.
    #[inline]
    pub fn vehicle_class(&self, id: VehicleId) -> &VehicleClass {
        self.class(self.vehicle(id).class)
    }

    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    pub fn leg_ids(&self) -> impl Iterator<Item = LegId> + '_ {
        (0..self.legs.len() as u32).map(LegId)
    }

    pub fn vehicle_ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        (0..self.vehicles.len() as u32).map(VehicleId)
    }

    pub fn location_by_code(&self, code: &str) -> Option<LocationId> {
        self.location_index.get(code).copied()
    }

    pub fn class_by_name(&self, name: &str) -> Option<ClassId> {
        self.class_index.get(name).copied()
    }

    /// Profit of flying `leg` with vehicle `vehicle`, or `None` if the
    /// vehicle's class has no entry for the leg.
    #[inline]
    pub fn profit(&self, leg: LegId, vehicle: VehicleId) -> Option<Profit> {
        self.leg(leg).profit(self.vehicle(vehicle).class)
    }

    /// Largest `best_profit` over all legs; zero for a domain without legs.
    pub fn max_best_profit(&self) -> Profit {
        self.max_best_profit
    }

    /// How totals for this domain are rendered.
    pub fn profit_format(&self) -> ProfitFormat {
        self.profit_format
    }
}

// ── DomainBuilder ─────────────────────────────────────────────────────────────

struct PendingVehicle {
    name:  String,
    class: String,
}

struct PendingLeg {
    departure: String,
    arrival:   String,
    duration:  ClockTime,
    profits:   Vec<(String, Profit)>,
}

/// Collects records in any order and resolves them into a [`Domain`].
///
/// # Checks performed by `build`
///
/// - location codes, class names and vehicle names are unique;
/// - every location opens no later than it closes;
/// - every vehicle and leg profit names a declared class;
/// - every leg names declared locations and has at least one profit, with
///   no class listed twice;
/// - profits are close enough together that any schedule's cost and total
///   fit in `i64` tenths.
///
/// # Example
///
/// ```
/// use asar_core::{ClockTime, Profit};
/// use asar_model::DomainBuilder;
///
/// let t = |s: &str| s.parse::<ClockTime>().unwrap();
/// let mut b = DomainBuilder::new();
/// b.add_location("LPPT", t("0600"), t("2300"))
///     .add_location("LPPR", t("0600"), t("2300"))
///     .add_class("a320", t("0045"))
///     .add_vehicle("CS-TUA", "a320")
///     .add_leg("LPPT", "LPPR", t("0055"), vec![("a320".into(), Profit::whole(100))]);
/// let domain = b.build().unwrap();
/// assert_eq!(domain.leg_count(), 1);
/// ```
#[derive(Default)]
pub struct DomainBuilder {
    locations: Vec<Location>,
    classes:   Vec<VehicleClass>,
    vehicles:  Vec<PendingVehicle>,
    legs:      Vec<PendingLeg>,
}

impl DomainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_location(&mut self, code: &str, opening: ClockTime, closing: ClockTime) -> &mut Self {
        self.locations.push(Location { code: code.to_owned(), opening, closing });
        self
    }

    pub fn add_class(&mut self, name: &str, turnaround: ClockTime) -> &mut Self {
        self.classes.push(VehicleClass { name: name.to_owned(), turnaround });
        self
    }

    pub fn add_vehicle(&mut self, name: &str, class: &str) -> &mut Self {
        self.vehicles.push(PendingVehicle { name: name.to_owned(), class: class.to_owned() });
        self
    }

    pub fn add_leg(
        &mut self,
        departure: &str,
        arrival:   &str,
        duration:  ClockTime,
        profits:   Vec<(String, Profit)>,
    ) -> &mut Self {
        self.legs.push(PendingLeg {
            departure: departure.to_owned(),
            arrival: arrival.to_owned(),
            duration,
            profits,
        });
        self
    }

    /// Validate all records and return the resolved tables.
    pub fn build(self) -> ModelResult<Domain> {
        // ── Locations ─────────────────────────────────────────────────────
        let mut location_index = FxHashMap::default();
        for (i, loc) in self.locations.iter().enumerate() {
            if loc.opening > loc.closing {
                return Err(ModelError::InvalidWindow {
                    code:    loc.code.clone(),
                    opening: loc.opening,
                    closing: loc.closing,
                });
            }
            let id = LocationId::try_from(i).map_err(|_| ModelError::Capacity("locations"))?;
            if location_index.insert(loc.code.clone(), id).is_some() {
                return Err(ModelError::Duplicate { kind: "location", name: loc.code.clone() });
            }
        }

        // ── Classes ───────────────────────────────────────────────────────
        let mut class_index = FxHashMap::default();
        for (i, class) in self.classes.iter().enumerate() {
            let id = ClassId::try_from(i).map_err(|_| ModelError::Capacity("vehicle classes"))?;
            if class_index.insert(class.name.clone(), id).is_some() {
                return Err(ModelError::Duplicate { kind: "vehicle class", name: class.name.clone() });
            }
        }
        let resolve_class = |what: &dyn Fn() -> String, name: &str| {
            class_index.get(name).copied().ok_or_else(|| ModelError::UnknownClass {
                what: what(),
                name: name.to_owned(),
            })
        };

        // ── Vehicles ──────────────────────────────────────────────────────
        let mut seen_vehicles = FxHashSet::default();
        let mut vehicles = Vec::with_capacity(self.vehicles.len());
        for pending in self.vehicles {
            VehicleId::try_from(vehicles.len()).map_err(|_| ModelError::Capacity("vehicles"))?;
            if !seen_vehicles.insert(pending.name.clone()) {
                return Err(ModelError::Duplicate { kind: "vehicle", name: pending.name });
            }
            let class = resolve_class(&|| format!("vehicle {:?}", pending.name), &pending.class)?;
            vehicles.push(Vehicle { name: pending.name, class });
        }

        // ── Legs ──────────────────────────────────────────────────────────
        let mut legs = Vec::with_capacity(self.legs.len());
        for (index, pending) in self.legs.into_iter().enumerate() {
            LegId::try_from(index).map_err(|_| ModelError::Capacity("legs"))?;
            let what = || format!("leg {index} ({} -> {})", pending.departure, pending.arrival);
            let resolve_location = |code: &str| {
                location_index.get(code).copied().ok_or_else(|| ModelError::UnknownLocation {
                    what: what(),
                    code: code.to_owned(),
                })
            };
            let departure = resolve_location(&pending.departure)?;
            let arrival = resolve_location(&pending.arrival)?;

            let mut profits: SmallVec<[Option<Profit>; 4]> = SmallVec::from_elem(None, self.classes.len());
            for (name, profit) in &pending.profits {
                let class = resolve_class(&what, name)?;
                let slot = &mut profits[class.index()];
                if slot.is_some() {
                    return Err(ModelError::Duplicate { kind: "leg profit class", name: name.clone() });
                }
                *slot = Some(*profit);
            }

            let leg = Leg::new(departure, arrival, pending.duration, profits)
                .ok_or(ModelError::NoProfits { index })?;
            legs.push(leg);
        }

        let max_best_profit = legs.iter().map(Leg::best_profit).max().unwrap_or(Profit::ZERO);
        let min_profit = legs.iter().flat_map(|l| l.profits().map(|(_, p)| p)).min().unwrap_or(Profit::ZERO);
        check_profit_range(min_profit, max_best_profit, legs.len())?;
        let profit_format =
            ProfitFormat::for_profits(legs.iter().flat_map(|l| l.profits().map(|(_, p)| p)));

        Ok(Domain {
            locations: self.locations,
            classes: self.classes,
            vehicles,
            legs,
            location_index,
            class_index,
            max_best_profit,
            profit_format,
        })
    }
}

/// The search pays `max + 1 - profit` per assignment and reports totals of
/// up to `legs` profits.  The widest of those per-leg magnitudes times the
/// leg count must fit in `i64` tenths.
fn check_profit_range(min: Profit, max: Profit, legs: usize) -> ModelResult<()> {
    let bound = i128::from(max.tenths()) + i128::from(Profit::ONE.tenths());
    let low = i128::from(min.tenths());
    let widest = (bound - low).max(bound.abs()).max(low.abs());
    if widest * legs as i128 > i128::from(i64::MAX) {
        return Err(ModelError::ProfitRange { min, max, legs });
    }
    Ok(())
}

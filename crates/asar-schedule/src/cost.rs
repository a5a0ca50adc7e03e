//! Profit maximization recast as cost minimization.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use asar_core::Profit;
use asar_model::{Domain, Leg};

use crate::LegSet;

/// Path cost in tenths of a profit unit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Cost(pub i64);

impl Add for Cost {
    type Output = Cost;

    #[inline]
    fn add(self, rhs: Cost) -> Cost {
        Cost(self.0 + rhs.0)
    }
}

impl Sum for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Cost {
        iter.fold(Cost::default(), Add::add)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Profit::from_tenths(self.0))
    }
}

/// `bound` is one unit above the best profit of any leg, so every
/// assignment costs strictly more than zero.
#[derive(Copy, Clone, Debug)]
pub struct CostModel {
    bound: Profit,
}

impl CostModel {
    pub fn new(domain: &Domain) -> Self {
        Self { bound: domain.max_best_profit() + Profit::ONE }
    }

    pub fn bound(&self) -> Profit {
        self.bound
    }

    /// Cost of one assignment earning `profit`.
    #[inline]
    pub fn assignment_cost(&self, profit: Profit) -> Cost {
        Cost((self.bound - profit).tenths())
    }

    /// The least any vehicle can pay for `leg`.
    #[inline]
    pub fn lower_bound(&self, leg: &Leg) -> Cost {
        self.assignment_cost(leg.best_profit())
    }

    /// Sum of the lower bounds of the remaining legs.
    pub fn heuristic(&self, domain: &Domain, remaining: &LegSet) -> Cost {
        remaining.iter().map(|id| self.lower_bound(domain.leg(id))).sum()
    }

    /// Profit of a path that made `assignments` assignments at total cost
    /// `cost`.
    pub fn profit_of(&self, cost: Cost, assignments: usize) -> Profit {
        // `assignments` is at most the leg count, and `DomainBuilder::build`
        // rejects domains where `bound` times the leg count leaves `i64`.
        Profit::from_tenths(self.bound.tenths() * assignments as i64 - cost.0)
    }
}

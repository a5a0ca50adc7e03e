//! One call from a loaded `Domain` to a `Solution`.

use asar_core::Profit;
use asar_model::Domain;
use asar_search::{SearchConfig, SearchEngine, SearchObserver, SearchStats, Termination};
use tracing::{debug, info_span};

use crate::{Cost, ScheduleProblem, Solution};

/// Everything a run produced.
#[derive(Debug)]
pub struct ScheduleReport {
    pub termination: Termination,
    /// Present only when a goal was found.
    pub solution:    Option<Solution>,
    /// Depth of the goal node, which is the number of legs assigned.
    pub depth:       Option<u32>,
    /// Path cost of the goal node.
    pub cost:        Option<Cost>,
    pub stats:       SearchStats,
}

impl ScheduleReport {
    pub fn total_profit(&self) -> Option<Profit> {
        self.solution.as_ref().map(Solution::total_profit)
    }
}

/// Search `domain` for a profit-maximizing round-trip assignment.
pub fn solve<O>(domain: &Domain, config: SearchConfig, observer: &mut O) -> ScheduleReport
where
    O: SearchObserver<Cost>,
{
    let _span = info_span!("solve", legs = domain.leg_count(), vehicles = domain.vehicle_count()).entered();

    let problem = ScheduleProblem::new(domain);
    debug!(bound = %problem.cost_model().bound(), "cost model ready");

    let outcome = SearchEngine::new(config).run(&problem, observer);
    let (solution, depth, cost) = match &outcome.goal {
        Some(node) => (Some(Solution::from_state(domain, &node.state)), Some(node.depth), Some(node.g)),
        None => (None, None, None),
    };

    if let (Some(solution), Some(cost)) = (&solution, cost) {
        debug_assert_eq!(
            solution.total_profit(),
            problem.cost_model().profit_of(cost, domain.leg_count()),
            "path cost and summed profit disagree"
        );
    }

    ScheduleReport { termination: outcome.termination, solution, depth, cost, stats: outcome.stats }
}

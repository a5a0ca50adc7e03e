//! `ScheduleProblem` — the fleet assignment as a [`SearchProblem`].

use asar_model::Domain;
use asar_search::SearchProblem;

use crate::{Cost, CostModel, Move, ScheduleState, generate_moves};

/// `true` when no leg is left and every vehicle that flew is back where it
/// started.  Idle vehicles pass trivially.
pub fn is_goal(domain: &Domain, state: &ScheduleState) -> bool {
    state.remaining().is_empty() && state.tracks().iter().all(|t| t.is_loop(domain))
}

pub struct ScheduleProblem<'d> {
    domain: &'d Domain,
    costs:  CostModel,
}

impl<'d> ScheduleProblem<'d> {
    pub fn new(domain: &'d Domain) -> Self {
        Self { domain, costs: CostModel::new(domain) }
    }

    pub fn domain(&self) -> &'d Domain {
        self.domain
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.costs
    }
}

impl SearchProblem for ScheduleProblem<'_> {
    type State = ScheduleState;
    type Action = Move;
    type Cost = Cost;

    fn initial_state(&self) -> ScheduleState {
        ScheduleState::initial(self.domain)
    }

    fn actions(&self, state: &ScheduleState, out: &mut Vec<Move>) {
        generate_moves(self.domain, state, out);
    }

    fn result(&self, state: &ScheduleState, action: &Move) -> ScheduleState {
        state.apply(action)
    }

    fn goal_test(&self, state: &ScheduleState) -> bool {
        is_goal(self.domain, state)
    }

    fn step_cost(&self, _state: &ScheduleState, action: &Move) -> Cost {
        self.costs.assignment_cost(action.profit)
    }

    fn heuristic(&self, state: &ScheduleState) -> Cost {
        self.costs.heuristic(self.domain, state.remaining())
    }
}

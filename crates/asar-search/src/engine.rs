//! The `SearchEngine` and its expansion loop.

use std::time::Instant;

use tracing::{debug, trace};

use crate::{
    Frontier, Node, SearchCommand, SearchConfig, SearchObserver, SearchOutcome, SearchProblem,
    SearchStats, Strategy, Termination,
};

/// Best-first tree search driven by `f = g + h`.
///
/// The engine holds only configuration; every run gets a fresh frontier and
/// fresh [`SearchStats`], so one engine can solve many problems.
#[derive(Clone, Debug, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search `problem` until a goal is popped, the frontier empties, or a
    /// limit or observer stops the run.
    pub fn run<P, O>(&self, problem: &P, observer: &mut O) -> SearchOutcome<P::State, P::Cost>
    where
        P: SearchProblem,
        O: SearchObserver<P::Cost>,
    {
        let started = Instant::now();
        let mut stats = SearchStats::default();
        let mut frontier = Frontier::new();
        let mut actions = Vec::new();

        observer.on_search_start();
        debug!(strategy = ?self.config.strategy, "search started");

        let initial = problem.initial_state();
        let h = self.estimate(problem, &initial);
        frontier.push(Node { state: initial, g: P::Cost::default(), h, depth: 0 });
        stats.max_frontier = frontier.len();

        let (termination, goal) = loop {
            // ── Limits and external commands ─────────────────────────────
            if let Some(reason) = self.limit_reached(&stats, started) {
                break (Termination::Aborted(reason), None);
            }
            if let SearchCommand::Terminate(reason) = observer.search_command(&stats) {
                break (Termination::Aborted(reason), None);
            }

            // ── Pop ──────────────────────────────────────────────────────
            let Some(node) = frontier.pop() else {
                break (Termination::Exhausted, None);
            };
            stats.max_depth = stats.max_depth.max(node.depth);

            if problem.goal_test(&node.state) {
                observer.on_goal(node.depth, node.g, &stats);
                break (Termination::GoalFound, Some(node));
            }

            // ── Expand ───────────────────────────────────────────────────
            stats.expanded += 1;
            observer.on_expand(node.depth, node.f(), &stats);
            trace!(depth = node.depth, g = ?node.g, h = ?node.h, frontier = frontier.len(), "expand");

            problem.actions(&node.state, &mut actions);
            for action in actions.drain(..) {
                let state = problem.result(&node.state, &action);
                let g = node.g + problem.step_cost(&node.state, &action);
                let h = self.estimate(problem, &state);
                frontier.push(Node { state, g, h, depth: node.depth + 1 });
                stats.generated += 1;
            }
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        };

        stats.elapsed = started.elapsed();
        observer.on_search_end(&termination, &stats);
        debug!(
            %termination,
            expanded = stats.expanded,
            generated = stats.generated,
            max_frontier = stats.max_frontier,
            "search finished"
        );

        SearchOutcome { termination, goal, stats }
    }

    fn estimate<P: SearchProblem>(&self, problem: &P, state: &P::State) -> P::Cost {
        match self.config.strategy {
            Strategy::AStar => problem.heuristic(state),
            Strategy::UniformCost => P::Cost::default(),
        }
    }

    fn limit_reached(&self, stats: &SearchStats, started: Instant) -> Option<String> {
        if let Some(limit) = self.config.node_limit {
            if stats.generated >= limit {
                return Some(format!("node limit of {limit} reached"));
            }
        }
        if let Some(limit) = self.config.time_limit {
            if started.elapsed() >= limit {
                return Some(format!("time limit of {limit:?} reached"));
            }
        }
        None
    }
}

//! The capability interface a problem exposes to the engine.

use std::fmt::Debug;
use std::ops::Add;

/// A search problem in the classic states / actions / costs form.
///
/// The engine is generic over this trait; it owns the frontier and the
/// path bookkeeping, while the implementor owns the domain rules.
pub trait SearchProblem {
    type State;
    type Action;
    /// Path cost.  Must be totally ordered so frontier order is deterministic.
    type Cost: Copy + Ord + Add<Output = Self::Cost> + Default + Debug;

    fn initial_state(&self) -> Self::State;

    /// Append every legal action in `state` to `out`.
    ///
    /// `out` is empty on entry; the engine reuses the buffer between
    /// expansions.
    fn actions(&self, state: &Self::State, out: &mut Vec<Self::Action>);

    /// The state reached by applying `action`.  `state` is left untouched.
    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn goal_test(&self, state: &Self::State) -> bool;

    /// Cost of applying `action` in `state`.
    fn step_cost(&self, state: &Self::State, action: &Self::Action) -> Self::Cost;

    /// Lower bound on the remaining cost from `state` to any goal.
    fn heuristic(&self, state: &Self::State) -> Self::Cost;
}

/// A state together with its path cost, heuristic estimate and depth.
#[derive(Clone, Debug)]
pub struct Node<S, C> {
    pub state: S,
    /// Accumulated path cost from the initial state.
    pub g:     C,
    /// Heuristic estimate of the remaining cost.
    pub h:     C,
    /// Number of actions applied since the initial state.
    pub depth: u32,
}

impl<S, C: Copy + Add<Output = C>> Node<S, C> {
    /// Evaluation function `f = g + h`.
    #[inline]
    pub fn f(&self) -> C {
        self.g + self.h
    }
}

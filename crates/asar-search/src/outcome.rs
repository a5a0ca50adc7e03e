//! What a search run returns.

use std::fmt;
use std::time::Duration;

use crate::Node;

/// Why the search loop stopped.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A goal state was popped from the frontier.
    GoalFound,
    /// The frontier ran empty: no goal is reachable.
    Exhausted,
    /// A limit or an observer stopped the run before it finished.
    Aborted(String),
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::GoalFound => write!(f, "goal found"),
            Termination::Exhausted => write!(f, "frontier exhausted"),
            Termination::Aborted(reason) => write!(f, "aborted: {reason}"),
        }
    }
}

/// Counters for one run.  Owned by the run and returned with its outcome.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Successor states constructed.
    pub generated:    u64,
    /// Nodes popped and expanded (goal pops are not counted).
    pub expanded:     u64,
    /// Largest frontier size seen.
    pub max_frontier: usize,
    /// Deepest node popped.
    pub max_depth:    u32,
    pub elapsed:      Duration,
}

/// Result of [`SearchEngine::run`](crate::SearchEngine::run).
#[derive(Debug)]
pub struct SearchOutcome<S, C> {
    pub termination: Termination,
    /// The goal node, present only for `Termination::GoalFound`.
    pub goal:        Option<Node<S, C>>,
    pub stats:       SearchStats,
}

impl<S, C> SearchOutcome<S, C> {
    pub fn is_solved(&self) -> bool {
        self.goal.is_some()
    }

    pub fn goal(&self) -> Option<&Node<S, C>> {
        self.goal.as_ref()
    }
}

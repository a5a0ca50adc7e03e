//! Search configuration.

use std::time::Duration;

/// How the engine orders the frontier.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// `f = g + h` with the problem's heuristic.
    #[default]
    AStar,
    /// `f = g`; the heuristic is never called.
    UniformCost,
}

/// Engine settings.  The default is unlimited A*.
///
/// Limits are checked between expansions only, never inside one.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub strategy:   Strategy,
    /// Wall-clock budget for one run.
    pub time_limit: Option<Duration>,
    /// Maximum number of generated nodes.
    pub node_limit: Option<u64>,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }
}

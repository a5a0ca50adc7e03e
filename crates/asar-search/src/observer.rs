//! Search observer trait for progress reporting and external termination.

use std::fmt::{self, Debug};
use std::time::{Duration, Instant};

use tracing::info;

use crate::{SearchStats, Termination};

/// Instruction an observer gives the engine between expansions.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {reason}"),
        }
    }
}

/// Callbacks invoked by [`SearchEngine::run`][crate::SearchEngine::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Callbacks run on the search thread; keep
/// them cheap.
///
/// # Example: stop after the first thousand expansions
///
/// ```rust,ignore
/// struct Budget;
///
/// impl<C> SearchObserver<C> for Budget {
///     fn search_command(&self, stats: &SearchStats) -> SearchCommand {
///         if stats.expanded >= 1_000 {
///             SearchCommand::Terminate("budget".into())
///         } else {
///             SearchCommand::Continue
///         }
///     }
/// }
/// ```
pub trait SearchObserver<C> {
    /// Called once before the initial state is pushed.
    fn on_search_start(&mut self) {}

    /// Called for each node popped that is not a goal, before its children
    /// are generated.
    fn on_expand(&mut self, _depth: u32, _f: C, _stats: &SearchStats) {}

    /// Called when a goal is popped.  `cost` is its path cost.
    fn on_goal(&mut self, _depth: u32, _cost: C, _stats: &SearchStats) {}

    /// Called once when the run ends, whatever the reason.
    fn on_search_end(&mut self, _termination: &Termination, _stats: &SearchStats) {}

    /// Polled before every pop.
    fn search_command(&self, _stats: &SearchStats) -> SearchCommand {
        SearchCommand::Continue
    }
}

/// A [`SearchObserver`] that does nothing.
pub struct NoopObserver;

impl<C> SearchObserver<C> for NoopObserver {}

// ── LogObserver ───────────────────────────────────────────────────────────────

/// Emits an `info` progress line at most once per `interval`.
///
/// The clock is only read when `expanded & clock_check_mask == 0`, so the
/// per-expansion overhead is a single mask test.
#[derive(Debug, Clone)]
pub struct LogObserver {
    start:            Instant,
    last_log:         Instant,
    interval:         Duration,
    clock_check_mask: u64,
}

impl LogObserver {
    pub fn new(interval: Duration, clock_check_mask: u64) -> Self {
        let now = Instant::now();
        Self { start: now, last_log: now, interval, clock_check_mask }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<C: Debug> SearchObserver<C> for LogObserver {
    fn on_search_start(&mut self) {
        self.start = Instant::now();
        self.last_log = self.start;
    }

    fn on_expand(&mut self, depth: u32, f: C, stats: &SearchStats) {
        if stats.expanded & self.clock_check_mask != 0 || self.last_log.elapsed() < self.interval {
            return;
        }
        self.last_log = Instant::now();
        info!(
            elapsed_s = self.start.elapsed().as_secs_f32(),
            expanded = stats.expanded,
            generated = stats.generated,
            max_frontier = stats.max_frontier,
            depth,
            f = ?f,
            "search progress"
        );
    }

    fn on_search_end(&mut self, termination: &Termination, stats: &SearchStats) {
        info!(
            %termination,
            elapsed_s = stats.elapsed.as_secs_f32(),
            expanded = stats.expanded,
            generated = stats.generated,
            "search finished"
        );
    }
}

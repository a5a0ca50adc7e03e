//! `asar-search` — best-first tree search over any [`SearchProblem`].
//!
//! # Loop
//!
//! ```text
//! frontier ← { initial }                      (g = 0, h = h(initial))
//! loop:
//!   ① Limits   — time / node limit / observer command → Aborted
//!   ② Pop      — lowest f = g + h; ties: deeper first, then FIFO
//!                empty frontier                        → Exhausted
//!   ③ Goal     — goal_test(state)                      → GoalFound
//!   ④ Expand   — one child per action: g += step_cost, h = h(child)
//! ```
//!
//! No duplicate detection is done: this is a tree search, so a state reached
//! along two paths is expanded twice.  With an admissible heuristic the first
//! goal popped is optimal.
//!
//! The crate knows nothing about scheduling; `asar-schedule` implements
//! [`SearchProblem`] for the fleet problem.

pub mod config;
pub mod engine;
pub mod frontier;
pub mod observer;
pub mod outcome;
pub mod problem;


pub use config::{SearchConfig, Strategy};
pub use engine::SearchEngine;
pub use frontier::Frontier;
pub use observer::{LogObserver, NoopObserver, SearchCommand, SearchObserver};
pub use outcome::{SearchOutcome, SearchStats, Termination};
pub use problem::{Node, SearchProblem};

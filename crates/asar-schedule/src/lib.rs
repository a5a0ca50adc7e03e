//! `asar-schedule` — assigning legs to vehicles as a best-first search.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`timing`]    | `leg_timing`, `leg_initial_time`, `ReadyTime`, `LegTiming`    |
//! | [`legset`]    | `LegSet` bitset of unassigned legs                            |
//! | [`state`]     | `ScheduleState`, persistent per-vehicle `Track`               |
//! | [`moves`]     | `Move`, `generate_moves`                                      |
//! | [`cost`]      | `Cost`, `CostModel` (profit → cost transform, heuristic)      |
//! | [`problem`]   | `ScheduleProblem: SearchProblem`, `is_goal`                   |
//! | [`solution`]  | `Solution`, `VehicleSchedule`, `ScheduledLeg`                 |
//! | [`solver`]    | `solve`, `ScheduleReport`                                     |
//!
//! # Search formulation (summary)
//!
//! ```text
//! state      = per-vehicle leg chain + ready time, set of unassigned legs
//! move       = (vehicle, leg, departure, new ready time or Closed)
//! step cost  = bound − profit(leg, class)       bound = 1 + max best_profit
//! h(state)   = Σ_{leg unassigned} (bound − best_profit(leg))
//! goal       = nothing unassigned, every flown vehicle back where it started
//! ```
//!
//! Every goal assigns all legs once, so minimizing total cost maximizes
//! total profit.

pub mod cost;
pub mod legset;
pub mod moves;
pub mod problem;
pub mod solution;
pub mod solver;
pub mod state;
pub mod timing;


pub use cost::{Cost, CostModel};
pub use legset::LegSet;
pub use moves::{Move, generate_moves};
pub use problem::{ScheduleProblem, is_goal};
pub use solution::{ScheduledLeg, Solution, VehicleSchedule, calculate_profit};
pub use solver::{ScheduleReport, solve};
pub use state::{ScheduleState, Track};
pub use timing::{LegTiming, ReadyTime, leg_initial_time, leg_timing, replay_departures};

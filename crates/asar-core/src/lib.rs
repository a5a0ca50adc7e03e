//! `asar-core` — foundational types for the `asar` fleet scheduler.
//!
//! This crate is a dependency of every other `asar-*` crate.  It has no
//! `asar-*` dependencies and only `thiserror` (plus optional `serde`)
//! from outside.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `LocationId`, `ClassId`, `VehicleId`, `LegId`         |
//! | [`clock`]       | `ClockTime` (HHMM with minute carry)                  |
//! | [`profit`]      | `Profit` (one-decimal fixed point), `ProfitFormat`    |
//! | [`error`]       | `AsarError`, `AsarResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod clock;
pub mod error;
pub mod ids;
pub mod profit;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use clock::ClockTime;
pub use error::{AsarError, AsarResult};
pub use ids::{ClassId, LegId, LocationId, VehicleId};
pub use profit::{Profit, ProfitFormat};

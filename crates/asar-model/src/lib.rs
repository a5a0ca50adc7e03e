//! `asar-model` — the immutable problem tables and how they are loaded.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`location`]  | `Location` (code + operating window)                      |
//! | [`fleet`]     | `VehicleClass`, `Vehicle`                                 |
//! | [`leg`]       | `Leg` with per-class profits and `best_profit`            |
//! | [`domain`]    | `Domain` tables, `DomainBuilder` with validation          |
//! | [`loader`]    | `load_domain`, `load_domain_reader`, `parse_domain`       |
//! | [`generator`] | `InstanceGenerator` for small random instances            |
//! | [`error`]     | `ModelError`, `ModelResult<T>`                            |
//!
//! # Input format (summary)
//!
//! ```text
//! A <code> <opening HHMM> <closing HHMM>
//! C <class> <turnaround HHMM>
//! P <vehicle> <class>
//! L <dep> <arr> <duration HHMM> <class> <profit> [<class> <profit> ...]
//! ```
//!
//! Records may appear in any order; references are resolved when the
//! `Domain` is built.  Lines with any other leading code are ignored.

pub mod domain;
pub mod error;
pub mod fleet;
pub mod generator;
pub mod leg;
pub mod loader;
pub mod location;

#[cfg(test)]
mod tests;

pub use domain::{Domain, DomainBuilder};
pub use error::{ModelError, ModelResult};
pub use fleet::{Vehicle, VehicleClass};
pub use generator::{InstanceGenConfig, InstanceGenerator};
pub use leg::Leg;
pub use loader::{load_domain, load_domain_reader, parse_domain};
pub use location::Location;

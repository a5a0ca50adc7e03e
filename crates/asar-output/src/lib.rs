//! `asar-output` — writes a schedule result file.
//!
//! | Item              | Purpose                                                  |
//! |-------------------|----------------------------------------------------------|
//! | [`ScheduleRow`]   | One vehicle's timetable with resolved location codes    |
//! | [`OutputWriter`]  | Backend trait: solution, infeasible marker, finish       |
//! | [`TextWriter`]    | Space-separated text backend over `csv::Writer`          |
//! | [`output_path`]   | `<dir>/<input file name>`                                |
//!
//! # Format
//!
//! ```text
//! S V1 0600 A B 0730 B A
//! P 200
//! ```
//!
//! or the single line `Infeasible`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut writer = asar_output::create_output(Path::new("data/x.txt"), Path::new("output"))?;
//! writer.write_outcome(&domain, report.solution.as_ref())?;
//! writer.finish()?;
//! ```

pub mod error;
pub mod path;
pub mod row;
pub mod text;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use path::{create_output, output_path};
pub use row::{LegCell, ScheduleRow};
pub use text::TextWriter;
pub use writer::OutputWriter;

//! The `OutputWriter` trait implemented by result backends.

use asar_model::Domain;
use asar_schedule::Solution;

use crate::OutputResult;

pub trait OutputWriter {
    /// Write one `S` line per flying vehicle followed by the `P` total.
    fn write_solution(&mut self, domain: &Domain, solution: &Solution) -> OutputResult<()>;

    /// Write the `Infeasible` marker.
    fn write_infeasible(&mut self) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Calling it again after the first time does nothing.
    fn finish(&mut self) -> OutputResult<()>;

    /// `write_solution` if a solution exists, else `write_infeasible`.
    fn write_outcome(&mut self, domain: &Domain, solution: Option<&Solution>) -> OutputResult<()> {
        match solution {
            Some(solution) => self.write_solution(domain, solution),
            None => self.write_infeasible(),
        }
    }
}

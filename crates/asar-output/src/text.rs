//! Text backend: whitespace-separated records, one per line, no quoting.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use asar_model::Domain;
use asar_schedule::Solution;
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, ScheduleRow};

/// Writes the result format through a `csv::Writer` configured with a
/// single-space delimiter and variable record lengths.
pub struct TextWriter<W: Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl TextWriter<File> {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl<W: Write> TextWriter<W> {
    pub fn from_writer(sink: W) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(b' ')
            .flexible(true)
            .has_headers(false)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(sink);
        Self { inner, finished: false }
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| OutputError::Io(io::Error::new(e.error().kind(), e.to_string())))
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_solution(&mut self, domain: &Domain, solution: &Solution) -> OutputResult<()> {
        let rows = ScheduleRow::all(domain, solution);
        for row in &rows {
            self.inner.write_record(row.fields())?;
        }
        let total = domain.profit_format().render(solution.total_profit());
        self.inner.write_record(["P", total.as_str()])?;
        debug!(vehicles = rows.len(), %total, "solution written");
        Ok(())
    }

    fn write_infeasible(&mut self) -> OutputResult<()> {
        self.inner.write_record(["Infeasible"])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}

//! Line-oriented text loader.
//!
//! # Record format
//!
//! One record per line, fields separated by any whitespace:
//!
//! ```text
//! A LPPT 0600 2300
//! A LPPR 0600 2300
//! C a320 0045
//! P CS-TUA a320
//! L LPPT LPPR 0055 a320 100 a330 140.5
//! ```
//!
//! | Code | Fields                                               |
//! |------|------------------------------------------------------|
//! | `A`  | location code, opening `HHMM`, closing `HHMM`        |
//! | `C`  | class name, turnaround `HHMM`                        |
//! | `P`  | vehicle name, class name                             |
//! | `L`  | departure, arrival, duration `HHMM`, then one or more `<class> <profit>` pairs |
//!
//! Blank lines and lines starting with any other code are skipped.  A
//! malformed field aborts the whole load; nothing is returned partially.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use asar_core::{AsarError, ClockTime, Profit};
use tracing::debug;

use crate::{Domain, DomainBuilder, ModelError, ModelResult};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Domain`] from a file.
pub fn load_domain(path: &Path) -> ModelResult<Domain> {
    let file = std::fs::File::open(path).map_err(ModelError::Io)?;
    load_domain_reader(file)
}

/// Like [`load_domain`] but accepts any `Read` source.
pub fn load_domain_reader<R: Read>(reader: R) -> ModelResult<Domain> {
    let mut builder = DomainBuilder::new();
    let mut records = 0usize;
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        if parse_record(&mut builder, i + 1, &line?)? {
            records += 1;
        }
    }
    finish(builder, records)
}

/// Parse a whole input held in memory.
pub fn parse_domain(text: &str) -> ModelResult<Domain> {
    let mut builder = DomainBuilder::new();
    let mut records = 0usize;
    for (i, line) in text.lines().enumerate() {
        if parse_record(&mut builder, i + 1, line)? {
            records += 1;
        }
    }
    finish(builder, records)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn finish(builder: DomainBuilder, records: usize) -> ModelResult<Domain> {
    let domain = builder.build()?;
    debug!(
        records,
        locations = domain.locations().len(),
        classes = domain.classes().len(),
        vehicles = domain.vehicle_count(),
        legs = domain.leg_count(),
        "domain loaded"
    );
    Ok(domain)
}

/// Feed one line into `builder`.  Returns `false` for skipped lines.
fn parse_record(builder: &mut DomainBuilder, line: usize, text: &str) -> ModelResult<bool> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let Some((&code, args)) = fields.split_first() else {
        return Ok(false);
    };

    let clock = |s: &str| ClockTime::parse_hhmm(s).map_err(|source| value_error(line, source));

    match code {
        "A" => {
            let [location, opening, closing] = expect_fields::<3>(line, "A", "3", args)?;
            builder.add_location(location, clock(opening)?, clock(closing)?);
        }
        "C" => {
            let [class, turnaround] = expect_fields::<2>(line, "C", "2", args)?;
            builder.add_class(class, clock(turnaround)?);
        }
        "P" => {
            let [vehicle, class] = expect_fields::<2>(line, "P", "2", args)?;
            builder.add_vehicle(vehicle, class);
        }
        "L" => {
            if args.len() < 5 || (args.len() - 3) % 2 != 0 {
                return Err(ModelError::Arity {
                    line,
                    code:     "L",
                    expected: "3 plus one or more <class> <profit> pairs",
                    got:      args.len(),
                });
            }
            let profits = args[3..]
                .chunks_exact(2)
                .map(|pair| {
                    let profit = Profit::parse(pair[1]).map_err(|source| value_error(line, source))?;
                    Ok((pair[0].to_owned(), profit))
                })
                .collect::<ModelResult<Vec<_>>>()?;
            builder.add_leg(args[0], args[1], clock(args[2])?, profits);
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn expect_fields<'a, const N: usize>(
    line:     usize,
    code:     &'static str,
    expected: &'static str,
    args:     &[&'a str],
) -> ModelResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| ModelError::Arity { line, code, expected, got: args.len() })
}

fn value_error(line: usize, source: AsarError) -> ModelError {
    ModelError::Value { line, source }
}

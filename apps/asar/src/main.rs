//! asar — assign flight legs to aircraft as profit-maximizing round trips.
//!
//! Reads an instance file, runs A* over leg assignments, and writes the
//! result to `<output dir>/<input file name>`.  Optional positional flags
//! print the search time, the number of generated nodes and the depth of
//! the goal on stdout.
//!
//! Logging goes to stderr; set `RUST_LOG=info` for search progress.

mod config;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use asar_model::load_domain;
use asar_output::{OutputWriter, create_output};
use asar_schedule::solve;
use asar_search::{LogObserver, Termination};

use config::RunConfig;

// ── Run ───────────────────────────────────────────────────────────────────────

/// What one run produced, for the optional stdout lines.
#[derive(Debug)]
struct RunSummary {
    output:      PathBuf,
    termination: Termination,
    elapsed:     Duration,
    generated:   u64,
    depth:       Option<u32>,
}

fn run(config: &RunConfig) -> Result<RunSummary> {
    let domain = load_domain(&config.input)
        .with_context(|| format!("loading {}", config.input.display()))?;
    info!(
        locations = domain.locations().len(),
        classes = domain.classes().len(),
        vehicles = domain.vehicle_count(),
        legs = domain.leg_count(),
        "instance loaded"
    );

    let mut observer = LogObserver::default();
    let report = solve(&domain, config.search.clone(), &mut observer);
    if let Termination::Aborted(reason) = &report.termination {
        warn!(%reason, "search aborted; writing Infeasible");
    }

    let output = asar_output::output_path(&config.input, &config.output_dir)?;
    let mut writer = create_output(&config.input, &config.output_dir)
        .with_context(|| format!("creating {}", output.display()))?;
    writer
        .write_outcome(&domain, report.solution.as_ref())
        .and_then(|()| writer.finish())
        .with_context(|| format!("writing {}", output.display()))?;
    info!(output = %output.display(), termination = %report.termination, "result written");

    Ok(RunSummary {
        output,
        termination: report.termination,
        elapsed: report.stats.elapsed,
        generated: report.stats.generated,
        depth: report.depth,
    })
}

fn print_summary(config: &RunConfig, summary: &RunSummary) {
    if config.print_time {
        println!("Time: {:.6} s", summary.elapsed.as_secs_f64());
    }
    if config.print_node_count {
        println!("Nodes: {}", summary.generated);
    }
    if config.print_depth {
        match summary.depth {
            Some(depth) => println!("Depth: {depth}"),
            None => println!("Depth: -"),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = RunConfig::from_args(std::env::args().skip(1), |key| std::env::var(key).ok())?;
    let summary = run(&config)?;
    print_summary(&config, &summary);
    Ok(())
}

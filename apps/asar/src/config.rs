//! Command line and environment → `RunConfig`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use asar_search::{SearchConfig, Strategy};

pub const USAGE: &str = "asar <input file> [printTime] [printNodeCount] [printDepth]";

const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input:            PathBuf,
    pub output_dir:       PathBuf,
    pub print_time:       bool,
    pub print_node_count: bool,
    pub print_depth:      bool,
    pub search:           SearchConfig,
}

impl RunConfig {
    /// Build from positional arguments (program name already stripped) and
    /// an environment lookup.
    ///
    /// | Variable               | Meaning                              |
    /// |------------------------|--------------------------------------|
    /// | `ASAR_OUTPUT_DIR`      | result directory, default `output`   |
    /// | `ASAR_STRATEGY`        | `astar` (default) or `ucs`           |
    /// | `ASAR_TIME_LIMIT_SECS` | wall-clock limit, fractional seconds |
    /// | `ASAR_NODE_LIMIT`      | maximum generated nodes              |
    pub fn from_args<I, E>(args: I, env: E) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let Some(input) = args.next() else {
            bail!("missing input file\nusage: {USAGE}");
        };
        let mut flag = || args.next().is_some_and(|a| parse_flag(&a));
        let (print_time, print_node_count, print_depth) = (flag(), flag(), flag());

        let mut search = SearchConfig::default();
        if let Some(s) = env("ASAR_STRATEGY") {
            search = search.with_strategy(parse_strategy(&s)?);
        }
        if let Some(s) = env("ASAR_TIME_LIMIT_SECS") {
            let secs: f64 = s.trim().parse().with_context(|| format!("ASAR_TIME_LIMIT_SECS={s:?}"))?;
            let limit = Duration::try_from_secs_f64(secs).with_context(|| format!("ASAR_TIME_LIMIT_SECS={s:?}"))?;
            search = search.with_time_limit(limit);
        }
        if let Some(s) = env("ASAR_NODE_LIMIT") {
            let limit: u64 = s.trim().parse().with_context(|| format!("ASAR_NODE_LIMIT={s:?}"))?;
            search = search.with_node_limit(limit);
        }

        Ok(Self {
            input: PathBuf::from(input),
            output_dir: env("ASAR_OUTPUT_DIR").map_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR), PathBuf::from),
            print_time,
            print_node_count,
            print_depth,
            search,
        })
    }
}

/// `yes`, `y`, `true`, `t` and `1` in any case are true; anything else is false.
pub fn parse_flag(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "yes" | "y" | "true" | "t" | "1")
}

fn parse_strategy(s: &str) -> Result<Strategy> {
    match s.to_ascii_lowercase().as_str() {
        "astar" | "a*" => Ok(Strategy::AStar),
        "ucs" | "uniform" => Ok(Strategy::UniformCost),
        other => bail!("unknown ASAR_STRATEGY {other:?} (expected astar or ucs)"),
    }
}

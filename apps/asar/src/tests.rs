//! Tests for the asar binary: argument parsing and a full file-to-file run.

use std::collections::HashMap;

use crate::config::RunConfig;

fn config(args: &[&str], env: &[(&str, &str)]) -> anyhow::Result<RunConfig> {
    let env: HashMap<String, String> = env.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    RunConfig::from_args(args.iter().map(|a| a.to_string()), |k| env.get(k).cloned())
}

// ── Arguments ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod args {
    use std::path::Path;
    use std::time::Duration;

    use asar_search::Strategy;

    use super::*;
    use crate::config::parse_flag;

    #[test]
    fn flags_are_case_insensitive() {
        for yes in ["yes", "Y", "TRUE", "t", "1", "Yes"] {
            assert!(parse_flag(yes), "{yes}");
        }
        for no in ["no", "0", "false", "", "yess", "2"] {
            assert!(!parse_flag(no), "{no}");
        }
    }

    #[test]
    fn positional_flags_in_order() {
        let c = config(&["in.txt", "y", "no", "TRUE"], &[]).unwrap();
        assert_eq!(c.input, Path::new("in.txt"));
        assert!(c.print_time);
        assert!(!c.print_node_count);
        assert!(c.print_depth);
    }

    #[test]
    fn defaults() {
        let c = config(&["in.txt"], &[]).unwrap();
        assert!(!c.print_time && !c.print_node_count && !c.print_depth);
        assert_eq!(c.output_dir, Path::new("output"));
        assert_eq!(c.search.strategy, Strategy::AStar);
        assert_eq!(c.search.time_limit, None);
    }

    #[test]
    fn missing_input_is_an_error() {
        let err = config(&[], &[]).unwrap_err();
        assert!(err.to_string().contains("usage"));
    }

    #[test]
    fn environment_overrides() {
        let c = config(
            &["in.txt"],
            &[("ASAR_OUTPUT_DIR", "/tmp/res"), ("ASAR_STRATEGY", "UCS"), ("ASAR_TIME_LIMIT_SECS", "2.5")],
        )
        .unwrap();
        assert_eq!(c.output_dir, Path::new("/tmp/res"));
        assert_eq!(c.search.strategy, Strategy::UniformCost);
        assert_eq!(c.search.time_limit, Some(Duration::from_millis(2500)));
        assert_eq!(c.search.node_limit, None);

        let c = config(&["in.txt"], &[("ASAR_NODE_LIMIT", "1000")]).unwrap();
        assert_eq!(c.search.node_limit, Some(1000));
    }

    #[test]
    fn bad_environment_values_are_errors() {
        assert!(config(&["in.txt"], &[("ASAR_STRATEGY", "dfs")]).is_err());
        assert!(config(&["in.txt"], &[("ASAR_TIME_LIMIT_SECS", "soon")]).is_err());
        assert!(config(&["in.txt"], &[("ASAR_TIME_LIMIT_SECS", "-1")]).is_err());
        assert!(config(&["in.txt"], &[("ASAR_NODE_LIMIT", "lots")]).is_err());
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run {
    use std::fs;

    use asar_search::Termination;

    use super::*;
    use crate::run;

    const ROUND_TRIP: &str = "\
A A 0600 2200
A B 0600 2200
C c1 0030
P V1 c1
L A B 0100 c1 100
L B A 0100 c1 100
";

    #[test]
    fn writes_result_next_to_input_name() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("trip.txt");
        fs::write(&input, ROUND_TRIP).unwrap();
        let out_dir = dir.path().join("out");

        let c = config(&[input.to_str().unwrap()], &[("ASAR_OUTPUT_DIR", out_dir.to_str().unwrap())]).unwrap();
        let summary = run(&c).unwrap();

        assert_eq!(summary.output, out_dir.join("trip.txt"));
        assert_eq!(summary.termination, Termination::GoalFound);
        assert_eq!(summary.depth, Some(2));
        assert!(summary.generated >= 3);
        assert_eq!(fs::read_to_string(&summary.output).unwrap(), "S V1 0600 A B 0730 B A\nP 200\n");
    }

    #[test]
    fn infeasible_instance_writes_marker() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("one.txt");
        fs::write(&input, "A A 0600 2200\nA B 0600 0700\nC c1 0030\nP V1 c1\nL A B 0200 c1 50\n").unwrap();

        let c = config(&[input.to_str().unwrap()], &[("ASAR_OUTPUT_DIR", dir.path().to_str().unwrap())]).unwrap();
        let summary = run(&c).unwrap();
        assert_eq!(summary.termination, Termination::Exhausted);
        assert_eq!(summary.depth, None);
        assert_eq!(fs::read_to_string(dir.path().join("one.txt")).unwrap(), "Infeasible\n");
    }

    #[test]
    fn aborted_search_writes_infeasible() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("trip.txt");
        fs::write(&input, ROUND_TRIP).unwrap();
        let out_dir = dir.path().join("out");

        let c = config(
            &[input.to_str().unwrap()],
            &[("ASAR_OUTPUT_DIR", out_dir.to_str().unwrap()), ("ASAR_NODE_LIMIT", "1")],
        )
        .unwrap();
        let summary = run(&c).unwrap();
        assert!(matches!(summary.termination, Termination::Aborted(_)));
        assert_eq!(fs::read_to_string(out_dir.join("trip.txt")).unwrap(), "Infeasible\n");
    }

    #[test]
    fn malformed_input_fails_before_writing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let input = dir.path().join("bad.txt");
        fs::write(&input, "A A 6am 2200\n").unwrap();
        let out_dir = dir.path().join("out");

        let c = config(&[input.to_str().unwrap()], &[("ASAR_OUTPUT_DIR", out_dir.to_str().unwrap())]).unwrap();
        let err = run(&c).unwrap_err();
        assert!(err.to_string().contains("loading"));
        assert!(!out_dir.exists());
    }
}

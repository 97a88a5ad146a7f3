use std::io::Write;

use pretty_assertions::assert_eq;
use solvstat::core::cmds::report::{ReportOptions, read_results};
use solvstat::dominance_tables;
use solvstat::types::CoverageMode;
use tempfile::tempdir;

/// Helper to write a results file into a temp directory
fn write_results(lines: &[&str]) -> (tempfile::TempDir, String) {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("results_tot");
    let mut file = std::fs::File::create(&path).expect("Failed to create results file");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write results line");
    }
    (temp_dir, path.to_string_lossy().to_string())
}

fn options(results: String, solvers: &[&str]) -> ReportOptions {
    ReportOptions {
        results,
        solvers: solvers.iter().map(|s| s.to_string()).collect(),
        problems: None,
        timeout: 300.0,
        coverage_mode: CoverageMode::Line,
        format: "table".to_string(),
    }
}

#[test]
fn end_to_end_single_instance() {
    let (_temp_dir, path) = write_results(&[
        "X|bench/foo.js|0|0|0|0|50|3|5",
        "Y|bench/foo.js|0|0|0|0|70|9|15",
    ]);

    let opts = options(path, &["X", "Y"]);
    let agg = read_results(&opts).expect("results should parse");
    assert_eq!(agg.records(), 2);

    let summary = agg.summary(1);
    assert_eq!(summary.avg_coverage[0].solver, "Y");
    assert_eq!(summary.avg_coverage[0].value, 70.0);
    assert_eq!(summary.avg_coverage[1].solver, "X");
    assert_eq!(summary.avg_coverage[1].value, 50.0);

    let tables = dominance_tables(&agg).expect("complete rows");
    assert_eq!(tables.coverage[&("Y".to_string(), "X".to_string())], 1);
    assert_eq!(tables.coverage[&("X".to_string(), "Y".to_string())], 0);
    // X is faster but weaker, Y is stronger but slower: neither wins on speed
    assert_eq!(tables.speed[&("X".to_string(), "Y".to_string())], 0);
    assert_eq!(tables.speed[&("Y".to_string(), "X".to_string())], 0);
}

#[test]
fn hand_computed_averages_over_distinct_instances() {
    let (_temp_dir, path) = write_results(&[
        "X|a.js|0|0|0|0|80|4|10",
        "X|b.js|0|0|0|0|60|6|290",
        "",
        "Y|a.js|0|0|0|0|70|2|310",
        "Y|b.js|0|0|0|0|90|8|20",
    ]);

    let opts = options(path, &["X", "Y"]);
    let agg = read_results(&opts).expect("results should parse");
    assert_eq!(agg.records(), 4);

    // problems falls back to the number of distinct instances (2)
    let summary = agg.summary(agg.instances().len() as u32);

    assert_eq!(summary.avg_coverage[0].solver, "Y");
    assert_eq!(summary.avg_coverage[0].value, 80.0);
    assert_eq!(summary.avg_coverage[1].solver, "X");
    assert_eq!(summary.avg_coverage[1].value, 70.0);

    // Unique inputs tie at 5.0; configured order breaks the tie
    assert_eq!(summary.avg_unique_inputs[0].solver, "X");
    assert_eq!(summary.avg_unique_inputs[0].value, 5.0);
    assert_eq!(summary.avg_unique_inputs[1].solver, "Y");
    assert_eq!(summary.avg_unique_inputs[1].value, 5.0);

    // Y's 310s trial clamps to 300s and counts as its only timeout
    assert_eq!(summary.avg_time[0].solver, "X");
    assert_eq!(summary.avg_time[0].value, 150.0);
    assert_eq!(summary.avg_time[1].solver, "Y");
    assert_eq!(summary.avg_time[1].value, 160.0);

    assert_eq!(summary.timeouts[0].solver, "X");
    assert_eq!(summary.timeouts[0].count, 0);
    assert_eq!(summary.timeouts[1].solver, "Y");
    assert_eq!(summary.timeouts[1].count, 1);
}

#[test]
fn unparseable_coverage_reads_as_zero_coverage() {
    let (_temp_dir, path) = write_results(&[
        "X|a.js|1|0|0|0|n/a|0|5",
        "Y|a.js|0|0|0|0|50|7|10",
    ]);

    let opts = options(path, &["X", "Y"]);
    let agg = read_results(&opts).expect("soft coverage failure tolerated");

    let tables = dominance_tables(&agg).expect("complete rows");
    assert_eq!(tables.coverage[&("Y".to_string(), "X".to_string())], 1);
    assert_eq!(tables.coverage[&("X".to_string(), "Y".to_string())], 0);
}

#[test]
fn structurally_malformed_line_aborts_with_context() {
    let (_temp_dir, path) = write_results(&[
        "X|a.js|0|0|0|0|50|3|5",
        "X|b.js|too|few",
    ]);

    let opts = options(path, &["X"]);
    let err = read_results(&opts).unwrap_err();
    assert!(err.to_string().contains("line 2"));
}

#[test]
fn record_naming_unconfigured_solver_aborts() {
    let (_temp_dir, path) = write_results(&["Z|a.js|0|0|0|0|50|3|5"]);

    let opts = options(path, &["X", "Y"]);
    let err = read_results(&opts).unwrap_err();
    assert!(err.to_string().contains("'Z'"));
}

#[test]
fn missing_results_file_is_an_io_error() {
    let opts = options("does/not/exist/results_tot".to_string(), &["X"]);
    assert!(read_results(&opts).is_err());
}

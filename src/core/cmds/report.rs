use std::fs::File;
use std::io::{BufRead, BufReader};

use log::{debug, info};
use serde::Serialize;

use crate::core::aggregate::{ResultAggregator, Summary};
use crate::core::compare::{DominanceTables, PairCount, dominance_tables};
use crate::types::{AppError, AppResult, CoverageMode, TrialRecord};

/// Resolved options for one report run (config and CLI already merged).
pub struct ReportOptions {
    pub results: String,
    pub solvers: Vec<String>,
    pub problems: Option<u32>,
    pub timeout: f64,
    pub coverage_mode: CoverageMode,
    pub format: String,
}

// JSON output structure
#[derive(Serialize)]
struct FullReport<'a> {
    coverage_mode: CoverageMode,
    summary: &'a Summary,
    coverage_dominance: Vec<PairCount>,
    speed_dominance: Vec<PairCount>,
}

pub fn execute_report(opts: ReportOptions) -> AppResult<()> {
    let agg = read_results(&opts)?;

    let problems = match opts.problems {
        Some(problems) => problems,
        None => agg.instances().len() as u32,
    };
    if problems == 0 {
        return Err(AppError::Custom(format!(
            "no problems to average over; {} is empty and --problems was not given",
            opts.results
        )));
    }

    let summary = agg.summary(problems);
    let tables = dominance_tables(&agg)?;

    // Handle different output formats
    match opts.format.as_str() {
        "json" => {
            let report = FullReport {
                coverage_mode: opts.coverage_mode,
                summary: &summary,
                coverage_dominance: tables.coverage_entries(),
                speed_dominance: tables.speed_entries(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            // Default table format
            print_table_format(opts.coverage_mode, &summary, &tables);
        }
    }

    Ok(())
}

/// Read a results file and fold every record into a fresh aggregator.
pub fn read_results(opts: &ReportOptions) -> AppResult<ResultAggregator> {
    let file = File::open(&opts.results)?;
    let reader = BufReader::new(file);
    let mut agg = ResultAggregator::new(opts.solvers.clone(), opts.timeout);

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = TrialRecord::parse(&line, idx + 1, opts.coverage_mode)?;
        agg.observe(&record)?;
    }

    debug!("Read {} records from {}", agg.records(), opts.results);
    Ok(agg)
}

fn print_table_format(mode: CoverageMode, summary: &Summary, tables: &DominanceTables) {
    info!("Records read: {}", summary.records);
    info!("Total problems: {}", summary.problems);
    info!("");

    info!("Average {mode} coverage [%]:");
    for entry in &summary.avg_coverage {
        info!("  {}: {:.2}", entry.solver, entry.value);
    }

    info!("Average unique inputs:");
    for entry in &summary.avg_unique_inputs {
        info!("  {}: {:.2}", entry.solver, entry.value);
    }

    info!("Average time [sec]:");
    for entry in &summary.avg_time {
        info!("  {}: {:.2}", entry.solver, entry.value);
    }

    info!("Timeouts:");
    for entry in &summary.timeouts {
        info!("  {}: {}", entry.solver, entry.count);
    }

    info!("==========");
    for ((winner, loser), count) in &tables.coverage {
        info!("{winner} has better {mode} coverage than {loser}: {count} times");
    }

    info!("==========");
    for ((winner, loser), count) in &tables.speed {
        info!(
            "{winner} is faster than {loser} when {mode} coverage is better or equal: {count} times"
        );
    }
}

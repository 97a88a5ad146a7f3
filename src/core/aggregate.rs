use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::types::{AppError, AppResult, TrialRecord};

/// Selected coverage and effective (timeout-clamped) time for one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    pub coverage: f64,
    pub time: f64,
}

// Running sums for one solver, accumulated over the read pass
#[derive(Debug, Clone, Copy, Default)]
struct SolverTotals {
    coverage: f64,
    unique_inputs: u64,
    time: f64,
    timeouts: u32,
}

/// Single-pass accumulator over trial records.
///
/// Each record lands in two places: a per-(instance, solver) entry consumed
/// by the pairwise comparisons, and per-solver running totals consumed by the
/// summary rankings. A duplicate (instance, solver) trial overwrites the
/// instance entry but still accumulates into the totals.
#[derive(Debug)]
pub struct ResultAggregator {
    solvers: Vec<String>,
    timeout: f64,
    records: usize,
    totals: HashMap<String, SolverTotals>,
    instances: BTreeMap<String, HashMap<String, Trial>>,
}

impl ResultAggregator {
    pub fn new(solvers: Vec<String>, timeout: f64) -> Self {
        let totals = solvers
            .iter()
            .map(|s| (s.clone(), SolverTotals::default()))
            .collect();
        Self {
            solvers,
            timeout,
            records: 0,
            totals,
            instances: BTreeMap::new(),
        }
    }

    pub fn solvers(&self) -> &[String] {
        &self.solvers
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn instances(&self) -> &BTreeMap<String, HashMap<String, Trial>> {
        &self.instances
    }

    /// Fold one record into the aggregation state. An elapsed time at or
    /// above the timeout threshold is clamped to it and counted as a timeout.
    pub fn observe(&mut self, record: &TrialRecord) -> AppResult<()> {
        let Some(totals) = self.totals.get_mut(&record.solver) else {
            return Err(AppError::UnknownSolver(record.solver.clone()));
        };

        let time = if record.elapsed >= self.timeout {
            totals.timeouts += 1;
            self.timeout
        } else {
            record.elapsed
        };

        totals.coverage += record.coverage;
        totals.unique_inputs += record.unique_inputs;
        totals.time += time;

        self.instances.entry(record.instance.clone()).or_default().insert(
            record.solver.clone(),
            Trial {
                coverage: record.coverage,
                time,
            },
        );

        self.records += 1;
        Ok(())
    }

    /// Snapshot of the per-solver averages over `problems` expected problems
    /// (not over the number of records actually read).
    pub fn summary(&self, problems: u32) -> Summary {
        let n = f64::from(problems);

        let mut avg_coverage = Vec::new();
        let mut avg_unique_inputs = Vec::new();
        let mut avg_time = Vec::new();
        let mut timeouts = Vec::new();

        for solver in &self.solvers {
            let totals = self.totals.get(solver).copied().unwrap_or_default();
            avg_coverage.push(Ranking {
                solver: solver.clone(),
                value: totals.coverage / n,
            });
            avg_unique_inputs.push(Ranking {
                solver: solver.clone(),
                value: totals.unique_inputs as f64 / n,
            });
            avg_time.push(Ranking {
                solver: solver.clone(),
                value: totals.time / n,
            });
            timeouts.push(TimeoutCount {
                solver: solver.clone(),
                count: totals.timeouts,
            });
        }

        // Stable sorts keep the configured solver order on ties
        avg_coverage.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        avg_unique_inputs.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        avg_time.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
        timeouts.sort_by_key(|t| t.count);

        Summary {
            records: self.records,
            problems,
            avg_coverage,
            avg_unique_inputs,
            avg_time,
            timeouts,
        }
    }
}

/// One (solver, value) entry in a ranked statistic.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking {
    pub solver: String,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeoutCount {
    pub solver: String,
    pub count: u32,
}

/// Per-solver summary statistics, each ranked as described in the report.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub records: usize,
    pub problems: u32,
    pub avg_coverage: Vec<Ranking>,
    pub avg_unique_inputs: Vec<Ranking>,
    pub avg_time: Vec<Ranking>,
    pub timeouts: Vec<TimeoutCount>,
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::aggregate::ResultAggregator;
use crate::types::{AppError, AppResult};

/// Pairwise dominance tallies over the configured solver set, keyed by
/// (dominant, dominated) solver names.
#[derive(Debug)]
pub struct DominanceTables {
    pub coverage: BTreeMap<(String, String), u32>,
    pub speed: BTreeMap<(String, String), u32>,
}

/// One ordered-pair tally, for serialized reports.
#[derive(Debug, Clone, Serialize)]
pub struct PairCount {
    pub solver: String,
    pub versus: String,
    pub count: u32,
}

impl DominanceTables {
    pub fn coverage_entries(&self) -> Vec<PairCount> {
        entries(&self.coverage)
    }

    pub fn speed_entries(&self) -> Vec<PairCount> {
        entries(&self.speed)
    }
}

fn entries(table: &BTreeMap<(String, String), u32>) -> Vec<PairCount> {
    table
        .iter()
        .map(|((solver, versus), count)| PairCount {
            solver: solver.clone(),
            versus: versus.clone(),
            count: *count,
        })
        .collect()
}

fn empty_table(solvers: &[String]) -> BTreeMap<(String, String), u32> {
    let mut table = BTreeMap::new();
    for s_i in solvers {
        for s_j in solvers {
            if s_i != s_j {
                table.insert((s_i.clone(), s_j.clone()), 0);
            }
        }
    }
    table
}

/// Build both pairwise tables from the aggregated instance results.
///
/// Coverage dominance: for each instance and unordered solver pair, the
/// strictly higher coverage wins; ties count for neither side.
///
/// Speed dominance: a solver wins a pair when its coverage is at least as
/// high AND its time is strictly lower.
///
/// An instance missing a trial for any configured solver is an error; the
/// comparison requires a complete row per instance.
pub fn dominance_tables(agg: &ResultAggregator) -> AppResult<DominanceTables> {
    let solvers = agg.solvers();
    let mut coverage = empty_table(solvers);
    let mut speed = empty_table(solvers);

    for (instance, trials) in agg.instances() {
        for (i, s_i) in solvers.iter().enumerate() {
            let t_i = trials.get(s_i).ok_or_else(|| AppError::MissingTrial {
                instance: instance.clone(),
                solver: s_i.clone(),
            })?;
            for s_j in &solvers[i + 1..] {
                let t_j = trials.get(s_j).ok_or_else(|| AppError::MissingTrial {
                    instance: instance.clone(),
                    solver: s_j.clone(),
                })?;

                if t_i.coverage > t_j.coverage {
                    bump(&mut coverage, s_i, s_j);
                } else if t_i.coverage < t_j.coverage {
                    bump(&mut coverage, s_j, s_i);
                }

                if t_i.coverage >= t_j.coverage && t_i.time < t_j.time {
                    bump(&mut speed, s_i, s_j);
                } else if t_i.coverage <= t_j.coverage && t_i.time > t_j.time {
                    bump(&mut speed, s_j, s_i);
                }
            }
        }
    }

    Ok(DominanceTables { coverage, speed })
}

fn bump(table: &mut BTreeMap<(String, String), u32>, winner: &str, loser: &str) {
    *table.entry((winner.to_string(), loser.to_string())).or_insert(0) += 1;
}

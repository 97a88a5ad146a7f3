use log::warn;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::types::{AppError, AppResult};

/// Which of the four reported coverage metrics is used as "the" coverage
/// value for rankings and pairwise comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CoverageMode {
    #[strum(serialize = "stmt", serialize = "statement")]
    #[serde(alias = "stmt")]
    Statement,
    #[strum(serialize = "branch")]
    Branch,
    #[strum(serialize = "func", serialize = "function")]
    #[serde(alias = "func")]
    Function,
    #[strum(serialize = "line")]
    Line,
}

impl CoverageMode {
    fn field_index(&self) -> usize {
        match self {
            CoverageMode::Statement => 3,
            CoverageMode::Branch => 4,
            CoverageMode::Function => 5,
            CoverageMode::Line => 6,
        }
    }
}

/// Number of pipe-delimited fields in a results line.
pub const RECORD_FIELDS: usize = 9;

/// One benchmark trial: a single (solver, instance) run parsed from a
/// pipe-delimited results line.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    pub solver: String,
    pub instance: String,
    pub exit_code: i32,
    pub coverage: f64,
    pub unique_inputs: u64,
    pub elapsed: f64,
}

impl TrialRecord {
    /// Parse one results line. `lineno` is 1-based and only used for error
    /// context. A coverage field that fails to parse is tolerated and
    /// recorded as zero coverage; every other field must be well-formed.
    pub fn parse(line: &str, lineno: usize, mode: CoverageMode) -> AppResult<TrialRecord> {
        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() < RECORD_FIELDS {
            return Err(AppError::Record {
                line: lineno,
                reason: format!("expected {RECORD_FIELDS} fields, got {}", fields.len()),
            });
        }

        let solver = fields[0].to_string();
        let instance = instance_key(fields[1]).to_string();
        let exit_code = parse_field::<i32>(fields[2], lineno, "exit code")?;

        let coverage = match fields[mode.field_index()].trim().parse::<f64>() {
            Ok(value) => round2(value),
            Err(_) => 0.0,
        };
        if coverage == 0.0 {
            warn!("0% {mode} coverage for {instance} with solver {solver}");
        }

        let unique_inputs = parse_field::<u64>(fields[7], lineno, "unique input count")?;
        let elapsed = parse_field::<f64>(fields[8], lineno, "elapsed time")?;

        Ok(TrialRecord {
            solver,
            instance,
            exit_code,
            coverage,
            unique_inputs,
            elapsed,
        })
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str, lineno: usize, what: &str) -> AppResult<T> {
    raw.trim().parse::<T>().map_err(|_| AppError::Record {
        line: lineno,
        reason: format!("malformed {what}: '{raw}'"),
    })
}

// Instance key is the basename of the path-like identifier
fn instance_key(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Round a percentage to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

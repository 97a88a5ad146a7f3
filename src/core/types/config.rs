use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult, CoverageMode};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct BenchConfig {
    pub solvers: Option<Vec<String>>,
    pub problems: Option<u32>, // None = count distinct instances (semantic)
    pub timeout: Option<f64>,
    pub coverage: Option<CoverageMode>,
}

impl BenchConfig {
    pub fn solvers(&self) -> &[String] {
        self.solvers.as_deref().unwrap_or(&[])
    }

    pub fn problems(&self) -> Option<u32> {
        self.problems
    }

    pub fn timeout(&self) -> f64 {
        self.timeout.unwrap_or(300.0)
    }

    pub fn coverage(&self) -> CoverageMode {
        self.coverage.unwrap_or(CoverageMode::Line)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            solvers: Some(self.solvers().to_vec()),
            problems: self.problems,
            timeout: Some(self.timeout()),
            coverage: Some(self.coverage()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub bench: Option<BenchConfig>,
    pub log: Option<LogConfig>,
}

impl Config {
    pub fn bench(&self) -> BenchConfig {
        self.bench.clone().unwrap_or_default()
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            bench: Some(self.bench().to_effective()),
            log: Some(self.log().to_effective()),
        }
    }

    pub fn resolve_solvers(&self, cli: Option<&str>) -> AppResult<Vec<String>> {
        let solvers = match cli {
            Some(csv) => parse_csv(csv),
            None => self.bench().solvers().to_vec(),
        };
        if solvers.is_empty() {
            return Err(AppError::Config(
                "no solvers configured; set [bench] solvers or pass --solvers".to_string(),
            ));
        }
        for (i, name) in solvers.iter().enumerate() {
            if solvers[..i].contains(name) {
                return Err(AppError::Config(format!("duplicate solver '{name}'")));
            }
        }
        Ok(solvers)
    }

    pub fn resolve_coverage_mode(&self, cli: Option<&str>) -> AppResult<CoverageMode> {
        match cli {
            Some(raw) => raw.parse::<CoverageMode>().map_err(|_| {
                AppError::Config(format!(
                    "unknown coverage mode '{raw}' (expected statement, branch, function, or line)"
                ))
            }),
            None => Ok(self.bench().coverage()),
        }
    }

    pub fn resolve_timeout(&self, cli: Option<f64>) -> AppResult<f64> {
        let timeout = cli.unwrap_or_else(|| self.bench().timeout());
        if timeout <= 0.0 {
            return Err(AppError::Config(format!(
                "timeout must be positive, got {timeout}"
            )));
        }
        Ok(timeout)
    }

    pub fn resolve_problems(&self, cli: Option<u32>) -> AppResult<Option<u32>> {
        let problems = cli.or_else(|| self.bench().problems());
        if problems == Some(0) {
            return Err(AppError::Config("problem count must be positive".to_string()));
        }
        Ok(problems)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

const CONFIG_FILENAME: &str = "solvstat.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config_filename() -> &'static str {
    CONFIG_FILENAME
}

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Apply nearest config file found by walking up from cwd
        if let Some(path) = find_nearest_config_file()
            && let Some(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

pub fn init_with_overrides(overrides: &CliOverrides) {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file()
        && let Some(file_cfg) = read_config_file(&path)
    {
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
}

fn read_config_file(path: &Path) -> Option<Config> {
    match fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<Config>(&contents).ok(),
        Err(_) => None,
    }
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge bench section
    if let Some(file_bench) = &file.bench {
        let mut bench = cfg.bench.clone().unwrap_or_default();
        if file_bench.solvers.is_some() {
            bench.solvers = file_bench.solvers.clone();
        }
        if file_bench.problems.is_some() {
            bench.problems = file_bench.problems;
        }
        if file_bench.timeout.is_some() {
            bench.timeout = file_bench.timeout;
        }
        if file_bench.coverage.is_some() {
            bench.coverage = file_bench.coverage;
        }
        cfg.bench = Some(bench);
    }

    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

pub fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}
